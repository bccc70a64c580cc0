//! NBA Player Tracker Library
//!
//! Live and last-game statistics for a single NBA player, with a scoring
//! timeline rebuilt from play-by-play.
//!
//! ## Features
//!
//! - **Game Location**: Finds an in-progress game featuring the player, or
//!   falls back to the most recent completed game from the game log
//! - **Scoring Timeline**: Reconstructs cumulative points by game minute from
//!   the live or historical play-by-play feed, with source fallback
//! - **Best-effort Fetching**: Any upstream failure degrades the dashboard
//!   instead of aborting it
//! - **Text or JSON Output**: Terminal dashboard with an ASCII chart, or the
//!   same content as JSON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_tracker::{commands::{watch::build_dashboard, CommandContext}, Season};
//! use std::time::Duration;
//!
//! # async fn example() -> nba_tracker::Result<()> {
//! let ctx = CommandContext::new(Duration::from_secs(10))?;
//! let dashboard = build_dashboard(&ctx, "Deni Avdija", Season::default()).await?;
//! println!("{}", nba_tracker::render::render_dashboard(&dashboard));
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the tracked player to avoid passing it in every command:
//! ```bash
//! export NBA_TRACKER_PLAYER="Deni Avdija"
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod nba;
pub mod render;

// Re-export commonly used types
pub use cli::types::{GameId, PlayerId, Season};
pub use error::{FetchError, Result, TrackerError};
pub use nba::timeline::TimelineSample;

pub const PLAYER_ENV_VAR: &str = "NBA_TRACKER_PLAYER";
