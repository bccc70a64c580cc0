//! Command implementations for the NBA tracker CLI

pub mod lookup;
pub mod timeline;
pub mod watch;

use std::time::Duration;

use crate::{core::PlayerLookupCache, nba::http::NbaClient, Result, PLAYER_ENV_VAR};

/// Player tracked when neither `--player` nor the env var is set.
pub const DEFAULT_PLAYER_NAME: &str = "Deni Avdija";

/// Resources shared by every command, created once at start-up.
pub struct CommandContext {
    pub client: NbaClient,
    /// Lives as long as the process; never invalidated.
    pub cache: PlayerLookupCache,
}

impl CommandContext {
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: NbaClient::new(timeout)?,
            cache: PlayerLookupCache::new(),
        })
    }

    pub fn with_client(client: NbaClient) -> Self {
        Self {
            client,
            cache: PlayerLookupCache::new(),
        }
    }
}

/// Resolve the player name from option, environment variable, or default.
pub fn resolve_player_name(player: Option<String>) -> String {
    player
        .filter(|p| !p.trim().is_empty())
        .or_else(|| {
            std::env::var(PLAYER_ENV_VAR)
                .ok()
                .filter(|p| !p.trim().is_empty())
        })
        .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string())
}
