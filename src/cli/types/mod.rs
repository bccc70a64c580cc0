//! Type-safe wrappers for NBA identifiers and seasons.

pub mod ids;
pub mod season;

pub use ids::{GameId, PlayerId};
pub use season::Season;
