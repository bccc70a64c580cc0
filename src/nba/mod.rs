//! NBA data: upstream client, payload types, and the scoring timeline.

pub mod classify;
pub mod clock;
pub mod http;
pub mod locator;
pub mod players;
pub mod sources;
pub mod timeline;
pub mod types;
