//! ID types for NBA players and games.

use crate::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for NBA person ids.
///
/// The live feeds call this `personId`, the stats endpoints `PLAYER_ID` /
/// `PERSON_ID` / `PLAYER1_ID`; all of them are the same number.
///
/// # Examples
///
/// ```rust
/// use nba_tracker::PlayerId;
///
/// let player_id = PlayerId::new(1630166);
/// assert_eq!(player_id.as_u64(), 1630166);
/// assert_eq!(player_id.to_string(), "1630166");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for NBA game ids (`"0022500123"`).
///
/// Kept as a string: the leading zeros are significant in every URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for GameId {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        // Validate digits only; keep the original text for the zeros.
        s.parse::<u64>()?;
        Ok(Self(s.to_string()))
    }
}
