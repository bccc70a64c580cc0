//! Season type in the `"2025-26"` form the stats endpoints expect.

use crate::error::{Result, TrackerError};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Month in which a new NBA season is considered to have started.
const SEASON_START_MONTH: u32 = 10;

/// Starting years accepted from the command line (BAA 1946-47 onward).
pub const FIRST_SEASON: u16 = 1946;
pub const LAST_SEASON: u16 = 9998;

/// Type-safe wrapper for a season, stored as its starting year.
///
/// # Examples
///
/// ```rust
/// use nba_tracker::Season;
///
/// let season: Season = "2025-26".parse().unwrap();
/// assert_eq!(season.start_year(), 2025);
/// assert_eq!(season.to_string(), "2025-26");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(start_year: u16) -> Self {
        Self(start_year)
    }

    pub fn start_year(&self) -> u16 {
        self.0
    }

    /// Season in progress (or about to start) on `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let year = date.year() as u16;
        if date.month() >= SEASON_START_MONTH {
            Self(year)
        } else {
            Self(year - 1)
        }
    }
}

impl Default for Season {
    fn default() -> Self {
        Self::containing(Local::now().date_naive())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.0, (u32::from(self.0) + 1) % 100)
    }
}

impl FromStr for Season {
    type Err = TrackerError;

    /// Accepts `"2025-26"` or a bare starting year `"2025"`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || TrackerError::InvalidSeason {
            season: s.to_string(),
        };
        let s = s.trim();
        let (start, end) = match s.split_once('-') {
            None => (s, None),
            Some((start, end)) => (start, Some(end)),
        };

        let start: u16 = start.parse().map_err(|_| invalid())?;
        if !(FIRST_SEASON..=LAST_SEASON).contains(&start) {
            return Err(invalid());
        }
        if let Some(end) = end {
            let end: u16 = end.parse().map_err(|_| invalid())?;
            if end != (start + 1) % 100 {
                return Err(invalid());
            }
        }
        Ok(Self(start))
    }
}
