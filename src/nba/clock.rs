//! Game-clock parsing onto a single elapsed-minutes axis.
//!
//! The live feed reports the clock as an ISO-8601-like duration
//! (`"PT07M31.00S"`), the historical feed as `"7:31"`. Both mean time
//! *remaining* in the period. Every period counts as 12 minutes, overtime
//! included.

use regex::Regex;
use std::sync::LazyLock;

/// Length of a period on the chart axis, in minutes.
pub const PERIOD_MINUTES: f64 = 12.0;

/// Fractional seconds are matched but not captured.
static LIVE_CLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^PT(\d+)M(\d+)(?:\.\d+)?S$").expect("live clock pattern is valid")
});

/// Minutes and whole seconds remaining in a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockRemaining {
    pub minutes: u32,
    pub seconds: u32,
}

impl ClockRemaining {
    /// A full period on the clock.
    pub const FULL_PERIOD: ClockRemaining = ClockRemaining {
        minutes: 12,
        seconds: 0,
    };

    pub fn as_minutes(&self) -> f64 {
        f64::from(self.minutes) + f64::from(self.seconds) / 60.0
    }
}

/// Parse `"PT{M}M{S}.{ff}S"`.
pub fn parse_live_clock(clock: &str) -> Option<ClockRemaining> {
    let caps = LIVE_CLOCK.captures(clock.trim())?;
    Some(ClockRemaining {
        minutes: caps[1].parse().ok()?,
        seconds: caps[2].parse().ok()?,
    })
}

/// Parse `"M:SS"`.
pub fn parse_historical_clock(clock: &str) -> Option<ClockRemaining> {
    let (minutes, seconds) = clock.trim().split_once(':')?;
    Some(ClockRemaining {
        minutes: minutes.trim().parse().ok()?,
        seconds: seconds.trim().parse().ok()?,
    })
}

/// Minutes elapsed since tip-off for an event at `clock` in `period`.
///
/// Never fails:
/// - a live-style string that does not match counts as a full period
///   remaining,
/// - anything else unparseable yields the start of the period.
pub fn elapsed_minutes(period: u32, clock: &str) -> f64 {
    let period_start = f64::from(period.max(1) - 1) * PERIOD_MINUTES;

    let remaining = if clock.trim_start().starts_with("PT") {
        parse_live_clock(clock).unwrap_or(ClockRemaining::FULL_PERIOD)
    } else {
        match parse_historical_clock(clock) {
            Some(r) => r,
            None => return period_start,
        }
    };

    let remaining = remaining.as_minutes().clamp(0.0, PERIOD_MINUTES);
    period_start + (PERIOD_MINUTES - remaining)
}

/// `"PT25M01.00S"` → `"25:01"`. Other strings pass through unchanged.
pub fn format_duration_minutes(duration: &str) -> String {
    match parse_live_clock(duration) {
        Some(r) => format!("{}:{:02}", r.minutes, r.seconds),
        None => duration.to_string(),
    }
}
