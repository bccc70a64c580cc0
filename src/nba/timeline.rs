//! Cumulative scoring timeline rebuilt from play-by-play.
//!
//! The builder walks a chain of play-by-play sources and keeps the first
//! one that yields at least one scoring event for the player. A source that
//! fails to fetch, or that answers without anything attributable, just
//! passes control to the next one; the worst case is the lone origin
//! sample, which callers render as "no scoring data".

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    cli::types::GameId,
    core::PlayerIdentity,
    error::FetchError,
    nba::{
        classify::{point_value, PointClassifier},
        clock::elapsed_minutes,
        types::PlayEvent,
    },
};


/// One point on the chart: minutes since tip-off against points so far.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimelineSample {
    pub minute: f64,
    pub cumulative_points: u32,
}

impl TimelineSample {
    pub const ORIGIN: TimelineSample = TimelineSample {
        minute: 0.0,
        cumulative_points: 0,
    };
}

/// How events are matched to the tracked player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribution {
    /// Event subject id equals the player id.
    PlayerId,
    /// Id match, or the player's surname is a word of the description.
    PlayerIdOrSurname,
}

impl Attribution {
    pub fn matches(&self, event: &PlayEvent, player: &PlayerIdentity) -> bool {
        if event.player_id() == player.id {
            return true;
        }
        match (self, player.surname()) {
            (Attribution::PlayerIdOrSurname, Some(surname)) => {
                names_player(&event.description(), surname)
            }
            _ => false,
        }
    }
}

/// Whole-word, case-insensitive surname match outside parentheses.
///
/// Parenthesized text carries running totals and credits for other players
/// (`"(Avdija 4 AST)"`), so it never attributes the basket.
fn names_player(description: &str, surname: &str) -> bool {
    let mut depth = 0usize;
    let subject: String = description
        .chars()
        .filter(|&c| match c {
            '(' => {
                depth += 1;
                false
            }
            ')' => {
                depth = depth.saturating_sub(1);
                false
            }
            _ => depth == 0,
        })
        .collect();

    subject
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .any(|word| word.to_lowercase() == surname.to_lowercase())
}

/// A feed of play-by-play events for one game.
#[async_trait]
pub trait PlayByPlaySource: Send + Sync {
    /// Short label for logs.
    fn name(&self) -> &str;

    fn attribution(&self) -> Attribution {
        Attribution::PlayerId
    }

    /// All events for the game, in upstream chronological order.
    async fn fetch_events(&self, game_id: &GameId) -> Result<Vec<PlayEvent>, FetchError>;
}

/// Scoring samples (without the origin) for `player` in `events`.
pub fn extract_samples(
    events: &[PlayEvent],
    player: &PlayerIdentity,
    attribution: Attribution,
    classifier: &dyn PointClassifier,
) -> Vec<TimelineSample> {
    let mut running = 0u32;
    let mut samples = Vec::new();

    for event in events {
        if !attribution.matches(event, player) {
            continue;
        }
        let points = point_value(event, classifier);
        if points == 0 {
            continue;
        }
        running += points;
        samples.push(TimelineSample {
            minute: elapsed_minutes(event.period(), event.clock()),
            cumulative_points: running,
        });
    }

    samples
}

/// Build the timeline from the first source in `sources` that yields any
/// scoring events. Always starts with [`TimelineSample::ORIGIN`].
pub async fn build_timeline(
    sources: &[&dyn PlayByPlaySource],
    game_id: &GameId,
    player: &PlayerIdentity,
    classifier: &dyn PointClassifier,
) -> Vec<TimelineSample> {
    let mut timeline = vec![TimelineSample::ORIGIN];

    for source in sources {
        let events = match source.fetch_events(game_id).await {
            Ok(events) => events,
            Err(e) => {
                warn!(source = source.name(), %game_id, error = %e, "play-by-play unavailable");
                continue;
            }
        };

        let samples = extract_samples(&events, player, source.attribution(), classifier);
        if samples.is_empty() {
            info!(
                source = source.name(),
                %game_id,
                events = events.len(),
                "no scoring events for player, trying next source"
            );
            continue;
        }

        debug!(source = source.name(), samples = samples.len(), "timeline built");
        timeline.extend(samples);
        return timeline;
    }

    timeline
}

/// True when `timeline` holds nothing beyond the origin.
pub fn has_scoring_data(timeline: &[TimelineSample]) -> bool {
    timeline.len() > 1
}
