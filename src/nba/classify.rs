//! Point attribution for scoring events.
//!
//! The feeds carry no structured point value, so the shot type is read off
//! the free-text description. This is a heuristic: a description that
//! mentions "3pt" anywhere counts three, and so on.

use crate::nba::types::{EventMsgType, PlayEvent};

/// Marker the feeds put in front of a missed attempt.
pub const MISS_MARKER: &str = "MISS";

/// Turns a scoring description into a point value.
///
/// Swap the implementation if the upstream ever exposes a structured
/// point-value field.
pub trait PointClassifier: Send + Sync {
    /// Points for a scoring event with this description; 0 when the text
    /// shows it was not actually a make.
    fn points_for_description(&self, description: &str) -> u32;
}

/// Substring heuristic over the description text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptionClassifier;

impl PointClassifier for DescriptionClassifier {
    fn points_for_description(&self, description: &str) -> u32 {
        let lower = description.to_lowercase();
        if lower.contains("3pt") {
            3
        } else if lower.contains("free throw") {
            if description.contains(MISS_MARKER) {
                0
            } else {
                1
            }
        } else {
            2
        }
    }
}

/// Points `event` contributes, 0 if it is not a make.
pub fn point_value(event: &PlayEvent, classifier: &dyn PointClassifier) -> u32 {
    match event {
        PlayEvent::Live(e) => {
            if e.is_scoring_play {
                classifier.points_for_description(&e.description)
            } else {
                0
            }
        }
        PlayEvent::Historical(e) => match e.event_type {
            EventMsgType::FieldGoalMade => classifier.points_for_description(&e.description()),
            // Makes and misses share the code; only the text tells them apart.
            EventMsgType::FreeThrow => {
                if e.description().contains(MISS_MARKER) {
                    0
                } else {
                    1
                }
            }
            EventMsgType::FieldGoalMissed | EventMsgType::Other(_) => 0,
        },
    }
}
