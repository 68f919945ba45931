//! The canonical rhythm unit produced by both quantizers

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A timed note or rest
///
/// `start_beat` is measured in quarter-note beats from the start of the
/// sequence it was produced in. Notes carry no reference back to the segment
/// or onset they came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Identifier, unique within and across calls
    pub id: String,

    /// Start position in beats (>= 0)
    pub start_beat: f64,

    /// Duration in beats (> 0)
    pub duration_beats: f64,

    /// True for rests
    pub is_rest: bool,
}

impl Note {
    /// Create a note with a freshly generated id
    pub fn new(start_beat: f64, duration_beats: f64, is_rest: bool) -> Self {
        Self {
            id: generate_id(),
            start_beat,
            duration_beats,
            is_rest,
        }
    }

    /// Beat position where this note ends
    pub fn end_beat(&self) -> f64 {
        self.start_beat + self.duration_beats
    }
}

/// Random v4 UUID; collisions are negligible without any shared counter
fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
