//! Time signatures and grouping of notes into measures

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::note::Note;
use crate::error::RhythmError;

/// Tolerance when deciding which bar a start beat falls in
const BARLINE_EPSILON: f64 = 1e-9;

/// Time signature, e.g. 4/4 or 6/8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSignature {
    /// Beats per bar in units of `denominator`
    pub numerator: u32,

    /// Note value of one counted beat (1, 2, 4, 8, 16 or 32)
    pub denominator: u32,
}

impl Default for TimeSignature {
    fn default() -> Self {
        Self {
            numerator: 4,
            denominator: 4,
        }
    }
}

impl TimeSignature {
    /// Create a validated time signature
    pub fn new(numerator: u32, denominator: u32) -> Result<Self, RhythmError> {
        let ts = Self {
            numerator,
            denominator,
        };
        ts.validate()?;
        Ok(ts)
    }

    /// Check numerator > 0 and denominator is a supported note value
    pub fn validate(&self) -> Result<(), RhythmError> {
        if self.numerator == 0 {
            return Err(RhythmError::InvalidInput(
                "Time signature numerator must be > 0".to_string(),
            ));
        }

        if !matches!(self.denominator, 1 | 2 | 4 | 8 | 16 | 32) {
            return Err(RhythmError::InvalidInput(format!(
                "Time signature denominator must be one of 1, 2, 4, 8, 16, 32, got {}",
                self.denominator
            )));
        }

        Ok(())
    }

    /// Length of one bar in quarter-note beats (6/8 -> 3.0)
    pub fn beats_per_measure(&self) -> f64 {
        self.numerator as f64 * 4.0 / self.denominator as f64
    }
}

/// One bar of notes
///
/// Note start beats are local to the bar (0 at the barline).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    /// Unique identifier
    pub id: String,

    /// Time signature of this bar
    pub time_signature: TimeSignature,

    /// Notes sorted by bar-local start beat
    pub notes: Vec<Note>,

    /// Bar length in beats
    pub beats_per_measure: f64,
}

impl Measure {
    /// Create an empty measure
    pub fn new(time_signature: TimeSignature) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            time_signature,
            notes: Vec::new(),
            beats_per_measure: time_signature.beats_per_measure(),
        }
    }
}

/// Group a note sequence into consecutive bars
///
/// Each note lands in the bar containing its `start_beat` and is rebased to
/// bar-local beats. Bars with no notes between occupied bars are still
/// emitted so bar indices stay contiguous. A note running past a barline is
/// kept whole in its starting bar.
///
/// # Errors
///
/// Returns `RhythmError::InvalidInput` for an invalid time signature or a
/// note with a negative or non-finite start beat.
pub fn group_into_measures(
    notes: &[Note],
    time_signature: TimeSignature,
) -> Result<Vec<Measure>, RhythmError> {
    time_signature.validate()?;

    if notes.is_empty() {
        return Ok(Vec::new());
    }

    let bar_length = time_signature.beats_per_measure();
    let mut measures: Vec<Measure> = Vec::new();

    for note in notes {
        if !note.start_beat.is_finite() || note.start_beat < 0.0 {
            return Err(RhythmError::InvalidInput(format!(
                "Note start beat must be finite and >= 0, got {}",
                note.start_beat
            )));
        }

        let index = ((note.start_beat + BARLINE_EPSILON) / bar_length).floor() as usize;
        while measures.len() <= index {
            measures.push(Measure::new(time_signature));
        }

        let mut local = note.clone();
        local.start_beat = (note.start_beat - index as f64 * bar_length).max(0.0);
        measures[index].notes.push(local);
    }

    for measure in &mut measures {
        measure
            .notes
            .sort_by(|a, b| a.start_beat.total_cmp(&b.start_beat));
    }

    log::debug!(
        "Grouped {} notes into {} measures of {}/{}",
        notes.len(),
        measures.len(),
        time_signature.numerator,
        time_signature.denominator
    );

    Ok(measures)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(start: f64, duration: f64) -> Note {
        Note::new(start, duration, false)
    }

    #[test]
    fn test_beats_per_measure() {
        assert_eq!(TimeSignature::default().beats_per_measure(), 4.0);
        assert_eq!(TimeSignature::new(3, 4).unwrap().beats_per_measure(), 3.0);
        assert_eq!(TimeSignature::new(6, 8).unwrap().beats_per_measure(), 3.0);
        assert_eq!(TimeSignature::new(2, 2).unwrap().beats_per_measure(), 4.0);
    }

    #[test]
    fn test_invalid_time_signature() {
        assert!(TimeSignature::new(0, 4).is_err());
        assert!(TimeSignature::new(4, 3).is_err());
    }

    #[test]
    fn test_group_empty() {
        let measures = group_into_measures(&[], TimeSignature::default()).unwrap();
        assert!(measures.is_empty());
    }

    #[test]
    fn test_group_rebases_start_beats() {
        let notes = vec![note(0.0, 1.0), note(3.5, 0.5), note(4.0, 1.0), note(5.25, 0.25)];
        let measures = group_into_measures(&notes, TimeSignature::default()).unwrap();

        assert_eq!(measures.len(), 2);
        assert_eq!(measures[0].notes.len(), 2);
        assert_eq!(measures[1].notes.len(), 2);
        assert_eq!(measures[1].notes[0].start_beat, 0.0);
        assert_eq!(measures[1].notes[1].start_beat, 1.25);
        assert_eq!(measures[1].notes[0].id, notes[2].id);
        assert_eq!(measures[0].beats_per_measure, 4.0);
    }

    #[test]
    fn test_group_emits_empty_bars() {
        let notes = vec![note(0.0, 1.0), note(9.0, 1.0)];
        let measures = group_into_measures(&notes, TimeSignature::default()).unwrap();

        assert_eq!(measures.len(), 3);
        assert!(measures[1].notes.is_empty());
        assert_eq!(measures[2].notes[0].start_beat, 1.0);
    }

    #[test]
    fn test_note_crossing_barline_stays_whole() {
        let notes = vec![note(3.0, 2.0)];
        let measures = group_into_measures(&notes, TimeSignature::default()).unwrap();

        assert_eq!(measures.len(), 1);
        assert_eq!(measures[0].notes[0].duration_beats, 2.0);
    }

    #[test]
    fn test_negative_start_rejected() {
        let notes = vec![note(-1.0, 1.0)];
        assert!(group_into_measures(&notes, TimeSignature::default()).is_err());
    }
}
