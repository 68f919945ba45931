//! Classification of beat durations into notated note values

use serde::{Deserialize, Serialize};

const DURATION_EPSILON: f64 = 1e-9;

/// Undotted note kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteKind {
    /// 4 beats
    Whole,
    /// 2 beats
    Half,
    /// 1 beat
    Quarter,
    /// 1/2 beat
    Eighth,
    /// 1/4 beat
    Sixteenth,
}

impl NoteKind {
    /// Undotted length in quarter-note beats
    pub fn beats(&self) -> f64 {
        match self {
            NoteKind::Whole => 4.0,
            NoteKind::Half => 2.0,
            NoteKind::Quarter => 1.0,
            NoteKind::Eighth => 0.5,
            NoteKind::Sixteenth => 0.25,
        }
    }
}

/// A notated duration: kind plus optional augmentation dot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteValue {
    /// Base note kind
    pub kind: NoteKind,
    /// Dotted values last 1.5x the base kind
    pub dotted: bool,
}

impl NoteValue {
    /// Map an exact duration to a note value
    ///
    /// Returns `None` for durations that are not a plain or single-dotted
    /// whole, half, quarter, eighth or sixteenth note (e.g. 1.25 beats, which
    /// needs a tie).
    ///
    /// # Example
    ///
    /// ```
    /// use mora_rhythm::rhythm::{NoteKind, NoteValue};
    ///
    /// let value = NoteValue::from_beats(0.75).unwrap();
    /// assert_eq!(value.kind, NoteKind::Eighth);
    /// assert!(value.dotted);
    /// assert!(NoteValue::from_beats(1.25).is_none());
    /// ```
    pub fn from_beats(beats: f64) -> Option<Self> {
        const KINDS: [NoteKind; 5] = [
            NoteKind::Whole,
            NoteKind::Half,
            NoteKind::Quarter,
            NoteKind::Eighth,
            NoteKind::Sixteenth,
        ];

        for kind in KINDS {
            if (beats - kind.beats()).abs() < DURATION_EPSILON {
                return Some(Self {
                    kind,
                    dotted: false,
                });
            }
            // Dotted whole (6 beats) is allowed as well
            if (beats - kind.beats() * 1.5).abs() < DURATION_EPSILON {
                return Some(Self { kind, dotted: true });
            }
        }

        None
    }

    /// Length in quarter-note beats
    pub fn beats(&self) -> f64 {
        if self.dotted {
            self.kind.beats() * 1.5
        } else {
            self.kind.beats()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values() {
        assert_eq!(NoteValue::from_beats(4.0).unwrap().kind, NoteKind::Whole);
        assert_eq!(NoteValue::from_beats(2.0).unwrap().kind, NoteKind::Half);
        assert_eq!(NoteValue::from_beats(1.0).unwrap().kind, NoteKind::Quarter);
        assert_eq!(NoteValue::from_beats(0.5).unwrap().kind, NoteKind::Eighth);
        assert_eq!(NoteValue::from_beats(0.25).unwrap().kind, NoteKind::Sixteenth);
    }

    #[test]
    fn test_dotted_values() {
        let cases = [
            (6.0, NoteKind::Whole),
            (3.0, NoteKind::Half),
            (1.5, NoteKind::Quarter),
            (0.75, NoteKind::Eighth),
            (0.375, NoteKind::Sixteenth),
        ];
        for (beats, kind) in cases {
            let value = NoteValue::from_beats(beats).unwrap();
            assert_eq!(value.kind, kind, "{} beats", beats);
            assert!(value.dotted, "{} beats should be dotted", beats);
            assert_eq!(value.beats(), beats);
        }
    }

    #[test]
    fn test_unrepresentable() {
        assert!(NoteValue::from_beats(1.25).is_none());
        assert!(NoteValue::from_beats(0.0).is_none());
        assert!(NoteValue::from_beats(5.0).is_none());
    }
}
