//! Time-to-beat conversion and grid snapping

/// Tie-breaking rule for values exactly halfway between two grid lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Ties go toward positive infinity (`floor(x + 0.5)`)
    #[default]
    HalfUp,
    /// Ties go to the even grid index (banker's rounding)
    HalfEven,
}

/// Convert seconds to beats at the given tempo
///
/// `beats = seconds * tempo_bpm / 60`
pub fn seconds_to_beats(seconds: f64, tempo_bpm: f64) -> f64 {
    seconds * (tempo_bpm / 60.0)
}

/// Snap a beat position to the nearest multiple of `unit`
///
/// `unit` must be positive.
///
/// # Example
///
/// ```
/// use mora_rhythm::quantization::{snap_to_grid, RoundingMode};
///
/// assert_eq!(snap_to_grid(0.26, 0.25, RoundingMode::HalfUp), 0.25);
/// assert_eq!(snap_to_grid(0.125, 0.25, RoundingMode::HalfUp), 0.25);
/// assert_eq!(snap_to_grid(0.125, 0.25, RoundingMode::HalfEven), 0.0);
/// ```
pub fn snap_to_grid(beats: f64, unit: f64, rounding: RoundingMode) -> f64 {
    let steps = beats / unit;
    let index = match rounding {
        RoundingMode::HalfUp => (steps + 0.5).floor(),
        RoundingMode::HalfEven => steps.round_ties_even(),
    };
    index * unit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_to_beats() {
        assert_eq!(seconds_to_beats(0.5, 120.0), 1.0);
        assert_eq!(seconds_to_beats(1.0, 60.0), 1.0);
        assert_eq!(seconds_to_beats(0.0, 90.0), 0.0);
    }

    #[test]
    fn test_snap_nearest() {
        assert_eq!(snap_to_grid(0.26, 0.25, RoundingMode::HalfUp), 0.25);
        assert_eq!(snap_to_grid(0.37, 0.25, RoundingMode::HalfUp), 0.25);
        assert_eq!(snap_to_grid(0.38, 0.25, RoundingMode::HalfUp), 0.5);
        assert_eq!(snap_to_grid(2.0, 0.25, RoundingMode::HalfUp), 2.0);
    }

    #[test]
    fn test_snap_ties() {
        // 0.375 is exactly between 0.25 and 0.5
        assert_eq!(snap_to_grid(0.375, 0.25, RoundingMode::HalfUp), 0.5);
        assert_eq!(snap_to_grid(0.375, 0.25, RoundingMode::HalfEven), 0.5);
        assert_eq!(snap_to_grid(0.625, 0.25, RoundingMode::HalfUp), 0.75);
        assert_eq!(snap_to_grid(0.625, 0.25, RoundingMode::HalfEven), 0.5);
    }

    #[test]
    fn test_snap_other_units() {
        assert_eq!(snap_to_grid(0.9, 0.5, RoundingMode::HalfUp), 1.0);
        assert_eq!(snap_to_grid(1.4, 1.0, RoundingMode::HalfUp), 1.0);
    }
}
