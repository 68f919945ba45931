//! Conversion of onset timestamps into beat-aligned notes
//!
//! Each onset becomes one note. Its end is the next onset (or, for the last
//! onset, a fixed fallback duration later). Start and end are converted to
//! beats at the supplied tempo and snapped to the grid independently; the
//! duration is floored at one grid unit so no note collapses to zero length.
//! Gaps between onsets are never emitted as rests.

use crate::config::GridConfig;
use crate::error::RhythmError;
use crate::quantization::grid::{seconds_to_beats, snap_to_grid};
use crate::rhythm::Note;

/// Convert sorted onset times (seconds) into notes at `tempo_bpm`
///
/// # Arguments
///
/// * `onsets` - Onset timestamps in seconds, non-negative and non-decreasing
/// * `tempo_bpm` - Tempo in quarter-note beats per minute (> 0)
/// * `grid` - Grid unit, final-note fallback and rounding mode
///
/// # Errors
///
/// Returns `RhythmError::InvalidInput` for a non-positive or non-finite tempo
/// and for negative, non-finite or out-of-order onsets, and
/// `RhythmError::InvalidConfig` for an invalid grid.
///
/// # Example
///
/// ```
/// use mora_rhythm::config::GridConfig;
/// use mora_rhythm::quantization::convert_onsets;
///
/// let notes = convert_onsets(&[0.0, 0.5, 1.0], 120.0, &GridConfig::default())?;
/// let starts: Vec<f64> = notes.iter().map(|n| n.start_beat).collect();
/// assert_eq!(starts, vec![0.0, 1.0, 2.0]);
/// # Ok::<(), mora_rhythm::RhythmError>(())
/// ```
pub fn convert_onsets(
    onsets: &[f64],
    tempo_bpm: f64,
    grid: &GridConfig,
) -> Result<Vec<Note>, RhythmError> {
    if !tempo_bpm.is_finite() || tempo_bpm <= 0.0 {
        return Err(RhythmError::InvalidInput(format!(
            "Tempo must be finite and > 0 BPM, got {}",
            tempo_bpm
        )));
    }

    grid.validate()?;
    validate_onsets(onsets)?;

    if onsets.is_empty() {
        return Ok(Vec::new());
    }

    log::debug!(
        "Converting {} onsets at {:.1} BPM (grid={} beats)",
        onsets.len(),
        tempo_bpm,
        grid.unit_beats
    );

    let mut notes = Vec::with_capacity(onsets.len());

    for (i, &start_time) in onsets.iter().enumerate() {
        let next_time = onsets
            .get(i + 1)
            .copied()
            .unwrap_or(start_time + grid.final_note_seconds);

        let start_beat = snap_to_grid(
            seconds_to_beats(start_time, tempo_bpm),
            grid.unit_beats,
            grid.rounding,
        );
        let end_beat = snap_to_grid(
            seconds_to_beats(next_time, tempo_bpm),
            grid.unit_beats,
            grid.rounding,
        );
        let duration_beats = (end_beat - start_beat).max(grid.unit_beats);

        notes.push(Note::new(start_beat, duration_beats, false));
    }

    Ok(notes)
}

fn validate_onsets(onsets: &[f64]) -> Result<(), RhythmError> {
    for (i, &t) in onsets.iter().enumerate() {
        if !t.is_finite() || t < 0.0 {
            return Err(RhythmError::InvalidInput(format!(
                "Onset {} must be finite and >= 0, got {}",
                i, t
            )));
        }
    }

    if let Some(i) = onsets.windows(2).position(|w| w[1] < w[0]) {
        return Err(RhythmError::InvalidInput(format!(
            "Onsets must be sorted: {} at index {} follows {}",
            onsets[i + 1],
            i + 1,
            onsets[i]
        )));
    }

    Ok(())
}
