//! Proportional quantization of text segments
//!
//! Each character is worth one grid unit (a sixteenth note by default), so a
//! segment of `n` characters lasts `n * unit_beats`. Notes are laid end to
//! end from beat 0. Character counts are integers, so every start and
//! duration is an exact multiple of the unit and no snapping is needed.

use crate::config::GridConfig;
use crate::rhythm::Note;
use crate::text::Segment;

/// Map segments to back-to-back notes starting at beat 0
///
/// Empty input yields an empty sequence. Rest segments become rest notes.
///
/// # Example
///
/// ```
/// use mora_rhythm::config::GridConfig;
/// use mora_rhythm::quantization::quantize_segments;
/// use mora_rhythm::text::segment;
///
/// let notes = quantize_segments(&segment("タ トゥー"), &GridConfig::default());
/// let durations: Vec<f64> = notes.iter().map(|n| n.duration_beats).collect();
/// assert_eq!(durations, vec![0.25, 0.25, 0.75]);
/// assert_eq!(notes[2].start_beat, 0.5);
/// ```
pub fn quantize_segments(segments: &[Segment], grid: &GridConfig) -> Vec<Note> {
    let mut notes = Vec::with_capacity(segments.len());
    let mut cursor = 0.0f64;

    for segment in segments {
        let duration_beats = segment.character_count as f64 * grid.unit_beats;
        notes.push(Note::new(cursor, duration_beats, segment.is_rest));
        cursor += duration_beats;
    }

    log::debug!(
        "Quantized {} segments into {} beats",
        segments.len(),
        cursor
    );

    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn seg(text: &str, count: usize, is_rest: bool) -> Segment {
        Segment {
            text: text.to_string(),
            character_count: count,
            is_rest,
        }
    }

    #[test]
    fn test_single_sixteenth() {
        let notes = quantize_segments(&[seg("タ", 1, false)], &GridConfig::default());
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].start_beat, 0.0);
        assert_eq!(notes[0].duration_beats, 0.25);
        assert!(!notes[0].is_rest);
    }

    #[test]
    fn test_duration_proportional_to_characters() {
        let notes = quantize_segments(
            &[seg("タ", 1, false), seg("トゥー", 3, false)],
            &GridConfig::default(),
        );
        assert_eq!(notes[0].duration_beats, 0.25);
        assert_eq!(notes[1].duration_beats, 0.75);
        assert_eq!(notes[1].start_beat, 0.25);
    }

    #[test]
    fn test_rests_keep_flag_and_advance_cursor() {
        let notes = quantize_segments(
            &[seg("タ", 1, false), seg(" ", 1, true), seg("タ", 1, false)],
            &GridConfig::default(),
        );
        assert!(notes[1].is_rest);
        assert_eq!(notes[1].start_beat, 0.25);
        assert_eq!(notes[2].start_beat, 0.5);
    }

    #[test]
    fn test_complex_pattern() {
        let notes = quantize_segments(
            &[
                seg("ドゥン", 3, false),
                seg("  ", 2, true),
                seg("タッタ", 3, false),
            ],
            &GridConfig::default(),
        );
        assert_eq!(notes[0].duration_beats, 0.75);
        assert_eq!(notes[1].duration_beats, 0.5);
        assert_eq!(notes[2].duration_beats, 0.75);
        assert_eq!(notes[2].start_beat, 1.25);
    }

    #[test]
    fn test_empty() {
        assert!(quantize_segments(&[], &GridConfig::default()).is_empty());
    }

    #[test]
    fn test_continuity_and_unique_ids() {
        let segments: Vec<Segment> = (1..=20)
            .map(|i| seg("x", i % 5 + 1, i % 3 == 0))
            .collect();
        let notes = quantize_segments(&segments, &GridConfig::default());

        assert_eq!(notes[0].start_beat, 0.0);
        for pair in notes.windows(2) {
            assert!((pair[1].start_beat - pair[0].end_beat()).abs() < 1e-9);
        }
        for (note, segment) in notes.iter().zip(&segments) {
            assert_eq!(note.duration_beats, segment.character_count as f64 * 0.25);
            assert_eq!(note.is_rest, segment.is_rest);
        }

        let ids: HashSet<&str> = notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), notes.len());
    }

    #[test]
    fn test_custom_unit() {
        let grid = GridConfig {
            unit_beats: 0.5,
            ..GridConfig::default()
        };
        let notes = quantize_segments(&[seg("タッ", 2, false)], &grid);
        assert_eq!(notes[0].duration_beats, 1.0);
    }
}
