//! Beat quantization
//!
//! Converts pipeline intermediates into `Note` sequences on a beat grid:
//! - `segments`: text segments, one grid unit per character
//! - `onsets`: onset timestamps at a given tempo, snapped to the grid
//! - `grid`: shared time-to-beat conversion and snapping

pub mod grid;
pub mod onsets;
pub mod segments;

pub use grid::{seconds_to_beats, snap_to_grid, RoundingMode};
pub use onsets::convert_onsets;
pub use segments::quantize_segments;
