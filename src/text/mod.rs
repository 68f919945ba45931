//! Text input processing
//!
//! Splits rhythmic kana syllable strings ("トゥー ダ タ") into sound and rest
//! segments ready for quantization.

pub mod segmenter;

pub use segmenter::{segment, ScanMode, ScanState, Segment};
