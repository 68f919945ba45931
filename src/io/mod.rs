//! Audio I/O modules
//!
//! Decoded mono signals, capture buffering, and file decoding using Symphonia.
//! Nothing here holds a live audio device: capture code pushes finished
//! chunks and hands the result to the detectors as a plain buffer.

#[cfg(feature = "decode")]
pub mod decoder;
pub mod sample_buffer;
pub mod signal;

#[cfg(feature = "decode")]
pub use decoder::{decode_file, decode_file_with};
pub use sample_buffer::CaptureBuffer;
pub use signal::AudioSignal;
