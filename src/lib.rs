//! # Mora Rhythm
//!
//! Turns raw rhythmic input into quantized note sequences for notation and
//! playback. Two inputs are supported:
//!
//! - **Text**: rhythmic kana syllables such as `"トゥー ダ タ"`, one sixteenth
//!   note per character, spaces as rests
//! - **Audio**: a recorded mono signal, onset-detected and snapped to a
//!   sixteenth-note grid at a caller-supplied tempo
//!
//! ## Quick Start
//!
//! ```
//! use mora_rhythm::{text_to_notes, RhythmConfig};
//!
//! let notes = text_to_notes("トゥー ダ タ", &RhythmConfig::default())?;
//! assert_eq!(notes.len(), 5);
//! assert_eq!(notes[0].duration_beats, 0.75);
//! assert!(notes[1].is_rest);
//! # Ok::<(), mora_rhythm::RhythmError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! text  -> text::segment            -> quantization::quantize_segments -> Vec<Note>
//! audio -> features::onset (detect) -> quantization::convert_onsets    -> Vec<Note>
//! ```
//!
//! Every stage is a pure, synchronous function with no shared state, so
//! independent inputs can be processed from multiple threads freely.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod features;
pub mod io;
pub mod preprocessing;
pub mod quantization;
pub mod rhythm;
pub mod text;

// Re-export main types
pub use config::{GridConfig, OnsetConfig, RhythmConfig};
pub use error::RhythmError;
pub use io::{AudioSignal, CaptureBuffer};
pub use quantization::RoundingMode;
pub use rhythm::{group_into_measures, Measure, Note, NoteKind, NoteValue, TimeSignature};
pub use text::Segment;

#[cfg(feature = "decode")]
pub use io::decode_file;

/// Convert rhythmic syllable text into notes
///
/// Segments the text, then lays the segments end to end from beat 0 with one
/// grid unit per character. Empty text yields no notes.
///
/// # Errors
///
/// Returns `RhythmError::InvalidConfig` for an invalid configuration
///
/// # Example
///
/// ```
/// use mora_rhythm::{text_to_notes, RhythmConfig};
///
/// let notes = text_to_notes("タッタ  ドゥーン", &RhythmConfig::default())?;
/// let starts: Vec<f64> = notes.iter().map(|n| n.start_beat).collect();
/// assert_eq!(starts, vec![0.0, 0.75, 1.25]);
/// # Ok::<(), mora_rhythm::RhythmError>(())
/// ```
pub fn text_to_notes(text: &str, config: &RhythmConfig) -> Result<Vec<Note>, RhythmError> {
    config.validate()?;

    log::debug!("Converting text input: {:?}", text);

    let segments = text::segment(text);
    Ok(quantization::quantize_segments(&segments, &config.grid))
}

/// Convert a recorded signal into notes at the given tempo
///
/// Derives an onset threshold from the signal, detects onsets against it and
/// snaps them to the beat grid. A silent signal (zero threshold) yields no
/// notes without running the detector.
///
/// # Arguments
///
/// * `signal` - Decoded mono recording
/// * `tempo_bpm` - Tempo in beats per minute (> 0), supplied by the caller
/// * `config` - Onset and grid tuning
///
/// # Errors
///
/// Returns `RhythmError` for an invalid configuration or tempo
///
/// # Example
///
/// ```
/// use mora_rhythm::{audio_to_notes, AudioSignal, RhythmConfig};
///
/// let mut samples = vec![0.0f32; 44100];
/// samples[22050..24000].iter_mut().for_each(|s| *s = 0.8);
/// let signal = AudioSignal::new(samples, 44100)?;
///
/// let notes = audio_to_notes(&signal, 120.0, &RhythmConfig::default())?;
/// assert_eq!(notes.len(), 1);
/// # Ok::<(), mora_rhythm::RhythmError>(())
/// ```
pub fn audio_to_notes(
    signal: &AudioSignal,
    tempo_bpm: f64,
    config: &RhythmConfig,
) -> Result<Vec<Note>, RhythmError> {
    config.validate()?;

    if !tempo_bpm.is_finite() || tempo_bpm <= 0.0 {
        return Err(RhythmError::InvalidInput(format!(
            "Tempo must be finite and > 0 BPM, got {}",
            tempo_bpm
        )));
    }

    log::debug!(
        "Converting audio input: {:.2} s at {} Hz, tempo {:.1} BPM",
        signal.duration_seconds(),
        signal.sample_rate(),
        tempo_bpm
    );

    let threshold = features::onset::calculate_dynamic_threshold(
        signal.samples(),
        signal.sample_rate(),
        &config.onset,
    )?;

    if threshold <= 0.0 {
        log::warn!("Signal is silent, no onsets detectable");
        return Ok(Vec::new());
    }

    let onsets = features::onset::detect_onsets(
        signal.samples(),
        signal.sample_rate(),
        threshold,
        &config.onset,
    )?;

    quantization::convert_onsets(&onsets, tempo_bpm, &config.grid)
}
