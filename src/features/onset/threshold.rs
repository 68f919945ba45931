//! Signal-derived threshold for onset detection
//!
//! The suggested threshold is a fixed fraction of the loudest frame's RMS
//! energy, measured over the same frames the detector analyzes. The
//! fraction (default 0.3) is an empirical sensitivity setting.

use crate::config::OnsetConfig;
use crate::error::RhythmError;
use crate::preprocessing::framing::{frames, rms};

/// Suggest an onset threshold from the signal itself
///
/// Returns `peak_frame_rms * config.threshold_fraction`. A silent signal, or
/// one shorter than a frame, yields 0.0; callers should treat a zero
/// threshold as "no onsets detectable" rather than run the detector with it.
///
/// # Errors
///
/// Returns `RhythmError::InvalidInput` for a zero sample rate and
/// `RhythmError::InvalidConfig` for invalid frame parameters
///
/// # Example
///
/// ```
/// use mora_rhythm::config::OnsetConfig;
/// use mora_rhythm::features::onset::calculate_dynamic_threshold;
///
/// let samples = vec![0.5f32; 44100];
/// let threshold = calculate_dynamic_threshold(&samples, 44100, &OnsetConfig::default())?;
/// assert!((threshold - 0.15).abs() < 1e-5);
/// # Ok::<(), mora_rhythm::RhythmError>(())
/// ```
pub fn calculate_dynamic_threshold(
    samples: &[f32],
    sample_rate: u32,
    config: &OnsetConfig,
) -> Result<f32, RhythmError> {
    config.validate()?;

    if sample_rate == 0 {
        return Err(RhythmError::InvalidInput(
            "Sample rate must be > 0".to_string(),
        ));
    }

    let peak_rms = frames(samples, config.frame_size, config.hop_size)
        .map(|(_, frame)| rms(frame))
        .fold(0.0f32, f32::max);

    let threshold = peak_rms * config.threshold_fraction;

    if !threshold.is_finite() {
        return Err(RhythmError::NumericalError(format!(
            "Threshold is not finite (peak RMS {})",
            peak_rms
        )));
    }

    log::debug!(
        "Dynamic threshold: peak RMS={:.6}, threshold={:.6}",
        peak_rms,
        threshold
    );

    Ok(threshold)
}
