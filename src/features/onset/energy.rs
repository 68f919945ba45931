//! Short-term energy onset detection
//!
//! Algorithm:
//! 1. Divide audio into overlapping frames (frame_size, hop_size); a trailing
//!    partial frame is not analyzed
//! 2. Compute RMS energy per frame
//! 3. Flag a frame when its RMS exceeds the threshold and its rise over the
//!    decayed previous energy also exceeds the threshold
//! 4. Record the frame start time unless it falls within `min_onset_interval`
//!    of the last recorded onset
//! 5. Carry `previous_energy = rms * energy_decay` into the next frame
//!
//! The decay scales the current frame's energy rather than blending it with
//! history, so this is not an exponential moving average.
//!
//! # Example
//!
//! ```
//! use mora_rhythm::config::OnsetConfig;
//! use mora_rhythm::features::onset::detect_onsets;
//!
//! let mut samples = vec![0.0f32; 44100];
//! samples[1000..2000].iter_mut().for_each(|s| *s = 0.8);
//!
//! let onsets = detect_onsets(&samples, 44100, 0.1, &OnsetConfig::default())?;
//! assert_eq!(onsets.len(), 1);
//! # Ok::<(), mora_rhythm::RhythmError>(())
//! ```

use crate::config::OnsetConfig;
use crate::error::RhythmError;
use crate::preprocessing::framing::{frame_count, frames, rms};

/// Detect onset times in a mono signal
///
/// # Arguments
///
/// * `samples` - Mono audio samples (normalized to [-1.0, 1.0])
/// * `sample_rate` - Sample rate in Hz (> 0)
/// * `threshold` - Energy threshold (>= 0), typically from
///   `calculate_dynamic_threshold`
/// * `config` - Frame, hop, spacing and decay parameters
///
/// # Returns
///
/// Onset times in seconds, strictly increasing, adjacent onsets at least
/// `min_onset_interval` apart
///
/// # Errors
///
/// Returns `RhythmError::InvalidInput` for a zero sample rate or a negative
/// or non-finite threshold, and `RhythmError::InvalidConfig` for invalid
/// frame parameters
pub fn detect_onsets(
    samples: &[f32],
    sample_rate: u32,
    threshold: f32,
    config: &OnsetConfig,
) -> Result<Vec<f64>, RhythmError> {
    config.validate()?;

    if sample_rate == 0 {
        return Err(RhythmError::InvalidInput(
            "Sample rate must be > 0".to_string(),
        ));
    }

    if !threshold.is_finite() || threshold < 0.0 {
        return Err(RhythmError::InvalidInput(format!(
            "Threshold must be finite and >= 0, got {}",
            threshold
        )));
    }

    let num_frames = frame_count(samples.len(), config.frame_size, config.hop_size);
    if num_frames == 0 {
        log::warn!(
            "Signal length ({}) shorter than frame size ({}), returning empty onsets",
            samples.len(),
            config.frame_size
        );
        return Ok(Vec::new());
    }

    log::debug!(
        "Detecting onsets: {} samples ({} frames) at {} Hz, frame={}, hop={}, threshold={:.6}",
        samples.len(),
        num_frames,
        sample_rate,
        config.frame_size,
        config.hop_size,
        threshold
    );

    let mut onsets: Vec<f64> = Vec::new();
    let mut previous_energy = 0.0f32;
    let mut last_onset: Option<f64> = None;

    for (start, frame) in frames(samples, config.frame_size, config.hop_size) {
        let energy = rms(frame);
        let increase = energy - previous_energy;

        if energy > threshold && increase > threshold {
            let time_seconds = start as f64 / sample_rate as f64;
            let spaced = last_onset
                .map_or(true, |last| time_seconds - last >= config.min_onset_interval);

            if spaced {
                onsets.push(time_seconds);
                last_onset = Some(time_seconds);
            }
        }

        previous_energy = energy * config.energy_decay;
    }

    log::debug!("Detected {} onsets", onsets.len());

    Ok(onsets)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SR: u32 = 44100;

    fn pulse_signal(len: usize, pulses: &[(usize, usize)], amplitude: f32) -> Vec<f32> {
        let mut samples = vec![0.0f32; len];
        for &(start, end) in pulses {
            samples[start..end].iter_mut().for_each(|s| *s = amplitude);
        }
        samples
    }

    /// Percussive hits with exponential decay at a fixed BPM
    fn generate_click_pattern(duration_seconds: f32, bpm: f32, hit_ms: f32) -> Vec<f32> {
        let sample_rate = SR as f32;
        let num_samples = (duration_seconds * sample_rate) as usize;
        let mut samples = vec![0.0f32; num_samples];

        let interval = (60.0 / bpm * sample_rate) as usize;
        let hit_len = (hit_ms / 1000.0 * sample_rate) as usize;

        let mut pos = 0;
        while pos < num_samples {
            let end = (pos + hit_len).min(num_samples);
            for i in pos..end {
                let t = (i - pos) as f32 / hit_len as f32;
                samples[i] = (-t * 5.0).exp() * 0.8;
            }
            pos += interval;
        }

        samples
    }

    fn assert_spacing(onsets: &[f64], min_interval: f64) {
        for pair in onsets.windows(2) {
            assert!(pair[1] > pair[0], "onsets must increase: {:?}", pair);
            assert!(
                pair[1] - pair[0] >= min_interval,
                "onsets too close: {:?}",
                pair
            );
        }
    }

    #[test]
    fn test_silence_yields_no_onsets() {
        let samples = vec![0.0f32; SR as usize];
        for threshold in [0.0, 0.001, 0.1, 1.0] {
            let onsets = detect_onsets(&samples, SR, threshold, &OnsetConfig::default()).unwrap();
            assert!(onsets.is_empty(), "threshold {}", threshold);
        }
    }

    #[test]
    fn test_single_pulse() {
        let samples = pulse_signal(SR as usize, &[(1000, 2000)], 0.8);
        let onsets = detect_onsets(&samples, SR, 0.1, &OnsetConfig::default()).unwrap();

        assert_eq!(onsets.len(), 1, "got {:?}", onsets);
        assert!((onsets[0] - 1000.0 / 44100.0).abs() < 0.05);
    }

    #[test]
    fn test_multiple_pulses() {
        let samples = pulse_signal(SR as usize, &[(1000, 2000), (10000, 11000)], 0.8);
        let onsets = detect_onsets(&samples, SR, 0.1, &OnsetConfig::default()).unwrap();

        assert!(onsets.len() >= 2, "got {:?}", onsets);
        assert!(onsets[1] > 0.15 && onsets[1] < 0.26);
    }

    #[test]
    fn test_quiet_pulse_below_threshold() {
        let samples = pulse_signal(SR as usize, &[(1000, 2000)], 0.05);
        let onsets = detect_onsets(&samples, SR, 0.1, &OnsetConfig::default()).unwrap();
        assert!(onsets.is_empty());
    }

    #[test]
    fn test_signal_shorter_than_frame() {
        let samples = vec![0.5f32; 1000];
        let onsets = detect_onsets(&samples, SR, 0.1, &OnsetConfig::default()).unwrap();
        assert!(onsets.is_empty());

        let onsets = detect_onsets(&[], SR, 0.1, &OnsetConfig::default()).unwrap();
        assert!(onsets.is_empty());
    }

    #[test]
    fn test_click_pattern_spacing() {
        let samples = generate_click_pattern(4.0, 120.0, 150.0);
        let config = OnsetConfig::default();
        let onsets = detect_onsets(&samples, SR, 0.1, &config).unwrap();

        // 120 BPM over 4 seconds: 8 hits
        assert!(
            onsets.len() >= 6 && onsets.len() <= 10,
            "expected about 8 onsets, got {}",
            onsets.len()
        );
        assert_spacing(&onsets, config.min_onset_interval);
    }

    #[test]
    fn test_min_interval_suppresses_retrigger() {
        // Bursts every 20 ms over the whole second are closer than the 50 ms minimum interval
        let pulses: Vec<(usize, usize)> = (0..49).map(|i| (i * 882, i * 882 + 200)).collect();
        let samples = pulse_signal(SR as usize, &pulses, 0.9);
        let config = OnsetConfig {
            frame_size: 256,
            hop_size: 64,
            ..OnsetConfig::default()
        };
        let onsets = detect_onsets(&samples, SR, 0.05, &config).unwrap();

        // Retriggering resumes as soon as the interval has elapsed
        assert!(onsets.len() >= 10, "only {} onsets recorded", onsets.len());
        assert!(onsets.len() <= 20, "{} onsets recorded", onsets.len());
        assert_spacing(&onsets, config.min_onset_interval);
    }

    #[test]
    fn test_onset_times_are_hop_aligned() {
        let samples = pulse_signal(SR as usize, &[(20000, 24000)], 0.8);
        let config = OnsetConfig::default();
        let onsets = detect_onsets(&samples, SR, 0.1, &config).unwrap();

        assert!(!onsets.is_empty());
        for t in onsets {
            let start = (t * SR as f64).round() as usize;
            assert_eq!(start % config.hop_size, 0);
        }
    }

    #[test]
    fn test_invalid_parameters() {
        let samples = vec![0.5f32; SR as usize];
        let config = OnsetConfig::default();

        assert!(matches!(
            detect_onsets(&samples, 0, 0.1, &config),
            Err(RhythmError::InvalidInput(_))
        ));
        assert!(detect_onsets(&samples, SR, -0.1, &config).is_err());
        assert!(detect_onsets(&samples, SR, f32::NAN, &config).is_err());
        assert!(detect_onsets(&samples, SR, f32::INFINITY, &config).is_err());

        let bad = OnsetConfig {
            hop_size: 0,
            ..OnsetConfig::default()
        };
        assert!(matches!(
            detect_onsets(&samples, SR, 0.1, &bad),
            Err(RhythmError::InvalidConfig(_))
        ));
    }
}
