//! Channel mixing utilities (multi-channel to mono conversion)

use crate::error::RhythmError;

/// Channel mixing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelMixMode {
    /// Average of all channels
    #[default]
    Average,
    /// Keep only the first channel
    First,
}

/// Convert interleaved multi-channel samples to mono
///
/// # Arguments
///
/// * `samples` - Interleaved samples (`L R L R ...` for stereo)
/// * `channels` - Number of interleaved channels (> 0)
/// * `mode` - Mixing mode
///
/// # Errors
///
/// Returns `RhythmError::InvalidInput` if `channels` is zero or the sample
/// count is not a multiple of `channels`.
pub fn downmix_interleaved(
    samples: &[f32],
    channels: usize,
    mode: ChannelMixMode,
) -> Result<Vec<f32>, RhythmError> {
    if channels == 0 {
        return Err(RhythmError::InvalidInput(
            "Channel count must be > 0".to_string(),
        ));
    }

    if samples.len() % channels != 0 {
        return Err(RhythmError::InvalidInput(format!(
            "Sample count {} is not a multiple of channel count {}",
            samples.len(),
            channels
        )));
    }

    if channels == 1 {
        return Ok(samples.to_vec());
    }

    log::debug!(
        "Downmixing {} frames of {} channels using {:?}",
        samples.len() / channels,
        channels,
        mode
    );

    let mono = match mode {
        ChannelMixMode::Average => samples
            .chunks_exact(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect(),
        ChannelMixMode::First => samples.iter().step_by(channels).copied().collect(),
    };

    Ok(mono)
}
