//! Configuration parameters for rhythm transcription
//!
//! Every tunable constant used by the onset detector and the quantizers lives
//! here with its documented default, so alternate tunings can be tried
//! without touching the algorithms.

use crate::error::RhythmError;
use crate::quantization::grid::RoundingMode;

/// Onset detection parameters
#[derive(Debug, Clone, PartialEq)]
pub struct OnsetConfig {
    /// Analysis frame length in samples (default: 2048)
    pub frame_size: usize,

    /// Hop between consecutive frame starts in samples (default: 512)
    /// Must be smaller than `frame_size` so frames overlap
    pub hop_size: usize,

    /// Minimum spacing between recorded onsets in seconds (default: 0.05)
    pub min_onset_interval: f64,

    /// Factor applied to the current frame's RMS to obtain the "previous
    /// energy" used by the next frame (default: 0.9)
    ///
    /// This scales the current value instead of blending with history; it is
    /// not an exponential moving average.
    pub energy_decay: f32,

    /// Fraction of the peak frame RMS used as the suggested threshold
    /// (default: 0.3, chosen empirically)
    pub threshold_fraction: f32,
}

impl Default for OnsetConfig {
    fn default() -> Self {
        Self {
            frame_size: 2048,
            hop_size: 512,
            min_onset_interval: 0.05,
            energy_decay: 0.9,
            threshold_fraction: 0.3,
        }
    }
}

impl OnsetConfig {
    /// Check that every parameter is inside its valid range
    pub fn validate(&self) -> Result<(), RhythmError> {
        if self.frame_size == 0 {
            return Err(RhythmError::InvalidConfig(
                "Frame size must be > 0".to_string(),
            ));
        }

        if self.hop_size == 0 {
            return Err(RhythmError::InvalidConfig(
                "Hop size must be > 0".to_string(),
            ));
        }

        if self.hop_size >= self.frame_size {
            return Err(RhythmError::InvalidConfig(format!(
                "Hop size ({}) must be smaller than frame size ({})",
                self.hop_size, self.frame_size
            )));
        }

        if !self.min_onset_interval.is_finite() || self.min_onset_interval < 0.0 {
            return Err(RhythmError::InvalidConfig(format!(
                "Minimum onset interval must be finite and >= 0, got {}",
                self.min_onset_interval
            )));
        }

        if !(0.0..=1.0).contains(&self.energy_decay) {
            return Err(RhythmError::InvalidConfig(format!(
                "Energy decay must be in [0.0, 1.0], got {}",
                self.energy_decay
            )));
        }

        if !self.threshold_fraction.is_finite() || self.threshold_fraction < 0.0 {
            return Err(RhythmError::InvalidConfig(format!(
                "Threshold fraction must be finite and >= 0, got {}",
                self.threshold_fraction
            )));
        }

        Ok(())
    }
}

/// Beat grid parameters shared by both quantizers
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Grid unit in beats; also the duration of one text character
    /// (default: 0.25, a sixteenth note)
    pub unit_beats: f64,

    /// Duration given to the last audio onset, which has no successor
    /// (default: 0.5 seconds)
    pub final_note_seconds: f64,

    /// Tie-breaking rule for values exactly between two grid lines
    /// (default: `RoundingMode::HalfUp`)
    pub rounding: RoundingMode,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            unit_beats: 0.25,
            final_note_seconds: 0.5,
            rounding: RoundingMode::HalfUp,
        }
    }
}

impl GridConfig {
    /// Check that every parameter is inside its valid range
    pub fn validate(&self) -> Result<(), RhythmError> {
        if !self.unit_beats.is_finite() || self.unit_beats <= 0.0 {
            return Err(RhythmError::InvalidConfig(format!(
                "Grid unit must be finite and > 0, got {}",
                self.unit_beats
            )));
        }

        if !self.final_note_seconds.is_finite() || self.final_note_seconds < 0.0 {
            return Err(RhythmError::InvalidConfig(format!(
                "Final note duration must be finite and >= 0, got {}",
                self.final_note_seconds
            )));
        }

        Ok(())
    }
}

/// Complete configuration for both transcription pipelines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RhythmConfig {
    /// Onset detection tuning
    pub onset: OnsetConfig,

    /// Beat grid tuning
    pub grid: GridConfig,
}

impl RhythmConfig {
    /// Validate both sub-configurations
    pub fn validate(&self) -> Result<(), RhythmError> {
        self.onset.validate()?;
        self.grid.validate()
    }
}
