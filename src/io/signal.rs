//! Decoded mono audio

use crate::error::RhythmError;

/// A fully materialized mono signal with its sample rate
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSignal {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl AudioSignal {
    /// Wrap mono samples recorded at `sample_rate` Hz
    ///
    /// # Errors
    ///
    /// Returns `RhythmError::InvalidInput` if `sample_rate` is zero
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self, RhythmError> {
        if sample_rate == 0 {
            return Err(RhythmError::InvalidInput(
                "Sample rate must be > 0".to_string(),
            ));
        }

        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Mono samples
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Length in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// True if there are no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
