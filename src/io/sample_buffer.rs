//! Accumulation of captured audio chunks

use super::signal::AudioSignal;
use crate::error::RhythmError;

/// Collects mono chunks as a recorder delivers them
///
/// Consumed by `finish` once capture has stopped, so a half-filled buffer
/// can never reach the detectors.
#[derive(Debug)]
pub struct CaptureBuffer {
    /// Captured samples
    data: Vec<f32>,
    /// Sample rate of every pushed chunk
    sample_rate: u32,
    /// Number of chunks pushed
    chunks: usize,
}

impl CaptureBuffer {
    /// Create a buffer for audio at `sample_rate` Hz
    pub fn new(sample_rate: u32) -> Self {
        Self::with_capacity(sample_rate, 0)
    }

    /// Create a buffer with room for `capacity` samples
    pub fn with_capacity(sample_rate: u32, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            sample_rate,
            chunks: 0,
        }
    }

    /// Append a chunk of mono samples
    pub fn push(&mut self, samples: &[f32]) {
        self.data.extend_from_slice(samples);
        self.chunks += 1;
    }

    /// Number of samples captured so far
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if nothing has been captured
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Finish capture and produce the signal
    ///
    /// # Errors
    ///
    /// Returns `RhythmError::InvalidInput` if the sample rate is zero
    pub fn finish(self) -> Result<AudioSignal, RhythmError> {
        log::debug!(
            "Capture finished: {} samples in {} chunks at {} Hz",
            self.data.len(),
            self.chunks,
            self.sample_rate
        );
        AudioSignal::new(self.data, self.sample_rate)
    }
}
