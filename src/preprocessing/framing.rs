//! Overlapping analysis frames
//!
//! Frames of `frame_size` samples start every `hop_size` samples. Only full
//! frames are produced: a trailing frame that would read past the end of the
//! buffer is skipped, so a signal shorter than one frame yields no frames.

/// Iterator over `(start_sample, frame)` pairs
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    samples: &'a [f32],
    frame_size: usize,
    hop_size: usize,
    position: usize,
}

impl<'a> Iterator for Frames<'a> {
    type Item = (usize, &'a [f32]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.frame_size == 0 || self.hop_size == 0 {
            return None;
        }

        let end = self.position.checked_add(self.frame_size)?;
        if end > self.samples.len() {
            return None;
        }

        let start = self.position;
        self.position += self.hop_size;
        Some((start, &self.samples[start..end]))
    }
}

/// Iterate over the full overlapping frames of `samples`
///
/// A zero `frame_size` or `hop_size` yields no frames.
///
/// # Example
///
/// ```
/// use mora_rhythm::preprocessing::framing::frames;
///
/// let samples = vec![0.0f32; 10];
/// let starts: Vec<usize> = frames(&samples, 4, 2).map(|(start, _)| start).collect();
/// assert_eq!(starts, vec![0, 2, 4, 6]);
/// ```
pub fn frames(samples: &[f32], frame_size: usize, hop_size: usize) -> Frames<'_> {
    Frames {
        samples,
        frame_size,
        hop_size,
        position: 0,
    }
}

/// Number of full frames `frames` will produce
pub fn frame_count(num_samples: usize, frame_size: usize, hop_size: usize) -> usize {
    if frame_size == 0 || hop_size == 0 || num_samples < frame_size {
        return 0;
    }
    (num_samples - frame_size) / hop_size + 1
}

/// Root-mean-square energy: sqrt(mean(x^2)); 0 for an empty frame
pub fn rms(frame: &[f32]) -> f32 {
    if frame.is_empty() {
        return 0.0;
    }
    let sum_sq: f32 = frame.iter().map(|&x| x * x).sum();
    (sum_sq / frame.len() as f32).sqrt()
}
