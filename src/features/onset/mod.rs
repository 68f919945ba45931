//! Onset detection
//!
//! Short-term RMS energy detection with a signal-derived threshold:
//! - `calculate_dynamic_threshold`: suggest a threshold from the peak frame energy
//! - `detect_onsets`: find onset times against that threshold

pub mod energy;
pub mod threshold;

pub use energy::detect_onsets;
pub use threshold::calculate_dynamic_threshold;
