//! Feature extraction modules
//!
//! - Onset detection (RMS energy + dynamic threshold)

pub mod onset;
