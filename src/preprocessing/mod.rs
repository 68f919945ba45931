//! Signal preparation utilities
//!
//! - Overlapping frame iteration and RMS energy
//! - Channel mixing (multi-channel to mono)

pub mod channel_mixer;
pub mod framing;
