//! Audio decoding using Symphonia
//!
//! Decodes the first audio track of any supported container into a mono
//! `AudioSignal`. Corrupt packets are skipped with a warning.

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use super::signal::AudioSignal;
use crate::error::RhythmError;
use crate::preprocessing::channel_mixer::{downmix_interleaved, ChannelMixMode};

fn decoding_error(context: &str, err: SymphoniaError) -> RhythmError {
    RhythmError::DecodingError(format!("{}: {}", context, err))
}

/// Decode an audio file to mono by averaging its channels
///
/// # Errors
///
/// Returns `RhythmError::DecodingError` if the file cannot be opened, has no
/// decodable audio track, or fails mid-stream
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<AudioSignal, RhythmError> {
    decode_file_with(path, ChannelMixMode::Average)
}

/// Decode an audio file to mono using the given channel mix
pub fn decode_file_with<P: AsRef<Path>>(
    path: P,
    mix: ChannelMixMode,
) -> Result<AudioSignal, RhythmError> {
    let path = path.as_ref();
    log::debug!("Decoding audio file: {}", path.display());

    let file = File::open(path).map_err(|e| {
        RhythmError::DecodingError(format!("Failed to open {}: {}", path.display(), e))
    })?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| decoding_error("Unrecognized format", e))?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| RhythmError::DecodingError("No supported audio tracks found".to_string()))?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| RhythmError::DecodingError("Track has no sample rate".to_string()))?;
    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| decoding_error("Unsupported codec", e))?;

    let mut interleaved: Vec<f32> = Vec::new();
    let mut channels = 0usize;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(decoding_error("Failed to read packet", e)),
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                let spec = *decoded.spec();
                channels = spec.channels.count();

                let mut buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
                buf.copy_interleaved_ref(decoded);
                interleaved.extend_from_slice(buf.samples());
            }
            Err(SymphoniaError::DecodeError(msg)) => {
                log::warn!("Skipping corrupt packet: {}", msg);
                continue;
            }
            Err(e) => return Err(decoding_error("Decode failed", e)),
        }
    }

    let mono = if channels == 0 {
        Vec::new()
    } else {
        downmix_interleaved(&interleaved, channels, mix)?
    };

    log::debug!(
        "Decoded {} mono samples at {} Hz from {} channels",
        mono.len(),
        sample_rate,
        channels
    );

    AudioSignal::new(mono, sample_rate)
}
