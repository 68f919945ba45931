//! Example: Transcribe the rhythm of a single audio file
//!
//! Usage:
//!   cargo run --example transcribe_file -- <file> [bpm]

use mora_rhythm::features::onset::{calculate_dynamic_threshold, detect_onsets};
use mora_rhythm::quantization::convert_onsets;
use mora_rhythm::{decode_file, RhythmConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().ok_or("Usage: transcribe_file <file> [bpm]")?;
    let bpm: f64 = match args.next() {
        Some(v) => v.parse()?,
        None => 120.0,
    };

    let config = RhythmConfig::default();
    let signal = decode_file(&path)?;

    let threshold =
        calculate_dynamic_threshold(signal.samples(), signal.sample_rate(), &config.onset)?;
    if threshold <= 0.0 {
        println!("{}: silent, no onsets", path);
        return Ok(());
    }

    let onsets = detect_onsets(signal.samples(), signal.sample_rate(), threshold, &config.onset)?;
    let notes = convert_onsets(&onsets, bpm, &config.grid)?;

    println!(
        "{}: {:.2} s, threshold {:.4}, {} onsets at {} BPM",
        path,
        signal.duration_seconds(),
        threshold,
        onsets.len(),
        bpm
    );
    for (onset, note) in onsets.iter().zip(&notes) {
        println!(
            "  {:>7.3} s -> beat {:>6.2} (+{:.2})",
            onset, note.start_beat, note.duration_beats
        );
    }

    Ok(())
}
