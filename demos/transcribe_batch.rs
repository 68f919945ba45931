//! Example: Transcribe multiple audio files in parallel
//!
//! Usage:
//!   cargo run --release --example transcribe_batch -- [--jobs N] [--bpm BPM] <file1> <file2> ...
//!
//! Parallelism is across files; each transcription is single-threaded.

use rayon::prelude::*;
use mora_rhythm::{audio_to_notes, decode_file, RhythmConfig, RhythmError};
use std::env;
use std::time::Instant;

fn default_jobs() -> usize {
    let n = std::thread::available_parallelism().map(|v| v.get()).unwrap_or(1);
    std::cmp::max(1, n.saturating_sub(1))
}

fn transcribe(path: &str, bpm: f64, config: &RhythmConfig) -> Result<(usize, f64), RhythmError> {
    let signal = decode_file(path)?;
    let notes = audio_to_notes(&signal, bpm, config)?;
    let beats = notes.last().map(|n| n.end_beat()).unwrap_or(0.0);
    Ok((notes.len(), beats))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let mut jobs: Option<usize> = None;
    let mut bpm = 120.0;
    let mut paths: Vec<String> = Vec::new();

    while !args.is_empty() {
        let a = args.remove(0);
        match a.as_str() {
            "--jobs" => {
                let v = args.first().ok_or("--jobs requires a value")?.parse::<usize>()?;
                args.remove(0);
                jobs = Some(std::cmp::max(1, v));
            }
            "--bpm" => {
                bpm = args.first().ok_or("--bpm requires a value")?.parse::<f64>()?;
                args.remove(0);
            }
            "--help" | "-h" => {
                eprintln!("Usage: transcribe_batch [--jobs N] [--bpm BPM] <file1> <file2> ...");
                return Ok(());
            }
            _ => paths.push(a),
        }
    }

    if paths.is_empty() {
        eprintln!("ERROR: Provide at least one audio file path. Use --help for usage.");
        std::process::exit(2);
    }

    let jobs = jobs.unwrap_or_else(default_jobs);
    eprintln!("Batch: {} files, jobs={}, bpm={}", paths.len(), jobs, bpm);

    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;
    let config = RhythmConfig::default();
    let start = Instant::now();

    let results: Vec<(String, Result<(usize, f64), RhythmError>)> = pool.install(|| {
        paths
            .par_iter()
            .map(|p| (p.clone(), transcribe(p, bpm, &config)))
            .collect()
    });

    for (path, result) in results {
        match result {
            Ok((count, beats)) => println!("{}: {} notes over {:.2} beats", path, count, beats),
            Err(e) => println!("{}: ERROR {}", path, e),
        }
    }

    eprintln!("Done in {:.2} s", start.elapsed().as_secs_f32());
    Ok(())
}
