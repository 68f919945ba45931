//! Example: Convert rhythmic syllable text into notes
//!
//! Usage:
//!   cargo run --example text_to_notes -- "トゥー ダ タッタ"

use mora_rhythm::{group_into_measures, text_to_notes, NoteValue, RhythmConfig, TimeSignature};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ドゥン ドゥン タッタ  ドゥーン".to_string());

    let notes = text_to_notes(&text, &RhythmConfig::default())?;
    let measures = group_into_measures(&notes, TimeSignature::default())?;

    println!("Input: {:?}", text);
    for (index, measure) in measures.iter().enumerate() {
        println!("Measure {}:", index + 1);
        for note in &measure.notes {
            let value = match NoteValue::from_beats(note.duration_beats) {
                Some(v) if v.dotted => format!("dotted {:?}", v.kind),
                Some(v) => format!("{:?}", v.kind),
                None => "tied".to_string(),
            };
            println!(
                "  {:>5.2} +{:<5.2} {:<4} {}",
                note.start_beat,
                note.duration_beats,
                if note.is_rest { "rest" } else { "note" },
                value
            );
        }
    }

    Ok(())
}
