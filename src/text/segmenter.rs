//! Mora segmentation of rhythmic syllable text
//!
//! Scans the input left to right, grouping characters into segments:
//! - runs of ASCII spaces become one rest segment
//! - a kana starts a new sound segment, absorbing any following small kana,
//!   long-vowel marks (ー) and syllabic nasals (ン/ん)
//! - the geminate mark (ッ/っ) also absorbs the character right after it
//!
//! The scan is an explicit state machine: `ScanState::step` consumes one
//! character and returns the next state plus any segment it completed.
//!
//! # Example
//!
//! ```
//! use mora_rhythm::text::segment;
//!
//! let segments = segment("トゥー ダッタ");
//! assert_eq!(segments.len(), 3);
//! assert_eq!(segments[0].text, "トゥー");
//! assert!(segments[1].is_rest);
//! assert_eq!(segments[2].character_count, 3);
//! ```

use serde::{Deserialize, Serialize};

/// Character that separates sounds and stands for one unit of rest
const REST_CHAR: char = ' ';

/// Small kana merged into the preceding sound (katakana and hiragana)
const SMALL_KANA: [char; 24] = [
    'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ', 'ヮ', 'ッ', 'ヵ', 'ヶ',
    'ぁ', 'ぃ', 'ぅ', 'ぇ', 'ぉ', 'ゃ', 'ゅ', 'ょ', 'ゎ', 'っ', 'ゕ', 'ゖ',
];

/// Marks that extend the current sound: long vowel and syllabic nasal
const CONTINUATION_CHARS: [char; 3] = ['ー', 'ン', 'ん'];

/// Geminate marks; the character after one is always merged
const GEMINATE_MARKS: [char; 2] = ['ッ', 'っ'];

/// A run of characters forming one rhythmic unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// The characters of this segment, exactly as they appeared in the input
    pub text: String,

    /// Number of characters (not bytes), always >= 1
    pub character_count: usize,

    /// True if the segment consists only of spaces
    pub is_rest: bool,
}

/// Whether the scan buffer currently holds a rest or a sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Buffer holds only spaces
    #[default]
    Rest,
    /// Buffer holds a sound
    Sound,
}

/// Segmenter state carried from one character to the next
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Mode of the buffered segment
    pub mode: ScanMode,

    /// Characters accumulated for the segment in progress
    pub buffer: String,

    /// Number of characters in `buffer`
    pub char_count: usize,

    /// Set after a geminate mark: the next sound character merges
    pub force_merge_next: bool,
}

fn is_continuation_char(ch: char) -> bool {
    SMALL_KANA.contains(&ch) || CONTINUATION_CHARS.contains(&ch)
}

fn is_geminate(ch: char) -> bool {
    GEMINATE_MARKS.contains(&ch)
}

impl ScanState {
    /// State with `ch` as the only buffered character
    fn starting_with(ch: char, mode: ScanMode) -> Self {
        Self {
            mode,
            buffer: ch.to_string(),
            char_count: 1,
            force_merge_next: mode == ScanMode::Sound && is_geminate(ch),
        }
    }

    fn push(mut self, ch: char) -> Self {
        self.buffer.push(ch);
        self.char_count += 1;
        self.force_merge_next = self.mode == ScanMode::Sound && is_geminate(ch);
        self
    }

    /// Consume one character
    ///
    /// Returns the next state and, if the character closed the buffered
    /// segment, that finished segment.
    pub fn step(self, ch: char) -> (ScanState, Option<Segment>) {
        let next_mode = if ch == REST_CHAR {
            ScanMode::Rest
        } else {
            ScanMode::Sound
        };

        if self.buffer.is_empty() {
            return (Self::starting_with(ch, next_mode), None);
        }

        let merge = match (self.mode, next_mode) {
            (ScanMode::Rest, ScanMode::Rest) => true,
            (ScanMode::Sound, ScanMode::Sound) => {
                self.force_merge_next || is_continuation_char(ch)
            }
            _ => false,
        };

        if merge {
            (self.push(ch), None)
        } else {
            let finished = self.finish();
            (Self::starting_with(ch, next_mode), finished)
        }
    }

    /// Flush the buffered segment, if any
    pub fn finish(self) -> Option<Segment> {
        if self.buffer.is_empty() {
            return None;
        }

        Some(Segment {
            text: self.buffer,
            character_count: self.char_count,
            is_rest: self.mode == ScanMode::Rest,
        })
    }
}

/// Split rhythmic syllable text into ordered sound/rest segments
///
/// Any string is accepted; an empty string yields no segments. Concatenating
/// the `text` of the result reproduces the input exactly.
pub fn segment(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut state = ScanState::default();

    for ch in text.chars() {
        let (next, finished) = state.step(ch);
        if let Some(seg) = finished {
            segments.push(seg);
        }
        state = next;
    }

    if let Some(seg) = state.finish() {
        segments.push(seg);
    }

    log::debug!(
        "Segmented {} chars into {} segments",
        text.chars().count(),
        segments.len()
    );

    segments
}
