//! Shared rhythm data model
//!
//! Both pipelines terminate in the same output type:
//! - `Note`: a timed note or rest in quarter-note beats
//! - `Measure` / `TimeSignature`: notes grouped into bars
//! - `NoteValue`: notation-level classification of a duration

pub mod duration;
pub mod measure;
pub mod note;

pub use duration::{NoteKind, NoteValue};
pub use measure::{group_into_measures, Measure, TimeSignature};
pub use note::Note;
