//! Domain model: versions, score kinds, musics, notes, and chords.

mod chord;
mod kind;
mod music;
mod note;
mod version;

pub use chord::Chord;
pub use kind::{Difficulty, Level, PlayMode, ScoreKind};
pub use music::{Music, Score};
pub use note::{Lane, Note, PlaySide};
pub use version::{ArcadeVersion, Version};
