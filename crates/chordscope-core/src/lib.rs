pub mod analysis;
pub mod catalog;
pub mod cooldown;
pub mod error;
pub mod filter;
pub mod store;
pub mod textage;

pub use analysis::{all_chord_patterns, decompose, ChordHistogram};
pub use catalog::{
    ArcadeVersion, Chord, Difficulty, Lane, Level, Music, Note, PlayMode, PlaySide, Score,
    ScoreKind, Version,
};
pub use cooldown::Cooldown;
pub use error::{Error, Result};
pub use filter::{LevelFilter, ScoreFilter, VersionFilter};
pub use store::{Catalog, CatalogStore};
pub use textage::{DumpSource, ScorePageParams, ScoreSource};
