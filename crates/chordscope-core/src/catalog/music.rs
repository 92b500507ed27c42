use serde::{Deserialize, Serialize};

use crate::catalog::{Level, ScoreKind, Version};

/// One playable chart of a music, as stored in the catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub music_tag: String,
    pub kind: ScoreKind,
    pub level: Level,
    #[serde(rename = "has_URL")]
    pub has_url: bool,
}

/// A music piece with its charts. Built once from a catalog write and
/// read-only afterwards; scores are owned exclusively by their music.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Music {
    pub tag: String,
    pub version: Version,
    pub genre: String,
    pub artist: String,
    pub title: String,
    pub scores: Vec<Score>,
}
