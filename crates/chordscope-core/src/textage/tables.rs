//! Decode of the raw music tables the remote source embeds in its pages.
//!
//! Two wire shapes arrive from the fetcher: the score table (per-tag rows of
//! option bitflags plus ten level/option column pairs) and the title table
//! (per-tag rows carrying the numeric version and the display strings). Both
//! are filtered down to in-arcade entries, imitating the source's own
//! current-version display logic.

use serde_json::Value as JsonValue;

use crate::catalog::{
    ArcadeVersion, Difficulty, Level, Music, PlayMode, Score, ScoreKind, Version,
};
use crate::error::{Error, Result};

/// Numeric version sentinel for CS-only musics.
const VERSION_CS: u64 = 0;
/// Numeric version sentinel for the substream release.
const VERSION_SUBSTREAM: u64 = 35;

const MUSIC_IN_ARCADE: u64 = 1;
const SCORE_HAS_URL: u64 = 1;
const SCORE_IN_ARCADE: u64 = 4;

/// Build the catalog from the two raw tables, keeping the score table's row
/// order. Rows and scores not flagged in-arcade are dropped.
pub fn build_musics(score_table: &JsonValue, title_table: &JsonValue) -> Result<Vec<Music>> {
    let score_rows = score_table
        .as_object()
        .ok_or_else(|| Error::InvalidCatalogRecord("score table is not an object".to_string()))?;
    let title_rows = title_table
        .as_object()
        .ok_or_else(|| Error::InvalidCatalogRecord("title table is not an object".to_string()))?;

    let mut musics = Vec::new();
    for (tag, row) in score_rows {
        let row = row_columns(tag, row, &[23, 24])?;
        if row_int(tag, row, 0)? & MUSIC_IN_ARCADE == 0 {
            continue;
        }

        let title_row = title_rows.get(tag).ok_or_else(|| {
            Error::InvalidCatalogRecord(format!("{tag}: missing from title table"))
        })?;
        let title_row = row_columns(tag, title_row, &[6, 7])?;

        let mut scores = Vec::new();
        for kind in ScoreKind::all() {
            let column = level_column(kind);
            let level = row_int(tag, row, column)?;
            let option = row_int(tag, row, column + 1)?;
            if level == 0 || option & SCORE_IN_ARCADE == 0 {
                continue;
            }
            let level = u8::try_from(level)
                .ok()
                .and_then(|l| Level::new(l).ok())
                .ok_or_else(|| {
                    Error::InvalidCatalogRecord(format!("{tag}: level {level} out of range"))
                })?;
            scores.push(Score {
                music_tag: tag.clone(),
                kind,
                level,
                has_url: option & SCORE_HAS_URL != 0,
            });
        }

        let italic_subtitle = optional_str(tag, row, 23)?;
        let subtitle = optional_str(tag, title_row, 6)?;
        let title = format!("{}{subtitle}{italic_subtitle}", row_str(tag, title_row, 5)?);

        musics.push(Music {
            tag: tag.clone(),
            version: decode_version(tag, row_int(tag, title_row, 0)?)?,
            genre: row_str(tag, title_row, 3)?.to_string(),
            artist: row_str(tag, title_row, 4)?.to_string(),
            title,
            scores,
        });
    }
    Ok(musics)
}

/// Column of the (level, option) pair for a score kind; the option sits one
/// column to the right.
fn level_column(kind: ScoreKind) -> usize {
    let mode_base = match kind.play_mode() {
        PlayMode::Sp => 3,
        PlayMode::Dp => 13,
    };
    let difficulty_offset = match kind.difficulty() {
        Difficulty::Beginner => 0,
        Difficulty::Normal => 2,
        Difficulty::Hyper => 4,
        Difficulty::Another => 6,
        Difficulty::Leggendaria => 8,
    };
    mode_base + difficulty_offset
}

fn decode_version(tag: &str, raw: u64) -> Result<Version> {
    match raw {
        VERSION_CS => Ok(Version::CsOnly),
        VERSION_SUBSTREAM => Ok(Version::Arcade(ArcadeVersion::Substream)),
        n => u32::try_from(n)
            .ok()
            .filter(|n| *n >= 1)
            .map(|n| Version::Arcade(ArcadeVersion::Numbered(n)))
            .ok_or_else(|| Error::InvalidCatalogRecord(format!("{tag}: bad version {raw}"))),
    }
}

fn row_columns<'a>(tag: &str, row: &'a JsonValue, lengths: &[usize]) -> Result<&'a [JsonValue]> {
    let columns = row.as_array().ok_or_else(|| {
        Error::InvalidCatalogRecord(format!("{tag}: row is not an array"))
    })?;
    if !lengths.contains(&columns.len()) {
        return Err(Error::InvalidCatalogRecord(format!(
            "{tag}: row has {} columns",
            columns.len()
        )));
    }
    Ok(columns)
}

fn row_int(tag: &str, row: &[JsonValue], index: usize) -> Result<u64> {
    row.get(index).and_then(JsonValue::as_u64).ok_or_else(|| {
        Error::InvalidCatalogRecord(format!("{tag}: column {index} is not an integer"))
    })
}

fn row_str<'a>(tag: &str, row: &'a [JsonValue], index: usize) -> Result<&'a str> {
    row.get(index).and_then(JsonValue::as_str).ok_or_else(|| {
        Error::InvalidCatalogRecord(format!("{tag}: column {index} is not a string"))
    })
}

fn optional_str<'a>(tag: &str, row: &'a [JsonValue], index: usize) -> Result<&'a str> {
    match row.get(index) {
        None => Ok(""),
        Some(value) => value.as_str().ok_or_else(|| {
            Error::InvalidCatalogRecord(format!("{tag}: column {index} is not a string"))
        }),
    }
}
