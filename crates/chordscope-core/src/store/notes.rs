use std::fs;
use std::path::PathBuf;

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::catalog::{Lane, Music, Note, PlaySide, Score};
use crate::error::{Error, Result};
use crate::store::{CatalogStore, write_atomic};

impl CatalogStore {
    fn notes_path_for(&self, music: &Music, score: &Score) -> PathBuf {
        self.notes_path(
            score.kind.play_mode(),
            &music.version,
            &music.tag,
            score.kind.difficulty(),
        )
    }

    /// File presence is the sole signal that a chart has been captured.
    pub fn has_saved_notes(&self, music: &Music, score: &Score) -> bool {
        self.notes_path_for(music, score).exists()
    }

    /// Persist a captured chart. A chart is written exactly once; an
    /// existing file is never overwritten.
    pub fn save_notes(&self, music: &Music, score: &Score, notes: &[Note]) -> Result<()> {
        let path = self.notes_path_for(music, score);
        let dir = self.notes_dir(score.kind.play_mode(), &music.version);
        fs::create_dir_all(&dir)?;

        if path.exists() {
            return Err(Error::AlreadyExists(path));
        }

        let json = serde_json::to_vec(notes)?;
        write_atomic(&path, &json, false)?;
        debug!(path = %path.display(), notes = notes.len(), "saved notes");
        Ok(())
    }

    /// Read and validate a captured chart. Accepts both wire shapes per
    /// entry: the structured `[timing, side, symbol]` triple and the raw
    /// packed integer the fetcher returns.
    pub fn load_notes(&self, music: &Music, score: &Score) -> Result<Vec<Note>> {
        let path = self.notes_path_for(music, score);
        let text = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound(path.clone())
            } else {
                Error::Io(e)
            }
        })?;

        let entries: Vec<JsonValue> = serde_json::from_str(&text)?;
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| decode_note(index, entry))
            .collect()
    }
}

fn decode_note(index: usize, entry: &JsonValue) -> Result<Note> {
    let invalid = || Error::InvalidNoteRecord {
        index,
        value: entry.to_string(),
    };

    if let Some(packed) = entry.as_u64() {
        return Note::from_packed(packed).map_err(|_| invalid());
    }

    let parts = entry.as_array().ok_or_else(invalid)?;
    let [timing, side, lane] = parts.as_slice() else {
        return Err(invalid());
    };
    let timing = timing.as_u64().ok_or_else(invalid)?;
    let side = side
        .as_u64()
        .and_then(|v| u8::try_from(v).ok())
        .and_then(PlaySide::from_u8)
        .ok_or_else(invalid)?;
    let lane = lane
        .as_str()
        .and_then(Lane::from_symbol)
        .ok_or_else(invalid)?;
    Ok(Note::new(timing, side, lane))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_note_triple() {
        let entry: JsonValue = serde_json::from_str(r#"[11, 2, "S"]"#).unwrap();
        let note = decode_note(0, &entry).unwrap();
        assert_eq!(note, Note::new(11, PlaySide::P2, Lane::Scratch));
    }

    #[test]
    fn test_decode_note_packed() {
        let entry: JsonValue = serde_json::from_str("1213").unwrap();
        let note = decode_note(0, &entry).unwrap();
        assert_eq!(note, Note::new(12, PlaySide::P1, Lane::Key3));
    }

    #[test]
    fn test_decode_note_rejects_bad_entries() {
        for raw in [
            r#"[11, 2]"#,          // wrong field count
            r#"[11, 3, "S"]"#,     // bad side
            r#"[11, 2, "8"]"#,     // unknown lane
            r#"["11", 2, "S"]"#,   // timing not an int
            r#"{"timing": 11}"#,   // wrong shape
            "1030",                // packed with side digit 3
            "1018",                // packed with lane digit 8
            "1029",                // packed with lane digit 9
        ] {
            let entry: JsonValue = serde_json::from_str(raw).unwrap();
            let err = decode_note(7, &entry).unwrap_err();
            match err {
                Error::InvalidNoteRecord { index, .. } => assert_eq!(index, 7),
                other => panic!("unexpected error for {raw}: {other}"),
            }
        }
    }
}
