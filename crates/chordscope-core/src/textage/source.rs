use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::catalog::{Music, Note};
use crate::error::{Error, Result};
use crate::textage::tables;
use crate::textage::url::ScorePageParams;

/// Opaque producer of the two wire shapes: the raw music tables and the raw
/// packed note integers of one score page.
pub trait ScoreSource {
    fn music_list(&mut self) -> Result<Vec<Music>>;
    fn score_page(&mut self, params: &ScorePageParams) -> Result<Vec<Note>>;
}

/// Reads previously captured raw dumps from a directory, laid out as
/// `actbl.json`, `titletbl.json`, and `score/<ver>/<tag>.<query>.json`.
///
/// This stands in for the live browser-driven fetcher, which produces the
/// same two shapes.
#[derive(Debug, Clone)]
pub struct DumpSource {
    dir: PathBuf,
}

impl DumpSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn score_page_path(&self, params: &ScorePageParams) -> PathBuf {
        self.dir.join("score").join(params.version_code()).join(format!(
            "{}.{}.json",
            params.music_tag,
            params.query_code()
        ))
    }

    fn read_json(&self, path: &Path) -> Result<JsonValue> {
        let text = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl ScoreSource for DumpSource {
    fn music_list(&mut self) -> Result<Vec<Music>> {
        let score_table = self.read_json(&self.dir.join("actbl.json"))?;
        let title_table = self.read_json(&self.dir.join("titletbl.json"))?;
        let musics = tables::build_musics(&score_table, &title_table)?;
        debug!(musics = musics.len(), "decoded music list dump");
        Ok(musics)
    }

    fn score_page(&mut self, params: &ScorePageParams) -> Result<Vec<Note>> {
        let path = self.score_page_path(params);
        let raw = self.read_json(&path)?;
        let entries = raw.as_array().ok_or_else(|| Error::InvalidNoteRecord {
            index: 0,
            value: "page dump is not an array".to_string(),
        })?;

        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                entry
                    .as_u64()
                    .ok_or(())
                    .and_then(|packed| Note::from_packed(packed).map_err(|_| ()))
                    .map_err(|_| Error::InvalidNoteRecord {
                        index,
                        value: entry.to_string(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Difficulty, Lane, Level, PlaySide, Version};
    use crate::textage::url::PageSide;

    fn page_params() -> ScorePageParams {
        ScorePageParams {
            version: Version::parse("11").unwrap(),
            music_tag: "aa_amuro".to_string(),
            play_side: PageSide::P1,
            difficulty: Difficulty::Another,
            level: Level::new(12).unwrap(),
        }
    }

    #[test]
    fn test_score_page_decodes_packed_dump() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = DumpSource::new(dir.path());

        let path = source.score_page_path(&page_params());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[1120, 1121, 1213]").unwrap();

        let notes = source.score_page(&page_params()).unwrap();
        assert_eq!(notes.len(), 3);
        assert_eq!(notes[0].side, PlaySide::P2);
        assert_eq!(notes[2].lane, Lane::Key3);
    }

    #[test]
    fn test_score_page_missing_dump_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = DumpSource::new(dir.path());
        assert!(matches!(
            source.score_page(&page_params()),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_score_page_rejects_packed_lane_digit() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = DumpSource::new(dir.path());

        let path = source.score_page_path(&page_params());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[1120, 1018]").unwrap();

        match source.score_page(&page_params()) {
            Err(Error::InvalidNoteRecord { index, value }) => {
                assert_eq!(index, 1);
                assert_eq!(value, "1018");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_score_page_rejects_bad_entry_with_index() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = DumpSource::new(dir.path());

        let path = source.score_page_path(&page_params());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"[1120, "x"]"#).unwrap();

        match source.score_page(&page_params()) {
            Err(Error::InvalidNoteRecord { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
