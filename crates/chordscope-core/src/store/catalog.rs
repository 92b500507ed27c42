use std::fs;

use tracing::debug;

use crate::catalog::{Music, Score};
use crate::error::{Error, Result};
use crate::filter::ScoreFilter;
use crate::store::{CatalogStore, write_atomic};

impl CatalogStore {
    /// Serialize the full music list into the catalog document. Refuses to
    /// replace an existing document unless `overwrite` is set.
    pub fn save_catalog(&self, musics: &[Music], overwrite: bool) -> Result<()> {
        fs::create_dir_all(self.root())?;

        let path = self.catalog_path();
        if !overwrite && path.exists() {
            return Err(Error::AlreadyExists(path));
        }

        let json = serde_json::to_vec_pretty(musics)?;
        write_atomic(&path, &json, overwrite)?;
        debug!(path = %path.display(), musics = musics.len(), "saved catalog");
        Ok(())
    }

    /// Decode and validate the catalog document.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let path = self.catalog_path();
        let text = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound(path.clone())
            } else {
                Error::Io(e)
            }
        })?;

        let raw: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| Error::InvalidCatalogRecord(e.to_string()))?;
        let rows = raw
            .as_array()
            .ok_or_else(|| Error::InvalidCatalogRecord("document is not an array".to_string()))?;
        if let Some(bad) = rows.iter().find(|row| !row.is_object()) {
            return Err(Error::InvalidCatalogRecord(format!(
                "entry is not an object: {bad}"
            )));
        }

        let musics: Vec<Music> =
            serde_json::from_value(raw).map_err(|e| Error::InvalidCatalogRecord(e.to_string()))?;
        debug!(path = %path.display(), musics = musics.len(), "loaded catalog");
        Ok(Catalog { musics })
    }
}

/// An in-memory catalog snapshot. Filtering is lazy and forward-only; to
/// iterate again, call `filtered` again (or reload from the store).
#[derive(Debug, Clone)]
pub struct Catalog {
    musics: Vec<Music>,
}

impl Catalog {
    pub fn musics(&self) -> &[Music] {
        &self.musics
    }

    /// Stream `(music, score)` pairs surviving the filter, in catalog order:
    /// musics outer, their scores inner.
    pub fn filtered<'a>(
        &'a self,
        filter: &'a ScoreFilter,
    ) -> impl Iterator<Item = (&'a Music, &'a Score)> + 'a {
        self.musics
            .iter()
            .filter(move |music| filter.matches_music(music))
            .flat_map(move |music| {
                music
                    .scores
                    .iter()
                    .filter(move |score| filter.matches_score(score))
                    .map(move |score| (music, score))
            })
    }
}
