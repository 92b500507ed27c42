//! File-backed catalog and note storage.
//!
//! The whole catalog lives in one `musics.json` document; each captured
//! chart gets its own note file keyed by (mode, version, tag, difficulty).
//! Writes are refuse-on-exists (idempotency by refusal) and go through a
//! temp-file-then-rename so a partial file is never visible at the final
//! path.

mod catalog;
mod notes;

pub use catalog::Catalog;

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::catalog::{Difficulty, PlayMode, Version};
use crate::error::{Error, Result};

const CATALOG_FILE: &str = "musics.json";

#[derive(Debug, Clone)]
pub struct CatalogStore {
    root: PathBuf,
}

impl CatalogStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root.join(CATALOG_FILE)
    }

    fn notes_dir(&self, play_mode: PlayMode, version: &Version) -> PathBuf {
        self.root
            .join("notes")
            .join(play_mode.as_str())
            .join(version.to_string())
    }

    /// `<root>/notes/<mode>/<version>/<tag>(<difficulty>).json`
    pub fn notes_path(
        &self,
        play_mode: PlayMode,
        version: &Version,
        tag: &str,
        difficulty: Difficulty,
    ) -> PathBuf {
        self.notes_dir(play_mode, version)
            .join(format!("{tag}({difficulty}).json"))
    }
}

/// Write `bytes` to `path` atomically: temp file in the same directory,
/// flush and fsync, then rename. The temp file is cleaned up on every
/// failure path, leaving the destination untouched.
fn write_atomic(path: &Path, bytes: &[u8], overwrite: bool) -> Result<()> {
    let dir = path.parent().ok_or_else(|| {
        Error::Io(std::io::Error::other(format!(
            "no parent directory for {}",
            path.display()
        )))
    })?;

    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.flush()?;
    temp.as_file().sync_all()?;

    if overwrite {
        temp.persist(path).map_err(|e| Error::Io(e.error))?;
    } else {
        temp.persist_noclobber(path).map_err(|e| {
            if e.error.kind() == std::io::ErrorKind::AlreadyExists {
                Error::AlreadyExists(path.to_path_buf())
            } else {
                Error::Io(e.error)
            }
        })?;
    }
    Ok(())
}
