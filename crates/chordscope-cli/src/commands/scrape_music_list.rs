//! Scrape-music-list command: raw table dumps into the catalog document.

use std::path::Path;

use anyhow::Result;
use chordscope_core::{CatalogStore, DumpSource, ScoreSource};
use tracing::info;

pub fn run(data_dir: &Path, source: &Path, overwrite: bool) -> Result<()> {
    let mut source = DumpSource::new(source);
    let musics = source.music_list()?;
    info!(musics = musics.len(), "decoded music list");

    let store = CatalogStore::new(data_dir);
    store.save_catalog(&musics, overwrite)?;

    println!(
        "Saved {} musics to {}",
        musics.len(),
        store.catalog_path().display()
    );
    Ok(())
}
