//! Scrape-score command: capture note data for every matching chart that
//! has not been captured yet.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use chordscope_core::{CatalogStore, Cooldown, DumpSource, ScorePageParams, ScoreSource};
use tracing::{debug, info};

use super::build_filter;

const FETCH_INTERVAL: Duration = Duration::from_secs(1);

pub fn run(
    data_dir: &Path,
    source: &Path,
    mode: &str,
    ver: &str,
    tag: Option<&str>,
    diff: &str,
) -> Result<()> {
    let mut filter = build_filter(mode, ver, tag, diff, "")?;
    // Only charts the remote source actually serves a page for.
    filter.has_url = Some(true);

    let store = CatalogStore::new(data_dir);
    let catalog = store.load_catalog()?;
    let mut source = DumpSource::new(source);

    let mut gate = Cooldown::new(FETCH_INTERVAL)
        .on_wait_begin(|| debug!("waiting out the fetch interval"))
        .on_wait_end(|| debug!("fetch interval elapsed"));

    let mut saved = 0u64;
    let mut skipped = 0u64;
    for (music, score) in catalog.filtered(&filter) {
        if store.has_saved_notes(music, score) {
            skipped += 1;
            continue;
        }

        let params = ScorePageParams::from_score(music, score);
        info!(tag = %music.tag, kind = %score.kind, "fetching score page");
        let mut notes = gate.run(|| source.score_page(&params))?;
        notes.sort();
        store.save_notes(music, score, &notes)?;
        saved += 1;
    }

    println!("Saved {saved} charts ({skipped} already captured).");
    Ok(())
}
