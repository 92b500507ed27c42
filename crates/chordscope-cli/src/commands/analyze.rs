//! Analyze command: chord histogram over the captured charts matching the
//! filter.

use std::path::Path;

use anyhow::Result;
use chordscope_core::{CatalogStore, ChordHistogram};
use tracing::debug;

use super::build_filter;

#[allow(clippy::too_many_arguments)]
pub fn run(
    data_dir: &Path,
    mode: &str,
    ver: &str,
    tag: Option<&str>,
    diff: &str,
    lv: &str,
    show_all: bool,
    list: bool,
) -> Result<()> {
    let filter = build_filter(mode, ver, tag, diff, lv)?;
    let store = CatalogStore::new(data_dir);
    let catalog = store.load_catalog()?;

    let mut histogram = ChordHistogram::new();
    let mut charts = Vec::new();
    for (music, score) in catalog.filtered(&filter) {
        if !store.has_saved_notes(music, score) {
            debug!(tag = %music.tag, kind = %score.kind, "not captured, skipping");
            continue;
        }
        let notes = store.load_notes(music, score)?;
        histogram.add_chart(&notes);
        charts.push((music, score));
    }

    println!("Found {} scores.", charts.len());
    if list {
        for (music, score) in &charts {
            println!(
                "{} {} \u{2606}{} {}",
                music.version, score.kind, score.level, music.title
            );
        }
    }

    for (chord, count) in histogram.rows(show_all) {
        if count == 0 {
            println!("{chord}:");
        } else {
            println!("{chord}:{count}");
        }
    }
    Ok(())
}
