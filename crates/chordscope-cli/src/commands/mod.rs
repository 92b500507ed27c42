pub mod analyze;
pub mod scrape_music_list;
pub mod scrape_score;

use anyhow::Result;
use chordscope_core::filter::{parse_difficulty_filter, parse_play_mode_filter};
use chordscope_core::{LevelFilter, ScoreFilter, VersionFilter};

/// Assemble a score filter from the raw option strings shared by the
/// scrape-score and analyze commands.
fn build_filter(
    mode: &str,
    ver: &str,
    tag: Option<&str>,
    diff: &str,
    lv: &str,
) -> Result<ScoreFilter> {
    Ok(ScoreFilter {
        has_url: None,
        play_mode: parse_play_mode_filter(mode)?,
        version: VersionFilter::parse(ver)?,
        music_tag: tag.map(str::to_string),
        difficulty: parse_difficulty_filter(diff)?,
        level: LevelFilter::parse(lv)?,
    })
}
