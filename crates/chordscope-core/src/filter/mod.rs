//! Composable multi-dimensional filters over the score catalog.

mod level;
mod version;

pub use level::LevelFilter;
pub use version::VersionFilter;

use std::str::FromStr;

use crate::catalog::{Difficulty, Music, PlayMode, Score};
use crate::error::{Error, Result};

/// Parse a play-mode dimension: empty means "any".
pub fn parse_play_mode_filter(s: &str) -> Result<Option<PlayMode>> {
    if s.is_empty() {
        return Ok(None);
    }
    PlayMode::from_str(s)
        .map(Some)
        .map_err(|_| Error::MalformedFilter(s.to_string()))
}

/// Parse a difficulty dimension: empty means "any".
pub fn parse_difficulty_filter(s: &str) -> Result<Option<Difficulty>> {
    if s.is_empty() {
        return Ok(None);
    }
    Difficulty::from_str(s)
        .map(Some)
        .map_err(|_| Error::MalformedFilter(s.to_string()))
}

/// Conjunction of all filter dimensions. The default matches everything.
///
/// Version and music tag apply to a `Music`; has-URL, play mode, difficulty,
/// and level apply to each of its `Score`s individually.
#[derive(Debug, Clone, Default)]
pub struct ScoreFilter {
    pub has_url: Option<bool>,
    pub play_mode: Option<PlayMode>,
    pub version: VersionFilter,
    pub music_tag: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub level: LevelFilter,
}

impl ScoreFilter {
    pub fn matches_music(&self, music: &Music) -> bool {
        self.version.matches(&music.version)
            && self.music_tag.as_ref().is_none_or(|tag| music.tag == *tag)
    }

    pub fn matches_score(&self, score: &Score) -> bool {
        self.has_url.is_none_or(|has_url| score.has_url == has_url)
            && self
                .play_mode
                .is_none_or(|mode| score.kind.play_mode() == mode)
            && self
                .difficulty
                .is_none_or(|diff| score.kind.difficulty() == diff)
            && self.level.matches(score.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Level, Version};

    fn score(kind: &str, level: u8, has_url: bool) -> Score {
        Score {
            music_tag: "tag".to_string(),
            kind: kind.parse().unwrap(),
            level: Level::new(level).unwrap(),
            has_url,
        }
    }

    fn music(tag: &str, version: &str) -> Music {
        Music {
            tag: tag.to_string(),
            version: Version::parse(version).unwrap(),
            genre: String::new(),
            artist: String::new(),
            title: String::new(),
            scores: Vec::new(),
        }
    }

    #[test]
    fn test_default_matches_everything() {
        let filter = ScoreFilter::default();
        assert!(filter.matches_music(&music("a", "CS")));
        assert!(filter.matches_score(&score("DPL", 12, false)));
    }

    #[test]
    fn test_music_dimensions() {
        let filter = ScoreFilter {
            version: VersionFilter::parse("20-").unwrap(),
            music_tag: Some("a".to_string()),
            ..Default::default()
        };
        assert!(filter.matches_music(&music("a", "25")));
        assert!(!filter.matches_music(&music("b", "25")));
        assert!(!filter.matches_music(&music("a", "15")));
        assert!(!filter.matches_music(&music("a", "CS")));
    }

    #[test]
    fn test_score_dimensions() {
        let filter = ScoreFilter {
            has_url: Some(true),
            play_mode: parse_play_mode_filter("SP").unwrap(),
            difficulty: parse_difficulty_filter("A").unwrap(),
            level: LevelFilter::parse("10-").unwrap(),
            ..Default::default()
        };
        assert!(filter.matches_score(&score("SPA", 11, true)));
        assert!(!filter.matches_score(&score("SPA", 11, false)));
        assert!(!filter.matches_score(&score("DPA", 11, true)));
        assert!(!filter.matches_score(&score("SPH", 11, true)));
        assert!(!filter.matches_score(&score("SPA", 9, true)));
    }

    #[test]
    fn test_dimension_parsers() {
        assert_eq!(parse_play_mode_filter("").unwrap(), None);
        assert_eq!(parse_play_mode_filter("DP").unwrap(), Some(PlayMode::Dp));
        assert!(parse_play_mode_filter("XP").is_err());
        assert_eq!(
            parse_difficulty_filter("L").unwrap(),
            Some(Difficulty::Leggendaria)
        );
        assert!(parse_difficulty_filter("Z").is_err());
    }
}
