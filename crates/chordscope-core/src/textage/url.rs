use std::fmt;

use crate::catalog::{ArcadeVersion, Difficulty, Level, Music, PlayMode, Score, Version};
use crate::error::{Error, Result};

pub const HOST: &str = "https://textage.cc/";

const LEVEL_CODES: &str = "123456789ABC";

/// Which side a score page shows: 1P, 2P, or the double-play combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSide {
    P1,
    P2,
    Dp,
}

impl PageSide {
    fn encode(self) -> char {
        match self {
            Self::P1 => '1',
            Self::P2 => '2',
            Self::Dp => 'D',
        }
    }

    fn decode(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::P1),
            '2' => Some(Self::P2),
            'D' => Some(Self::Dp),
            _ => None,
        }
    }
}

impl fmt::Display for PageSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::P1 => write!(f, "1P"),
            Self::P2 => write!(f, "2P"),
            Self::Dp => write!(f, "DP"),
        }
    }
}

/// Identity of one score page: everything needed to address a chart on the
/// remote source. Encodes to `/score/<ver>/<tag>.html?<side><diff><level>00`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorePageParams {
    pub version: Version,
    pub music_tag: String,
    pub play_side: PageSide,
    pub difficulty: Difficulty,
    pub level: Level,
}

impl ScorePageParams {
    pub fn from_score(music: &Music, score: &Score) -> Self {
        let play_side = match score.kind.play_mode() {
            PlayMode::Sp => PageSide::P1,
            PlayMode::Dp => PageSide::Dp,
        };
        Self {
            version: music.version,
            music_tag: music.tag.clone(),
            play_side,
            difficulty: score.kind.difficulty(),
            level: score.level,
        }
    }

    /// Version path segment: `0` for CS-only, `s` for substream, else the
    /// numeric code.
    pub fn version_code(&self) -> String {
        match self.version {
            Version::CsOnly => "0".to_string(),
            Version::Arcade(ArcadeVersion::Substream) => "s".to_string(),
            Version::Arcade(v) => v.to_string(),
        }
    }

    /// Query string: side, difficulty, and level codes followed by `00`.
    pub fn query_code(&self) -> String {
        format!(
            "{}{}{}00",
            self.play_side.encode(),
            encode_difficulty(self.difficulty),
            encode_level(self.level),
        )
    }

    pub fn to_url(&self) -> String {
        format!(
            "{HOST}score/{}/{}.html?{}",
            self.version_code(),
            self.music_tag,
            self.query_code(),
        )
    }

    /// Reverse every mapping of `to_url`; any unrecognized piece fails.
    pub fn from_url(url: &str) -> Result<Self> {
        let invalid = || Error::InvalidUrl(url.to_string());

        let rest = url.strip_prefix(HOST).ok_or_else(invalid)?;
        let rest = rest.strip_prefix("score/").ok_or_else(invalid)?;
        let (version_code, rest) = rest.split_once('/').ok_or_else(invalid)?;
        let (music_tag, query) = rest.split_once(".html?").ok_or_else(invalid)?;
        if music_tag.is_empty() {
            return Err(invalid());
        }

        let chars: Vec<char> = query.chars().collect();
        let [side, difficulty, level, '0', '0'] = chars.as_slice() else {
            return Err(invalid());
        };

        Ok(Self {
            version: decode_version(version_code)?,
            music_tag: music_tag.to_string(),
            play_side: PageSide::decode(*side).ok_or_else(invalid)?,
            difficulty: decode_difficulty(*difficulty).ok_or_else(invalid)?,
            level: decode_level(*level).ok_or_else(invalid)?,
        })
    }
}

fn decode_version(code: &str) -> Result<Version> {
    match code {
        "0" => Ok(Version::CsOnly),
        "s" => Ok(Version::Arcade(ArcadeVersion::Substream)),
        _ => ArcadeVersion::parse(code).map(Version::Arcade),
    }
}

fn encode_difficulty(difficulty: Difficulty) -> char {
    match difficulty {
        Difficulty::Beginner => 'P',
        Difficulty::Normal => 'N',
        Difficulty::Hyper => 'H',
        Difficulty::Another => 'A',
        Difficulty::Leggendaria => 'X',
    }
}

fn decode_difficulty(c: char) -> Option<Difficulty> {
    match c {
        'P' => Some(Difficulty::Beginner),
        'N' => Some(Difficulty::Normal),
        'H' => Some(Difficulty::Hyper),
        'A' => Some(Difficulty::Another),
        'X' => Some(Difficulty::Leggendaria),
        _ => None,
    }
}

fn encode_level(level: Level) -> char {
    LEVEL_CODES
        .chars()
        .nth(usize::from(level.get()) - 1)
        .expect("levels 1-12 all have a code")
}

fn decode_level(c: char) -> Option<Level> {
    let position = LEVEL_CODES.find(c)?;
    Level::new(position as u8 + 1).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ScoreKind;

    fn params(version: &str, tag: &str, side: PageSide, diff: Difficulty, level: u8) -> ScorePageParams {
        ScorePageParams {
            version: Version::parse(version).unwrap(),
            music_tag: tag.to_string(),
            play_side: side,
            difficulty: diff,
            level: Level::new(level).unwrap(),
        }
    }

    #[test]
    fn test_to_url() {
        let p = params("11", "aa_amuro", PageSide::P1, Difficulty::Another, 12);
        assert_eq!(
            p.to_url(),
            "https://textage.cc/score/11/aa_amuro.html?1AC00"
        );
    }

    #[test]
    fn test_special_version_codes() {
        let cs = params("CS", "t", PageSide::P1, Difficulty::Normal, 1);
        assert!(cs.to_url().contains("/score/0/"));
        let sub = params("sub", "t", PageSide::P1, Difficulty::Normal, 1);
        assert!(sub.to_url().contains("/score/s/"));
    }

    #[test]
    fn test_difficulty_and_level_codes() {
        let p = params("5", "t", PageSide::Dp, Difficulty::Leggendaria, 10);
        assert_eq!(p.query_code(), "DXA00");
        let p = params("5", "t", PageSide::P2, Difficulty::Beginner, 1);
        assert_eq!(p.query_code(), "2P100");
    }

    #[test]
    fn test_url_round_trip() {
        let original = params("sub", "gambol", PageSide::P2, Difficulty::Hyper, 4);
        let decoded = ScorePageParams::from_url(&original.to_url()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_from_url_rejects_unknown_codes() {
        for url in [
            "https://textage.cc/score/11/t.html?3AC00", // bad side
            "https://textage.cc/score/11/t.html?1ZC00", // bad difficulty
            "https://textage.cc/score/11/t.html?1AD00", // bad level
            "https://textage.cc/score/11/t.html?1AC01", // bad suffix
            "https://textage.cc/score/11/t.html",       // no query
            "https://example.com/score/11/t.html?1AC00",
        ] {
            assert!(ScorePageParams::from_url(url).is_err(), "accepted {url}");
        }
    }

    #[test]
    fn test_from_score_maps_modes_to_sides() {
        let music = Music {
            tag: "t".to_string(),
            version: Version::parse("20").unwrap(),
            genre: String::new(),
            artist: String::new(),
            title: String::new(),
            scores: Vec::new(),
        };
        let score = Score {
            music_tag: "t".to_string(),
            kind: ScoreKind::new(PlayMode::Dp, Difficulty::Another).unwrap(),
            level: Level::new(11).unwrap(),
            has_url: true,
        };
        let p = ScorePageParams::from_score(&music, &score);
        assert_eq!(p.play_side, PageSide::Dp);
        assert_eq!(p.difficulty, Difficulty::Another);
    }
}
