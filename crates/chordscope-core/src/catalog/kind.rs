use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr)]
pub enum PlayMode {
    #[strum(serialize = "SP")]
    Sp,
    #[strum(serialize = "DP")]
    Dp,
}

impl PlayMode {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr)]
pub enum Difficulty {
    #[strum(serialize = "B")]
    Beginner,
    #[strum(serialize = "N")]
    Normal,
    #[strum(serialize = "H")]
    Hyper,
    #[strum(serialize = "A")]
    Another,
    #[strum(serialize = "L")]
    Leggendaria,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A play mode + difficulty pair, e.g. `SPA`.
///
/// DP has no BEGINNER chart, so exactly 9 of the 10 combinations are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScoreKind {
    play_mode: PlayMode,
    difficulty: Difficulty,
}

impl ScoreKind {
    pub fn new(play_mode: PlayMode, difficulty: Difficulty) -> Result<Self> {
        if play_mode == PlayMode::Dp && difficulty == Difficulty::Beginner {
            return Err(Error::InvalidScoreKind("DPB".to_string()));
        }
        Ok(Self {
            play_mode,
            difficulty,
        })
    }

    pub fn play_mode(&self) -> PlayMode {
        self.play_mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// All 9 valid kinds, SP first, in difficulty order.
    pub fn all() -> impl Iterator<Item = Self> {
        const KINDS: [(PlayMode, Difficulty); 9] = [
            (PlayMode::Sp, Difficulty::Beginner),
            (PlayMode::Sp, Difficulty::Normal),
            (PlayMode::Sp, Difficulty::Hyper),
            (PlayMode::Sp, Difficulty::Another),
            (PlayMode::Sp, Difficulty::Leggendaria),
            (PlayMode::Dp, Difficulty::Normal),
            (PlayMode::Dp, Difficulty::Hyper),
            (PlayMode::Dp, Difficulty::Another),
            (PlayMode::Dp, Difficulty::Leggendaria),
        ];
        KINDS.into_iter().map(|(play_mode, difficulty)| Self {
            play_mode,
            difficulty,
        })
    }
}

impl FromStr for ScoreKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidScoreKind(s.to_string());
        if s.len() != 3 {
            return Err(invalid());
        }
        let (mode, diff) = s.split_at_checked(2).ok_or_else(invalid)?;
        let play_mode = PlayMode::from_str(mode).map_err(|_| invalid())?;
        let difficulty = Difficulty::from_str(diff).map_err(|_| invalid())?;
        Self::new(play_mode, difficulty).map_err(|_| invalid())
    }
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.play_mode, self.difficulty)
    }
}

impl TryFrom<String> for ScoreKind {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<ScoreKind> for String {
    fn from(kind: ScoreKind) -> Self {
        kind.to_string()
    }
}

/// Chart level, always in 1..=12.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(1);
    pub const MAX: Level = Level(12);

    pub fn new(value: u8) -> Result<Self> {
        if (1..=12).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidLevel(value))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Level {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}
