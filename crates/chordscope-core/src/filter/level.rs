use crate::catalog::Level;
use crate::error::{Error, Result};

/// Filter over chart levels, same shape as the version filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFilter {
    #[default]
    All,
    Single(Level),
    Range {
        start: Option<Level>,
        end: Option<Level>,
    },
}

impl LevelFilter {
    pub fn range(start: Option<Level>, end: Option<Level>) -> Result<Self> {
        let invalid = || Error::InvalidRange {
            start: start.map(|l| l.to_string()).unwrap_or_default(),
            end: end.map(|l| l.to_string()).unwrap_or_default(),
        };
        match (start, end) {
            (None, None) => Err(invalid()),
            (Some(s), Some(e)) if s > e => Err(invalid()),
            _ => Ok(Self::Range { start, end }),
        }
    }

    /// Parse a filter string: `""` (all), `"8"`, `"8-12"`, `"-10"`, `"11-"`.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(Self::All);
        }
        let parse_level = |code: &str| -> Result<Level> {
            let number: u8 = code
                .parse()
                .map_err(|_| Error::MalformedFilter(s.to_string()))?;
            Level::new(number)
        };
        let parts: Vec<&str> = s.split('-').collect();
        match parts.as_slice() {
            [code] => Ok(Self::Single(parse_level(code)?)),
            [start, end] => {
                let parse_bound = |code: &str| -> Result<Option<Level>> {
                    if code.is_empty() {
                        Ok(None)
                    } else {
                        parse_level(code).map(Some)
                    }
                };
                Self::range(parse_bound(start)?, parse_bound(end)?)
            }
            _ => Err(Error::MalformedFilter(s.to_string())),
        }
    }

    pub fn matches(&self, level: Level) -> bool {
        match self {
            Self::All => true,
            Self::Single(value) => level == *value,
            Self::Range { start, end } => {
                start.is_none_or(|s| level >= s) && end.is_none_or(|e| level <= e)
            }
        }
    }
}
