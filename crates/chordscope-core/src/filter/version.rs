use crate::catalog::{ArcadeVersion, Version};
use crate::error::{Error, Result};

/// Filter over the version a music first appeared in.
///
/// Ranges order arcade versions only, so a CS-only version never matches a
/// `Range` and is rejected as a bound at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionFilter {
    #[default]
    All,
    Single(Version),
    Range {
        start: Option<ArcadeVersion>,
        end: Option<ArcadeVersion>,
    },
}

impl VersionFilter {
    /// Build a range filter. At least one bound is required, and when both
    /// are given they must be in order.
    pub fn range(start: Option<ArcadeVersion>, end: Option<ArcadeVersion>) -> Result<Self> {
        let invalid = || Error::InvalidRange {
            start: start.map(|v| v.to_string()).unwrap_or_default(),
            end: end.map(|v| v.to_string()).unwrap_or_default(),
        };
        match (start, end) {
            (None, None) => Err(invalid()),
            (Some(s), Some(e)) if s > e => Err(invalid()),
            _ => Ok(Self::Range { start, end }),
        }
    }

    /// Parse a filter string: `""` (all), `"20"`, `"20-30"`, `"-20"`,
    /// `"20-"`, `"sub-20"`.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(Self::All);
        }
        let parts: Vec<&str> = s.split('-').collect();
        match parts.as_slice() {
            [code] => Ok(Self::Single(Version::parse(code)?)),
            [start, end] => {
                let parse_bound = |code: &str| -> Result<Option<ArcadeVersion>> {
                    if code.is_empty() {
                        Ok(None)
                    } else {
                        ArcadeVersion::parse(code).map(Some)
                    }
                };
                Self::range(parse_bound(start)?, parse_bound(end)?)
            }
            _ => Err(Error::MalformedFilter(s.to_string())),
        }
    }

    pub fn matches(&self, version: &Version) -> bool {
        match self {
            Self::All => true,
            Self::Single(value) => version == value,
            Self::Range { start, end } => {
                let Some(candidate) = version.as_arcade() else {
                    return false;
                };
                start.is_none_or(|s| candidate >= s) && end.is_none_or(|e| candidate <= e)
            }
        }
    }
}
