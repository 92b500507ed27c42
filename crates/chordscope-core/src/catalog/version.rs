use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Arcade release ordinal ("sub" is the substream release).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArcadeVersion {
    Substream,
    Numbered(u32),
}

impl ArcadeVersion {
    /// Parse an arcade version code: `sub` or `[1-9][0-9]*`.
    pub fn parse(code: &str) -> Result<Self> {
        if code == "sub" {
            return Ok(Self::Substream);
        }
        let valid = !code.is_empty()
            && !code.starts_with('0')
            && code.chars().all(|c| c.is_ascii_digit());
        if !valid {
            return Err(Error::InvalidVersionCode(code.to_string()));
        }
        let number = code
            .parse()
            .map_err(|_| Error::InvalidVersionCode(code.to_string()))?;
        Ok(Self::Numbered(number))
    }

    /// Chronological rank, doubled so that substream (1.5 in the textage
    /// data) gets an integer slot between versions 1 and 2.
    fn rank(self) -> u64 {
        match self {
            Self::Substream => 3,
            Self::Numbered(n) => u64::from(n) * 2,
        }
    }
}

impl Ord for ArcadeVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for ArcadeVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ArcadeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Substream => write!(f, "sub"),
            Self::Numbered(n) => write!(f, "{n}"),
        }
    }
}

/// The version a music first appeared in: an arcade release, or `CS` for
/// musics that never made it to arcades.
///
/// Ordering is defined only between two arcade versions; any comparison
/// involving `CsOnly` yields `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Version {
    Arcade(ArcadeVersion),
    CsOnly,
}

impl Version {
    pub fn parse(code: &str) -> Result<Self> {
        if code == "CS" {
            return Ok(Self::CsOnly);
        }
        ArcadeVersion::parse(code).map(Self::Arcade)
    }

    pub fn as_arcade(&self) -> Option<ArcadeVersion> {
        match self {
            Self::Arcade(v) => Some(*v),
            Self::CsOnly => None,
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Arcade(a), Self::Arcade(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arcade(v) => v.fmt(f),
            Self::CsOnly => write!(f, "CS"),
        }
    }
}

impl TryFrom<String> for Version {
    type Error = Error;

    fn try_from(code: String) -> Result<Self> {
        Self::parse(&code)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for code in ["CS", "sub", "1", "9", "10", "31"] {
            let version = Version::parse(code).unwrap();
            assert_eq!(version.to_string(), code);
        }
    }

    #[test]
    fn test_parse_rejects_bad_codes() {
        for code in ["", "0", "01", "v1", "1.5", "Sub", "cs", "-3"] {
            assert!(Version::parse(code).is_err(), "accepted {code:?}");
        }
    }

    #[test]
    fn test_substream_sits_between_1_and_2() {
        let v1 = ArcadeVersion::parse("1").unwrap();
        let sub = ArcadeVersion::parse("sub").unwrap();
        let v2 = ArcadeVersion::parse("2").unwrap();
        assert!(v1 < sub);
        assert!(sub < v2);
    }

    #[test]
    fn test_arcade_ordering() {
        let v10 = ArcadeVersion::parse("10").unwrap();
        let v25 = ArcadeVersion::parse("25").unwrap();
        assert!(v10 < v25);
        assert_eq!(v10.cmp(&v10), Ordering::Equal);
    }

    #[test]
    fn test_cs_only_is_unordered() {
        let cs = Version::CsOnly;
        let ac = Version::parse("20").unwrap();
        assert_eq!(cs.partial_cmp(&ac), None);
        assert_eq!(ac.partial_cmp(&cs), None);
        assert_eq!(cs.partial_cmp(&cs), None);
        assert_eq!(cs, Version::CsOnly);
    }

    #[test]
    fn test_serde_as_code_string() {
        let version: Version = serde_json::from_str("\"sub\"").unwrap();
        assert_eq!(version, Version::Arcade(ArcadeVersion::Substream));
        assert_eq!(serde_json::to_string(&version).unwrap(), "\"sub\"");
        assert!(serde_json::from_str::<Version>("\"00\"").is_err());
    }
}
