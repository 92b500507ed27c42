use std::fmt;

use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// Which half of the cabinet a note belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PlaySide {
    P1 = 1,
    P2 = 2,
}

impl PlaySide {
    pub const ALL: [PlaySide; 2] = [PlaySide::P1, PlaySide::P2];

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::P1),
            2 => Some(Self::P2),
            _ => None,
        }
    }

    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for PlaySide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// One of the 8 input positions per play side: the scratch plus keys 1-7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Lane {
    Scratch = 0,
    Key1 = 1,
    Key2 = 2,
    Key3 = 3,
    Key4 = 4,
    Key5 = 5,
    Key6 = 6,
    Key7 = 7,
}

impl Lane {
    pub const ALL: [Lane; 8] = [
        Lane::Scratch,
        Lane::Key1,
        Lane::Key2,
        Lane::Key3,
        Lane::Key4,
        Lane::Key5,
        Lane::Key6,
        Lane::Key7,
    ];

    pub const KEYS: [Lane; 7] = [
        Lane::Key1,
        Lane::Key2,
        Lane::Key3,
        Lane::Key4,
        Lane::Key5,
        Lane::Key6,
        Lane::Key7,
    ];

    /// Wire digit: 0 is the scratch, 1-7 are the keys.
    pub fn from_digit(digit: u64) -> Option<Self> {
        match digit {
            0 => Some(Self::Scratch),
            1 => Some(Self::Key1),
            2 => Some(Self::Key2),
            3 => Some(Self::Key3),
            4 => Some(Self::Key4),
            5 => Some(Self::Key5),
            6 => Some(Self::Key6),
            7 => Some(Self::Key7),
            _ => None,
        }
    }

    /// Symbol used in note files: `"S"` or `"1"`..`"7"`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "S" => Some(Self::Scratch),
            "1" => Some(Self::Key1),
            "2" => Some(Self::Key2),
            "3" => Some(Self::Key3),
            "4" => Some(Self::Key4),
            "5" => Some(Self::Key5),
            "6" => Some(Self::Key6),
            "7" => Some(Self::Key7),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Scratch => "S",
            Self::Key1 => "1",
            Self::Key2 => "2",
            Self::Key3 => "3",
            Self::Key4 => "4",
            Self::Key5 => "5",
            Self::Key6 => "6",
            Self::Key7 => "7",
        }
    }

    /// Position in a chord bitmask: bit 0 is the scratch, bits 1-7 the keys.
    pub fn bit(&self) -> u8 {
        1 << (*self as u8)
    }
}

/// A single input event. `timing` is an opaque ordering key from the data
/// source; it is never decoded further.
///
/// The derived order is (timing, side, lane), which is the order charts must
/// be sorted in before chord decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Note {
    pub timing: u64,
    pub side: PlaySide,
    pub lane: Lane,
}

impl Note {
    pub fn new(timing: u64, side: PlaySide, lane: Lane) -> Self {
        Self { timing, side, lane }
    }

    /// Decode the packed wire integer: last digit is the lane (0 = scratch),
    /// second-to-last the play side, the rest the timing ordinal.
    pub fn from_packed(value: u64) -> Result<Self> {
        let lane = Lane::from_digit(value % 10).ok_or(Error::InvalidLane(value % 10))?;
        let side = PlaySide::from_u8((value / 10 % 10) as u8)
            .ok_or(Error::InvalidPlaySide(value / 10 % 10))?;
        Ok(Self::new(value / 100, side, lane))
    }
}

// Note files store the structured triple shape: [timing, side, symbol].
impl Serialize for Note {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.timing)?;
        tuple.serialize_element(&self.side.as_u8())?;
        tuple.serialize_element(self.lane.symbol())?;
        tuple.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_packed() {
        let note = Note::from_packed(1120).unwrap();
        assert_eq!(note.timing, 11);
        assert_eq!(note.side, PlaySide::P2);
        assert_eq!(note.lane, Lane::Scratch);

        let note = Note::from_packed(1213).unwrap();
        assert_eq!(note.timing, 12);
        assert_eq!(note.side, PlaySide::P1);
        assert_eq!(note.lane, Lane::Key3);
    }

    #[test]
    fn test_from_packed_rejects_bad_side() {
        assert!(Note::from_packed(1030).is_err()); // side digit 3
        assert!(Note::from_packed(5).is_err()); // side digit 0
    }

    #[test]
    fn test_from_packed_rejects_bad_lane_digit() {
        assert!(matches!(Note::from_packed(1018), Err(Error::InvalidLane(8))));
        assert!(matches!(Note::from_packed(1029), Err(Error::InvalidLane(9))));
    }

    #[test]
    fn test_note_ordering_is_timing_then_side() {
        let a = Note::new(10, PlaySide::P2, Lane::Key1);
        let b = Note::new(11, PlaySide::P1, Lane::Key1);
        let c = Note::new(11, PlaySide::P2, Lane::Scratch);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_lane_symbols_round_trip() {
        for lane in Lane::ALL {
            assert_eq!(Lane::from_symbol(lane.symbol()), Some(lane));
        }
        assert_eq!(Lane::from_symbol("8"), None);
        assert_eq!(Lane::from_symbol(""), None);
    }

    #[test]
    fn test_note_serializes_as_triple() {
        let note = Note::new(11, PlaySide::P2, Lane::Scratch);
        assert_eq!(serde_json::to_string(&note).unwrap(), "[11,2,\"S\"]");
    }
}
