use std::fmt;

use crate::catalog::{Lane, PlaySide};

/// A set of lanes pressed at exactly the same instant on one play side.
///
/// Lanes are a bitmask over the 8-lane space (bit 0 scratch, bits 1-7 keys),
/// so equality and hashing are structural. The empty chord is a valid
/// intermediate value but never appears in the enumerated pattern space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chord {
    side: PlaySide,
    lanes: u8,
}

impl Chord {
    pub fn new(side: PlaySide) -> Self {
        Self { side, lanes: 0 }
    }

    pub fn with_lanes<I: IntoIterator<Item = Lane>>(side: PlaySide, lanes: I) -> Self {
        let mut chord = Self::new(side);
        for lane in lanes {
            chord.press(lane);
        }
        chord
    }

    pub fn side(&self) -> PlaySide {
        self.side
    }

    pub fn press(&mut self, lane: Lane) {
        self.lanes |= lane.bit();
    }

    pub fn contains(&self, lane: Lane) -> bool {
        self.lanes & lane.bit() != 0
    }

    pub fn has_scratch(&self) -> bool {
        self.contains(Lane::Scratch)
    }

    pub fn lanes(&self) -> impl Iterator<Item = Lane> + '_ {
        Lane::ALL.into_iter().filter(|lane| self.contains(*lane))
    }

    /// Number of pressed lanes.
    pub fn lane_count(&self) -> u32 {
        self.lanes.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes == 0
    }
}

/// Fixed-width text form matching the physical layout: the scratch sits on
/// the outside of each side, so 1P prints it before the keys and 2P after.
impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scratch = if self.has_scratch() { 'S' } else { ' ' };
        let keys: String = Lane::KEYS
            .into_iter()
            .map(|key| if self.contains(key) { '|' } else { '_' })
            .collect();
        match self.side {
            PlaySide::P1 => write!(f, "{scratch}{keys}"),
            PlaySide::P2 => write!(f, "{keys}{scratch}"),
        }
    }
}
