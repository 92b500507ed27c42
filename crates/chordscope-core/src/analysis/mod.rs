//! Chord decomposition, pattern enumeration, and occurrence counting.

use std::collections::HashMap;

use crate::catalog::{Chord, Lane, Note, PlaySide};

/// Group a chart's notes into chords.
///
/// Precondition: `notes` is sorted ascending by (timing, play side). That is
/// a caller error, not a recoverable condition, so it panics. Consecutive
/// notes sharing (timing, side) become one chord with their lanes OR-ed.
pub fn decompose(notes: &[Note]) -> Vec<Chord> {
    assert!(
        notes
            .windows(2)
            .all(|w| (w[0].timing, w[0].side) <= (w[1].timing, w[1].side)),
        "notes must be sorted by (timing, play side) before decomposition"
    );

    let mut chords: Vec<Chord> = Vec::new();
    let mut current_group: Option<(u64, PlaySide)> = None;
    for note in notes {
        let group = (note.timing, note.side);
        if current_group == Some(group) {
            chords
                .last_mut()
                .expect("a chord exists for the current group")
                .press(note.lane);
        } else {
            chords.push(Chord::with_lanes(note.side, [note.lane]));
            current_group = Some(group);
        }
    }
    chords
}

/// Enumerate every chord pattern in a stable, deterministic order: side 1
/// then side 2, scratch absent before present, ascending key count, key
/// combinations in lexicographic order.
///
/// 2 sides x 2 scratch states x 127 nonempty key subsets = 508 chords.
/// The scratch-alone pattern (no keys) is not part of the pattern space.
pub fn all_chord_patterns() -> Vec<Chord> {
    let mut patterns = Vec::with_capacity(508);
    for side in PlaySide::ALL {
        for has_scratch in [false, true] {
            for key_count in 1..=Lane::KEYS.len() {
                for_each_key_combination(key_count, &mut |keys| {
                    let mut chord = Chord::new(side);
                    if has_scratch {
                        chord.press(Lane::Scratch);
                    }
                    for key in keys {
                        chord.press(*key);
                    }
                    patterns.push(chord);
                });
            }
        }
    }
    patterns
}

/// Visit every `count`-element combination of the 7 keys, lexicographic by
/// key index.
fn for_each_key_combination(count: usize, visit: &mut impl FnMut(&[Lane])) {
    fn recurse(start: usize, count: usize, current: &mut Vec<Lane>, visit: &mut impl FnMut(&[Lane])) {
        if current.len() == count {
            visit(current);
            return;
        }
        for i in start..Lane::KEYS.len() {
            current.push(Lane::KEYS[i]);
            recurse(i + 1, count, current, visit);
            current.pop();
        }
    }
    recurse(0, count, &mut Vec::with_capacity(count), visit);
}

/// Occurrence counts per chord, accumulated over any number of charts.
///
/// Accumulation is plain addition, so the result does not depend on the
/// order charts are processed in.
#[derive(Debug, Clone, Default)]
pub struct ChordHistogram {
    counts: HashMap<Chord, u64>,
}

impl ChordHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decompose one chart and add its chords.
    pub fn add_chart(&mut self, notes: &[Note]) {
        for chord in decompose(notes) {
            *self.counts.entry(chord).or_insert(0) += 1;
        }
    }

    /// Elementwise addition of another histogram.
    pub fn merge(&mut self, other: &Self) {
        for (chord, count) in &other.counts {
            *self.counts.entry(*chord).or_insert(0) += count;
        }
    }

    pub fn count(&self, chord: &Chord) -> u64 {
        self.counts.get(chord).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Walk the full pattern space in enumeration order, pairing each chord
    /// with its count. With `show_all` false, zero-count rows are skipped.
    pub fn rows(&self, show_all: bool) -> impl Iterator<Item = (Chord, u64)> + '_ {
        all_chord_patterns()
            .into_iter()
            .map(|chord| (chord, self.count(&chord)))
            .filter(move |(_, count)| show_all || *count > 0)
    }
}
