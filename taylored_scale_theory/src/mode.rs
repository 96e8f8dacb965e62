// Mode engine: the distinct rotations of a scale.
//
// A mode is the scale re-read starting from one of its active degrees, so
// that degree becomes the new root. Rotating at every active degree and
// dropping repeats (symmetric scales such as whole tone repeat themselves)
// yields at most `note_count()` modes, in rotation order. Each mode is
// named through a `ScaleNameLookup`.
//
// Two orders are offered:
// - `Rotation`: the order the rotations were produced (degree ascending).
// - `PrimeForm`: ascending by canonical number, then reversed, so the
//   lowest-numbered rotation (the prime form) sorts last.
//
// Go-parallel and go-relative are implemented here as `ScaleModel`
// methods: parallel swaps the intervals under a fixed tonic, relative moves
// the tonic to the mode's root so the absolute pitches stay the same.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::registry::ScaleNameLookup;
use crate::scale::{IntervalSet, ScaleModel};

/// How `modes()` orders its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeOrder {
    #[default]
    Rotation,
    PrimeForm,
}

/// One mode of a scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeEntry {
    /// Degree of the original scale this mode starts on.
    pub offset: u8,
    pub intervals: IntervalSet,
    pub number: u16,
    pub name: String,
}

/// Distinct rotations of `set`, paired with the degree each starts on.
/// The unrotated scale is always first.
pub fn rotations(set: IntervalSet) -> Vec<(u8, IntervalSet)> {
    let mut seen = BTreeSet::new();
    set.degrees()
        .filter_map(|d| set.rotated(d as i64).map(|mode| (d, mode)))
        .filter(|&(_, mode)| seen.insert(mode))
        .collect()
}

/// The rotation with the smallest canonical number.
pub fn prime_form(set: IntervalSet) -> IntervalSet {
    rotations(set)
        .into_iter()
        .map(|(_, mode)| mode)
        .min()
        .unwrap_or(set)
}

/// Named modes of `set` in the requested order.
pub fn modes(set: IntervalSet, lookup: &impl ScaleNameLookup, order: ModeOrder) -> Vec<ModeEntry> {
    let mut entries: Vec<ModeEntry> = rotations(set)
        .into_iter()
        .map(|(offset, mode)| ModeEntry {
            offset,
            intervals: mode,
            number: mode.canonical_number(),
            name: lookup.display_name(mode.canonical_number()),
        })
        .collect();
    if order == ModeOrder::PrimeForm {
        entries.sort_by_key(|e| e.number);
        entries.reverse();
    }
    entries
}

/// Degree at which `set` rotates into `mode`, if any.
pub fn rotation_offset(set: IntervalSet, mode: IntervalSet) -> Option<u8> {
    set.degrees().find(|&d| set.rotated(d as i64) == Some(mode))
}

impl ScaleModel {
    /// Use `mode`'s intervals under the current tonic.
    pub fn go_parallel(&mut self, mode: IntervalSet) {
        self.set_interval_set(mode);
    }

    /// Re-center the tonic on `mode`'s root, keeping the same pitches.
    pub fn go_relative(&mut self, mode: IntervalSet) -> Result<(), TheoryError> {
        let offset = rotation_offset(self.intervals(), mode).ok_or_else(|| {
            TheoryError::ModeNotFound {
                number: mode.canonical_number(),
            }
        })?;
        self.set_tonic(self.tonic() as i64 + offset as i64);
        self.set_interval_set(mode);
        Ok(())
    }
}
