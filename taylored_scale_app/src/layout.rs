// Instrument layouts: which positions of a fretboard, keyboard, or pitch
// wheel belong to the current scale.
//
// These are the pure parts of the drawing code: given a tonic and an
// interval set, say for every fret, key, or wheel slot which pitch class it
// is, which scale degree that is ("wrapped interval": pitch class minus
// tonic, mod 12), and whether the degree is active. Geometry (pixel
// positions, radii) is left to the renderer.

use serde::{Deserialize, Serialize};
use taylored_scale_theory::IntervalSet;
use taylored_scale_theory::pitch::PITCH_CLASSES;

/// Frets that carry an inlay marker.
pub const FRET_MARKERS: [u8; 12] = [3, 5, 7, 9, 12, 15, 17, 19, 21, 23, 25, 27];

/// Standard guitar tuning, lowest string first: E A D G B E.
pub const STANDARD_TUNING: [u8; 6] = [4, 9, 2, 7, 11, 4];

/// Scale degree of `pitch_class` under `tonic`.
pub fn degree_of(tonic: u8, pitch_class: u8) -> u8 {
    (pitch_class % 12 + 12 - tonic % 12) % 12
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FretNote {
    /// String number, 1 = lowest.
    pub string: u8,
    pub fret: u8,
    pub pitch_class: u8,
    pub degree: u8,
    pub in_scale: bool,
    /// Whether this fret carries an inlay (never at the nut).
    pub marker: bool,
}

/// Every position on a fretboard from `frets.0` to `frets.1` inclusive.
/// A reversed range yields nothing.
pub fn fretboard(tonic: u8, intervals: IntervalSet, tuning: &[u8], frets: (u8, u8)) -> Vec<FretNote> {
    let mut notes = Vec::new();
    for (s, &open) in tuning.iter().enumerate() {
        for fret in frets.0..=frets.1 {
            let pitch_class = ((open as u32 + fret as u32) % 12) as u8;
            let degree = degree_of(tonic, pitch_class);
            notes.push(FretNote {
                string: s as u8 + 1,
                fret,
                pitch_class,
                degree,
                in_scale: intervals.contains(degree as i64),
                marker: fret > frets.0 && FRET_MARKERS.contains(&fret),
            });
        }
    }
    notes
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PianoKey {
    /// Position from the leftmost key (a C).
    pub index: u16,
    pub pitch_class: u8,
    pub black: bool,
    pub degree: u8,
    pub in_scale: bool,
}

/// `octaves * 12 + 1` keys starting and ending on C.
pub fn keyboard(tonic: u8, intervals: IntervalSet, octaves: u8) -> Vec<PianoKey> {
    (0..octaves as u16 * 12 + 1)
        .map(|index| {
            let pitch_class = (index % 12) as u8;
            let degree = degree_of(tonic, pitch_class);
            PianoKey {
                index,
                pitch_class,
                black: PITCH_CLASSES[pitch_class as usize].is_black_key(),
                degree,
                in_scale: intervals.contains(degree as i64),
            }
        })
        .collect()
}

/// Order of the 12 slots around the pitch wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelOrder {
    #[default]
    Chromatic,
    Fourths,
    Fifths,
}

impl WheelOrder {
    /// Semitones between neighbouring slots.
    pub fn step(self) -> u8 {
        match self {
            WheelOrder::Chromatic => 1,
            WheelOrder::Fourths => 5,
            WheelOrder::Fifths => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelSlot {
    /// Slot index, 0 at the top, clockwise.
    pub slot: u8,
    pub pitch_class: u8,
    pub degree: u8,
    pub in_scale: bool,
    pub is_tonic: bool,
}

pub fn wheel(tonic: u8, intervals: IntervalSet, order: WheelOrder) -> Vec<WheelSlot> {
    (0u8..12)
        .map(|slot| {
            let pitch_class = (slot * order.step()) % 12;
            let degree = degree_of(tonic, pitch_class);
            WheelSlot {
                slot,
                pitch_class,
                degree,
                in_scale: intervals.contains(degree as i64),
                is_tonic: degree == 0,
            }
        })
        .collect()
}
