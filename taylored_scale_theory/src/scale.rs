// Scale model: the tonic, the active interval set, and their derivations.
//
// Two layers live here:
// - `IntervalSet`: an immutable 12-bit value (bit i = degree i is in the
//   scale). Bit 0 is always set; every constructor enforces it. Its
//   integer value is the scale's canonical (Ian Ring) number, which
//   identifies the scale independent of tonic.
// - `ScaleModel`: the mutable application state: tonic index, tonic
//   spelling shift, and 12 `IntervalDegree`s (on flag + interval spelling
//   shift). It is the only mutable state in the system and is changed only
//   through its methods or `ScaleModel::apply(ScaleCommand)`.
//
// Everything else (note names, numerals, modes, chords) is recomputed on
// demand from a `ScaleModel`.
//
// Index inputs (tonic, degree) wrap mod 12 and never fail. Interval vectors
// shorter than 12 are zero-padded; longer ones are rejected.
//
// See also: `mode.rs` for rotations and go-parallel / go-relative,
// `chord.rs` for chord detection, `command.rs` for the command enum.

use serde::{Deserialize, Serialize};

use crate::command::ScaleCommand;
use crate::error::TheoryError;
use crate::interval::{INTERVAL_NAMES, interval_number, roman_numeral};
use crate::pitch::{LETTERS, PITCH_CLASSES, letter_index, spell};

const ALL_BITS: u16 = 0x0FFF;

/// Rotate a 12-element vector so that element `offset` becomes element 0.
///
/// `rotate(v, 0) == v` and `rotate(rotate(v, a), b) == rotate(v, a + b)`.
/// Negative offsets rotate the other way.
pub fn rotate<T: Clone>(vector: &[T; 12], offset: i64) -> [T; 12] {
    let offset = offset.rem_euclid(12) as usize;
    std::array::from_fn(|k| vector[(k + offset) % 12].clone())
}

/// A set of scale degrees that always contains the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct IntervalSet(u16);

impl IntervalSet {
    pub const MAJOR: IntervalSet = IntervalSet(2741);
    pub const CHROMATIC: IntervalSet = IntervalSet(ALL_BITS);
    pub const ROOT_ONLY: IntervalSet = IntervalSet(1);

    /// Build from a 0/1 vector of at most 12 entries. Missing entries are
    /// off; the root is forced on.
    pub fn from_flags(flags: &[u8]) -> Result<Self, TheoryError> {
        if flags.len() > 12 {
            return Err(TheoryError::IntervalVectorTooLong { len: flags.len() });
        }
        let mut bits = 0u16;
        for (index, &value) in flags.iter().enumerate() {
            match value {
                0 => {}
                1 => bits |= 1 << index,
                _ => return Err(TheoryError::InvalidIntervalValue { index, value }),
            }
        }
        Ok(IntervalSet(bits | 1))
    }

    /// Build from on/off flags. The root is forced on.
    pub fn from_bools(flags: &[bool; 12]) -> Self {
        let bits = flags
            .iter()
            .enumerate()
            .filter(|&(_, &on)| on)
            .fold(0u16, |acc, (i, _)| acc | (1 << i));
        IntervalSet(bits | 1)
    }

    /// Inverse of `canonical_number`.
    pub fn from_canonical_number(number: u32) -> Result<Self, TheoryError> {
        if number > ALL_BITS as u32 {
            return Err(TheoryError::CanonicalNumberOutOfRange { number });
        }
        if number & 1 == 0 {
            return Err(TheoryError::MissingRoot { number });
        }
        Ok(IntervalSet(number as u16))
    }

    /// The interval vector read as binary with degree 0 as the least
    /// significant bit (equivalently: reverse the vector, parse base 2).
    pub fn canonical_number(self) -> u16 {
        self.0
    }

    pub fn contains(self, degree: i64) -> bool {
        self.0 & (1 << degree.rem_euclid(12)) != 0
    }

    /// Number of degrees in the scale (always at least 1).
    pub fn note_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Active degrees in ascending order.
    pub fn degrees(self) -> impl Iterator<Item = u8> {
        (0u8..12).filter(move |&d| self.contains(d as i64))
    }

    pub fn to_bools(self) -> [bool; 12] {
        std::array::from_fn(|i| self.contains(i as i64))
    }

    /// The 0/1 interval vector.
    pub fn to_flags(self) -> [u8; 12] {
        std::array::from_fn(|i| self.contains(i as i64) as u8)
    }

    /// The vector as a string of twelve '0'/'1' characters, degree 0 first.
    pub fn to_bitstring(self) -> String {
        self.to_flags()
            .iter()
            .map(|&f| if f == 1 { '1' } else { '0' })
            .collect()
    }

    /// The mode starting at `degree`, or None if that degree is off.
    pub fn rotated(self, degree: i64) -> Option<IntervalSet> {
        if !self.contains(degree) {
            return None;
        }
        Some(IntervalSet::from_bools(&rotate(&self.to_bools(), degree)))
    }
}

impl Default for IntervalSet {
    fn default() -> Self {
        IntervalSet::MAJOR
    }
}

impl TryFrom<u16> for IntervalSet {
    type Error = TheoryError;

    fn try_from(number: u16) -> Result<Self, Self::Error> {
        IntervalSet::from_canonical_number(number as u32)
    }
}

impl From<IntervalSet> for u16 {
    fn from(set: IntervalSet) -> u16 {
        set.0
    }
}

impl std::fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_bitstring())
    }
}

/// One of the 12 semitone positions above the tonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntervalDegree {
    pub semitones: u8,
    /// Index into `names()`, always in range.
    pub shift: usize,
    pub on: bool,
}

impl IntervalDegree {
    /// Enharmonic interval names for this degree.
    pub fn names(&self) -> &'static [&'static str] {
        INTERVAL_NAMES[self.semitones as usize]
    }

    /// The currently selected interval name.
    pub fn name(&self) -> &'static str {
        self.names()[self.shift]
    }
}

/// The tonic, the active scale, and the chosen enharmonic spellings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaleModel {
    tonic: u8,
    tonic_shift: usize,
    degrees: [IntervalDegree; 12],
}

impl Default for ScaleModel {
    fn default() -> Self {
        ScaleModel::new(0, IntervalSet::MAJOR)
    }
}

impl ScaleModel {
    pub fn new(tonic: i64, intervals: IntervalSet) -> Self {
        let mut model = ScaleModel {
            tonic: 0,
            tonic_shift: 0,
            degrees: std::array::from_fn(|i| IntervalDegree {
                semitones: i as u8,
                shift: 0,
                on: false,
            }),
        };
        model.set_tonic(tonic);
        model.set_interval_set(intervals);
        model
    }

    // -----------------------------------------------------------------------
    // Tonic
    // -----------------------------------------------------------------------

    pub fn tonic(&self) -> u8 {
        self.tonic
    }

    pub fn tonic_shift(&self) -> usize {
        self.tonic_shift
    }

    /// Move the tonic. Resets the tonic spelling: a shift chosen for the old
    /// tonic means nothing for the new one. This is a known wart kept for
    /// compatibility, not a rule other setters follow.
    pub fn set_tonic(&mut self, tonic: i64) {
        self.tonic = tonic.rem_euclid(12) as u8;
        self.tonic_shift = 0;
    }

    /// Cycle to the next spelling of the current tonic.
    pub fn enharmonicize_tonic(&mut self) {
        let count = PITCH_CLASSES[self.tonic as usize].tonic_spellings().len();
        self.tonic_shift = (self.tonic_shift + 1) % count;
    }

    /// The displayed spelling of the tonic.
    pub fn tonic_name(&self) -> &'static str {
        PITCH_CLASSES[self.tonic as usize].tonic_spellings()[self.tonic_shift]
    }

    // -----------------------------------------------------------------------
    // Intervals
    // -----------------------------------------------------------------------

    pub fn intervals(&self) -> IntervalSet {
        IntervalSet::from_bools(&std::array::from_fn(|i| self.degrees[i].on))
    }

    /// Replace the interval vector. On error the model is left unchanged.
    pub fn set_intervals(&mut self, flags: &[u8]) -> Result<(), TheoryError> {
        let set = IntervalSet::from_flags(flags)?;
        self.set_interval_set(set);
        Ok(())
    }

    pub fn set_interval_set(&mut self, set: IntervalSet) {
        for (i, degree) in self.degrees.iter_mut().enumerate() {
            degree.on = set.contains(i as i64);
        }
        self.degrees[0].on = true;
    }

    /// Switch to the scale with the given canonical number, keeping the tonic.
    pub fn set_canonical_number(&mut self, number: u32) -> Result<(), TheoryError> {
        let set = IntervalSet::from_canonical_number(number)?;
        self.set_interval_set(set);
        Ok(())
    }

    /// Flip one degree. The root can't be turned off.
    pub fn toggle_interval(&mut self, degree: i64) {
        let d = degree.rem_euclid(12) as usize;
        self.degrees[d].on = !self.degrees[d].on;
        self.degrees[0].on = true;
    }

    /// Cycle to the next interval name of one degree.
    pub fn enharmonicize_interval(&mut self, degree: i64) {
        let d = &mut self.degrees[degree.rem_euclid(12) as usize];
        d.shift = (d.shift + 1) % d.names().len();
    }

    pub fn degree(&self, degree: i64) -> &IntervalDegree {
        &self.degrees[degree.rem_euclid(12) as usize]
    }

    pub fn degrees(&self) -> &[IntervalDegree; 12] {
        &self.degrees
    }

    /// The 12-entry 0/1 interval vector.
    pub fn boolean_intervals(&self) -> [u8; 12] {
        self.intervals().to_flags()
    }

    pub fn canonical_number(&self) -> u16 {
        self.intervals().canonical_number()
    }

    // -----------------------------------------------------------------------
    // Derivations
    // -----------------------------------------------------------------------

    /// Spelled note name of every degree, index 0 = tonic.
    ///
    /// The selected interval name's diatonic number picks the letter
    /// (`tonic letter + number - 1`, mod 7); the degree's pitch class is then
    /// spelled on that letter. Slots with no such spelling carry
    /// `UnspellableDegree`.
    pub fn note_names(&self) -> [Result<String, TheoryError>; 12] {
        let tonic_letter = letter_index(self.tonic_name()).unwrap_or(0);
        std::array::from_fn(|d| {
            let number = interval_number(self.degrees[d].name()).unwrap_or(1) as usize;
            let letter = (tonic_letter + number - 1) % 7;
            let pitch_class = (self.tonic as usize + d) % 12;
            spell(letter, pitch_class as u8)
                .map(str::to_string)
                .ok_or(TheoryError::UnspellableDegree {
                    degree: d as u8,
                    letter: LETTERS[letter],
                })
        })
    }

    /// `note_names()` re-indexed by absolute pitch class (index 0 = C).
    pub fn note_names_by_pitch_class(&self) -> [Result<String, TheoryError>; 12] {
        rotate(&self.note_names(), -(self.tonic as i64))
    }

    /// Roman numeral of every degree's selected interval name, index 0 = tonic.
    pub fn roman_numerals(&self) -> [&'static str; 12] {
        std::array::from_fn(|d| roman_numeral(self.degrees[d].name()))
    }

    /// Apply one command. Errors leave the model unchanged.
    pub fn apply(&mut self, command: &ScaleCommand) -> Result<(), TheoryError> {
        match command {
            ScaleCommand::SetTonic { tonic } => self.set_tonic(*tonic),
            ScaleCommand::EnharmonicizeTonic => self.enharmonicize_tonic(),
            ScaleCommand::SetIntervals { intervals } => self.set_intervals(intervals)?,
            ScaleCommand::ToggleInterval { degree } => self.toggle_interval(*degree),
            ScaleCommand::EnharmonicizeInterval { degree } => self.enharmonicize_interval(*degree),
            ScaleCommand::SetCanonicalNumber { number } => self.set_canonical_number(*number)?,
            ScaleCommand::GoParallel { mode } => self.go_parallel(*mode),
            ScaleCommand::GoRelative { mode } => self.go_relative(*mode)?,
        }
        Ok(())
    }
}
