// Pitch-class table: the 12 chromatic positions and their spellings.
//
// Position 0 is C. Each position lists every spelling with at most two
// accidentals, single-accidental spellings first. The leading
// `tonic_count` spellings are the ones a tonic may cycle through (C#/Db,
// B/Cb, ...); the double-accidental tail only exists so note-name spelling
// can land on letters like Fx or Abb.
//
// Accidentals are written `#`, `b`, `x` (double sharp) and `bb`.
//
// Within a position no two spellings share a letter, so "the spelling of
// pitch class p on letter L" is unique when it exists. `spell()` relies on
// that.

/// Letter names in diatonic order, starting from C.
pub const LETTERS: [char; 7] = ['C', 'D', 'E', 'F', 'G', 'A', 'B'];

/// Pitch class of each natural letter, parallel to `LETTERS`.
pub const NATURAL_PITCH: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// One of the 12 chromatic positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitchClass {
    pub index: u8,
    pub spellings: &'static [&'static str],
    tonic_count: usize,
}

impl PitchClass {
    /// The spellings a tonic on this position may be displayed with.
    pub fn tonic_spellings(&self) -> &'static [&'static str] {
        &self.spellings[..self.tonic_count]
    }

    /// The default (first) spelling.
    pub fn name(&self) -> &'static str {
        self.spellings[0]
    }

    /// Whether this position is a black key on a piano.
    pub fn is_black_key(&self) -> bool {
        !NATURAL_PITCH.contains(&self.index)
    }
}

pub const PITCH_CLASSES: [PitchClass; 12] = [
    pc(0, &["C", "B#", "Dbb"], 2),
    pc(1, &["C#", "Db", "Bx"], 2),
    pc(2, &["D", "Cx", "Ebb"], 1),
    pc(3, &["D#", "Eb", "Fbb"], 2),
    pc(4, &["E", "Fb", "Dx"], 2),
    pc(5, &["F", "E#", "Gbb"], 2),
    pc(6, &["F#", "Gb", "Ex"], 2),
    pc(7, &["G", "Fx", "Abb"], 1),
    pc(8, &["G#", "Ab"], 2),
    pc(9, &["A", "Gx", "Bbb"], 1),
    pc(10, &["A#", "Bb", "Cbb"], 2),
    pc(11, &["B", "Cb", "Ax"], 2),
];

const fn pc(index: u8, spellings: &'static [&'static str], tonic_count: usize) -> PitchClass {
    PitchClass {
        index,
        spellings,
        tonic_count,
    }
}

/// Look up a pitch class, wrapping any integer into 0..12.
pub fn pitch_class(index: i64) -> &'static PitchClass {
    &PITCH_CLASSES[index.rem_euclid(12) as usize]
}

/// Position of a spelling's letter in `LETTERS`, or None if it doesn't
/// start with A–G.
pub fn letter_index(spelling: &str) -> Option<usize> {
    let first = spelling.chars().next()?;
    LETTERS.iter().position(|&l| l == first)
}

/// Net accidental of a spelling in semitones: `#` +1, `x` +2, `b` -1 each.
pub fn accidental(spelling: &str) -> i8 {
    spelling
        .chars()
        .skip(1)
        .map(|c| match c {
            '#' => 1,
            'x' => 2,
            'b' => -1,
            _ => 0,
        })
        .sum()
}

/// The spelling of `pitch_class` on the letter at `letter` (index into
/// `LETTERS`), if the table has one.
pub fn spell(letter: usize, pitch_class: u8) -> Option<&'static str> {
    let target = *LETTERS.get(letter)?;
    PITCH_CLASSES[(pitch_class % 12) as usize]
        .spellings
        .iter()
        .copied()
        .find(|s| s.starts_with(target))
}
