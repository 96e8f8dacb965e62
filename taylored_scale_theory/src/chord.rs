// Chord finder: triads and sevenths that fit entirely inside a scale.
//
// A chord template is a list of semitone offsets from a root. The chord is
// available at root degree r iff every `(r + offset) mod 12` is an active
// degree. Roots are tried from the tonic upward through all 12 degrees,
// skipping inactive ones; templates are tried in declaration order.
// Suspended triads are opt-in.
//
// Each found chord also carries a voicing (semitones above the tonic) for
// playback. With dense voicing each template offset is pulled down by
// octaves until it is below 6 before the root is added, so a chord clusters
// around its own root rather than around the tonic.

use serde::{Deserialize, Serialize};

use crate::scale::IntervalSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordFamily {
    Triad,
    Seventh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordQuality {
    Major,
    Minor,
    Augmented,
    Diminished,
    Sus4,
    Sus2,
    Dominant7,
    Major7,
    Minor7,
    MinorMajor7,
    HalfDiminished7,
    Diminished7,
}

/// Triad templates in the order they are reported.
pub const TRIADS: [ChordQuality; 6] = [
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Augmented,
    ChordQuality::Diminished,
    ChordQuality::Sus4,
    ChordQuality::Sus2,
];

/// Seventh templates in the order they are reported.
pub const SEVENTHS: [ChordQuality; 6] = [
    ChordQuality::Dominant7,
    ChordQuality::Major7,
    ChordQuality::Minor7,
    ChordQuality::MinorMajor7,
    ChordQuality::HalfDiminished7,
    ChordQuality::Diminished7,
];

impl ChordQuality {
    /// Semitone offsets from the root.
    pub fn offsets(self) -> &'static [u8] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Augmented => &[0, 4, 8],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::Sus4 => &[0, 5, 7],
            ChordQuality::Sus2 => &[0, 2, 7],
            ChordQuality::Dominant7 => &[0, 4, 7, 10],
            ChordQuality::Major7 => &[0, 4, 7, 11],
            ChordQuality::Minor7 => &[0, 3, 7, 10],
            ChordQuality::MinorMajor7 => &[0, 3, 7, 11],
            ChordQuality::HalfDiminished7 => &[0, 3, 6, 10],
            ChordQuality::Diminished7 => &[0, 3, 6, 9],
        }
    }

    pub fn family(self) -> ChordFamily {
        if self.offsets().len() == 4 {
            ChordFamily::Seventh
        } else {
            ChordFamily::Triad
        }
    }

    pub fn is_suspended(self) -> bool {
        matches!(self, ChordQuality::Sus4 | ChordQuality::Sus2)
    }

    /// Whether the chord has a minor third over its root.
    pub fn is_minor(self) -> bool {
        self.offsets().contains(&3)
    }

    /// Chord-symbol suffix ("" for major, "m7", ...).
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Augmented => "+",
            ChordQuality::Diminished => "°",
            ChordQuality::Sus4 => "sus4",
            ChordQuality::Sus2 => "sus2",
            ChordQuality::Dominant7 => "7",
            ChordQuality::Major7 => "maj7",
            ChordQuality::Minor7 => "m7",
            ChordQuality::MinorMajor7 => "m(maj7)",
            ChordQuality::HalfDiminished7 => "ø7",
            ChordQuality::Diminished7 => "°7",
        }
    }

    /// Suffix used after a Roman numeral (the minor-ness is carried by the
    /// numeral's case instead).
    fn numeral_suffix(self) -> &'static str {
        match self {
            ChordQuality::Minor => "",
            ChordQuality::Minor7 => "7",
            ChordQuality::MinorMajor7 => "(maj7)",
            other => other.suffix(),
        }
    }
}

/// Chord-finder switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChordOptions {
    /// Report sus4 / sus2 triads too.
    pub include_suspended: bool,
    /// Fold each chord's notes into a compact range around its root.
    pub dense_voicing: bool,
}

/// A chord found in the scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    /// Root as a scale degree (semitones above the tonic).
    pub root: u8,
    pub quality: ChordQuality,
    /// Playback pitches in semitones relative to the tonic.
    pub voicing: Vec<i8>,
}

impl Chord {
    /// Scale degrees the chord occupies, root first.
    pub fn degrees(&self) -> Vec<u8> {
        self.quality
            .offsets()
            .iter()
            .map(|&o| (self.root + o) % 12)
            .collect()
    }

    /// Chord symbol on a spelled root, e.g. "Dm" or "Bø7".
    pub fn symbol(&self, root_name: &str) -> String {
        format!("{}{}", root_name, self.quality.suffix())
    }

    /// Roman-numeral label from the root degree's numeral, lowercased for
    /// chords with a minor third ("bIII" -> "biii°").
    pub fn numeral(&self, root_numeral: &str) -> String {
        let base = if self.quality.is_minor() {
            root_numeral.to_lowercase()
        } else {
            root_numeral.to_string()
        };
        format!("{}{}", base, self.quality.numeral_suffix())
    }
}

/// Chords found in a scale, grouped by family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordListing {
    pub triads: Vec<Chord>,
    pub sevenths: Vec<Chord>,
}

impl ChordListing {
    /// All chords, triads first.
    pub fn iter(&self) -> impl Iterator<Item = &Chord> {
        self.triads.iter().chain(self.sevenths.iter())
    }

    pub fn len(&self) -> usize {
        self.triads.len() + self.sevenths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triads.is_empty() && self.sevenths.is_empty()
    }
}

/// Whether every note of `quality` on `root` is in `set`.
pub fn is_available(set: IntervalSet, root: u8, quality: ChordQuality) -> bool {
    quality
        .offsets()
        .iter()
        .all(|&o| set.contains(root as i64 + o as i64))
}

/// Playback pitches for `quality` on `root`, in semitones above the tonic.
///
/// Dense voicing reduces the template offsets, not the pitches: G major
/// over a C tonic is `[7, 11, 2]`, the fifth dropping below the root.
pub fn voicing(root: u8, quality: ChordQuality, dense: bool) -> Vec<i8> {
    quality
        .offsets()
        .iter()
        .map(|&o| {
            let mut offset = o as i8;
            if dense {
                while offset >= 6 {
                    offset -= 12;
                }
            }
            root as i8 + offset
        })
        .collect()
}

/// Every available triad and seventh in `set`.
pub fn find_chords(set: IntervalSet, options: &ChordOptions) -> ChordListing {
    let triads = TRIADS
        .iter()
        .copied()
        .filter(|q| options.include_suspended || !q.is_suspended())
        .collect::<Vec<_>>();
    ChordListing {
        triads: scan(set, &triads, options.dense_voicing),
        sevenths: scan(set, &SEVENTHS, options.dense_voicing),
    }
}

fn scan(set: IntervalSet, templates: &[ChordQuality], dense: bool) -> Vec<Chord> {
    set.degrees()
        .flat_map(|root| {
            templates
                .iter()
                .copied()
                .filter(move |&q| is_available(set, root, q))
                .map(move |q| Chord {
                    root,
                    quality: q,
                    voicing: voicing(root, q, dense),
                })
        })
        .collect()
}
