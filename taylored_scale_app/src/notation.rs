// Label notation systems for the 12 positions.
//
// A notation system is a 12-entry table of enharmonic label lists; the
// first entry of each list is the default label. `Letters` is indexed by
// absolute pitch class, every other system by scale degree (semitones above
// the tonic).
//
// `Letters` reuses the pitch-class table from the theory crate so there is
// a single source of truth for note spellings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use taylored_scale_theory::pitch::PITCH_CLASSES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotationSystem {
    Letters,
    Degrees,
    Intervals,
    Solfege,
    Semitones,
    Blank,
}

const DEGREES: [&[&str]; 12] = [
    &["R", "1"],
    &["b2", "#1"],
    &["2"],
    &["b3", "#2"],
    &["3"],
    &["4"],
    &["T", "#4", "b5"],
    &["5"],
    &["b6", "#5"],
    &["6"],
    &["b7", "#6"],
    &["7"],
];

const SOLFEGE: [&[&str]; 12] = [
    &["do"],
    &["di", "ra"],
    &["re"],
    &["ri", "me"],
    &["mi"],
    &["fa"],
    &["fi", "se"],
    &["so", "sol"],
    &["si", "le"],
    &["la"],
    &["li", "te"],
    &["ti"],
];

const SEMITONES: [&[&str]; 12] = [
    &["0"],
    &["1"],
    &["2"],
    &["3"],
    &["4"],
    &["5"],
    &["6"],
    &["7"],
    &["8"],
    &["9"],
    &["10"],
    &["11"],
];

impl NotationSystem {
    pub const ALL: [NotationSystem; 6] = [
        NotationSystem::Letters,
        NotationSystem::Degrees,
        NotationSystem::Intervals,
        NotationSystem::Solfege,
        NotationSystem::Semitones,
        NotationSystem::Blank,
    ];

    /// Whether labels are indexed by absolute pitch class rather than degree.
    pub fn is_absolute(self) -> bool {
        self == NotationSystem::Letters
    }

    /// All labels for position `index` (wrapped mod 12), default first.
    pub fn spellings(self, index: i64) -> &'static [&'static str] {
        let i = index.rem_euclid(12) as usize;
        match self {
            NotationSystem::Letters => PITCH_CLASSES[i].spellings,
            NotationSystem::Degrees => DEGREES[i],
            NotationSystem::Intervals => taylored_scale_theory::interval::INTERVAL_NAMES[i],
            NotationSystem::Solfege => SOLFEGE[i],
            NotationSystem::Semitones => SEMITONES[i],
            NotationSystem::Blank => &[""],
        }
    }

    /// Default label of each position.
    pub fn labels(self) -> [&'static str; 12] {
        std::array::from_fn(|i| self.spellings(i as i64)[0])
    }

    pub fn name(self) -> &'static str {
        match self {
            NotationSystem::Letters => "letters",
            NotationSystem::Degrees => "degrees",
            NotationSystem::Intervals => "intervals",
            NotationSystem::Solfege => "solfege",
            NotationSystem::Semitones => "semitones",
            NotationSystem::Blank => "blank",
        }
    }
}

impl fmt::Display for NotationSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NotationSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        NotationSystem::ALL
            .iter()
            .copied()
            .find(|n| n.name() == lower)
            .ok_or_else(|| format!("unknown notation system '{s}'"))
    }
}
