// View configuration.
//
// Every presentation tunable lives in `ViewConfig`, loaded from JSON, so
// the session and renderers never hard-code tunings, fret ranges, or color
// schemes. Fields missing from the JSON fall back to their defaults, which
// reproduce the classic layout: letter names on the fretboard, degree
// labels on the scale builder, a 22-fret guitar in standard tuning, a
// two-octave keyboard, and the rainbow color scheme.
//
// See also: `session.rs`, which owns a `ViewConfig` and reads it when
// building a snapshot.

use std::path::Path;

use serde::{Deserialize, Serialize};
use taylored_scale_theory::{ChordOptions, ModeOrder};

use crate::layout::{STANDARD_TUNING, WheelOrder};
use crate::notation::NotationSystem;

/// One color per scale degree, tonic first.
pub const RAINBOW: [&str; 12] = [
    "#ff0000", "#ff8000", "#f8f800", "#88ff00", "#00f800", "#00ffc0", "#00f8f8", "#0080ff",
    "#0000ff", "#8000ff", "#ff00ff", "#ff0080",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Labels on degree-indexed surfaces (scale builder, keyboard).
    pub label_notation: NotationSystem,
    /// Labels on pitch-indexed surfaces (fretboard, wheel).
    pub note_notation: NotationSystem,
    /// Open-string pitch classes, lowest string first.
    pub tuning: Vec<u8>,
    /// Inclusive fret range.
    pub frets: (u8, u8),
    pub piano_octaves: u8,
    pub wheel: WheelOrder,
    pub mode_order: ModeOrder,
    pub chords: ChordOptions,
    /// CSS colors per degree. Must have 12 entries to be used; otherwise
    /// the rainbow scheme is substituted.
    pub colors: Vec<String>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            label_notation: NotationSystem::Degrees,
            note_notation: NotationSystem::Letters,
            tuning: STANDARD_TUNING.to_vec(),
            frets: (0, 22),
            piano_octaves: 2,
            wheel: WheelOrder::Chromatic,
            mode_order: ModeOrder::Rotation,
            chords: ChordOptions::default(),
            colors: RAINBOW.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ViewConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let data = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&data)?)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Color of each degree, tonic first.
    pub fn degree_colors(&self) -> Vec<String> {
        if self.colors.len() == 12 {
            self.colors.clone()
        } else {
            RAINBOW.iter().map(|c| c.to_string()).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = ViewConfig::from_json("{}").unwrap();
        assert_eq!(config, ViewConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = ViewConfig::from_json(
            r#"{
                "tuning": [7, 2, 7, 11, 2],
                "frets": [0, 12],
                "wheel": "fifths",
                "mode_order": "prime_form",
                "chords": {"include_suspended": true}
            }"#,
        )
        .unwrap();
        assert_eq!(config.tuning, vec![7, 2, 7, 11, 2]);
        assert_eq!(config.frets, (0, 12));
        assert_eq!(config.wheel, WheelOrder::Fifths);
        assert_eq!(config.mode_order, ModeOrder::PrimeForm);
        assert!(config.chords.include_suspended);
        assert!(!config.chords.dense_voicing);
        assert_eq!(config.piano_octaves, 2);
        assert_eq!(config.label_notation, NotationSystem::Degrees);
    }

    #[test]
    fn test_roundtrip() {
        let config = ViewConfig {
            note_notation: NotationSystem::Solfege,
            piano_octaves: 3,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(ViewConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_bad_colors_fall_back() {
        let config = ViewConfig {
            colors: vec!["#000".into()],
            ..Default::default()
        };
        assert_eq!(config.degree_colors().len(), 12);
        assert_eq!(config.degree_colors()[0], "#ff0000");
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(ViewConfig::from_json(r#"{"piano_octaves": "two"}"#).is_err());
    }
}
