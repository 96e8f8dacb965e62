// Commands that mutate the scale model.
//
// All mutations a presentation layer can request are expressed as a
// `ScaleCommand`, applied with `ScaleModel::apply()` (see `scale.rs`). The
// enum is serde-serializable so a UI can hand commands across a boundary
// (message channel, web bridge) as JSON.
//
// Indices are plain integers and wrap mod 12 when applied; only interval
// vectors and canonical numbers can be rejected.

use serde::{Deserialize, Serialize};

use crate::scale::IntervalSet;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScaleCommand {
    /// Move the tonic (resets the tonic spelling).
    SetTonic { tonic: i64 },
    /// Cycle the tonic spelling.
    EnharmonicizeTonic,
    /// Replace the interval vector (0/1 entries, at most 12).
    SetIntervals { intervals: Vec<u8> },
    /// Flip one degree on or off. The root stays on.
    ToggleInterval { degree: i64 },
    /// Cycle one degree's interval name.
    EnharmonicizeInterval { degree: i64 },
    /// Jump to a scale by its canonical number, keeping the tonic.
    SetCanonicalNumber { number: u32 },
    /// Replace the intervals with a mode's, keeping the tonic.
    GoParallel { mode: IntervalSet },
    /// Move the tonic to a mode's root, keeping the pitch content.
    GoRelative { mode: IntervalSet },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_serialization_roundtrip() {
        let commands = vec![
            ScaleCommand::SetTonic { tonic: 7 },
            ScaleCommand::EnharmonicizeTonic,
            ScaleCommand::SetIntervals {
                intervals: vec![1, 0, 1],
            },
            ScaleCommand::GoRelative {
                mode: IntervalSet::MAJOR,
            },
        ];
        for cmd in commands {
            let json = serde_json::to_string(&cmd).unwrap();
            let restored: ScaleCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(cmd, restored);
        }
    }

    #[test]
    fn test_command_json_shape() {
        let json = r#"{"action": "toggle_interval", "degree": 4}"#;
        let cmd: ScaleCommand = serde_json::from_str(json).unwrap();
        assert_eq!(cmd, ScaleCommand::ToggleInterval { degree: 4 });

        let bad = r#"{"action": "go_parallel", "mode": 2740}"#;
        assert!(serde_json::from_str::<ScaleCommand>(bad).is_err());
    }
}
