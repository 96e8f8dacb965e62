// Taylored Scale theory core.
//
// The computational part of the Taylored Scale visualizer: a tonic plus a
// 12-tone interval subset, and everything derived from them. No rendering,
// no I/O beyond parsing JSON strings handed in by the caller.
//
// Architecture:
// - pitch.rs: Pitch-class table (12 positions, enharmonic spellings, letters)
// - interval.rs: Interval names per degree, diatonic numbers, Roman numerals
// - scale.rs: `IntervalSet` value type, `rotate()`, and the mutable
//   `ScaleModel` (tonic + degrees) with note-name / numeral derivations
// - command.rs: `ScaleCommand`, the serializable mutation API
// - mode.rs: Mode enumeration, prime-form ordering, go-parallel / go-relative
// - chord.rs: Triad and seventh detection, playback voicings
// - registry.rs: Canonical number -> scale names lookup, search, titles
// - error.rs: `TheoryError`
//
// Everything is single-threaded and deterministic: the model is owned by
// the caller and every derivation is a pure function of its current state.

pub mod chord;
pub mod command;
pub mod error;
pub mod interval;
pub mod mode;
pub mod pitch;
pub mod registry;
pub mod scale;

// Re-export key types at crate root for convenience.
pub use chord::{Chord, ChordFamily, ChordListing, ChordOptions, ChordQuality, find_chords};
pub use command::ScaleCommand;
pub use error::TheoryError;
pub use mode::{ModeEntry, ModeOrder, modes};
pub use registry::{ScaleNameLookup, ScaleNameRegistry, default_registry};
pub use scale::{IntervalDegree, IntervalSet, ScaleModel, rotate};
