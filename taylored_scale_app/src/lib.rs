// Taylored Scale application layer.
//
// Everything between the pure theory core and a renderer: label notation
// systems, instrument layouts, the query-string codec used for permalinks,
// the JSON view configuration, and the `Session` that owns the scale model
// and hands out serializable snapshots.
//
// Architecture:
// - notation.rs: Label systems (letters, degrees, intervals, solfege, ...)
// - layout.rs: Fretboard, piano keyboard, and pitch-wheel position tables
// - query.rs: `tonic=&intervals=` / `t=&i=` encode and decode, permalinks
// - config.rs: `ViewConfig` (tuning, fret range, colors, notations)
// - session.rs: `Session` (model + config + registry) and `ScaleSnapshot`
//
// The `taylored-scale` binary in main.rs is a thin CLI over `Session`.

pub mod config;
pub mod layout;
pub mod notation;
pub mod query;
pub mod session;

pub use config::ViewConfig;
pub use notation::NotationSystem;
pub use query::{QueryError, QueryFormat, ScaleQuery};
pub use session::{ScaleSnapshot, Session};
