// Application session: the one owner of the scale model.
//
// A `Session` holds the `ScaleModel`, the `ViewConfig`, and the injected
// scale-name registry. UI code sends `ScaleCommand`s in through `apply()`
// and reads everything back as a `ScaleSnapshot`: a plain, serializable
// bundle of every derivation a renderer needs (identity, per-degree labels,
// modes, chords, instrument layouts, permalink query). Renderers stay
// stateless; nothing in a snapshot is ever written back.
//
// Labels come in two indexings. Degree-indexed surfaces (scale builder,
// keyboard dots) use `config.label_notation`; pitch-indexed surfaces
// (fretboard, wheel) use `config.note_notation`. Letter labels are the
// model's spelled note names, so they follow the tonic and interval
// enharmonic choices; an unspellable slot falls back to the pitch class's
// default name.

use serde::{Deserialize, Serialize};
use taylored_scale_theory::chord::ChordFamily;
use taylored_scale_theory::pitch::PITCH_CLASSES;
use taylored_scale_theory::registry::{RegistryEntry, ian_ring_url, scale_title};
use taylored_scale_theory::{
    ChordQuality, ModeEntry, ScaleCommand, ScaleModel, ScaleNameLookup, ScaleNameRegistry,
    TheoryError, find_chords, modes, rotate,
};

use crate::config::ViewConfig;
use crate::layout::{FretNote, PianoKey, WheelSlot, fretboard, keyboard, wheel};
use crate::notation::NotationSystem;
use crate::query::{QueryError, QueryFormat, ScaleQuery, to_query};

/// Everything known about one scale degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeView {
    pub degree: u8,
    pub pitch_class: u8,
    pub on: bool,
    pub interval: String,
    /// Spelled note name; None if the selected interval name can't be
    /// spelled on this pitch class.
    pub note_name: Option<String>,
    pub numeral: String,
    pub label: String,
    pub color: String,
}

/// A chord with its display strings resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordView {
    pub family: ChordFamily,
    pub root: u8,
    pub quality: ChordQuality,
    pub symbol: String,
    pub numeral: String,
    pub voicing: Vec<i8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleSnapshot {
    pub tonic: u8,
    pub tonic_name: String,
    pub tonic_spellings: Vec<String>,
    pub intervals: Vec<u8>,
    pub number: u16,
    pub names: Vec<String>,
    pub title: String,
    pub ian_ring_url: String,
    pub degrees: Vec<DegreeView>,
    /// Labels for pitch-indexed surfaces, index 0 = C.
    pub pitch_labels: Vec<String>,
    pub modes: Vec<ModeEntry>,
    pub chords: Vec<ChordView>,
    pub fretboard: Vec<FretNote>,
    pub keyboard: Vec<PianoKey>,
    pub wheel: Vec<WheelSlot>,
    pub query: String,
}

pub struct Session {
    model: ScaleModel,
    config: ViewConfig,
    registry: ScaleNameRegistry,
}

impl Session {
    pub fn new(model: ScaleModel, config: ViewConfig, registry: ScaleNameRegistry) -> Self {
        Session {
            model,
            config,
            registry,
        }
    }

    pub fn model(&self) -> &ScaleModel {
        &self.model
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ViewConfig) {
        self.config = config;
    }

    pub fn registry(&self) -> &ScaleNameRegistry {
        &self.registry
    }

    pub fn apply(&mut self, command: &ScaleCommand) -> Result<(), TheoryError> {
        self.model.apply(command)
    }

    /// Restore tonic and intervals from a query string. On error nothing
    /// changes.
    pub fn apply_query(&mut self, query: &str) -> Result<(), QueryError> {
        ScaleQuery::parse(query)?.apply(&mut self.model);
        Ok(())
    }

    /// Registry entries matching `term`.
    pub fn search(&self, term: &str) -> Vec<RegistryEntry> {
        self.registry.search(term)
    }

    /// Labels indexed by degree (index 0 = tonic).
    pub fn labels_by_degree(&self, system: NotationSystem) -> [String; 12] {
        if system.is_absolute() {
            let tonic = self.model.tonic() as usize;
            let spelled = self.model.note_names();
            std::array::from_fn(|d| {
                spelled[d]
                    .clone()
                    .unwrap_or_else(|_| PITCH_CLASSES[(tonic + d) % 12].name().to_string())
            })
        } else {
            system.labels().map(str::to_string)
        }
    }

    /// Labels indexed by pitch class (index 0 = C).
    pub fn labels_by_pitch_class(&self, system: NotationSystem) -> [String; 12] {
        rotate(
            &self.labels_by_degree(system),
            -(self.model.tonic() as i64),
        )
    }

    pub fn snapshot(&self) -> ScaleSnapshot {
        let model = &self.model;
        let tonic = model.tonic();
        let intervals = model.intervals();
        let number = model.canonical_number();
        let note_names = model.note_names();
        let numerals = model.roman_numerals();
        let labels = self.labels_by_degree(self.config.label_notation);
        let colors = self.config.degree_colors();

        let degrees: Vec<DegreeView> = model
            .degrees()
            .iter()
            .enumerate()
            .map(|(d, degree)| DegreeView {
                degree: d as u8,
                pitch_class: ((tonic as usize + d) % 12) as u8,
                on: degree.on,
                interval: degree.name().to_string(),
                note_name: note_names[d].clone().ok(),
                numeral: numerals[d].to_string(),
                label: labels[d].clone(),
                color: colors[d].clone(),
            })
            .collect();

        let listing = find_chords(intervals, &self.config.chords);
        let root_name = |root: u8| {
            note_names[root as usize]
                .clone()
                .unwrap_or_else(|_| PITCH_CLASSES[(tonic + root) as usize % 12].name().to_string())
        };
        let chords = listing
            .iter()
            .map(|chord| ChordView {
                family: chord.quality.family(),
                root: chord.root,
                quality: chord.quality,
                symbol: chord.symbol(&root_name(chord.root)),
                numeral: chord.numeral(numerals[chord.root as usize]),
                voicing: chord.voicing.clone(),
            })
            .collect();

        ScaleSnapshot {
            tonic,
            tonic_name: model.tonic_name().to_string(),
            tonic_spellings: PITCH_CLASSES[tonic as usize]
                .tonic_spellings()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            intervals: model.boolean_intervals().to_vec(),
            number,
            names: self.registry.names(number),
            title: scale_title(model, &self.registry),
            ian_ring_url: ian_ring_url(number),
            degrees,
            pitch_labels: self
                .labels_by_pitch_class(self.config.note_notation)
                .to_vec(),
            modes: modes(intervals, &self.registry, self.config.mode_order),
            chords,
            fretboard: fretboard(tonic, intervals, &self.config.tuning, self.config.frets),
            keyboard: keyboard(tonic, intervals, self.config.piano_octaves),
            wheel: wheel(tonic, intervals, self.config.wheel),
            query: to_query(model, QueryFormat::Long),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(
            ScaleModel::default(),
            ViewConfig::default(),
            taylored_scale_theory::default_registry(),
        )
    }
}
