// Scale name registry: canonical number -> human-readable names.
//
// The registry is external data (`data/scale_names.json`, a JSON object
// keyed by decimal canonical number whose values are ordered name lists,
// first name preferred). JSON string in via `from_json()`, typed struct
// out; `default_registry()` embeds the shipped file at compile time.
//
// Consumers only need the `ScaleNameLookup` capability, so the mode engine
// and the scale-identity display can be driven by any table. A missing
// entry is never an error; `display_name()` falls back to "Scale #<n>".
//
// Iteration uses `BTreeMap` so search results and listings are
// deterministic.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::scale::ScaleModel;

/// Read-only name lookup keyed by canonical number.
pub trait ScaleNameLookup {
    /// All names for `number`, preferred first, or None if unknown.
    fn lookup(&self, number: u16) -> Option<&[String]>;

    /// The preferred name, or a placeholder built from the number.
    fn display_name(&self, number: u16) -> String {
        self.lookup(number)
            .and_then(|names| names.first())
            .cloned()
            .unwrap_or_else(|| fallback_name(number))
    }

    /// Every name for `number`; empty if unknown.
    fn names(&self, number: u16) -> Vec<String> {
        self.lookup(number).map(<[String]>::to_vec).unwrap_or_default()
    }
}

/// Placeholder name for scales the registry doesn't know.
pub fn fallback_name(number: u16) -> String {
    format!("Scale #{number}")
}

/// Ian Ring's reference page for a scale.
pub fn ian_ring_url(number: u16) -> String {
    format!("https://ianring.com/musictheory/scales/{number}")
}

/// One (name, number) pair; a scale with aliases yields one entry per alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub name: String,
    pub number: u16,
}

/// A loaded scale name table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScaleNameRegistry {
    names: BTreeMap<u16, Vec<String>>,
}

impl ScaleNameRegistry {
    /// Parse a registry from a JSON object string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a registry from a JSON file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let data = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&data)?)
    }

    /// Number of scales with at least one name.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Every alias of every scale, sorted by name. Ties keep number order.
    pub fn all_entries(&self) -> Vec<RegistryEntry> {
        let mut all: Vec<RegistryEntry> = self
            .names
            .iter()
            .flat_map(|(&number, names)| {
                names.iter().map(move |name| RegistryEntry {
                    name: name.clone(),
                    number,
                })
            })
            .collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Entries whose name contains `term`, ignoring case. A blank term
    /// matches everything.
    pub fn search(&self, term: &str) -> Vec<RegistryEntry> {
        let term = term.trim().to_lowercase();
        let all = self.all_entries();
        if term.is_empty() {
            return all;
        }
        all.into_iter()
            .filter(|e| e.name.to_lowercase().contains(&term))
            .collect()
    }
}

impl ScaleNameLookup for ScaleNameRegistry {
    fn lookup(&self, number: u16) -> Option<&[String]> {
        self.names
            .get(&number)
            .map(Vec::as_slice)
            .filter(|names| !names.is_empty())
    }
}

/// Load the default registry embedded at compile time.
///
/// Panics if the embedded JSON is malformed (should never happen in a
/// released build).
pub fn default_registry() -> ScaleNameRegistry {
    let json = include_str!("../../data/scale_names.json");
    ScaleNameRegistry::from_json(json).expect("embedded scale_names.json is malformed")
}

/// Headline for the current scale: tonic spelling, preferred name, number.
/// For example "C Major (2741)".
pub fn scale_title(model: &ScaleModel, lookup: &impl ScaleNameLookup) -> String {
    let number = model.canonical_number();
    format!(
        "{} {} ({})",
        model.tonic_name(),
        lookup.display_name(number),
        number
    )
}
