// Query-string codec for sharing a scale.
//
// Two encodings are understood:
// - long:   `tonic=<n>&intervals=<bitstring>` (degree 0 first, e.g.
//           `tonic=0&intervals=101011010101`)
// - packed: `t=<n>&i=<hex>` where hex is the canonical number
//           (`t=0&i=ab5`)
//
// Parsing accepts an optional leading `?`, ignores unknown keys, empty
// pairs, and keys with empty values, and prefers the long keys when both
// forms are present. Bitstrings
// shorter than 12 are padded with zeros; the root is forced on either way.
// The tonic is kept as given and normalized when applied to a model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use taylored_scale_theory::{IntervalSet, ScaleModel, TheoryError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("'{value}' is not a valid tonic")]
    InvalidTonic { value: String },

    #[error("'{value}' is not a valid interval bitstring")]
    InvalidBitstring { value: String },

    #[error("'{value}' is not a valid hex scale number")]
    InvalidHex { value: String },

    #[error(transparent)]
    Theory(#[from] TheoryError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryFormat {
    #[default]
    Long,
    Packed,
}

/// The parts of a scale a query string can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScaleQuery {
    pub tonic: Option<i64>,
    pub intervals: Option<IntervalSet>,
}

impl ScaleQuery {
    pub fn parse(query: &str) -> Result<Self, QueryError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut long_tonic = None;
        let mut short_tonic = None;
        let mut long_intervals = None;
        let mut short_intervals = None;

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if value.is_empty() {
                continue;
            }
            match key {
                "tonic" => long_tonic = Some(parse_tonic(value)?),
                "t" => short_tonic = Some(parse_tonic(value)?),
                "intervals" => long_intervals = Some(parse_bitstring(value)?),
                "i" => short_intervals = Some(parse_hex(value)?),
                _ => {}
            }
        }

        Ok(ScaleQuery {
            tonic: long_tonic.or(short_tonic),
            intervals: long_intervals.or(short_intervals),
        })
    }

    /// Apply whatever the query carries; absent parts leave the model alone.
    pub fn apply(&self, model: &mut ScaleModel) {
        if let Some(tonic) = self.tonic {
            model.set_tonic(tonic);
        }
        if let Some(intervals) = self.intervals {
            model.set_interval_set(intervals);
        }
    }
}

impl FromStr for ScaleQuery {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScaleQuery::parse(s)
    }
}

fn parse_tonic(value: &str) -> Result<i64, QueryError> {
    value.trim().parse().map_err(|_| QueryError::InvalidTonic {
        value: value.to_string(),
    })
}

/// Parse a 0/1 bitstring, degree 0 first. Shorter than 12 is zero-padded.
pub fn parse_bitstring(value: &str) -> Result<IntervalSet, QueryError> {
    let flags = value
        .chars()
        .map(|c| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            _ => Err(QueryError::InvalidBitstring {
                value: value.to_string(),
            }),
        })
        .collect::<Result<Vec<u8>, _>>()?;
    Ok(IntervalSet::from_flags(&flags)?)
}

fn parse_hex(value: &str) -> Result<IntervalSet, QueryError> {
    let invalid = || QueryError::InvalidHex {
        value: value.to_string(),
    };
    // from_str_radix alone would take a leading '+'.
    if !value.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let number = u32::from_str_radix(value, 16).map_err(|_| invalid())?;
    Ok(IntervalSet::from_canonical_number(number)?)
}

/// Serialize the model's tonic and intervals.
pub fn to_query(model: &ScaleModel, format: QueryFormat) -> String {
    match format {
        QueryFormat::Long => format!(
            "tonic={}&intervals={}",
            model.tonic(),
            model.intervals().to_bitstring()
        ),
        QueryFormat::Packed => format!("t={}&i={:x}", model.tonic(), model.canonical_number()),
    }
}

/// `base` (any existing query dropped) with the model's query appended.
pub fn permalink(base: &str, model: &ScaleModel, format: QueryFormat) -> String {
    let base = base.split('?').next().unwrap_or(base);
    format!("{}?{}", base, to_query(model, format))
}

impl fmt::Display for ScaleQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(t) = self.tonic {
            parts.push(format!("tonic={t}"));
        }
        if let Some(i) = self.intervals {
            parts.push(format!("intervals={}", i.to_bitstring()));
        }
        f.write_str(&parts.join("&"))
    }
}
