//! Style values and style maps.
//!
//! A `Style` is a partial mapping from style key to value, used at every
//! aggregation level: the fragment one descriptor produces for one frame,
//! the per-direction fold, and the final merged snapshot. A `BTreeMap`
//! keeps iteration and serialization deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single style entry: numeric (e.g. `opacity`) or textual
/// (e.g. `transform`). Serializes untagged so a `Style` reads like a plain
/// CSS-ish object.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f32),
    Text(String),
}

impl StyleValue {
    #[inline]
    pub fn as_number(&self) -> Option<f32> {
        match self {
            StyleValue::Number(n) => Some(*n),
            StyleValue::Text(_) => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            StyleValue::Number(_) => None,
        }
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        StyleValue::Number(n)
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

/// Partial style-key to value mapping for one frame.
pub type Style = BTreeMap<String, StyleValue>;
