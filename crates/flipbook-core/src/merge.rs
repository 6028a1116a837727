//! Cross-direction merging.
//!
//! Entrance is always the base, exit always the overlay. Per-key rules:
//! `transform` values concatenate (space-joined, trimmed), shared numeric
//! keys multiply (compounding scalar effects such as two opacities), and
//! everything else the exit side overwrites.

use crate::property::TRANSFORM_KEY;
use crate::style::{Style, StyleValue};

/// Merge the entrance and exit composed styles into the final style.
pub fn merge_directions(entrance: &Style, exit: &Style) -> Style {
    let mut result = entrance.clone();
    for (key, value) in exit {
        if key == TRANSFORM_KEY {
            let base = result.get(key).and_then(StyleValue::as_text).unwrap_or("");
            let overlay = value.as_text().unwrap_or("");
            let joined = format!("{base} {overlay}");
            result.insert(key.clone(), StyleValue::Text(joined.trim().to_string()));
        } else {
            match (result.get(key).and_then(StyleValue::as_number), value) {
                (Some(existing), StyleValue::Number(incoming)) => {
                    result.insert(key.clone(), StyleValue::Number(existing * incoming));
                }
                _ => {
                    result.insert(key.clone(), value.clone());
                }
            }
        }
    }
    result
}
