//! Property-name to style-fragment dispatch.
//!
//! A closed lookup table: recognized names build a one-entry fragment,
//! anything else resolves to the empty fragment (inert, not an error).
//! Extend by adding match arms; callers never change.

use crate::style::{Style, StyleValue};

pub const TRANSFORM_KEY: &str = "transform";
pub const OPACITY_KEY: &str = "opacity";

/// Build the style fragment for `property` at the interpolated `value`.
pub fn style_fragment(property: &str, value: f32) -> Style {
    let mut style = Style::new();
    match property {
        "scale" => {
            style.insert(
                TRANSFORM_KEY.to_string(),
                StyleValue::Text(format!("scale({value})")),
            );
        }
        "opacity" => {
            style.insert(OPACITY_KEY.to_string(), StyleValue::Number(value));
        }
        "translateX" => {
            style.insert(
                TRANSFORM_KEY.to_string(),
                StyleValue::Text(format!("translateX({value}px)")),
            );
        }
        "translateY" => {
            style.insert(
                TRANSFORM_KEY.to_string(),
                StyleValue::Text(format!("translateY({value}px)")),
            );
        }
        "rotate" => {
            style.insert(
                TRANSFORM_KEY.to_string(),
                StyleValue::Text(format!("rotate({value}deg)")),
            );
        }
        _ => {}
    }
    style
}
