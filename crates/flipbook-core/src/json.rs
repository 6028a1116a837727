//! Descriptor JSON loading.
//!
//! Accepts the authoring-layer shape: one descriptor object or an array of
//! them, camelCase fields, easing by name (`"linear"`, `"ease"`, ...) or
//! control points (`{"bezier": [x1, y1, x2, y2]}`).
//!
//! Structural problems (malformed JSON, wrong types) are hard errors.
//! Semantic problems (missing endpoints or duration) are kept: they are
//! logged here and degraded per descriptor at compute time.

use thiserror::Error;

use crate::combine::Animations;
use crate::data::Animation;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("animation json parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse one descriptor or an array of descriptors from JSON.
pub fn parse_animations_json(s: &str) -> Result<Vec<Animation>, ParseError> {
    let parsed: Animations = serde_json::from_str(s)?;
    let animations = parsed.into_vec();
    for anim in &animations {
        for diag in anim.validate() {
            diag.emit();
        }
    }
    Ok(animations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ease::Ease;

    #[test]
    fn parses_a_single_descriptor_object() {
        let json = r#"{
            "property": "opacity",
            "from": 0,
            "to": 1,
            "durationInFrames": 30,
            "ease": "linear"
        }"#;
        let anims = parse_animations_json(json).unwrap();
        assert_eq!(anims, vec![Animation::new("opacity", 0.0, 1.0, 30)]);
    }

    #[test]
    fn parses_an_array_with_bezier_easing() {
        let json = r#"[
            { "property": "scale", "from": 0, "to": 1, "durationInFrames": 30,
              "ease": { "bezier": [0.25, 0.1, 0.25, 1.0] }, "delay": 5 }
        ]"#;
        let anims = parse_animations_json(json).unwrap();
        assert_eq!(anims.len(), 1);
        assert_eq!(anims[0].ease, Ease::Bezier([0.25, 0.1, 0.25, 1.0]));
        assert_eq!(anims[0].delay, Some(5));
    }

    #[test]
    fn missing_fields_parse_but_are_flagged() {
        let json = r#"{ "property": "opacity", "to": 1 }"#;
        let anims = parse_animations_json(json).unwrap();
        assert_eq!(anims[0].from, None);
        assert_eq!(anims[0].duration_in_frames, None);
        assert_eq!(anims[0].validate().len(), 2);
    }

    #[test]
    fn malformed_json_is_a_hard_error() {
        assert!(parse_animations_json("{ not json").is_err());
        assert!(parse_animations_json(r#"{"property": 42}"#).is_err());
    }
}
