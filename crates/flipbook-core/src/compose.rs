//! Per-direction style computation.
//!
//! `calculate_style` handles one descriptor: anchor the transition on the
//! timeline (entrance starts at `delay`, exit ends at `total_duration`),
//! interpolate, and build the fragment. `compose` left-folds a descriptor
//! list into one style map, skipping incomplete descriptors.

use crate::data::{Animation, Direction};
use crate::diag::{record, Diagnostic};
use crate::interp::interpolate_value;
use crate::property::style_fragment;
use crate::style::Style;

/// Per-direction fold result: the composed style plus everything that went
/// wrong while computing it. The style is always usable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Composed {
    pub style: Style,
    pub diagnostics: Vec<Diagnostic>,
}

/// Style fragment for one descriptor at `frame`.
///
/// The anchor default for an unset duration is a plain 1 (the
/// interpolator's `max(1, ..)` clamp is applied independently there, so an
/// explicit 0 shifts the anchor but still interpolates over one frame).
pub fn calculate_style(
    anim: &Animation,
    frame: f32,
    total_duration: f32,
    direction: Direction,
    sink: &mut Vec<Diagnostic>,
) -> Style {
    let duration = anim.duration_in_frames.unwrap_or(1) as f32;
    let delay = anim.delay.unwrap_or(0) as f32;
    let start_frame = match direction {
        Direction::In => delay,
        Direction::Out => total_duration - duration - delay,
    };
    let adjusted_frame = frame - start_frame;
    let value = interpolate_value(adjusted_frame, anim, sink);
    style_fragment(&anim.property, value)
}

/// Fold `animations` into one style map for `frame`.
///
/// Later descriptors overwrite earlier ones key-for-key; a descriptor with
/// an unset endpoint contributes nothing (identity fold step). Same inputs
/// always produce structurally equal output.
pub fn compose(
    animations: &[Animation],
    frame: f32,
    total_duration: f32,
    direction: Direction,
) -> Composed {
    let mut composed = Composed::default();
    if animations.is_empty() {
        return composed;
    }

    for anim in animations {
        if anim.from.is_none() || anim.to.is_none() {
            record(
                &mut composed.diagnostics,
                Diagnostic::IncompleteDescriptor {
                    property: anim.property.clone(),
                },
            );
            continue;
        }
        let fragment = calculate_style(
            anim,
            frame,
            total_duration,
            direction,
            &mut composed.diagnostics,
        );
        composed.style.extend(fragment);
    }
    composed
}
