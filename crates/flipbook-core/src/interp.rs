//! Clamped interpolation.
//!
//! `interpolate` is the numeric primitive: map an input domain to an output
//! range through an easing curve, clamped at both ends. `interpolate_value`
//! applies it to one descriptor at one frame with the fail-soft rules:
//! invalid endpoints degrade to `from`, a missing duration defaults to 1.

use crate::data::Animation;
use crate::diag::{record, Diagnostic};
use crate::ease::Ease;

/// Map `input` from `[in0, in1]` to `[out0, out1]` through `ease`, clamped
/// at both ends: inputs before `in0` yield `out0`, beyond `in1` yield
/// `out1`.
pub fn interpolate(input: f32, input_range: [f32; 2], output_range: [f32; 2], ease: &Ease) -> f32 {
    let [in0, in1] = input_range;
    let [out0, out1] = output_range;
    let span = (in1 - in0).max(f32::EPSILON);
    let t = ((input - in0) / span).clamp(0.0, 1.0);
    out0 + (out1 - out0) * ease.evaluate(t)
}

/// Interpolated value of one descriptor at `frame` (frame 0 = transition
/// start). Pure in `(frame, anim)`; diagnostics go to `sink`.
pub fn interpolate_value(frame: f32, anim: &Animation, sink: &mut Vec<Diagnostic>) -> f32 {
    let from = anim.from.unwrap_or(f32::NAN);
    let to = anim.to.unwrap_or(f32::NAN);
    // `Some(0)` clamps to 1 silently; only true absence is diagnosed.
    let duration = anim.duration_in_frames.unwrap_or(1).max(1) as f32;

    if !from.is_finite() || !to.is_finite() {
        record(
            sink,
            Diagnostic::InvalidEndpoints {
                property: anim.property.clone(),
                from: anim.from,
                to: anim.to,
            },
        );
        return from;
    }

    if anim.duration_in_frames.is_none() {
        record(
            sink,
            Diagnostic::MissingDuration {
                property: anim.property.clone(),
            },
        );
    }

    interpolate(frame, [0.0, duration], [from, to], &anim.ease)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32, eps: f32) {
        assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
    }

    #[test]
    fn clamps_at_both_ends() {
        let anim = Animation::new("opacity", 0.0, 1.0, 30);
        let mut diags = Vec::new();
        approx(interpolate_value(-10.0, &anim, &mut diags), 0.0, 1e-6);
        approx(interpolate_value(0.0, &anim, &mut diags), 0.0, 1e-6);
        approx(interpolate_value(30.0, &anim, &mut diags), 1.0, 1e-6);
        approx(interpolate_value(100.0, &anim, &mut diags), 1.0, 1e-6);
        assert!(diags.is_empty());
    }

    #[test]
    fn linear_midpoint() {
        let anim = Animation::new("opacity", 0.0, 1.0, 30);
        let mut diags = Vec::new();
        approx(interpolate_value(15.0, &anim, &mut diags), 0.5, 1e-6);
    }

    #[test]
    fn invalid_endpoints_degrade_to_from() {
        let mut anim = Animation::new("opacity", 0.25, f32::NAN, 30);
        let mut diags = Vec::new();
        approx(interpolate_value(10.0, &anim, &mut diags), 0.25, 1e-6);
        assert_eq!(diags.len(), 1);

        // Missing duration is not diagnosed once endpoints already failed.
        anim.duration_in_frames = None;
        let mut diags = Vec::new();
        interpolate_value(10.0, &anim, &mut diags);
        assert_eq!(diags.len(), 1);
        assert!(matches!(diags[0], Diagnostic::InvalidEndpoints { .. }));
    }

    #[test]
    fn missing_duration_defaults_to_one_frame() {
        let mut anim = Animation::new("opacity", 0.0, 1.0, 30);
        anim.duration_in_frames = None;
        let mut diags = Vec::new();
        approx(interpolate_value(1.0, &anim, &mut diags), 1.0, 1e-6);
        assert_eq!(
            diags,
            vec![Diagnostic::MissingDuration {
                property: "opacity".into()
            }]
        );
    }

    #[test]
    fn zero_duration_clamps_silently() {
        let anim = Animation::new("opacity", 0.0, 1.0, 0);
        let mut diags = Vec::new();
        approx(interpolate_value(1.0, &anim, &mut diags), 1.0, 1e-6);
        assert!(diags.is_empty());
    }

    #[test]
    fn monotonic_for_monotonic_ease() {
        let anim = Animation::new("opacity", 0.0, 1.0, 60).with_ease(Ease::Quad);
        let mut diags = Vec::new();
        let mut last = f32::NEG_INFINITY;
        for f in 0..=60 {
            let v = interpolate_value(f as f32, &anim, &mut diags);
            assert!(v >= last, "not monotonic at frame {f}: {v} < {last}");
            last = v;
        }
    }
}
