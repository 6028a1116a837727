//! Descriptor data model.
//!
//! An [`Animation`] is the unit of declarative intent: one visual property,
//! a numeric range, a duration in frames, an easing curve, and an optional
//! delay. Descriptors are immutable once constructed; the compute path
//! never mutates them. Serialized field names match the authoring layer
//! (`durationInFrames`, camelCase).

use serde::{Deserialize, Serialize};

use crate::diag::Diagnostic;
use crate::ease::Ease;

/// Entrance ("in") vs exit ("out") phase of an animated element's lifetime.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
}

/// Declarative spec of one property's animated transition.
///
/// `from`/`to` are required by contract but modeled as `Option` so that
/// malformed authored data degrades per descriptor instead of failing to
/// load. Unknown `property` names are inert, not errors.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    pub property: String,
    #[serde(default)]
    pub from: Option<f32>,
    #[serde(default)]
    pub to: Option<f32>,
    /// Frames the transition spans. `None` is diagnosed and treated as 1.
    #[serde(default)]
    pub duration_in_frames: Option<u32>,
    /// Frames before the transition begins, relative to its anchor.
    #[serde(default)]
    pub delay: Option<u32>,
    #[serde(default)]
    pub ease: Ease,
}

impl Animation {
    /// Build a well-formed descriptor with a linear ease and no delay.
    pub fn new(property: impl Into<String>, from: f32, to: f32, duration_in_frames: u32) -> Self {
        Self {
            property: property.into(),
            from: Some(from),
            to: Some(to),
            duration_in_frames: Some(duration_in_frames),
            delay: None,
            ease: Ease::Linear,
        }
    }

    pub fn with_delay(mut self, delay: u32) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Diagnostics this descriptor would produce when computed, without
    /// computing anything. Empty means the descriptor is clean.
    pub fn validate(&self) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        let finite = |v: Option<f32>| v.is_some_and(f32::is_finite);
        if !finite(self.from) || !finite(self.to) {
            out.push(Diagnostic::InvalidEndpoints {
                property: self.property.clone(),
                from: self.from,
                to: self.to,
            });
        }
        if self.duration_in_frames.is_none() {
            out.push(Diagnostic::MissingDuration {
                property: self.property.clone(),
            });
        }
        out
    }
}
