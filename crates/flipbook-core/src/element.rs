//! Whole-pipeline entry point: one animated element on a timeline.
//!
//! `style_at` is the per-frame pull: compose both direction sets, merge,
//! hand back the final style plus diagnostics. Every call is independent
//! and pure in its inputs, so hosts may seek arbitrarily and may memoize
//! on `(descriptors, frame, total duration)` themselves; the core keeps no
//! per-frame history.

use crate::combine::{combine_animations, Animations};
use crate::compose::compose;
use crate::data::{Animation, Direction};
use crate::diag::Diagnostic;
use crate::merge::merge_directions;
use crate::style::Style;

/// Final style for one frame plus everything diagnosed on the way there.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleOutput {
    pub style: Style,
    pub diagnostics: Vec<Diagnostic>,
}

impl StyleOutput {
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// An element with entrance/exit descriptor sets over a fixed timeline.
///
/// Entrance descriptors anchor at frame 0 (plus delay); exit descriptors
/// anchor to end at `duration_in_frames`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimatedElement {
    animation_in: Vec<Animation>,
    animation_out: Vec<Animation>,
    duration_in_frames: u32,
}

impl AnimatedElement {
    /// Element with the given total timeline duration and no animations.
    pub fn new(duration_in_frames: u32) -> Self {
        Self {
            duration_in_frames,
            ..Self::default()
        }
    }

    pub fn with_animation_in(mut self, animations: impl Into<Animations>) -> Self {
        self.animation_in = combine_animations(Some(animations.into()));
        self
    }

    pub fn with_animation_out(mut self, animations: impl Into<Animations>) -> Self {
        self.animation_out = combine_animations(Some(animations.into()));
        self
    }

    pub fn animation_in(&self) -> &[Animation] {
        &self.animation_in
    }

    pub fn animation_out(&self) -> &[Animation] {
        &self.animation_out
    }

    pub fn duration_in_frames(&self) -> u32 {
        self.duration_in_frames
    }

    /// Compute the final style snapshot for `frame`.
    pub fn style_at(&self, frame: f32) -> StyleOutput {
        let total = self.duration_in_frames as f32;
        let entrance = compose(&self.animation_in, frame, total, Direction::In);
        let exit = compose(&self.animation_out, frame, total, Direction::Out);

        let style = merge_directions(&entrance.style, &exit.style);
        let mut diagnostics = entrance.diagnostics;
        diagnostics.extend(exit.diagnostics);
        StyleOutput { style, diagnostics }
    }
}
