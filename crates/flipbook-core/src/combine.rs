//! Descriptor flattening and normalization.
//!
//! The authoring surface hands over zero, one, or many descriptors per
//! slot. `combine_animations` flattens one slot; `combine` flattens any
//! number of slots and merges descriptors that target the same property
//! into a single widened descriptor.

use serde::{Deserialize, Serialize};

use crate::data::Animation;
use crate::ease::Ease;

/// One or many descriptors, as accepted at the authoring surface.
/// Deserializes untagged, so JSON may supply an object or an array.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Animations {
    One(Animation),
    Many(Vec<Animation>),
}

impl Animations {
    pub fn into_vec(self) -> Vec<Animation> {
        match self {
            Animations::One(anim) => vec![anim],
            Animations::Many(list) => list,
        }
    }
}

impl From<Animation> for Animations {
    fn from(anim: Animation) -> Self {
        Animations::One(anim)
    }
}

impl From<Vec<Animation>> for Animations {
    fn from(list: Vec<Animation>) -> Self {
        Animations::Many(list)
    }
}

/// Flatten one authoring slot; `None` yields the empty list.
pub fn combine_animations(animations: Option<Animations>) -> Vec<Animation> {
    animations.map(Animations::into_vec).unwrap_or_default()
}

/// Flatten all inputs and merge descriptors targeting the same property.
///
/// Merge rule: `from = min`, `to = max`, `durationInFrames = max`,
/// `delay = min` (absent as 0), and the easing curves are blended to their
/// pointwise mean. Endpoint options merge by keeping whichever side is
/// present. First-appearance order is preserved; a singleton input comes
/// back unchanged.
pub fn combine(inputs: impl IntoIterator<Item = Option<Animations>>) -> Vec<Animation> {
    let mut out: Vec<Animation> = Vec::new();
    for anim in inputs.into_iter().flat_map(combine_animations) {
        match out.iter_mut().find(|a| a.property == anim.property) {
            Some(existing) => merge_into(existing, anim),
            None => out.push(anim),
        }
    }
    out
}

fn merge_into(existing: &mut Animation, incoming: Animation) {
    existing.from = merge_opt(existing.from, incoming.from, f32::min);
    existing.to = merge_opt(existing.to, incoming.to, f32::max);
    existing.duration_in_frames =
        merge_opt(existing.duration_in_frames, incoming.duration_in_frames, u32::max);
    existing.delay = Some(existing.delay.unwrap_or(0).min(incoming.delay.unwrap_or(0)));
    let base = std::mem::take(&mut existing.ease);
    existing.ease = Ease::blend(base, incoming.ease);
}

fn merge_opt<T>(a: Option<T>, b: Option<T>, pick: impl Fn(T, T) -> T) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(pick(a, b)),
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}
