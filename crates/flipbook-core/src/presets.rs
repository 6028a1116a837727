//! Ready-made descriptors. Pure data; every entry is a valid descriptor.

use crate::data::Animation;
use crate::ease::Ease;

pub fn fade_in() -> Animation {
    Animation::new("opacity", 0.0, 1.0, 30)
}

pub fn fade_out() -> Animation {
    Animation::new("opacity", 1.0, 0.0, 30)
}

pub fn scale_in() -> Animation {
    Animation::new("scale", 0.0, 1.0, 30).with_ease(Ease::Ease)
}

pub fn scale_out() -> Animation {
    Animation::new("scale", 1.0, 0.5, 30).with_ease(Ease::Ease)
}

pub fn slide_in() -> Animation {
    Animation::new("translateY", 50.0, 0.0, 30)
        .with_delay(0)
        .with_ease(Ease::Ease)
}

pub fn word_fade_in() -> Animation {
    fade_in().with_delay(0)
}

pub fn word_fade_out() -> Animation {
    fade_out()
}

/// Look up a preset by its authoring-layer name.
pub fn preset(name: &str) -> Option<Animation> {
    match name {
        "fadeIn" => Some(fade_in()),
        "fadeOut" => Some(fade_out()),
        "scaleIn" => Some(scale_in()),
        "scaleOut" => Some(scale_out()),
        "slideIn" => Some(slide_in()),
        "wordFadeIn" => Some(word_fade_in()),
        "wordFadeOut" => Some(word_fade_out()),
        _ => None,
    }
}
