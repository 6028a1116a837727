//! Flipbook animation core (renderer-agnostic)
//!
//! Computes per-frame style values for elements on a deterministic,
//! seekable frame timeline. Hosts pull a [`Style`] snapshot for the
//! current frame from declarative [`Animation`] descriptors; the core
//! handles interpolation with clamped easing, per-direction composition,
//! and entrance/exit conflict resolution. Computation is pure and
//! stateless per call; malformed descriptors degrade to diagnostics
//! instead of failing.

pub mod combine;
pub mod compose;
pub mod data;
pub mod diag;
pub mod ease;
pub mod element;
pub mod interp;
pub mod json;
pub mod merge;
pub mod presets;
pub mod property;
pub mod style;

// Re-exports for consumers (hosts/adapters)
pub use combine::{combine, combine_animations, Animations};
pub use compose::{calculate_style, compose, Composed};
pub use data::{Animation, Direction};
pub use diag::Diagnostic;
pub use ease::Ease;
pub use element::{AnimatedElement, StyleOutput};
pub use interp::{interpolate, interpolate_value};
pub use json::parse_animations_json;
pub use merge::merge_directions;
pub use property::style_fragment;
pub use style::{Style, StyleValue};
