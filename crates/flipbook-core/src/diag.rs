//! Diagnostic taxonomy for the silent-degrade error policy.
//!
//! The compute path never fails: every problem becomes a [`Diagnostic`]
//! carried alongside the computed value, and is echoed through `log` at the
//! point of detection. A malformed descriptor costs one property, never the
//! whole element.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum Diagnostic {
    /// `from`/`to` absent or non-finite; the interpolator degrades to
    /// `from`, the compositor skips the descriptor entirely.
    #[error("invalid animation endpoints for '{property}' (from={from:?}, to={to:?})")]
    InvalidEndpoints {
        property: String,
        from: Option<f32>,
        to: Option<f32>,
    },
    /// `durationInFrames` unset; computation proceeds with 1 frame.
    #[error("durationInFrames is missing for animation '{property}'; using 1 frame as default")]
    MissingDuration { property: String },
    /// Descriptor dropped from composition because an endpoint is unset.
    #[error("invalid animation object for '{property}'; contribution skipped")]
    IncompleteDescriptor { property: String },
}

impl Diagnostic {
    /// Echo through the `log` facade. Missing durations are recoverable
    /// (warn); the rest indicate malformed authored data (error).
    pub fn emit(&self) {
        match self {
            Diagnostic::MissingDuration { .. } => log::warn!("{self}"),
            _ => log::error!("{self}"),
        }
    }
}

/// Push a diagnostic onto a sink, logging it as it is recorded.
pub(crate) fn record(sink: &mut Vec<Diagnostic>, diag: Diagnostic) {
    diag.emit();
    sink.push(diag);
}
