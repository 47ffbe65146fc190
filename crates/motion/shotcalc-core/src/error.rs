//! Error types for keyframe storage and trajectory generation.

use thiserror::Error;

use crate::interp::CurveError;

/// Errors raised by time addressing, keyframe insertion and trajectory requests.
///
/// All variants are raised synchronously where they are detected; nothing in
/// this crate retries or swallows them.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MotionError {
    /// Malformed time code or numeric cell.
    #[error("malformed input '{input}': {reason}")]
    Format { input: String, reason: String },

    /// Structurally invalid store configuration or keyframe.
    #[error("invalid configuration: {reason}")]
    Configuration { reason: String },

    /// A movement does not have enough keyframes to build a curve.
    #[error("movement '{movement}' has {found} keyframe(s), at least 2 are needed")]
    InsufficientData { movement: String, found: usize },

    /// A trajectory was requested from a store without keyframes.
    #[error("no keyframes to build a trajectory from")]
    EmptyState,

    /// Curve fitting rejected the samples of a movement.
    #[error("curve for movement '{movement}': {source}")]
    Curve {
        movement: String,
        #[source]
        source: CurveError,
    },

    /// Project data could not be read or written.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

impl MotionError {
    pub(crate) fn format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// Short, stable category name for logging.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Format { .. } => "format",
            Self::Configuration { .. } => "configuration",
            Self::InsufficientData { .. } | Self::EmptyState | Self::Curve { .. } => "data",
            Self::Serialization { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for MotionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MotionError>;
