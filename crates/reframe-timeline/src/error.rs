//! Error types for timeline input validation.

use thiserror::Error;

/// Result type for timeline validation.
pub type TimelineResult<T> = Result<T, TimelineError>;

/// Collaborator input that breaks a timeline precondition.
///
/// The sampler itself never fails; these are raised at the job boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimelineError {
    #[error("Non-finite timing in segment {segment}, word {word}")]
    NonFiniteTiming { segment: usize, word: usize },

    #[error("Word {word} of segment {segment} ends before it starts ({start:.3}s > {end:.3}s)")]
    InvertedWord {
        segment: usize,
        word: usize,
        start: f64,
        end: f64,
    },

    #[error("Word {word} of segment {segment} starts before the previous word ({start:.3}s < {previous_start:.3}s)")]
    UnorderedWords {
        segment: usize,
        word: usize,
        start: f64,
        previous_start: f64,
    },

    #[error("Cropping box {index} is invalid: {reason}")]
    InvalidCroppingBox { index: usize, reason: String },

    #[error("Cropping box {index} overlaps the previous box ({start_time:.3}s < {previous_end:.3}s)")]
    OverlappingCroppingBoxes {
        index: usize,
        start_time: f64,
        previous_end: f64,
    },
}

impl TimelineError {
    /// Create an invalid cropping box error.
    pub fn invalid_box(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidCroppingBox {
            index,
            reason: reason.into(),
        }
    }
}

/// Breakpoints and values that cannot form a keyframe track.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpolationError {
    #[error("Keyframes need at least one breakpoint")]
    Empty,

    #[error("Breakpoint count {breakpoints} does not match value count {values}")]
    LengthMismatch { breakpoints: usize, values: usize },

    #[error("Breakpoints must be finite and non-decreasing (index {0})")]
    NotMonotonic(usize),
}
