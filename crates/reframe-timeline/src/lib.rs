#![deny(unreachable_patterns)]
//! Subtitle and crop timeline for vertical shorts.
//!
//! This crate provides:
//! - Reflow of transcript sentences into short display lines
//! - A per-frame sampler for visible words, highlight colors and crop offset
//! - A keyframe interpolation utility for per-frame visual properties
//! - Validation of collaborator input at the job boundary
//!
//! Everything here is pure: no I/O and no state shared between frames.

pub mod crop;
pub mod error;
pub mod interpolate;
pub mod reflow;
pub mod sampler;
pub mod text;
pub mod validation;


pub use crop::{select_crop, CropSelection};
pub use error::{InterpolationError, TimelineError, TimelineResult};
pub use interpolate::{interpolate, Keyframes, Lerp};
pub use reflow::{reflow_segments, reflow_with_settings};
pub use sampler::{word_color, TimelineSampler};
pub use text::{display_text, PUNCTUATION};
pub use validation::{find_overlapping_segments, validate_cropping_boxes, validate_transcript};
