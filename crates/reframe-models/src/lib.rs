//! Shared data models for the Reframe timeline.
//!
//! This crate provides Serde-serializable types for:
//! - Transcript words and display segments
//! - Subtitle styling settings and their resolved defaults
//! - Scene cropping boxes and the crop viewport
//! - Output composition and per-frame render state
//! - Render jobs consumed by the worker

pub mod color;
pub mod composition;
pub mod cropping;
pub mod job;
pub mod render_state;
pub mod settings;
pub mod timestamp;
pub mod transcript;

// Re-export common types
pub use color::{Color, ColorParseError};
pub use composition::Composition;
pub use cropping::{CropViewport, CroppingBox};
pub use job::{JobId, RenderJob};
pub use render_state::{RenderState, VisibleWord};
pub use settings::{ResolvedSubtitleSettings, SubtitleSettings};
pub use transcript::{Segment, WordTiming};
