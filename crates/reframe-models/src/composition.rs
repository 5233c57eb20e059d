//! Output composition geometry and length.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default output frame rate.
pub const DEFAULT_FPS: f64 = 30.0;

/// Portrait 1080x1920 output.
pub const DEFAULT_WIDTH: u32 = 1080;
pub const DEFAULT_HEIGHT: u32 = 1920;

/// Shorts must stay under a minute.
pub const MAX_SHORT_DURATION_SECS: u32 = 59;

/// The rendered video: frame rate, size and length in frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Composition {
    pub fps: f64,
    pub width: u32,
    pub height: u32,
    pub duration_in_frames: u64,
}

impl Composition {
    /// Build a composition for a clip of `duration_secs`.
    ///
    /// The length is capped at one frame short of `max_duration_secs`.
    pub fn for_duration(
        duration_secs: f64,
        fps: f64,
        width: u32,
        height: u32,
        max_duration_secs: u32,
    ) -> Self {
        let requested = (duration_secs.max(0.0) * fps).ceil();
        let cap = (max_duration_secs as f64 * fps - 1.0).max(0.0);
        let duration_in_frames = if requested.is_finite() {
            requested.min(cap) as u64
        } else {
            0
        };

        Self {
            fps,
            width,
            height,
            duration_in_frames,
        }
    }

    /// Portrait short with the default geometry.
    pub fn portrait_short(duration_secs: f64) -> Self {
        Self::for_duration(
            duration_secs,
            DEFAULT_FPS,
            DEFAULT_WIDTH,
            DEFAULT_HEIGHT,
            MAX_SHORT_DURATION_SECS,
        )
    }

    /// Rendered length in seconds; words starting later are not shown.
    pub fn duration_secs(&self) -> f64 {
        if self.fps > 0.0 {
            self.duration_in_frames as f64 / self.fps
        } else {
            0.0
        }
    }
}
