//! Scene cropping boxes and the crop viewport.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default source video width (1080p landscape).
pub const DEFAULT_SOURCE_WIDTH: u32 = 1920;

/// Default viewport width (1080x1920 portrait output).
pub const DEFAULT_TARGET_WIDTH: u32 = 1080;

/// A time-bounded scene box produced by the scene-detection collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CroppingBox {
    /// Start of the scene in seconds (inclusive)
    pub start_time: f64,
    /// End of the scene in seconds (inclusive)
    pub end_time: f64,
    /// `[x_min, y_min, x_max, y_max]` as fractions of the source frame
    pub bbox: [f64; 4],
}

impl CroppingBox {
    pub fn new(start_time: f64, end_time: f64, bbox: [f64; 4]) -> Self {
        Self {
            start_time,
            end_time,
            bbox,
        }
    }

    /// Whether `time` (seconds) falls inside `[start_time, end_time]`.
    #[inline]
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time <= self.end_time
    }

    /// Normalized left edge of the box.
    #[inline]
    pub fn x_min(&self) -> f64 {
        self.bbox[0]
    }
}

/// Fixed-size viewport panned across a wider source video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CropViewport {
    /// Width of the full-resolution source video in pixels
    pub source_width: u32,
    /// Width of the visible window in pixels
    pub target_width: u32,
}

impl CropViewport {
    pub const fn new(source_width: u32, target_width: u32) -> Self {
        Self {
            source_width,
            target_width,
        }
    }

    /// Largest horizontal pan in pixels before the window leaves the source.
    pub fn max_pan(&self) -> f64 {
        (self.source_width as f64 - self.target_width as f64).max(0.0)
    }

    /// Translation that centers the window on the source.
    pub fn centered_offset(&self) -> f64 {
        -(self.max_pan() / 2.0)
    }

    /// Translation for a normalized left edge, clamped to the source frame.
    pub fn offset_for_left_edge(&self, x_min: f64) -> f64 {
        let left = x_min.max(0.0) * self.source_width as f64;
        -self.max_pan().min(left)
    }
}

impl Default for CropViewport {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_WIDTH, DEFAULT_TARGET_WIDTH)
    }
}
