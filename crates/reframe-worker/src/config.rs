//! Worker configuration.

use std::path::PathBuf;
use std::str::FromStr;

use reframe_models::composition::{
    DEFAULT_FPS, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_SHORT_DURATION_SECS,
};
use reframe_models::cropping::DEFAULT_SOURCE_WIDTH;
use reframe_models::{Composition, CropViewport, JobId};

use crate::error::{WorkerError, WorkerResult};

/// Worker configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerConfig {
    /// Output frame rate
    pub fps: f64,
    /// Output width in pixels (also the crop viewport width)
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Rendered shorts are capped one frame below this length
    pub max_duration_secs: u32,
    /// Width of the source video the crop boxes refer to
    pub source_width: u32,
    /// Directory for render plans when no output path is given
    pub work_dir: PathBuf,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_duration_secs: MAX_SHORT_DURATION_SECS,
            source_width: DEFAULT_SOURCE_WIDTH,
            work_dir: PathBuf::from("/tmp/reframe"),
        }
    }
}

impl WorkerConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            fps: env_or("RENDER_FPS", defaults.fps),
            width: env_or("RENDER_WIDTH", defaults.width),
            height: env_or("RENDER_HEIGHT", defaults.height),
            max_duration_secs: env_or("RENDER_MAX_DURATION_SECS", defaults.max_duration_secs),
            source_width: env_or("SOURCE_WIDTH", defaults.source_width),
            work_dir: std::env::var("WORKER_WORK_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.work_dir),
        }
    }

    /// Reject settings the timeline cannot render with.
    pub fn validate(&self) -> WorkerResult<()> {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(WorkerError::config_error(format!(
                "RENDER_FPS must be positive, got {}",
                self.fps
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(WorkerError::config_error("Output dimensions must be non-zero"));
        }
        if self.source_width == 0 {
            return Err(WorkerError::config_error("SOURCE_WIDTH must be non-zero"));
        }
        if self.max_duration_secs == 0 {
            return Err(WorkerError::config_error(
                "RENDER_MAX_DURATION_SECS must be non-zero",
            ));
        }
        Ok(())
    }

    /// Composition for a clip of `duration_secs`.
    pub fn composition_for(&self, duration_secs: f64) -> Composition {
        Composition::for_duration(
            duration_secs,
            self.fps,
            self.width,
            self.height,
            self.max_duration_secs,
        )
    }

    /// Viewport panned across the source video.
    pub fn viewport(&self) -> CropViewport {
        CropViewport::new(self.source_width, self.width)
    }

    /// Where a job's render plan goes when no output path is given.
    pub fn default_plan_path(&self, job_id: &JobId) -> PathBuf {
        self.work_dir.join(format!("{}.plan.json", job_id))
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(std::env::var(key).ok().as_deref(), default)
}

fn parse_or<T: FromStr>(value: Option<&str>, default: T) -> T {
    value
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
