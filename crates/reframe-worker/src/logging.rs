//! Structured logging for render jobs.

use std::path::Path;
use std::time::Duration;

use tracing::{info, warn, Span};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use reframe_models::{Composition, RenderJob};

use crate::cli::LogFormat;

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVES: &str = "reframe=info";

/// Install the global tracing subscriber.
pub fn init_tracing(format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .init(),
        LogFormat::Pretty => registry.with(fmt::layer().compact().with_target(false)).init(),
    }
}

/// Emits the milestones of one render job with its `job_id` attached.
///
/// Each milestone carries the counts that describe that step, so a job's
/// progress can be followed from the logs alone.
#[derive(Debug, Clone)]
pub struct RenderLogger {
    job_id: String,
}

impl RenderLogger {
    pub fn new(job: &RenderJob) -> Self {
        Self {
            job_id: job.id.to_string(),
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    /// Span covering one stage of the job.
    pub fn stage_span(&self, stage: &'static str) -> Span {
        tracing::info_span!("render_job", job_id = %self.job_id, stage)
    }

    pub fn job_accepted(&self, job: &RenderJob) {
        info!(
            job_id = %self.job_id,
            segments = job.segments.len(),
            words = job.word_count(),
            cropping_boxes = job.cropping_boxes().len(),
            duration_secs = job.duration_secs,
            "Render job accepted"
        );
    }

    /// Reflow result. Overlapping lines are shown earliest-first.
    pub fn lines_reflowed(&self, lines: usize, max_words_per_line: usize, overlapping: &[usize]) {
        info!(
            job_id = %self.job_id,
            lines,
            max_words_per_line,
            "Transcript reflowed"
        );
        if let Some(first) = overlapping.first() {
            warn!(
                job_id = %self.job_id,
                overlapping = overlapping.len(),
                first_overlap = *first,
                "Display lines overlap the previous line"
            );
        }
    }

    pub fn frames_sampled(&self, composition: &Composition, subtitled_frames: usize, elapsed: Duration) {
        info!(
            job_id = %self.job_id,
            frames = composition.duration_in_frames,
            subtitled_frames,
            fps = composition.fps,
            elapsed_ms = elapsed.as_millis() as u64,
            "Frames sampled"
        );
    }

    pub fn plan_written(&self, path: &Path, frames: usize, elapsed: Duration) {
        info!(
            job_id = %self.job_id,
            output = %path.display(),
            frames,
            elapsed_ms = elapsed.as_millis() as u64,
            "Render plan written"
        );
    }
}
