//! Job file processing.
//!
//! Loads a render job from disk, builds its plan off the async runtime and
//! writes the plan back out as JSON.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::debug;

use reframe_models::RenderJob;

use crate::config::WorkerConfig;
use crate::error::{WorkerError, WorkerResult};
use crate::logging::RenderLogger;
use crate::render_plan::{build_render_plan, RenderPlan};

/// Processes render job files with a fixed configuration.
#[derive(Debug, Clone)]
pub struct RenderProcessor {
    config: WorkerConfig,
}

impl RenderProcessor {
    pub fn new(config: WorkerConfig) -> Self {
        Self { config }
    }

    /// Read and parse a job file.
    pub async fn load_job(&self, path: &Path) -> WorkerResult<RenderJob> {
        let raw = tokio::fs::read_to_string(path).await?;
        let job = RenderJob::from_json(&raw)?;
        debug!(job_id = %job.id, path = %path.display(), "Loaded render job");
        Ok(job)
    }

    /// Build the plan for `job` on the blocking pool.
    pub async fn plan(&self, job: RenderJob) -> WorkerResult<RenderPlan> {
        let config = self.config.clone();
        tokio::task::spawn_blocking(move || build_render_plan(&job, &config))
            .await
            .map_err(|e| WorkerError::processing_failed(format!("Plan task failed: {}", e)))?
    }

    /// Serialize `plan` to `path`, creating parent directories as needed.
    pub async fn write_plan(&self, plan: &RenderPlan, path: &Path) -> WorkerResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(plan)?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Load `job_path`, build its plan and write it.
    ///
    /// Returns the path the plan was written to: `output` when given,
    /// otherwise `<work_dir>/<job_id>.plan.json`.
    pub async fn process_file(
        &self,
        job_path: &Path,
        output: Option<PathBuf>,
    ) -> WorkerResult<PathBuf> {
        let started = Instant::now();

        let job = self.load_job(job_path).await?;
        let output = output.unwrap_or_else(|| self.config.default_plan_path(&job.id));
        let logger = RenderLogger::new(&job);

        let plan = self.plan(job).await?;
        self.write_plan(&plan, &output).await?;
        logger.plan_written(&output, plan.frames.len(), started.elapsed());

        Ok(output)
    }
}
