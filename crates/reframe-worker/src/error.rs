//! Worker error types.

use thiserror::Error;

pub type WorkerResult<T> = Result<T, WorkerError>;

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("Invalid render job: {0}")]
    InvalidJob(String),

    #[error("Processing failed: {0}")]
    ProcessingFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Timeline input rejected: {0}")]
    Timeline(#[from] reframe_timeline::TimelineError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WorkerError {
    pub fn invalid_job(msg: impl Into<String>) -> Self {
        Self::InvalidJob(msg.into())
    }

    pub fn processing_failed(msg: impl Into<String>) -> Self {
        Self::ProcessingFailed(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Whether the job payload itself is at fault.
    ///
    /// Resubmitting the same job will fail the same way.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            WorkerError::InvalidJob(_) | WorkerError::Timeline(_) | WorkerError::Json(_)
        )
    }
}
