//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::WorkerConfig;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable single-line events
    Pretty,
    /// One JSON object per event
    Json,
}

/// Build the frame-by-frame render plan of a render job.
#[derive(Debug, Parser)]
#[command(name = "reframe-worker", version, about)]
pub struct Args {
    /// Render job JSON file
    #[arg(value_name = "JOB")]
    pub job: PathBuf,

    /// Where to write the plan [default: <WORK_DIR>/<job_id>.plan.json]
    #[arg(value_name = "PLAN")]
    pub output: Option<PathBuf>,

    /// Output frame rate (overrides RENDER_FPS)
    #[arg(long)]
    pub fps: Option<f64>,

    /// Output width in pixels (overrides RENDER_WIDTH)
    #[arg(long)]
    pub width: Option<u32>,

    /// Output height in pixels (overrides RENDER_HEIGHT)
    #[arg(long)]
    pub height: Option<u32>,

    /// Source video width the crop boxes refer to (overrides SOURCE_WIDTH)
    #[arg(long)]
    pub source_width: Option<u32>,

    /// Directory for plans written without an explicit path (overrides WORKER_WORK_DIR)
    #[arg(long)]
    pub work_dir: Option<PathBuf>,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, ignore_case = true, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Args {
    /// Apply command-line overrides on top of `config`.
    pub fn apply_overrides(&self, mut config: WorkerConfig) -> WorkerConfig {
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(source_width) = self.source_width {
            config.source_width = source_width;
        }
        if let Some(work_dir) = &self.work_dir {
            config.work_dir = work_dir.clone();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_positional_paths() {
        let args = Args::try_parse_from(["reframe-worker", "job.json", "out/plan.json"]).unwrap();
        assert_eq!(args.job, PathBuf::from("job.json"));
        assert_eq!(args.output, Some(PathBuf::from("out/plan.json")));

        let args = Args::try_parse_from(["reframe-worker", "job.json"]).unwrap();
        assert_eq!(args.output, None);
    }

    #[test]
    fn test_help_and_version_are_not_paths() {
        let err = Args::try_parse_from(["reframe-worker", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let err = Args::try_parse_from(["reframe-worker", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_job_is_required() {
        let err = Args::try_parse_from(["reframe-worker"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = Args::try_parse_from(["reframe-worker", "--frames", "job.json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_overrides_replace_config_values() {
        let args = Args::try_parse_from([
            "reframe-worker",
            "--fps",
            "60",
            "--source-width",
            "3840",
            "--work-dir",
            "/data/plans",
            "--log-format",
            "JSON",
            "job.json",
        ])
        .unwrap();
        assert_eq!(args.log_format, LogFormat::Json);

        let config = args.apply_overrides(WorkerConfig::default());
        assert_eq!(config.fps, 60.0);
        assert_eq!(config.source_width, 3840);
        assert_eq!(config.width, 1080);
        assert_eq!(config.work_dir, PathBuf::from("/data/plans"));
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let args = Args::try_parse_from(["reframe-worker", "job.json"]).unwrap();
        assert_eq!(args.apply_overrides(WorkerConfig::default()), WorkerConfig::default());
    }
}
