//! Render plan worker binary.

use clap::Parser;
use tracing::{error, info};

use reframe_worker::{init_tracing, Args, RenderProcessor, WorkerConfig};

#[tokio::main]
async fn main() {
    // Load .env file if present, before clap reads LOG_FORMAT
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(args.log_format);

    let config = args.apply_overrides(WorkerConfig::from_env());
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    info!(
        fps = config.fps,
        width = config.width,
        height = config.height,
        source_width = config.source_width,
        "Starting reframe worker"
    );

    let processor = RenderProcessor::new(config);
    match processor.process_file(&args.job, args.output).await {
        Ok(path) => info!("Render plan saved to {}", path.display()),
        Err(e) => {
            error!(input_error = e.is_input_error(), "Render failed: {}", e);
            std::process::exit(1);
        }
    }
}
