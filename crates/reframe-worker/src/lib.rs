//! Render plan worker.
//!
//! Turns a render job (transcript, scene boxes, subtitle settings) into a
//! render plan: the reflowed display lines and the sampled state of every
//! output frame.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod processor;
pub mod render_plan;

pub use cli::{Args, LogFormat};
pub use config::WorkerConfig;
pub use error::{WorkerError, WorkerResult};
pub use logging::{init_tracing, RenderLogger};
pub use processor::RenderProcessor;
pub use render_plan::{build_render_plan, RenderPlan, RenderStyle};
