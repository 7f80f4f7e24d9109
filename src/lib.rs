pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod server;

pub use api::{ConfigError, GenerationError, Pipeline, PipelineError, StoryRecord};
