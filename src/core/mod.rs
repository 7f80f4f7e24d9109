pub mod config;
pub mod context;
pub mod text;
pub mod utils;
