pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{
    cli::{LocalInput, LocalOutput},
    CliConfig,
};

pub use core::{engine::SolverEngine, pipeline::StreamPipeline};
pub use utils::error::{Result, SolveError};
