pub mod cli;
pub mod logging;
pub mod pipeline;
pub mod summary;

pub use pipeline::{RunConfig, RunResult, process_pages, run};
