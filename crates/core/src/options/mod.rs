//! Per-invocation frontend configuration and the queries that combine it
//! with the policy table

mod frontend_options;
pub mod output_paths;
pub mod unused;

pub use frontend_options::{FrontendOptions, STDOUT_FILENAME};
pub use output_paths::OutputPathKind;
pub use unused::{UnusedOutputPath, UnusedPathKind};
