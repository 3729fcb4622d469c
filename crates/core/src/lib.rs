//! frontend-options - Action classification and output policy for a compiler frontend
//!
//! This crate answers, for the single action a frontend invocation was asked
//! to perform:
//! - Which artifacts the action can produce (module, header, dependencies, trace)
//! - Whether its output is textual and what suffix the primary output uses
//! - Which configured output paths are relevant, and which are left unused
pub mod error;
pub mod options;
pub mod policy;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;

pub use options::{FrontendOptions, OutputPathKind, UnusedOutputPath, UnusedPathKind};
pub use policy::ActionProperties;
