pub mod action;
pub mod inputs;

pub use action::{Action, ActionCategory};
pub use inputs::{FrontendInputs, InputFile};
