//! Classification table answering per-action policy questions

pub mod extensions;
pub mod table;

pub use extensions::{
    PCH_EXTENSION, SERIALIZED_MODULE_DOC_EXTENSION, SERIALIZED_MODULE_EXTENSION, SIB_EXTENSION,
    SIL_EXTENSION,
};
pub use table::ActionProperties;
