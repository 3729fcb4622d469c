/// Precompiled bridging header.
pub const PCH_EXTENSION: &str = "pch";
/// Textual SIL.
pub const SIL_EXTENSION: &str = "sil";
/// Serialized SIL bitcode.
pub const SIB_EXTENSION: &str = "sib";
pub const SERIALIZED_MODULE_EXTENSION: &str = "swiftmodule";
pub const SERIALIZED_MODULE_DOC_EXTENSION: &str = "swiftdoc";

pub const ASSEMBLY_EXTENSION: &str = "s";
pub const LLVM_IR_EXTENSION: &str = "ll";
pub const LLVM_BITCODE_EXTENSION: &str = "bc";
pub const OBJECT_EXTENSION: &str = "o";
pub const IMPORTED_MODULES_EXTENSION: &str = "importedmodules";
