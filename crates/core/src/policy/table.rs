use serde::Serialize;

use super::extensions::{
    ASSEMBLY_EXTENSION, IMPORTED_MODULES_EXTENSION, LLVM_BITCODE_EXTENSION, LLVM_IR_EXTENSION,
    OBJECT_EXTENSION, PCH_EXTENSION, SERIALIZED_MODULE_EXTENSION, SIB_EXTENSION, SIL_EXTENSION,
};
use crate::types::Action;

/// Everything the pipeline needs to know about an action, answered at once.
///
/// Rows are produced by [`Action::properties`]. Keeping every answer in one
/// record means the consistency rules between columns (no output implies no
/// module, header, dependencies or trace; a module implies a proper module
/// name) hold per row rather than across separate tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionProperties {
    pub needs_proper_module_name: bool,
    pub is_immediate: bool,
    pub principal_output_suffix: Option<&'static str>,
    pub can_emit_dependencies: bool,
    pub can_emit_header: bool,
    pub can_emit_loaded_module_trace: bool,
    /// Also governs the module-doc output.
    pub can_emit_module: bool,
    pub produces_output: bool,
    pub produces_textual_output: bool,
}

const NO_ACTION: ActionProperties = ActionProperties {
    needs_proper_module_name: false,
    is_immediate: false,
    principal_output_suffix: None,
    can_emit_dependencies: false,
    can_emit_header: false,
    can_emit_loaded_module_trace: false,
    can_emit_module: false,
    produces_output: false,
    produces_textual_output: false,
};

/// Dumps and printers: textual output, nothing to track.
const INSPECTION: ActionProperties = ActionProperties {
    produces_output: true,
    produces_textual_output: true,
    ..NO_ACTION
};

const INTERACTIVE: ActionProperties = ActionProperties {
    is_immediate: true,
    ..NO_ACTION
};

/// Full module pipeline up to and including serialization.
const SERIALIZING: ActionProperties = ActionProperties {
    needs_proper_module_name: true,
    is_immediate: false,
    principal_output_suffix: None,
    can_emit_dependencies: true,
    can_emit_header: true,
    can_emit_loaded_module_trace: true,
    can_emit_module: true,
    produces_output: true,
    produces_textual_output: false,
};

impl Action {
    /// The complete policy row for this action
    pub const fn properties(self) -> ActionProperties {
        match self {
            Action::None => NO_ACTION,
            // Bare parsing still records dependencies and can drive header
            // emission, but never resolves imports for a trace.
            Action::Parse => ActionProperties {
                can_emit_dependencies: true,
                can_emit_header: true,
                ..INSPECTION
            },
            Action::Typecheck => ActionProperties {
                can_emit_dependencies: true,
                can_emit_header: true,
                can_emit_loaded_module_trace: true,
                ..INSPECTION
            },
            Action::DumpParse
            | Action::DumpAst
            | Action::EmitSyntax
            | Action::DumpInterfaceHash
            | Action::PrintAst
            | Action::DumpScopeMaps
            | Action::DumpTypeRefinementContexts => INSPECTION,
            Action::EmitPch => ActionProperties {
                principal_output_suffix: Some(PCH_EXTENSION),
                can_emit_header: false,
                can_emit_module: false,
                ..SERIALIZING
            },
            Action::EmitSilGen => ActionProperties {
                principal_output_suffix: Some(SIL_EXTENSION),
                can_emit_module: false,
                produces_textual_output: true,
                ..SERIALIZING
            },
            Action::EmitSil => ActionProperties {
                principal_output_suffix: Some(SIL_EXTENSION),
                produces_textual_output: true,
                ..SERIALIZING
            },
            Action::EmitSibGen | Action::EmitSib => ActionProperties {
                principal_output_suffix: Some(SIB_EXTENSION),
                ..SERIALIZING
            },
            Action::EmitModuleOnly | Action::MergeModules => ActionProperties {
                principal_output_suffix: Some(SERIALIZED_MODULE_EXTENSION),
                ..SERIALIZING
            },
            // No frontend-generated output at all.
            Action::Immediate | Action::Repl => INTERACTIVE,
            Action::EmitAssembly => ActionProperties {
                principal_output_suffix: Some(ASSEMBLY_EXTENSION),
                produces_textual_output: true,
                ..SERIALIZING
            },
            Action::EmitIr => ActionProperties {
                principal_output_suffix: Some(LLVM_IR_EXTENSION),
                produces_textual_output: true,
                ..SERIALIZING
            },
            Action::EmitBc => ActionProperties {
                principal_output_suffix: Some(LLVM_BITCODE_EXTENSION),
                ..SERIALIZING
            },
            Action::EmitObject => ActionProperties {
                principal_output_suffix: Some(OBJECT_EXTENSION),
                ..SERIALIZING
            },
            Action::EmitImportedModules => ActionProperties {
                principal_output_suffix: Some(IMPORTED_MODULES_EXTENSION),
                produces_textual_output: true,
                ..SERIALIZING
            },
        }
    }

    /// Lowering and serialization need a valid identifier to name symbols
    /// and the module artifact.
    pub const fn needs_proper_module_name(self) -> bool {
        self.properties().needs_proper_module_name
    }

    pub const fn is_immediate(self) -> bool {
        self.properties().is_immediate
    }

    /// File suffix of the primary artifact, or `None` when the frontend
    /// writes no primary file for this action
    pub const fn suffix_for_principal_output_file(self) -> Option<&'static str> {
        self.properties().principal_output_suffix
    }

    pub const fn can_emit_dependencies(self) -> bool {
        self.properties().can_emit_dependencies
    }

    pub const fn can_emit_header(self) -> bool {
        self.properties().can_emit_header
    }

    pub const fn can_emit_loaded_module_trace(self) -> bool {
        self.properties().can_emit_loaded_module_trace
    }

    pub const fn can_emit_module(self) -> bool {
        self.properties().can_emit_module
    }

    pub const fn can_emit_module_doc(self) -> bool {
        self.can_emit_module()
    }

    pub const fn produces_output(self) -> bool {
        self.properties().produces_output
    }

    pub const fn produces_textual_output(self) -> bool {
        self.properties().produces_textual_output
    }
}
