//! Detection of configured paths the requested action will never write

use serde::Serialize;
use std::fmt;

use super::frontend_options::{FrontendOptions, configured};
use crate::types::Action;

/// Optional output path fields that can be left unused by an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnusedPathKind {
    DependenciesFile,
    ObjcHeader,
    Module,
    ModuleDoc,
    LoadedModuleTrace,
}

impl UnusedPathKind {
    pub const ALL: [UnusedPathKind; 5] = [
        UnusedPathKind::DependenciesFile,
        UnusedPathKind::ObjcHeader,
        UnusedPathKind::Module,
        UnusedPathKind::ModuleDoc,
        UnusedPathKind::LoadedModuleTrace,
    ];

    /// Whether `action` can ever write this kind of output
    pub const fn is_emitted_by(self, action: Action) -> bool {
        match self {
            UnusedPathKind::DependenciesFile => action.can_emit_dependencies(),
            UnusedPathKind::ObjcHeader => action.can_emit_header(),
            UnusedPathKind::Module => action.can_emit_module(),
            UnusedPathKind::ModuleDoc => action.can_emit_module_doc(),
            UnusedPathKind::LoadedModuleTrace => action.can_emit_loaded_module_trace(),
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            UnusedPathKind::DependenciesFile => "dependencies file",
            UnusedPathKind::ObjcHeader => "Objective-C header",
            UnusedPathKind::Module => "module",
            UnusedPathKind::ModuleDoc => "module documentation",
            UnusedPathKind::LoadedModuleTrace => "loaded module trace",
        }
    }
}

impl fmt::Display for UnusedPathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A configured path that the requested action will not produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnusedOutputPath {
    pub kind: UnusedPathKind,
    pub path: String,
    pub action: Action,
}

impl fmt::Display for UnusedOutputPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "this mode does not support emitting the {} ('{}' is ignored for action '{}')",
            self.kind, self.path, self.action
        )
    }
}

impl FrontendOptions {
    fn path_for(&self, kind: UnusedPathKind) -> Option<&str> {
        match kind {
            UnusedPathKind::DependenciesFile => configured(&self.dependencies_file_path),
            UnusedPathKind::ObjcHeader => configured(&self.objc_header_output_path),
            UnusedPathKind::Module => configured(&self.module_output_path),
            UnusedPathKind::ModuleDoc => configured(&self.module_doc_output_path),
            UnusedPathKind::LoadedModuleTrace => configured(&self.loaded_module_trace_path),
        }
    }

    /// A path of this kind is configured but the action cannot emit it
    pub fn has_unused_path(&self, kind: UnusedPathKind) -> bool {
        self.path_for(kind).is_some() && !kind.is_emitted_by(self.requested_action)
    }

    pub fn has_unused_dependencies_file_path(&self) -> bool {
        self.has_unused_path(UnusedPathKind::DependenciesFile)
    }

    pub fn has_unused_objc_header_output_path(&self) -> bool {
        self.has_unused_path(UnusedPathKind::ObjcHeader)
    }

    pub fn has_unused_module_output_path(&self) -> bool {
        self.has_unused_path(UnusedPathKind::Module)
    }

    pub fn has_unused_module_doc_output_path(&self) -> bool {
        self.has_unused_path(UnusedPathKind::ModuleDoc)
    }

    pub fn has_unused_loaded_module_trace_path(&self) -> bool {
        self.has_unused_path(UnusedPathKind::LoadedModuleTrace)
    }

    /// Every unused path, in [`UnusedPathKind::ALL`] order
    pub fn unused_output_paths(&self) -> Vec<UnusedOutputPath> {
        UnusedPathKind::ALL
            .into_iter()
            .filter(|kind| self.has_unused_path(*kind))
            .filter_map(|kind| {
                self.path_for(kind).map(|path| UnusedOutputPath {
                    kind,
                    path: path.to_string(),
                    action: self.requested_action,
                })
            })
            .collect()
    }
}
