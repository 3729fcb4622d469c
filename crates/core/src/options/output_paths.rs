//! Enumeration of configured output paths and the base name for side artifacts

use serde::Serialize;
use std::borrow::Cow;
use std::path::Path;

use super::frontend_options::{FrontendOptions, configured};
use crate::types::Action;

/// Which configured field an enumerated output path came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputPathKind {
    Primary,
    Module,
    ModuleDoc,
    ObjcHeader,
}

impl FrontendOptions {
    /// Visit every configured output path, tagged with where it came from.
    ///
    /// Order is fixed: primary outputs as configured, then the module, the
    /// module doc and the Objective-C header. Primary outputs are skipped for
    /// module-only emission and module merging. No other filtering by action happens here; pair the result
    /// with the `can_emit_*` predicates to decide relevance.
    pub fn for_all_output_paths_with_kind<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(OutputPathKind, &'a str),
    {
        if writes_per_input_outputs(self.requested_action) {
            for filename in &self.output_filenames {
                visit(OutputPathKind::Primary, filename);
            }
        } else {
            tracing::trace!(
                "Skipping {} primary output(s) for {}",
                self.output_filenames.len(),
                self.requested_action
            );
        }

        let side_outputs = [
            (OutputPathKind::Module, &self.module_output_path),
            (OutputPathKind::ModuleDoc, &self.module_doc_output_path),
            (OutputPathKind::ObjcHeader, &self.objc_header_output_path),
        ];
        for (kind, path) in side_outputs {
            if let Some(path) = configured(path) {
                visit(kind, path);
            }
        }
    }

    pub fn for_all_output_paths<F>(&self, mut visit: F)
    where
        F: FnMut(&str),
    {
        self.for_all_output_paths_with_kind(|_, path| visit(path));
    }

    /// Collected form of [`FrontendOptions::for_all_output_paths`]
    pub fn output_paths(&self) -> Vec<&str> {
        let mut paths = Vec::new();
        self.for_all_output_paths_with_kind(|_, path| paths.push(path));
        paths
    }

    /// Base name for side artifacts such as a serialized diagnostics file.
    ///
    /// The named output file wins; otherwise the file name of the unique
    /// primary input; otherwise the module name.
    pub fn original_path(&self) -> Cow<'_, str> {
        if let Some(output) = self.named_output_file() {
            return Cow::Borrowed(output);
        }

        match self.inputs.unique_primary_input() {
            Some(input) => {
                let file = input.file();
                file.file_name()
                    .map(|name| name.to_string_lossy())
                    .unwrap_or_else(|| file.to_string_lossy())
            }
            None => Cow::Borrowed(self.module_name.as_str()),
        }
    }

    /// True when the single named output file is an existing directory
    pub fn is_output_file_directory(&self) -> bool {
        self.named_output_file().is_some_and(|output| {
            let is_dir = Path::new(output).is_dir();
            tracing::trace!("Output {:?} is_dir={}", output, is_dir);
            is_dir
        })
    }
}

/// Module-only emission and merging produce just the module artifact
const fn writes_per_input_outputs(action: Action) -> bool {
    match action {
        Action::EmitModuleOnly | Action::MergeModules => false,
        Action::None
        | Action::Parse
        | Action::Typecheck
        | Action::DumpParse
        | Action::DumpAst
        | Action::EmitSyntax
        | Action::DumpInterfaceHash
        | Action::PrintAst
        | Action::DumpScopeMaps
        | Action::DumpTypeRefinementContexts
        | Action::EmitPch
        | Action::EmitSilGen
        | Action::EmitSil
        | Action::EmitSibGen
        | Action::EmitSib
        | Action::Immediate
        | Action::Repl
        | Action::EmitAssembly
        | Action::EmitIr
        | Action::EmitBc
        | Action::EmitObject
        | Action::EmitImportedModules => true,
    }
}
