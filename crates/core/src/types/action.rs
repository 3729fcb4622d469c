use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::impl_case_insensitive_deserialize;
use crate::utils::serde_helpers::normalize_token;

/// The single mode a frontend invocation runs in.
///
/// The set is closed. Every function over `Action` matches each variant
/// explicitly so that a new variant fails to compile until every
/// classification site has been revisited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// No action requested.
    #[default]
    None,
    Parse,
    Typecheck,
    DumpParse,
    DumpAst,
    EmitSyntax,
    DumpInterfaceHash,
    PrintAst,
    DumpScopeMaps,
    DumpTypeRefinementContexts,
    /// Emit a precompiled bridging header.
    EmitPch,
    /// Emit raw SIL straight from the AST.
    EmitSilGen,
    EmitSil,
    /// Emit serialized SIL bitcode from raw SIL.
    EmitSibGen,
    EmitSib,
    EmitModuleOnly,
    MergeModules,
    /// Execute the input immediately (interpreter mode).
    Immediate,
    Repl,
    EmitAssembly,
    EmitIr,
    EmitBc,
    EmitObject,
    EmitImportedModules,
}

/// Coarse grouping of actions by what kind of artifact they leave behind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCategory {
    /// Nothing requested at all.
    NoOutput,
    /// Parses or checks the input and reports on it; no codegen artifact.
    Inspection,
    /// Runs code directly; no frontend-generated file.
    Interactive,
    /// Produces a serialized module, SIL/SIB or a precompiled header.
    Module,
    /// Lowers to assembly, LLVM IR, bitcode or object code.
    Lowering,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Action; 24] = [
        Action::None,
        Action::Parse,
        Action::Typecheck,
        Action::DumpParse,
        Action::DumpAst,
        Action::EmitSyntax,
        Action::DumpInterfaceHash,
        Action::PrintAst,
        Action::DumpScopeMaps,
        Action::DumpTypeRefinementContexts,
        Action::EmitPch,
        Action::EmitSilGen,
        Action::EmitSil,
        Action::EmitSibGen,
        Action::EmitSib,
        Action::EmitModuleOnly,
        Action::MergeModules,
        Action::Immediate,
        Action::Repl,
        Action::EmitAssembly,
        Action::EmitIr,
        Action::EmitBc,
        Action::EmitObject,
        Action::EmitImportedModules,
    ];

    /// The stable token used in configuration files and on the command line
    pub const fn as_str(self) -> &'static str {
        match self {
            Action::None => "none",
            Action::Parse => "parse",
            Action::Typecheck => "typecheck",
            Action::DumpParse => "dump-parse",
            Action::DumpAst => "dump-ast",
            Action::EmitSyntax => "emit-syntax",
            Action::DumpInterfaceHash => "dump-interface-hash",
            Action::PrintAst => "print-ast",
            Action::DumpScopeMaps => "dump-scope-maps",
            Action::DumpTypeRefinementContexts => "dump-type-refinement-contexts",
            Action::EmitPch => "emit-pch",
            Action::EmitSilGen => "emit-silgen",
            Action::EmitSil => "emit-sil",
            Action::EmitSibGen => "emit-sibgen",
            Action::EmitSib => "emit-sib",
            Action::EmitModuleOnly => "emit-module-only",
            Action::MergeModules => "merge-modules",
            Action::Immediate => "immediate",
            Action::Repl => "repl",
            Action::EmitAssembly => "emit-assembly",
            Action::EmitIr => "emit-ir",
            Action::EmitBc => "emit-bc",
            Action::EmitObject => "emit-object",
            Action::EmitImportedModules => "emit-imported-modules",
        }
    }

    pub const fn category(self) -> ActionCategory {
        match self {
            Action::None => ActionCategory::NoOutput,
            Action::Parse
            | Action::Typecheck
            | Action::DumpParse
            | Action::DumpAst
            | Action::EmitSyntax
            | Action::DumpInterfaceHash
            | Action::PrintAst
            | Action::DumpScopeMaps
            | Action::DumpTypeRefinementContexts => ActionCategory::Inspection,
            Action::Immediate | Action::Repl => ActionCategory::Interactive,
            Action::EmitPch
            | Action::EmitSilGen
            | Action::EmitSil
            | Action::EmitSibGen
            | Action::EmitSib
            | Action::EmitModuleOnly
            | Action::MergeModules => ActionCategory::Module,
            Action::EmitAssembly
            | Action::EmitIr
            | Action::EmitBc
            | Action::EmitObject
            | Action::EmitImportedModules => ActionCategory::Lowering,
        }
    }

    /// Comma-separated list of every accepted token, for error messages
    pub fn token_list() -> String {
        Action::ALL
            .iter()
            .map(|action| action.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = normalize_token(s);
        Action::ALL
            .iter()
            .copied()
            .find(|action| action.as_str() == token)
            .ok_or_else(|| Error::UnknownAction(s.to_string()))
    }
}

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl_case_insensitive_deserialize!(
    Action,
    None => "none",
    Parse => "parse",
    Typecheck => "typecheck",
    DumpParse => "dump-parse",
    DumpAst => "dump-ast",
    EmitSyntax => "emit-syntax",
    DumpInterfaceHash => "dump-interface-hash",
    PrintAst => "print-ast",
    DumpScopeMaps => "dump-scope-maps",
    DumpTypeRefinementContexts => "dump-type-refinement-contexts",
    EmitPch => "emit-pch",
    EmitSilGen => "emit-silgen",
    EmitSil => "emit-sil",
    EmitSibGen => "emit-sibgen",
    EmitSib => "emit-sib",
    EmitModuleOnly => "emit-module-only",
    MergeModules => "merge-modules",
    Immediate => "immediate",
    Repl => "repl",
    EmitAssembly => "emit-assembly",
    EmitIr => "emit-ir",
    EmitBc => "emit-bc",
    EmitObject => "emit-object",
    EmitImportedModules => "emit-imported-modules",
);
