use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    error::{Error, Result},
    types::{Action, FrontendInputs, InputFile},
};

/// Output filename that means "write to standard output"
pub const STDOUT_FILENAME: &str = "-";

/// Configuration for one frontend invocation.
///
/// Populated once by whoever parsed the command line and only read afterwards.
/// Optional paths treat an empty string the same as an absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FrontendOptions {
    #[serde(default)]
    pub requested_action: Action,

    #[serde(default)]
    pub output_filenames: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_output_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_doc_output_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objc_header_output_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies_file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loaded_module_trace_path: Option<String>,

    #[serde(default)]
    pub module_name: String,

    #[serde(default)]
    pub inputs: FrontendInputs,
}

impl FrontendOptions {
    pub fn new(requested_action: Action) -> Self {
        Self {
            requested_action,
            ..Default::default()
        }
    }

    pub fn with_output_filename(mut self, filename: impl Into<String>) -> Self {
        self.output_filenames.push(filename.into());
        self
    }

    pub fn with_module_output_path(mut self, path: impl Into<String>) -> Self {
        self.module_output_path = Some(path.into());
        self
    }

    pub fn with_module_doc_output_path(mut self, path: impl Into<String>) -> Self {
        self.module_doc_output_path = Some(path.into());
        self
    }

    pub fn with_objc_header_output_path(mut self, path: impl Into<String>) -> Self {
        self.objc_header_output_path = Some(path.into());
        self
    }

    pub fn with_dependencies_file_path(mut self, path: impl Into<String>) -> Self {
        self.dependencies_file_path = Some(path.into());
        self
    }

    pub fn with_loaded_module_trace_path(mut self, path: impl Into<String>) -> Self {
        self.loaded_module_trace_path = Some(path.into());
        self
    }

    pub fn with_module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = name.into();
        self
    }

    pub fn with_input(mut self, input: InputFile) -> Self {
        self.inputs.files.push(input);
        self
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!("Loading frontend options from {:?}", path);
        let contents = std::fs::read_to_string(path)?;
        let options = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse frontend options: {e}")))?;
        Ok(options)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize frontend options: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Whether the configured module name has to be a valid identifier for
    /// the requested action
    pub fn module_name_is_required(&self) -> bool {
        self.requested_action.needs_proper_module_name()
    }

    /// The only output filename, when exactly one was requested
    pub fn single_output_filename(&self) -> Option<&str> {
        match self.output_filenames.as_slice() {
            [single] => Some(single.as_str()),
            _ => None,
        }
    }

    pub fn is_output_filename_stdout(&self) -> bool {
        self.single_output_filename() == Some(STDOUT_FILENAME)
    }

    /// The single output filename, unless it is empty or stdout
    pub fn named_output_file(&self) -> Option<&str> {
        self.single_output_filename()
            .filter(|name| !name.is_empty() && *name != STDOUT_FILENAME)
    }

    pub fn has_named_output_file(&self) -> bool {
        self.named_output_file().is_some()
    }
}

/// The configured value of an optional path, ignoring empty strings
pub(crate) fn configured(path: &Option<String>) -> Option<&str> {
    path.as_deref().filter(|path| !path.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_named_output_file() {
        let options = FrontendOptions::new(Action::EmitObject).with_output_filename("main.o");
        assert!(options.has_named_output_file());
        assert_eq!(options.single_output_filename(), Some("main.o"));

        let stdout = FrontendOptions::new(Action::EmitIr).with_output_filename("-");
        assert!(stdout.is_output_filename_stdout());
        assert!(!stdout.has_named_output_file());

        let several = FrontendOptions::new(Action::EmitObject)
            .with_output_filename("a.o")
            .with_output_filename("b.o");
        assert_eq!(several.single_output_filename(), None);
        assert!(!several.has_named_output_file());

        assert!(!FrontendOptions::new(Action::EmitObject).has_named_output_file());
    }

    #[test]
    fn test_configured_ignores_empty_paths() {
        assert_eq!(configured(&None), None);
        assert_eq!(configured(&Some(String::new())), None);
        assert_eq!(configured(&Some("M.swiftmodule".to_string())), Some("M.swiftmodule"));
    }

    #[test]
    fn test_module_name_requirement_follows_action() {
        assert!(FrontendOptions::new(Action::MergeModules).module_name_is_required());
        assert!(!FrontendOptions::new(Action::Repl).module_name_is_required());
    }

    #[test]
    fn test_config_roundtrip_through_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("options.json");

        let options = FrontendOptions::new(Action::EmitObject)
            .with_output_filename("main.o")
            .with_module_output_path("Main.swiftmodule")
            .with_module_name("Main")
            .with_input(InputFile::primary("main.swift"));
        options.save_to_file(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains(r#""requested_action": "emit-object""#));
        assert!(!contents.contains("dependencies_file_path"));

        let loaded = FrontendOptions::load_from_file(&path).unwrap();
        assert_eq!(loaded, options);
    }

    #[test]
    fn test_load_defaults_missing_fields() {
        let options: FrontendOptions =
            serde_json::from_str(r#"{"requested_action": "Typecheck"}"#).unwrap();
        assert_eq!(options.requested_action, Action::Typecheck);
        assert!(options.output_filenames.is_empty());
        assert!(options.module_output_path.is_none());
        assert!(options.module_name.is_empty());
    }

    #[test]
    fn test_load_reports_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, r#"{"requested_action": "emit-nothing"}"#).unwrap();

        let err = FrontendOptions::load_from_file(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
        assert!(err.to_string().contains("emit-nothing"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = FrontendOptions::load_from_file(&temp_dir.path().join("absent.json"))
            .unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }
}
