use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One input file handed to the frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFile {
    pub file: PathBuf,
    /// Primary inputs are the files this invocation compiles; the rest are
    /// only parsed for context.
    #[serde(default)]
    pub primary: bool,
}

impl InputFile {
    pub fn primary(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            primary: true,
        }
    }

    pub fn secondary(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            primary: false,
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}

/// The ordered set of inputs for one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrontendInputs {
    pub files: Vec<InputFile>,
}

impl FrontendInputs {
    pub fn new(files: Vec<InputFile>) -> Self {
        Self { files }
    }

    pub fn primary_inputs(&self) -> impl Iterator<Item = &InputFile> {
        self.files.iter().filter(|input| input.primary)
    }

    pub fn primary_input_count(&self) -> usize {
        self.primary_inputs().count()
    }

    pub fn has_primary_inputs(&self) -> bool {
        self.primary_inputs().next().is_some()
    }

    /// The primary input, if there is exactly one
    pub fn unique_primary_input(&self) -> Option<&InputFile> {
        let mut primaries = self.primary_inputs();
        let first = primaries.next()?;
        match primaries.next() {
            Some(_) => None,
            None => Some(first),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_primary_input() {
        let inputs = FrontendInputs::new(vec![
            InputFile::secondary("other.swift"),
            InputFile::primary("main.swift"),
        ]);
        assert_eq!(inputs.primary_input_count(), 1);
        assert_eq!(
            inputs.unique_primary_input().map(InputFile::file),
            Some(Path::new("main.swift"))
        );
    }

    #[test]
    fn test_no_unique_primary_when_ambiguous_or_absent() {
        let none = FrontendInputs::new(vec![InputFile::secondary("a.swift")]);
        assert!(!none.has_primary_inputs());
        assert!(none.unique_primary_input().is_none());

        let two = FrontendInputs::new(vec![
            InputFile::primary("a.swift"),
            InputFile::primary("b.swift"),
        ]);
        assert!(two.has_primary_inputs());
        assert!(two.unique_primary_input().is_none());
    }

    #[test]
    fn test_inputs_deserialize_with_default_primary_flag() {
        let inputs: FrontendInputs = serde_json::from_str(
            r#"[{"file": "a.swift", "primary": true}, {"file": "b.swift"}]"#,
        )
        .unwrap();
        assert_eq!(inputs.files[0], InputFile::primary("a.swift"));
        assert_eq!(inputs.files[1], InputFile::secondary("b.swift"));
    }
}
