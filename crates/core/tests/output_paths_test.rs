//! Integration tests for output path enumeration and naming

use frontend_options_core::{Action, FrontendOptions, InputFile, OutputPathKind};
use std::fs;
use tempfile::TempDir;

fn configured(action: Action) -> FrontendOptions {
    FrontendOptions::new(action)
        .with_output_filename("a.o")
        .with_output_filename("b.o")
        .with_module_output_path("M.swiftmodule")
        .with_module_doc_output_path("")
        .with_module_name("M")
}

#[test]
fn test_emit_object_visits_primary_outputs_then_module() {
    let options = configured(Action::EmitObject);
    let mut visited = Vec::new();
    options.for_all_output_paths(|path| visited.push(path.to_string()));

    insta::assert_debug_snapshot!(visited, @r###"
    [
        "a.o",
        "b.o",
        "M.swiftmodule",
    ]
    "###);
}

#[test]
fn test_module_only_visits_module_alone() {
    let options = configured(Action::EmitModuleOnly);
    let mut visited = Vec::new();
    options.for_all_output_paths(|path| visited.push(path.to_string()));
    assert_eq!(visited, vec!["M.swiftmodule"]);
}

#[test]
fn test_kinds_reported_alongside_paths() {
    let options = configured(Action::EmitSil).with_objc_header_output_path("M-Swift.h");
    let mut kinds = Vec::new();
    options.for_all_output_paths_with_kind(|kind, _| kinds.push(kind));
    assert_eq!(
        kinds,
        vec![
            OutputPathKind::Primary,
            OutputPathKind::Primary,
            OutputPathKind::Module,
            OutputPathKind::ObjcHeader,
        ]
    );
}

#[test]
fn test_original_path_fallback_chain() {
    let bare = FrontendOptions::new(Action::Typecheck).with_module_name("Mod");
    assert_eq!(bare.original_path(), "Mod");

    let single_input = bare.clone().with_input(InputFile::primary("foo.swift"));
    assert_eq!(single_input.original_path(), "foo.swift");

    let named = single_input.with_output_filename("out/foo.o");
    assert_eq!(named.original_path(), "out/foo.o");
}

#[test]
fn test_output_directory_detection_from_loaded_config() {
    let temp_dir = TempDir::new().unwrap();
    let build_dir = temp_dir.path().join("build");
    fs::create_dir(&build_dir).unwrap();

    let config = serde_json::json!({
        "requested_action": "emit-object",
        "output_filenames": [build_dir.to_string_lossy()],
        "module_name": "App",
        "inputs": [{ "file": "main.swift", "primary": true }]
    });
    let config_path = temp_dir.path().join("frontend.json");
    fs::write(&config_path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    let options = FrontendOptions::load_from_file(&config_path).unwrap();
    assert!(options.has_named_output_file());
    assert!(options.is_output_file_directory());
    assert_eq!(options.original_path(), build_dir.to_string_lossy());
}
