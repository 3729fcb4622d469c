use anyhow::{Context, Result, bail};
use frontend_options_core::{Action, FrontendOptions, OutputPathKind, UnusedOutputPath};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, warn};

use crate::display::formatter::yes_no;

#[derive(Debug, Serialize)]
pub struct OutputPathEntry {
    pub kind: OutputPathKind,
    pub path: String,
}

/// Everything `check` reports about one options file
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub action: Action,
    pub module_name: String,
    pub module_name_required: bool,
    pub output_paths: Vec<OutputPathEntry>,
    pub original_path: String,
    pub output_is_directory: bool,
    pub unused: Vec<UnusedOutputPath>,
}

impl CheckReport {
    pub fn from_options(options: &FrontendOptions) -> Self {
        let mut output_paths = Vec::new();
        options.for_all_output_paths_with_kind(|kind, path| {
            output_paths.push(OutputPathEntry {
                kind,
                path: path.to_string(),
            });
        });

        Self {
            action: options.requested_action,
            module_name: options.module_name.clone(),
            module_name_required: options.module_name_is_required(),
            output_paths,
            original_path: options.original_path().into_owned(),
            output_is_directory: options.is_output_file_directory(),
            unused: options.unused_output_paths(),
        }
    }

    pub fn missing_module_name(&self) -> bool {
        self.module_name_required && self.module_name.is_empty()
    }
}

pub fn check_command(config_path: &Path, json: bool, strict: bool) -> Result<()> {
    debug!("Checking frontend options: {}", config_path.display());

    let options = FrontendOptions::load_from_file(config_path)
        .with_context(|| format!("Failed to load frontend options from {}", config_path.display()))?;
    let report = CheckReport::from_options(&options);

    for unused in &report.unused {
        warn!("{}", unused);
    }
    if report.missing_module_name() {
        warn!("action '{}' needs a module name but none is configured", report.action);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if strict && !report.unused.is_empty() {
        bail!(
            "{} configured output path(s) unused by action '{}'",
            report.unused.len(),
            report.action
        );
    }

    Ok(())
}

fn print_report(report: &CheckReport) {
    println!("Action: {}", report.action);
    println!(
        "Module name: {} (required: {})",
        if report.module_name.is_empty() {
            "<none>"
        } else {
            report.module_name.as_str()
        },
        yes_no(report.module_name_required)
    );

    println!("\nOutput paths:");
    if report.output_paths.is_empty() {
        println!("  (none)");
    }
    for entry in &report.output_paths {
        println!("  {:<12} {}", kind_label(entry.kind), entry.path);
    }

    println!("\nOriginal path: {}", report.original_path);
    if report.output_is_directory {
        println!("Output file is a directory");
    }

    if report.unused.is_empty() {
        println!("\nNo unused output paths");
    } else {
        println!("\nUnused output paths:");
        for unused in &report.unused {
            println!("  {:<22} {}", unused.kind.description(), unused.path);
        }
    }
}

fn kind_label(kind: OutputPathKind) -> &'static str {
    match kind {
        OutputPathKind::Primary => "primary",
        OutputPathKind::Module => "module",
        OutputPathKind::ModuleDoc => "module doc",
        OutputPathKind::ObjcHeader => "objc header",
    }
}
