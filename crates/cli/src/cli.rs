use anyhow::Result;
use clap::{Parser, Subcommand};
use frontend_options_core::Action;
use std::path::PathBuf;

use crate::commands::{check_command, describe_command, table_command};

#[derive(Parser, Debug)]
#[command(name = "frontend-options")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show what a single action can produce
    #[command(visible_alias = "d")]
    Describe {
        /// Action token (e.g. emit-object, typecheck, repl)
        #[arg(value_parser = parse_action)]
        action: Action,

        /// Print JSON instead of a formatted listing
        #[arg(short, long)]
        json: bool,
    },
    /// Print the policy table for every action
    #[command(visible_alias = "t")]
    Table {
        /// Print JSON instead of a formatted table
        #[arg(short, long)]
        json: bool,
    },
    /// Check a frontend options file for unused output paths
    #[command(visible_alias = "c")]
    Check {
        /// Path to a JSON frontend options file
        config: PathBuf,

        /// Print JSON instead of a formatted report
        #[arg(short, long)]
        json: bool,

        /// Fail when any configured output path is unused
        #[arg(short, long)]
        strict: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Describe { action, json } => describe_command(action, json),
            Commands::Table { json } => table_command(json),
            Commands::Check {
                config,
                json,
                strict,
            } => check_command(&config, json, strict),
        }
    }
}

fn parse_action(raw: &str) -> std::result::Result<Action, String> {
    raw.parse::<Action>().map_err(|e| e.to_string())
}
