//! skillkit CLI - Skill bundle lifecycle tool
//!
//! Commands:
//! - `skillkit validate` - Check a bundle's SKILL.md frontmatter
//! - `skillkit init` - Scaffold a new bundle from templates
//! - `skillkit package` - Validate a bundle and write a `.skill` archive
//! - `skillkit inspect` - Show the contents of a `.skill` archive

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use skillkit_core::{ScriptLanguage, SkillkitConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

mod init;
mod inspect;
mod package;
mod validate;

#[derive(Parser)]
#[command(name = "skillkit")]
#[command(author, version, about = "Create, validate, and package skill bundles", long_about = None)]
struct Cli {
    /// Path to skillkit.toml (default: ./skillkit.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a skill bundle's SKILL.md
    Validate {
        /// Bundle directory containing SKILL.md
        skill_directory: PathBuf,
    },

    /// Create a new skill bundle from templates
    Init {
        /// Bundle name (kebab-case)
        skill_name: String,

        /// Directory in which to create the bundle
        #[arg(long)]
        path: PathBuf,

        /// Language of the example script (typescript, python, shell)
        #[arg(long)]
        script: Option<ScriptLanguage>,
    },

    /// Validate a bundle and package it as a .skill archive
    Package {
        /// Bundle directory to package
        skill_folder: PathBuf,

        /// Directory for the archive (default: current directory)
        output_directory: Option<PathBuf>,
    },

    /// List the contents of a .skill archive
    Inspect {
        /// Path to the .skill archive
        archive: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Run one command; `Ok(false)` means the operation reported a failure.
fn run(cli: Cli) -> Result<bool> {
    let config = SkillkitConfig::discover(cli.config.as_deref())
        .context("failed to load configuration")?;
    let level = config.logging.level.raised_by(cli.verbose);
    skillkit_logging::init_logging(level).context("failed to initialize logging")?;
    debug!(%level, config = ?cli.config, "configuration loaded");

    match cli.command {
        Commands::Validate { skill_directory } => validate::run(&skill_directory, cli.json),
        Commands::Init {
            skill_name,
            path,
            script,
        } => {
            let script = script.unwrap_or(config.init.script);
            init::run(&skill_name, &path, script, cli.json)
        }
        Commands::Package {
            skill_folder,
            output_directory,
        } => package::run(
            &skill_folder,
            output_directory.as_deref(),
            &config.package,
            cli.json,
        ),
        Commands::Inspect { archive } => inspect::run(&archive, cli.json),
    }
}

/// Print a report as pretty JSON on stdout.
fn print_json<T: Serialize>(report: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    println!("{json}");
    Ok(())
}
