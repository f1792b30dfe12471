mod commands;
mod config_manager;
mod document;
mod error;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::{info, error};
use anyhow::Result;

use novellint_types::LintKind;
use crate::commands::*;
use crate::config_manager::ConfigManager;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "novellint")]
#[command(about = "Typographic linter for Japanese novel manuscripts")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty, global = true)]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
    Minimal,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite manuscripts with the configured lints
    Fix {
        /// Files to fix (reads stdin when omitted)
        files: Vec<PathBuf>,

        /// Lints to run instead of the profile pipeline
        #[arg(short, long = "rule", value_name = "LINT")]
        rules: Vec<LintKind>,

        /// Overwrite the files instead of printing the result
        #[arg(long)]
        in_place: bool,

        /// Profile name to use
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// Report paragraphs the configured lints would change
    Check {
        /// Files to check (reads stdin when omitted)
        files: Vec<PathBuf>,

        /// Lints to run instead of the profile pipeline
        #[arg(short, long = "rule", value_name = "LINT")]
        rules: Vec<LintKind>,

        /// Profile name to use
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// List available lints
    Rules,

    /// Manage configuration profiles
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// List available profiles
    List,

    /// Show profile configuration
    Show {
        /// Profile name
        #[arg(default_value = "default")]
        profile: String,
    },

    /// Create new profile
    Create {
        /// Profile name
        profile: String,

        /// Copy from existing profile
        #[arg(long)]
        from: Option<String>,
    },

    /// Delete profile
    Delete {
        /// Profile name
        profile: String,

        /// Skip confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    info!("novellint v{} starting", env!("CARGO_PKG_VERSION"));

    let config_manager = ConfigManager::new(cli.config.clone())?;

    let result = match cli.command {
        Commands::Fix { files, rules, in_place, profile } => {
            fix_command(files, rules, in_place, profile, cli.output, &config_manager).map(|_| 0)
        }
        Commands::Check { files, rules, profile } => {
            check_command(files, rules, profile, cli.output, &config_manager)
                .map(|findings| if findings > 0 { 1 } else { 0 })
        }
        Commands::Rules => rules_command(cli.output).map(|_| 0),
        Commands::Config { action } => config_command(action, &config_manager).map(|_| 0),
    };

    match result {
        Ok(0) => {
            info!("Command completed successfully");
            Ok(())
        }
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!("Command failed: {:#}", e);
            match e.downcast_ref::<CliError>() {
                Some(cli_error) => {
                    eprintln!("{}", cli_error.user_message());
                    for suggestion in cli_error.suggestions() {
                        eprintln!("  hint: {}", suggestion);
                    }
                    std::process::exit(cli_error.error_code());
                }
                None => std::process::exit(2),
            }
        }
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // stdout is reserved for lint output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(format!(
                        "novellint_cli={level},novellint_lint={level}",
                        level = log_level
                    ))
                })
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}
