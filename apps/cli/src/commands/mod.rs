pub mod fix;
pub mod check;
pub mod rules;
pub mod config;

pub use fix::*;
pub use check::*;
pub use rules::*;
pub use config::*;

use std::path::PathBuf;
use anyhow::{Result, Context};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use novellint_types::{Config, LintKind, LintOptions};
use crate::config_manager::ConfigManager;
use crate::document::Document;
use crate::error::CliError;

/// Loads the profile and replaces its pipeline when lints were given on the command line.
fn resolve_config(
    profile: Option<&str>,
    rules: Vec<LintKind>,
    config_manager: &ConfigManager,
) -> Result<Config> {
    let mut config = config_manager
        .load_config(profile)
        .context("Failed to load configuration")?;

    if !rules.is_empty() {
        debug!("Overriding pipeline with {} lint(s)", rules.len());
        config.options = LintOptions {
            pipeline: rules,
            ..config.options
        };
    }

    let names: Vec<&str> = config.options.pipeline.iter().map(|k| k.name()).collect();
    info!("Pipeline: {}", names.join(" → "));
    Ok(config)
}

fn load_documents(files: &[PathBuf], normalize_crlf: bool) -> Result<Vec<Document>> {
    if files.is_empty() {
        return Ok(vec![Document::read_stdin(normalize_crlf)?]);
    }

    let documents = files
        .par_iter()
        .map(|path| Document::read_file(path, normalize_crlf))
        .collect::<Result<Vec<_>, _>>()?;

    info!("Loaded {} document(s)", documents.len());
    Ok(documents)
}

/// Serializes a report for `--output json`.
fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}
