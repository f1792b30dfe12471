use std::path::PathBuf;
use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use novellint_lint::{split, Linter};
use novellint_types::LintKind;
use crate::config_manager::ConfigManager;
use crate::document::Document;
use crate::error::CliError;
use crate::OutputFormat;
use super::{load_documents, resolve_config, to_json};

#[derive(Debug, Serialize)]
struct FixReport {
    path: String,
    changed_paragraphs: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

pub fn fix_command(
    files: Vec<PathBuf>,
    rules: Vec<LintKind>,
    in_place: bool,
    profile: Option<String>,
    output: OutputFormat,
    config_manager: &ConfigManager,
) -> Result<()> {
    if in_place && files.is_empty() {
        return Err(CliError::invalid_args("--in-place requires at least one file").into());
    }

    let config = resolve_config(profile.as_deref(), rules, config_manager)?;
    let documents = load_documents(&files, config.normalize_crlf)?;
    let linter = Linter::new(config.options);

    let fixed: Vec<(Document, String)> = documents
        .into_par_iter()
        .map(|doc| {
            let text = linter.apply(&doc.text);
            (doc, text)
        })
        .collect();

    let mut reports = Vec::with_capacity(fixed.len());
    for (doc, text) in &fixed {
        let changed_paragraphs = count_changed_paragraphs(&doc.text, text);
        if in_place && changed_paragraphs > 0 {
            doc.write_back(text)?;
            info!("Fixed {} ({} paragraph(s))", doc.source, changed_paragraphs);
        }
        reports.push(FixReport {
            path: doc.source.to_string(),
            changed_paragraphs,
            text: (!in_place).then(|| doc.render(text)),
        });
    }

    match output {
        OutputFormat::Json => {
            println!("{}", to_json(&reports)?);
        }
        _ if in_place => print_fix_summary(&reports, output),
        OutputFormat::Pretty if reports.len() > 1 => {
            for report in &reports {
                println!("==> {} <==", report.path);
                println!("{}", report.text.as_deref().unwrap_or_default());
            }
        }
        _ => {
            for report in &reports {
                print!("{}", report.text.as_deref().unwrap_or_default());
            }
        }
    }

    Ok(())
}

fn count_changed_paragraphs(before: &str, after: &str) -> usize {
    split(before)
        .iter()
        .zip(split(after).iter())
        .filter(|(b, a)| b != a)
        .count()
}

fn print_fix_summary(reports: &[FixReport], output: OutputFormat) {
    let fixed = reports.iter().filter(|r| r.changed_paragraphs > 0).count();

    for report in reports.iter().filter(|r| r.changed_paragraphs > 0) {
        match output {
            OutputFormat::Minimal => println!("{}", report.path),
            _ => println!(
                "✅ {} ({} paragraph(s) changed)",
                report.path, report.changed_paragraphs
            ),
        }
    }

    if output == OutputFormat::Pretty {
        println!("\n📝 {} of {} file(s) fixed", fixed, reports.len());
    }
}
