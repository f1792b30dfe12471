use std::path::PathBuf;
use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use novellint_lint::{Linter, FULL_WIDTH_SPACE};
use novellint_types::{Finding, LintKind};
use crate::config_manager::ConfigManager;
use crate::OutputFormat;
use super::{load_documents, resolve_config, to_json};

#[derive(Debug, Serialize)]
struct CheckReport {
    path: String,
    findings: Vec<Finding>,
}

/// Returns the number of findings across all documents.
pub fn check_command(
    files: Vec<PathBuf>,
    rules: Vec<LintKind>,
    profile: Option<String>,
    output: OutputFormat,
    config_manager: &ConfigManager,
) -> Result<usize> {
    let config = resolve_config(profile.as_deref(), rules, config_manager)?;
    let documents = load_documents(&files, config.normalize_crlf)?;
    let linter = Linter::new(config.options);

    let reports: Vec<CheckReport> = documents
        .par_iter()
        .map(|doc| CheckReport {
            path: doc.source.to_string(),
            findings: linter.check(&doc.text),
        })
        .collect();

    let total: usize = reports.iter().map(|r| r.findings.len()).sum();
    info!("Found {} finding(s) in {} document(s)", total, reports.len());

    match output {
        OutputFormat::Json => println!("{}", to_json(&reports)?),
        OutputFormat::Minimal => {
            for report in &reports {
                for finding in &report.findings {
                    println!("{}:{}:{}", report.path, finding.line, finding.kind);
                }
            }
        }
        OutputFormat::Pretty => print_check_report(&reports, total),
    }

    Ok(total)
}

fn print_check_report(reports: &[CheckReport], total: usize) {
    for report in reports.iter().filter(|r| !r.findings.is_empty()) {
        println!("📄 {}", report.path);
        for finding in &report.findings {
            println!(
                "  {}: [{}] {}",
                finding.line,
                finding.kind,
                finding.kind.description()
            );
            println!("    - {}", visible_spaces(&finding.before));
            println!("    + {}", visible_spaces(&finding.after));
        }
    }

    if total == 0 {
        println!("✅ No findings");
    } else {
        println!("\n⚠️  {} finding(s)", total);
    }
}

// 全角スペースを □ で表示する
fn visible_spaces(paragraph: &str) -> String {
    paragraph.replace(FULL_WIDTH_SPACE, "□")
}
