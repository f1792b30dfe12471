use anyhow::Result;
use serde::Serialize;

use novellint_types::LintKind;
use crate::OutputFormat;
use super::to_json;

#[derive(Debug, Serialize)]
struct RuleInfo {
    name: &'static str,
    description: &'static str,
    uses_dashes: bool,
}

pub fn rules_command(output: OutputFormat) -> Result<()> {
    let rules: Vec<RuleInfo> = LintKind::ALL
        .iter()
        .map(|kind| RuleInfo {
            name: kind.name(),
            description: kind.description(),
            uses_dashes: kind.uses_dashes(),
        })
        .collect();

    match output {
        OutputFormat::Json => println!("{}", to_json(&rules)?),
        OutputFormat::Minimal => {
            for rule in &rules {
                println!("{}", rule.name);
            }
        }
        OutputFormat::Pretty => {
            println!("📝 Available Lints:");
            for rule in &rules {
                let dash_marker = if rule.uses_dashes { " (consider_dashes)" } else { "" };
                println!("  {:<44} {}{}", rule.name, rule.description, dash_marker);
            }
        }
    }

    Ok(())
}
