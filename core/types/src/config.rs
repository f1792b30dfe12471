use serde::{Deserialize, Serialize};
use crate::error::LintError;
use crate::lint::LintOptions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub options: LintOptions,
    #[serde(default = "default_normalize_crlf")]
    pub normalize_crlf: bool,
}

fn default_normalize_crlf() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            options: LintOptions::default(),
            normalize_crlf: default_normalize_crlf(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), LintError> {
        if self.options.pipeline.is_empty() {
            return Err(LintError::Config {
                message: "pipeline must contain at least one lint".to_string(),
            });
        }
        Ok(())
    }
}
