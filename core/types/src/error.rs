use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LintError {
    #[error("Unknown lint: {name}")]
    UnknownLint { name: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}
