use thiserror::Error;
use std::path::PathBuf;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid command arguments: {message}")]
    InvalidArgs { message: String },

    #[error("File operation failed: {path}: {message}")]
    FileOperation { path: PathBuf, message: String },

    #[error("Profile '{profile}' not found")]
    ProfileNotFound { profile: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Lint error: {0}")]
    Lint(#[from] novellint_types::LintError),
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_args<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgs {
            message: message.into(),
        }
    }

    pub fn file_operation<S: Into<String>>(path: PathBuf, message: S) -> Self {
        Self::FileOperation {
            path,
            message: message.into(),
        }
    }

    pub fn profile_not_found<S: Into<String>>(profile: S) -> Self {
        Self::ProfileNotFound {
            profile: profile.into(),
        }
    }

    /// Get user-friendly error message for display
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("⚙️ Configuration Error: {}", message)
            }
            Self::InvalidArgs { message } => {
                format!("❌ Invalid Arguments: {}", message)
            }
            Self::FileOperation { path, message } => {
                format!("📁 File Error ({}): {}", path.display(), message)
            }
            Self::ProfileNotFound { profile } => {
                format!("📋 Profile '{}' not found. Use 'novellint config list' to see available profiles.", profile)
            }
            Self::Io(e) => {
                format!("💾 File System Error: {}", e)
            }
            Self::Json(e) => {
                format!("📄 Data Format Error: {}", e)
            }
            Self::Lint(e) => {
                format!("🔧 Lint Error: {}", e)
            }
        }
    }

    /// Get error code for programmatic handling
    pub fn error_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 10,
            Self::InvalidArgs { .. } => 11,
            Self::FileOperation { .. } => 12,
            Self::ProfileNotFound { .. } => 13,
            Self::Io(_) => 30,
            Self::Json(_) => 31,
            Self::Lint(_) => 40,
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config { .. } | Self::Json(_) => vec![
                "Check your configuration file syntax".to_string(),
                "Use 'novellint config show' to inspect the active settings".to_string(),
            ],
            Self::InvalidArgs { .. } => vec![
                "Check command syntax with 'novellint --help'".to_string(),
            ],
            Self::FileOperation { .. } | Self::Io(_) => vec![
                "Ensure the file exists and is readable".to_string(),
                "Manuscripts must be UTF-8 encoded".to_string(),
            ],
            Self::ProfileNotFound { .. } => vec![
                "Use 'novellint config list' to see available profiles".to_string(),
                "Create the profile with 'novellint config create'".to_string(),
            ],
            Self::Lint(_) => vec![
                "Use 'novellint rules' to list available lints".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use novellint_types::LintError;

    #[test]
    fn test_error_creation() {
        let error = CliError::config("Test config error");
        assert!(matches!(error, CliError::Config { .. }));
    }

    #[test]
    fn test_user_message() {
        let error = CliError::file_operation(PathBuf::from("draft.txt"), "not UTF-8");
        let message = error.user_message();
        assert!(message.contains("📁"));
        assert!(message.contains("draft.txt"));
        assert!(message.contains("not UTF-8"));
    }

    #[test]
    fn test_error_code() {
        assert_eq!(CliError::config("test").error_code(), 10);
        assert_eq!(CliError::invalid_args("test").error_code(), 11);
        assert_eq!(CliError::profile_not_found("test").error_code(), 13);
    }

    #[test]
    fn test_suggestions() {
        let error = CliError::from(LintError::UnknownLint {
            name: "fix-all".to_string(),
        });
        assert!(error.suggestions().iter().any(|s| s.contains("novellint rules")));
    }

    #[test]
    fn test_from_conversions() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let cli_error = CliError::from(io_error);
        assert!(matches!(cli_error, CliError::Io(_)));
    }
}
