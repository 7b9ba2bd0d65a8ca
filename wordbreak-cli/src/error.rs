//! Error handling for the CLI application

use std::fmt;

/// CLI-specific failures
#[derive(Debug)]
pub enum CliError {
    /// No input file matched the given patterns
    FileNotFound(String),
    /// A glob pattern could not be parsed
    InvalidPattern(String),
    /// The grammar could not be loaded
    GrammarError(String),
    /// An option value is out of range
    InvalidOption(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "No files found matching: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::GrammarError(msg) => write!(f, "Grammar error: {msg}"),
            CliError::InvalidOption(msg) => write!(f, "Invalid option: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CliError::FileNotFound("*.txt".to_string()).to_string(),
            "No files found matching: *.txt"
        );
        assert_eq!(
            CliError::InvalidPattern("[invalid".to_string()).to_string(),
            "Invalid file pattern: [invalid"
        );
        assert_eq!(
            CliError::GrammarError("unknown class".to_string()).to_string(),
            "Grammar error: unknown class"
        );
        assert_eq!(
            CliError::InvalidOption("--top must be at least 1".to_string()).to_string(),
            "Invalid option: --top must be at least 1"
        );
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = CliError::InvalidPattern("**[".to_string()).into();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }
}
