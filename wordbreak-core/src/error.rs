//! Error types for grammar loading and segmentation
//!
//! Segmentation itself never fails once a [`Ruleset`](crate::Ruleset) has
//! been built; every error here is raised while compiling grammar input or
//! when a caller violates an argument contract.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Malformed rule definition line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct RuleSyntaxError {
    /// The offending line, verbatim
    pub line: String,
    /// 1-based line number when parsed from a multi-line source
    pub line_number: Option<usize>,
    /// What went wrong
    pub reason: String,
}

impl RuleSyntaxError {
    pub(crate) fn new(line: &str, reason: impl Into<String>) -> Self {
        Self {
            line: line.to_string(),
            line_number: None,
            reason: reason.into(),
        }
    }

    pub(crate) fn at_line(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }
}

impl fmt::Display for RuleSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line_number {
            Some(n) => write!(f, "line {n}: {} in `{}`", self.reason, self.line),
            None => write!(f, "{} in `{}`", self.reason, self.line),
        }
    }
}

/// Malformed character class record (`HEX[..HEX] ; NAME # comment`)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ClassDefinitionError {
    /// The offending line, verbatim
    pub line: String,
    /// 1-based line number when parsed from a multi-line source
    pub line_number: Option<usize>,
    /// What went wrong
    pub reason: String,
}

impl ClassDefinitionError {
    pub(crate) fn new(line: &str, reason: impl Into<String>) -> Self {
        Self {
            line: line.to_string(),
            line_number: None,
            reason: reason.into(),
        }
    }

    pub(crate) fn at_line(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }
}

impl fmt::Display for ClassDefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line_number {
            Some(n) => write!(f, "line {n}: {} in `{}`", self.reason, self.line),
            None => write!(f, "{} in `{}`", self.reason, self.line),
        }
    }
}

/// Errors raised by this crate
#[derive(Debug, Error)]
pub enum Error {
    /// A rule definition line could not be parsed
    #[error("rule syntax error: {0}")]
    RuleSyntax(#[from] RuleSyntaxError),

    /// A class definition record could not be parsed
    #[error("class definition error: {0}")]
    ClassDefinition(#[from] ClassDefinitionError),

    /// Caller-side contract violation
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A rule refers to a class the index does not know
    #[error("rule '{rule}' references unknown class '{class}'")]
    UnknownClass {
        /// Rule name
        rule: String,
        /// Unresolved class name
        class: String,
    },

    /// A class definition uses one of the sentinel names
    #[error("class name '{0}' is reserved")]
    ReservedClassName(String),

    /// A rule violates the structural invariants
    #[error("invalid rule '{name}': {reason}")]
    InvalidRule {
        /// Rule name
        name: String,
        /// Violated invariant
        reason: String,
    },

    /// Grammar configuration is missing or inconsistent
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Reading grammar data from disk failed
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for this crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_syntax_error_display() {
        let err = RuleSyntaxError::new("WB5 ALetter ×", "unterminated alternation group");
        assert_eq!(
            err.to_string(),
            "unterminated alternation group in `WB5 ALetter ×`"
        );

        let err = err.at_line(12);
        assert_eq!(
            err.to_string(),
            "line 12: unterminated alternation group in `WB5 ALetter ×`"
        );
    }

    #[test]
    fn test_class_definition_error_wraps() {
        let err: Error = ClassDefinitionError::new("XYZ ; A", "invalid codepoint").into();
        assert!(matches!(err, Error::ClassDefinition(_)));
        assert!(err.to_string().starts_with("class definition error:"));
    }

    #[test]
    fn test_unknown_class_display() {
        let err = Error::UnknownClass {
            rule: "WB5".into(),
            class: "ALETTER".into(),
        };
        assert_eq!(
            err.to_string(),
            "rule 'WB5' references unknown class 'ALETTER'"
        );
    }
}
