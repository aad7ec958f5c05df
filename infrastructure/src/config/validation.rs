//! Structured configuration issues.
//!
//! [`FileConfig::validate`](super::FileConfig::validate) returns every issue
//! it finds instead of stopping at the first one, so the CLI can print them
//! all and only abort on [`Severity::Error`].

use std::fmt;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A port of 0 would bind a random port.
    ZeroPort,
    /// A service base URL is empty or not http(s).
    InvalidBaseUrl { field: String, value: String },
    /// A numeric value is outside its accepted range.
    OutOfRange {
        field: String,
        value: u64,
        min: u64,
        max: u64,
    },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// True if any issue is fatal
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(ConfigIssue::is_error)
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", level, self.message)
    }
}
