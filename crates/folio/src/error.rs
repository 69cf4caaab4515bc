// ABOUTME: Error types for the folio layout engine including ErrorCode enum and LayoutError struct.
// ABOUTME: Provides categorized errors with convenience constructors and boolean helpers.

use std::fmt;

/// Error codes representing the categories of layout failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidConfig,
    Input,
    Output,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidConfig => "invalid configuration",
            ErrorCode::Input => "input error",
            ErrorCode::Output => "output error",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for folio operations.
///
/// Analysis and composition never fail; errors only come from the
/// boundaries (option validation, input decoding, writing results).
#[derive(Debug, thiserror::Error)]
pub struct LayoutError {
    pub code: ErrorCode,
    pub op: String,
    pub detail: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "folio: {}: {}", self.op, self.code)?;
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl LayoutError {
    /// Create an InvalidConfig error.
    pub fn invalid_config(op: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InvalidConfig,
            op: op.into(),
            detail: detail.into(),
            source: None,
        }
    }

    /// Create an Input error.
    pub fn input(op: impl Into<String>, source: Option<anyhow::Error>) -> Self {
        Self {
            code: ErrorCode::Input,
            op: op.into(),
            detail: String::new(),
            source,
        }
    }

    /// Create an Output error.
    pub fn output(op: impl Into<String>, source: Option<anyhow::Error>) -> Self {
        Self {
            code: ErrorCode::Output,
            op: op.into(),
            detail: String::new(),
            source,
        }
    }

    /// Returns true if this is an InvalidConfig error.
    pub fn is_invalid_config(&self) -> bool {
        self.code == ErrorCode::InvalidConfig
    }

    /// Returns true if this is an Input error.
    pub fn is_input(&self) -> bool {
        self.code == ErrorCode::Input
    }

    /// Returns true if this is an Output error.
    pub fn is_output(&self) -> bool {
        self.code == ErrorCode::Output
    }
}
