//! Error types and handling for diagnostic verification

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rule test operations
#[derive(Debug, Error)]
pub enum RuletestError {
    /// An invalid-case fixture omitted its expected-errors declaration
    #[error("Did not specify errors for an invalid test")]
    MissingExpectation,

    /// A valid case produced diagnostics
    #[error("Should have no errors but had {count}:\n{details}")]
    UnexpectedDiagnostics { count: usize, details: String },

    /// Actual diagnostic count differs from the declared expectation
    #[error("Should have {expected} error(s) but had {actual}:\n{details}")]
    CountMismatch {
        expected: usize,
        actual: usize,
        details: String,
    },

    /// A sorted actual message differs from its expected counterpart
    #[error("Expected message {expected:?} but found {actual:?}")]
    MessageMismatch { expected: String, actual: String },

    /// The source could not be parsed at all
    #[error("A fatal parsing error occurred: {message}")]
    FatalParseError { message: String },

    /// An expected-error entry is not a plain string
    #[error("Error should be a string, but found ({value})")]
    InvalidExpectation { value: String },

    /// The external linter failed to produce a report
    #[error("Linter error: {message}")]
    Linter { message: String },

    /// A fixture document could not be read or parsed
    #[error("Fixture error: {message}")]
    Fixture { message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Fixture-authoring defects in the expectation itself
    Expectation,
    /// Actual diagnostics did not match the declared expectation
    Comparison,
    /// External linter failures
    Linter,
    /// Fixture loading failures
    Fixture,
    /// Filesystem failures
    Io,
}

impl RuletestError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RuletestError::MissingExpectation | RuletestError::InvalidExpectation { .. } => {
                ErrorKind::Expectation
            }
            RuletestError::UnexpectedDiagnostics { .. }
            | RuletestError::CountMismatch { .. }
            | RuletestError::MessageMismatch { .. }
            | RuletestError::FatalParseError { .. } => ErrorKind::Comparison,
            RuletestError::Linter { .. } => ErrorKind::Linter,
            RuletestError::Fixture { .. } => ErrorKind::Fixture,
            RuletestError::Io { .. } => ErrorKind::Io,
        }
    }

    /// Whether this error is a case-local assertion failure, as opposed to
    /// an infrastructure problem with the linter or the fixture storage
    pub fn is_assertion(&self) -> bool {
        matches!(self.kind(), ErrorKind::Expectation | ErrorKind::Comparison)
    }

    /// Create an unexpected-diagnostics failure
    pub fn unexpected_diagnostics(count: usize, details: impl Into<String>) -> Self {
        Self::UnexpectedDiagnostics {
            count,
            details: details.into(),
        }
    }

    /// Create a count mismatch failure
    pub fn count_mismatch(expected: usize, actual: usize, details: impl Into<String>) -> Self {
        Self::CountMismatch {
            expected,
            actual,
            details: details.into(),
        }
    }

    /// Create a message mismatch failure
    pub fn message_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::MessageMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a fatal parse failure
    pub fn fatal_parse(message: impl Into<String>) -> Self {
        Self::FatalParseError {
            message: message.into(),
        }
    }

    /// Create an invalid expectation failure
    pub fn invalid_expectation(value: impl Into<String>) -> Self {
        Self::InvalidExpectation {
            value: value.into(),
        }
    }

    /// Create a linter error
    pub fn linter_error(message: impl Into<String>) -> Self {
        Self::Linter {
            message: message.into(),
        }
    }

    /// Create a fixture error
    pub fn fixture_error(message: impl Into<String>) -> Self {
        Self::Fixture {
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for RuletestError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: PathBuf::new(),
            source: err,
        }
    }
}
