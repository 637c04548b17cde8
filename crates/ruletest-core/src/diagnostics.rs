//! Diagnostic types produced by a lint invocation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Represents one reported issue from a lint run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Unique identifier for the rule that produced this diagnostic
    pub rule_id: String,
    /// Severity level of the diagnostic
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
    /// Whether the source could not be parsed at all
    #[serde(default)]
    pub fatal: bool,
}

/// Severity levels for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Informational messages
    Info,
    /// Hints for improvements
    Hint,
    /// Warnings that should be addressed
    Warning,
    /// Errors that must be fixed
    Error,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(
        rule_id: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            severity,
            message: message.into(),
            line,
            column,
            fatal: false,
        }
    }

    /// Mark this diagnostic as a fatal parse failure
    pub fn with_fatal(mut self) -> Self {
        self.fatal = true;
        self
    }

    /// Whether this diagnostic counts towards a file's error total
    pub fn is_error(&self) -> bool {
        self.fatal || self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} {} [{}]",
            self.line, self.column, self.severity, self.message, self.rule_id
        )?;
        if self.fatal {
            write!(f, " (fatal)")?;
        }
        Ok(())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Hint => write!(f, "hint"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Diagnostics produced for one processed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// Path of the linted file (synthetic for in-memory sources)
    pub file_path: PathBuf,
    /// Number of error-level diagnostics reported for the file
    pub error_count: usize,
    /// All diagnostics reported for the file, in emission order
    pub messages: Vec<Diagnostic>,
}

impl FileReport {
    /// Create a report, deriving `error_count` from the messages
    pub fn new(file_path: impl Into<PathBuf>, messages: Vec<Diagnostic>) -> Self {
        let error_count = messages.iter().filter(|m| m.is_error()).count();
        Self {
            file_path: file_path.into(),
            error_count,
            messages,
        }
    }

    /// Override the derived error count
    ///
    /// Some linters count errors independently of the emitted messages
    /// (suppressions, grouped occurrences); this keeps their totals intact.
    pub fn with_error_count(mut self, error_count: usize) -> Self {
        self.error_count = error_count;
        self
    }
}

/// Ordered per-file output of a single lint invocation
///
/// One case normally yields exactly one file's worth of diagnostics, but
/// consumers must tolerate multiple entries from multi-file invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintReport {
    /// Per-file results in the order the linter produced them
    pub results: Vec<FileReport>,
}

impl LintReport {
    /// Create a report from per-file results
    pub fn new(results: Vec<FileReport>) -> Self {
        Self { results }
    }

    /// Create a report wrapping a single file result
    pub fn single(result: FileReport) -> Self {
        Self {
            results: vec![result],
        }
    }

    /// Sum of error counts across all per-file results
    pub fn total_error_count(&self) -> usize {
        self.results.iter().map(|r| r.error_count).sum()
    }

    /// Total number of diagnostics across all per-file results
    pub fn total_message_count(&self) -> usize {
        self.results.iter().map(|r| r.messages.len()).sum()
    }

    /// Iterate over every diagnostic in the report
    pub fn all_messages(&self) -> impl Iterator<Item = &Diagnostic> {
        self.results.iter().flat_map(|r| r.messages.iter())
    }

    /// Whether the invocation produced no errors
    pub fn is_clean(&self) -> bool {
        self.total_error_count() == 0
    }
}
