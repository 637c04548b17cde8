//! Fixture case model and normalization

use ruletest_core::LinterOptions;
use serde::{Deserialize, Serialize};

/// A valid fixture entry: bare source text or the full case shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValidCase {
    /// Shorthand: the source text alone
    Code(String),
    /// Full case record
    Full(TestCase),
}

impl ValidCase {
    /// Convert shorthand into the canonical case record
    ///
    /// Total: every form maps to a canonical case, so normalization
    /// cannot fail.
    pub fn normalize(self) -> TestCase {
        match self {
            ValidCase::Code(code) => TestCase {
                code,
                options: None,
            },
            ValidCase::Full(case) => case,
        }
    }
}

impl From<&str> for ValidCase {
    fn from(code: &str) -> Self {
        ValidCase::Code(code.to_string())
    }
}

/// Canonical case record: source text plus optional linter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// Source text handed to the linter
    pub code: String,
    /// Optional configuration forwarded to the linter verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<LinterOptions>,
}

impl TestCase {
    /// Create a case from source text
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            options: None,
        }
    }

    /// Attach linter configuration to the case
    pub fn with_options(mut self, options: LinterOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// A fixture entry expected to produce diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvalidCase {
    /// Source text handed to the linter
    pub code: String,
    /// Optional configuration forwarded to the linter verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<LinterOptions>,
    /// Declared expectation; `None` means the fixture author omitted it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ExpectedErrors>,
}

impl InvalidCase {
    /// Create an invalid case with its expectation
    pub fn new(code: impl Into<String>, errors: ExpectedErrors) -> Self {
        Self {
            code: code.into(),
            options: None,
            errors: Some(errors),
        }
    }

    /// Attach linter configuration to the case
    pub fn with_options(mut self, options: LinterOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// Declared expectation for an invalid case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpectedErrors {
    /// Exact diagnostic count; content unchecked
    ///
    /// `0` is legal and means the case fails for reasons other than
    /// rule violations.
    Count(usize),
    /// Expected message entries, one per diagnostic
    ///
    /// Entries stay raw JSON values: only plain strings are legal, and
    /// anything else is rejected during comparison rather than at parse
    /// time, mirroring how fixture authors actually get this wrong.
    Messages(Vec<serde_json::Value>),
}

impl ExpectedErrors {
    /// Expectation that exactly `count` diagnostics are produced
    pub fn count(count: usize) -> Self {
        ExpectedErrors::Count(count)
    }

    /// Expectation listing one message per diagnostic
    pub fn messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ExpectedErrors::Messages(
            messages
                .into_iter()
                .map(|message| serde_json::Value::String(message.into()))
                .collect(),
        )
    }

    /// Number of diagnostics this expectation requires
    pub fn len(&self) -> usize {
        match self {
            ExpectedErrors::Count(count) => *count,
            ExpectedErrors::Messages(messages) => messages.len(),
        }
    }

    /// Whether zero diagnostics are expected
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named rule's fixture collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestFixtures {
    /// Cases expected to produce no diagnostics
    #[serde(default)]
    pub valid: Vec<ValidCase>,
    /// Cases expected to produce the declared diagnostics
    #[serde(default)]
    pub invalid: Vec<InvalidCase>,
}
