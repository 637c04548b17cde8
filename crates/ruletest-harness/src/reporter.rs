//! Boundary with the surrounding test-reporting shell

use ruletest_core::{Result, RuletestError};
use tracing::debug;

/// Outcome of one executed case
#[derive(Debug)]
pub enum CaseVerdict {
    /// The case behaved as its fixture declared
    Passed,
    /// The first violated condition for the case
    Failed(RuletestError),
}

impl CaseVerdict {
    /// Whether the case passed
    pub fn passed(&self) -> bool {
        matches!(self, CaseVerdict::Passed)
    }
}

impl From<Result<()>> for CaseVerdict {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => CaseVerdict::Passed,
            Err(err) => CaseVerdict::Failed(err),
        }
    }
}

/// Receives the generated test tree
///
/// The engine registers one suite per rule under test, one group per
/// fixture category, and exactly one outcome per case; it does not
/// implement reporting itself. Suite and group notifications arrive as
/// begin/end brackets around the contained cases.
pub trait TestReporter {
    /// A suite (one rule/config under test) is starting
    fn begin_suite(&mut self, name: &str);

    /// The current suite finished
    fn end_suite(&mut self) {}

    /// A category group ("valid" / "invalid") is starting
    fn begin_group(&mut self, name: &str);

    /// The current group finished
    fn end_group(&mut self) {}

    /// One case finished, labeled by its source text
    fn record_case(&mut self, label: &str, verdict: CaseVerdict);
}

/// One recorded case outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRecord {
    /// Suite the case belongs to
    pub suite: String,
    /// Category group within the suite
    pub group: String,
    /// Case label (the fixture's source text)
    pub label: String,
    /// Failure message, if the case failed
    pub failure: Option<String>,
}

impl CaseRecord {
    /// Whether the case passed
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// Default reporter collecting outcomes into a flat record list
#[derive(Debug, Default)]
pub struct SummaryReporter {
    current_suite: String,
    current_group: String,
    records: Vec<CaseRecord>,
}

impl SummaryReporter {
    /// Create an empty reporter
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded cases, in execution order
    pub fn records(&self) -> &[CaseRecord] {
        &self.records
    }

    /// Total number of recorded cases
    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// Number of passed cases
    pub fn passed(&self) -> usize {
        self.records.iter().filter(|r| r.passed()).count()
    }

    /// Number of failed cases
    pub fn failed(&self) -> usize {
        self.records.iter().filter(|r| !r.passed()).count()
    }

    /// Iterate over the failed cases
    pub fn failures(&self) -> impl Iterator<Item = &CaseRecord> {
        self.records.iter().filter(|r| !r.passed())
    }

    /// Whether every recorded case passed
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

impl TestReporter for SummaryReporter {
    fn begin_suite(&mut self, name: &str) {
        self.current_suite = name.to_string();
    }

    fn begin_group(&mut self, name: &str) {
        self.current_group = name.to_string();
    }

    fn record_case(&mut self, label: &str, verdict: CaseVerdict) {
        let failure = match verdict {
            CaseVerdict::Passed => None,
            CaseVerdict::Failed(err) => Some(err.to_string()),
        };
        match &failure {
            None => debug!(
                suite = %self.current_suite,
                group = %self.current_group,
                "case passed"
            ),
            Some(message) => debug!(
                suite = %self.current_suite,
                group = %self.current_group,
                %message,
                "case failed"
            ),
        }
        self.records.push(CaseRecord {
            suite: self.current_suite.clone(),
            group: self.current_group.clone(),
            label: label.to_string(),
            failure,
        });
    }
}
