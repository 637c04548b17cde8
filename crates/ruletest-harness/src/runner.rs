//! Case execution against the injected linter

use tracing::debug;

use ruletest_core::{LintReport, Linter, LinterOptions, Result, RuletestError};

use crate::case::{InvalidCase, TestCase};
use crate::compare::{expect_clean, expect_errors};
use crate::reporter::{CaseVerdict, TestReporter};

/// Drives one normalized fixture case through the linter and comparator
///
/// The awaited lint call is the only suspension point; within one case
/// the invoke → compare sequence is strictly ordered. The linter is an
/// injected, stateless collaborator; nothing is shared between cases.
pub struct CaseRunner<'l> {
    linter: &'l dyn Linter,
}

impl<'l> CaseRunner<'l> {
    /// Create a runner around an injected linter
    pub fn new(linter: &'l dyn Linter) -> Self {
        Self { linter }
    }

    /// Verdict for a valid case: the lint run must come back clean
    pub async fn check_valid(&self, case: &TestCase) -> Result<()> {
        let report = self.lint(&case.code, case.options.as_ref()).await?;
        expect_clean(&report)
    }

    /// Verdict for an invalid case: diagnostics must match the declaration
    ///
    /// A missing `errors` declaration is a fixture-authoring defect,
    /// reported without ever invoking the linter.
    pub async fn check_invalid(&self, case: &InvalidCase) -> Result<()> {
        let expected = case
            .errors
            .as_ref()
            .ok_or(RuletestError::MissingExpectation)?;

        let report = self.lint(&case.code, case.options.as_ref()).await?;
        for result in &report.results {
            expect_errors(&result.messages, expected)?;
        }
        Ok(())
    }

    /// Run a valid case, reporting exactly one outcome labeled by its code
    pub async fn run_valid(&self, case: &TestCase, reporter: &mut dyn TestReporter) -> bool {
        let verdict = CaseVerdict::from(self.check_valid(case).await);
        let passed = verdict.passed();
        reporter.record_case(&case.code, verdict);
        passed
    }

    /// Run an invalid case, reporting exactly one outcome labeled by its code
    pub async fn run_invalid(&self, case: &InvalidCase, reporter: &mut dyn TestReporter) -> bool {
        let verdict = CaseVerdict::from(self.check_invalid(case).await);
        let passed = verdict.passed();
        reporter.record_case(&case.code, verdict);
        passed
    }

    async fn lint(&self, code: &str, options: Option<&LinterOptions>) -> Result<LintReport> {
        debug!(code_len = code.len(), "invoking linter");
        self.linter.lint(code, options).await
    }
}
