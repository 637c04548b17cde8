//! Fixture suite driver

use tracing::info;

use ruletest_core::Linter;

use crate::case::TestFixtures;
use crate::reporter::TestReporter;
use crate::runner::CaseRunner;

/// Aggregate outcome of one fixture suite run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuiteSummary {
    /// Cases that behaved as declared
    pub passed: usize,
    /// Cases that violated their declaration
    pub failed: usize,
}

impl SuiteSummary {
    /// Total number of executed cases
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Whether every case passed
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    fn record(&mut self, passed: bool) {
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Iterates a named rule's fixture collection
///
/// Registers one suite for the rule, one labeled group per category, and
/// one outcome per fixture entry. Pure iteration shell; all decision
/// logic lives in the comparator. Cases run sequentially; any parallel
/// scheduling between suites belongs to the caller.
pub struct ConfigTester<'l> {
    rule_name: String,
    linter: &'l dyn Linter,
}

impl<'l> ConfigTester<'l> {
    /// Create a tester for one named rule/config
    pub fn new(rule_name: impl Into<String>, linter: &'l dyn Linter) -> Self {
        Self {
            rule_name: rule_name.into(),
            linter,
        }
    }

    /// Name of the rule/config under test
    pub fn rule_name(&self) -> &str {
        &self.rule_name
    }

    /// Run every fixture case, reporting one outcome each
    pub async fn run(
        &self,
        fixtures: &TestFixtures,
        reporter: &mut dyn TestReporter,
    ) -> SuiteSummary {
        let runner = CaseRunner::new(self.linter);
        let mut summary = SuiteSummary::default();

        info!(
            rule = %self.rule_name,
            valid = fixtures.valid.len(),
            invalid = fixtures.invalid.len(),
            "running fixture suite"
        );
        reporter.begin_suite(&self.rule_name);

        reporter.begin_group("valid");
        for case in &fixtures.valid {
            let case = case.clone().normalize();
            summary.record(runner.run_valid(&case, reporter).await);
        }
        reporter.end_group();

        reporter.begin_group("invalid");
        for case in &fixtures.invalid {
            summary.record(runner.run_invalid(case, reporter).await);
        }
        reporter.end_group();

        reporter.end_suite();
        info!(
            rule = %self.rule_name,
            passed = summary.passed,
            failed = summary.failed,
            "fixture suite finished"
        );
        summary
    }
}
