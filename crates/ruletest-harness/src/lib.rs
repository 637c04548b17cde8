//! Ruletest Harness
//!
//! Declarative test harness for lint configurations.
//! Provides functionality for:
//! - Normalizing shorthand fixture cases
//! - Comparing expected vs actual diagnostics
//! - Driving fixture suites through an injected linter
//! - Reporting one pass/fail outcome per case

pub mod case;
pub mod compare;
pub mod loader;
pub mod reporter;
pub mod runner;
pub mod suite;

pub use case::{ExpectedErrors, InvalidCase, TestCase, TestFixtures, ValidCase};
pub use compare::{expect_clean, expect_errors};
pub use loader::FixtureLoader;
pub use reporter::{CaseRecord, CaseVerdict, SummaryReporter, TestReporter};
pub use runner::CaseRunner;
pub use suite::{ConfigTester, SuiteSummary};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
