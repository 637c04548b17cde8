//! Ruletest Core
//!
//! Core data model for the ruletest lint-config test harness.
//! This crate provides the diagnostic types produced by a lint run,
//! the boundary trait for the external linter, and the error taxonomy
//! shared by the verification engine.

pub mod diagnostics;
pub mod error;
pub mod linter;
pub mod result;

// Re-export commonly used types
pub use diagnostics::{Diagnostic, FileReport, LintReport, Severity};
pub use error::{ErrorKind, RuletestError};
pub use linter::{Linter, LinterOptions};
pub use result::Result;

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ruletest=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
