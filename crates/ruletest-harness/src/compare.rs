//! Diagnostic comparison against declared expectations
//!
//! The only component with branching business logic: given the raw output
//! of one lint run, decide pass/fail for the surrounding case and explain
//! the first violated condition.

use ruletest_core::{Diagnostic, LintReport, Result, RuletestError};
use serde_json::Value;

use crate::case::ExpectedErrors;

/// Zero-error check for valid cases
///
/// Sums error counts across all per-file results; any non-zero total
/// fails with the rendered diagnostics embedded in the message.
pub fn expect_clean(report: &LintReport) -> Result<()> {
    let count = report.total_error_count();
    if count != 0 {
        return Err(RuletestError::unexpected_diagnostics(
            count,
            render_messages(report.all_messages()),
        ));
    }
    Ok(())
}

/// Match check for invalid cases, applied to one per-file diagnostic set
///
/// Count expectations compare lengths only. Message expectations sort
/// both sides lexicographically before pairing, so callers declare which
/// messages should appear without predicting the linter's emission order.
/// Two diagnostics sharing identical text but different positions are
/// indistinguishable here; positions are never inspected.
pub fn expect_errors(messages: &[Diagnostic], expected: &ExpectedErrors) -> Result<()> {
    if messages.len() != expected.len() {
        return Err(RuletestError::count_mismatch(
            expected.len(),
            messages.len(),
            render_messages(messages.iter()),
        ));
    }

    let ExpectedErrors::Messages(entries) = expected else {
        // Count expectation: length already matched, content unchecked.
        return Ok(());
    };

    let mut entries: Vec<&Value> = entries.iter().collect();
    entries.sort_by_cached_key(|entry| entry_sort_key(entry));
    let mut actual: Vec<&Diagnostic> = messages.iter().collect();
    actual.sort_by(|a, b| a.message.cmp(&b.message));

    for (entry, message) in entries.iter().zip(&actual) {
        let Some(expected_text) = entry.as_str() else {
            return Err(RuletestError::invalid_expectation(entry.to_string()));
        };
        if message.fatal {
            return Err(RuletestError::fatal_parse(message.message.as_str()));
        }
        if message.message != expected_text {
            return Err(RuletestError::message_mismatch(
                expected_text,
                message.message.as_str(),
            ));
        }
    }

    Ok(())
}

/// Sort key for an expected entry: strings by value, anything else by its
/// JSON rendering (keeps the pairing deterministic; non-strings are
/// rejected when their pair is reached)
fn entry_sort_key(entry: &Value) -> String {
    match entry.as_str() {
        Some(text) => text.to_string(),
        None => entry.to_string(),
    }
}

fn render_messages<'a>(messages: impl Iterator<Item = &'a Diagnostic>) -> String {
    messages
        .map(|message| message.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
