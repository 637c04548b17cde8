use ruletest_core::{Diagnostic, FileReport, LintReport, Severity};

#[test]
fn test_diagnostic_creation() {
    let diagnostic = Diagnostic::new("no-var", Severity::Error, "Unexpected var", 3, 7);

    assert_eq!(diagnostic.rule_id, "no-var");
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.message, "Unexpected var");
    assert_eq!(diagnostic.line, 3);
    assert_eq!(diagnostic.column, 7);
    assert!(!diagnostic.fatal);
}

#[test]
fn test_diagnostic_with_fatal() {
    let diagnostic =
        Diagnostic::new("", Severity::Error, "Unexpected token", 1, 1).with_fatal();

    assert!(diagnostic.fatal);
    assert!(diagnostic.is_error());
}

#[test]
fn test_is_error_counts_fatal_and_error_severity() {
    let error = Diagnostic::new("a", Severity::Error, "e", 1, 1);
    let warning = Diagnostic::new("b", Severity::Warning, "w", 1, 1);
    let fatal_warning = Diagnostic::new("c", Severity::Warning, "f", 1, 1).with_fatal();

    assert!(error.is_error());
    assert!(!warning.is_error());
    assert!(fatal_warning.is_error());
}

#[test]
fn test_severity_ordering() {
    assert!(Severity::Error > Severity::Warning);
    assert!(Severity::Warning > Severity::Hint);
    assert!(Severity::Hint > Severity::Info);
}

#[test]
fn test_diagnostic_display() {
    let diagnostic = Diagnostic::new("no-var", Severity::Error, "Unexpected var", 1, 5);
    assert_eq!(format!("{diagnostic}"), "1:5 error Unexpected var [no-var]");

    let fatal = Diagnostic::new("", Severity::Error, "Unexpected token", 2, 1).with_fatal();
    assert_eq!(format!("{fatal}"), "2:1 error Unexpected token [] (fatal)");
}

#[test]
fn test_file_report_derives_error_count() {
    let report = FileReport::new(
        "input.js",
        vec![
            Diagnostic::new("no-var", Severity::Error, "Unexpected var", 1, 1),
            Diagnostic::new("semi", Severity::Warning, "Missing semicolon", 2, 10),
            Diagnostic::new("", Severity::Warning, "Unexpected token", 3, 1).with_fatal(),
        ],
    );

    // Warnings do not count; fatal diagnostics always do.
    assert_eq!(report.error_count, 2);
    assert_eq!(report.messages.len(), 3);
}

#[test]
fn test_file_report_error_count_override() {
    let report = FileReport::new(
        "input.js",
        vec![Diagnostic::new(
            "no-var",
            Severity::Error,
            "Unexpected var",
            1,
            1,
        )],
    )
    .with_error_count(3);

    assert_eq!(report.error_count, 3);
}

#[test]
fn test_lint_report_totals_across_files() {
    let report = LintReport::new(vec![
        FileReport::new(
            "a.js",
            vec![
                Diagnostic::new("no-var", Severity::Error, "Unexpected var", 1, 1),
                Diagnostic::new("semi", Severity::Warning, "Missing semicolon", 2, 1),
            ],
        ),
        FileReport::new(
            "b.js",
            vec![Diagnostic::new("eqeqeq", Severity::Error, "Expected ===", 4, 2)],
        ),
    ]);

    assert_eq!(report.total_error_count(), 2);
    assert_eq!(report.total_message_count(), 3);
    assert_eq!(report.all_messages().count(), 3);
    assert!(!report.is_clean());
}

#[test]
fn test_lint_report_single_and_clean() {
    let report = LintReport::single(FileReport::new("input.js", Vec::new()));

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.total_error_count(), 0);
    assert!(report.is_clean());
}

#[test]
fn test_clean_report_with_warnings_only() {
    let report = LintReport::single(FileReport::new(
        "input.js",
        vec![Diagnostic::new(
            "semi",
            Severity::Warning,
            "Missing semicolon",
            1,
            12,
        )],
    ));

    assert!(report.is_clean());
    assert_eq!(report.total_message_count(), 1);
}

#[test]
fn test_diagnostic_serde_round_trip() {
    let diagnostic = Diagnostic::new("no-var", Severity::Error, "Unexpected var", 1, 5);

    let json = serde_json::to_string(&diagnostic).unwrap();
    let back: Diagnostic = serde_json::from_str(&json).unwrap();
    assert_eq!(back, diagnostic);
}

#[test]
fn test_diagnostic_fatal_defaults_to_false_in_json() {
    let json = r#"{
        "rule_id": "no-var",
        "severity": "Error",
        "message": "Unexpected var",
        "line": 1,
        "column": 5
    }"#;

    let diagnostic: Diagnostic = serde_json::from_str(json).unwrap();
    assert!(!diagnostic.fatal);
}
