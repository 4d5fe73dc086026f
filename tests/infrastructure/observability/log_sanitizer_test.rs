use docsift::infrastructure::observability::sanitize_for_log;

#[test]
fn given_blank_text_when_sanitizing_then_marks_it_empty() {
    assert_eq!(sanitize_for_log("  \n"), "[EMPTY]");
}

#[test]
fn given_long_text_when_sanitizing_then_truncates_with_total_length() {
    let text = "a".repeat(150);

    let sanitized = sanitize_for_log(&text);

    assert_eq!(sanitized, format!("{}... (150 chars total)", "a".repeat(100)));
}

#[test]
fn given_credentials_when_sanitizing_then_values_are_redacted() {
    let sanitized = sanitize_for_log("Bearer abc.def token=xyz&password=hunter2 ok");

    assert_eq!(
        sanitized,
        "Bearer [REDACTED] token=[REDACTED]&password=[REDACTED] ok"
    );
}

#[test]
fn given_plain_question_when_sanitizing_then_it_is_unchanged() {
    assert_eq!(sanitize_for_log(" what dose? "), "what dose?");
}
