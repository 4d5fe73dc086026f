use docsift::infrastructure::text_processing::{normalize_text, strip_separator_artifacts};

#[test]
fn given_messy_whitespace_when_normalizing_then_collapses_to_single_spaces() {
    let text = normalize_text("  Take\tone\n\n tablet   \r\n daily  ");

    assert_eq!(text.as_str(), "Take one tablet daily");
}

#[test]
fn given_page_markers_when_normalizing_then_they_are_removed() {
    let text = normalize_text("Page 1 Amoxicillin PAGE12 500 mg page 3");

    assert_eq!(text.as_str(), "Amoxicillin 500 mg");
}

#[test]
fn given_marker_between_words_when_normalizing_then_no_double_space_remains() {
    let text = normalize_text("a page 3 b");

    assert_eq!(text.as_str(), "a b");
}

#[test]
fn given_compatibility_characters_when_normalizing_then_nfkc_folds_them() {
    let text = normalize_text("ﬁve ２０ mg");

    assert_eq!(text.as_str(), "five 20 mg");
}

#[test]
fn given_control_characters_when_normalizing_then_they_are_dropped() {
    let text = normalize_text("dose\u{0007}\u{007F} daily");

    assert_eq!(text.as_str(), "dose daily");
}

#[test]
fn given_any_text_when_normalizing_twice_then_result_is_unchanged() {
    let inputs = [
        "",
        "  page 1  ",
        "a page 3 b\n\nc",
        "ﬁ\u{0000}page  7x",
        "Dr.  Smith\tpage 2\r\nTake 2 capsules",
    ];

    for input in inputs {
        let once = normalize_text(input);
        let twice = normalize_text(once.as_str());
        assert_eq!(once, twice, "{input:?}");
    }
}

#[test]
fn given_whitespace_only_when_normalizing_then_result_is_empty() {
    assert!(normalize_text(" \n\t ").is_empty());
}

#[test]
fn given_ruled_form_text_when_stripping_artifacts_then_rules_become_spaces() {
    let stripped = strip_separator_artifacts("| Name | John ___ Doe |\n\\\\ Dose // 5mg");

    assert_eq!(stripped, "Name John Doe Dose 5mg");
}
