use docsift::application::services::parse_formatted_reply;

#[test]
fn given_all_markers_when_parsing_then_sections_are_split_and_trimmed() {
    let parsed = parse_formatted_reply(
        "Answer:\n  Twice daily. \nExplanation:\nPer label.\nCross-Document Analysis:\n Consistent. ",
    );

    assert_eq!(parsed.answer, "Twice daily.");
    assert_eq!(parsed.explanation, "Per label.");
    assert_eq!(parsed.cross_document_analysis, "Consistent.");
}

#[test]
fn given_answer_without_explanation_when_parsing_then_whole_reply_is_explanation() {
    let reply = "Answer: Twice daily.";

    let parsed = parse_formatted_reply(reply);

    assert_eq!(parsed.answer, "Twice daily.");
    assert_eq!(parsed.explanation, reply);
    assert_eq!(parsed.cross_document_analysis, "");
}

#[test]
fn given_unformatted_reply_when_parsing_then_generic_answer_wraps_it() {
    let reply = "PRESCRIPTION ANALYSIS RESULTS\n\nMEDICATION DETAILS: ...";

    let parsed = parse_formatted_reply(reply);

    assert_eq!(
        parsed.answer,
        "Based on your document(s), here's what I found about your question."
    );
    assert_eq!(parsed.explanation, reply);
}

#[test]
fn given_empty_answer_section_when_parsing_then_reports_missing_answer() {
    let parsed = parse_formatted_reply("Answer:\nExplanation:\nOnly an explanation.");

    assert_eq!(parsed.answer, "Unable to generate answer");
    assert_eq!(parsed.explanation, "Only an explanation.");
}
