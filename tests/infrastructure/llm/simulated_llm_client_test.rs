use docsift::application::ports::LlmClient;
use docsift::application::services::parse_formatted_reply;
use docsift::infrastructure::llm::SimulatedLlmClient;

#[tokio::test]
async fn given_general_question_when_generating_then_reply_parses_into_answer_and_explanation() {
    let sut = SimulatedLlmClient::new();

    let reply = sut
        .generate("what is the invoice total?", &["From a.pdf: total 40".to_string()], &["a.pdf".to_string()])
        .await
        .unwrap();
    let parsed = parse_formatted_reply(&reply);

    assert!(parsed.answer.contains("what is the invoice total?"));
    assert!(parsed.explanation.starts_with("Core Concepts:"));
}

#[tokio::test]
async fn given_prescription_context_when_generating_then_sections_are_extracted() {
    let sut = SimulatedLlmClient::new();
    let context = "City Pharmacy\nJohn Carter 03/14/2024\n12 Harbour Road\nCall 555-0199\nAmoxicillin 500 mg capsule twice daily\nDr. Helen Park";

    let reply = sut
        .generate("summarize", &[context.to_string()], &[])
        .await
        .unwrap();

    assert!(reply.starts_with("PRESCRIPTION ANALYSIS RESULTS"));
    assert!(reply.contains("• City Pharmacy"));
    assert!(reply.contains("• Address: 12 Harbour Road"));
    assert!(reply.contains("• Phone: 555-0199"));
    assert!(reply.contains("• Patient: John Carter 03/14/2024"));
    assert!(reply.contains("• Date: 03/14/2024"));
    assert!(reply.contains("• Amoxicillin 500 mg capsule twice daily"));
    assert!(reply.contains("• Dr. Helen Park"));
    assert!(reply.contains("IMPORTANT SAFETY NOTES:"));
}

#[tokio::test]
async fn given_prescription_query_without_details_when_generating_then_placeholders_are_used() {
    let sut = SimulatedLlmClient::new();

    let reply = sut
        .generate("extract the medication", &["illegible".to_string()], &[])
        .await
        .unwrap();

    assert!(reply.contains("Medication details not clearly readable in the prescription"));
    assert!(reply.contains("Doctor information not clearly visible in prescription"));
    assert!(!reply.contains("PHARMACY INFORMATION"));
}

#[tokio::test]
async fn given_simulated_client_when_checking_health_then_it_is_up() {
    assert!(SimulatedLlmClient::new().health_check().await.is_ok());
}
