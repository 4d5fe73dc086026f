use std::sync::Arc;

use docsift::application::services::{RetrievalService, fallback_reply};

use crate::helpers::{RecordingVectorStore, ScriptedLlm, hit};

const FORMATTED_REPLY: &str = "Answer:\nTake 500 mg twice daily.\n\nExplanation:\nThe label says so.\n\nCross-Document Analysis:\nBoth scans agree.";

#[tokio::test]
async fn given_no_hits_when_querying_then_returns_no_match_answer_without_generation() {
    let llm = Arc::new(ScriptedLlm::replying(FORMATTED_REPLY));
    let sut = RetrievalService::new(llm.clone(), Arc::new(RecordingVectorStore::new()), 5);

    let response = sut.query("what dose?").await.unwrap();

    assert_eq!(response.answer, "No relevant information found");
    assert!(response.sources.is_empty());
    assert_eq!(response.cross_document_analysis, None);
    assert!(llm.requests().is_empty());
}

#[tokio::test]
async fn given_hits_from_two_sources_when_querying_then_best_chunk_per_source_is_sent() {
    let store = RecordingVectorStore::with_hits(vec![
        hit("Amoxicillin 500 mg", Some("a.png"), 0.9),
        hit("Take twice daily", Some("b.pdf"), 0.8),
        hit("Lower ranked chunk", Some("a.png"), 0.7),
    ]);
    let llm = Arc::new(ScriptedLlm::replying(FORMATTED_REPLY));
    let sut = RetrievalService::new(llm.clone(), Arc::new(store), 5);

    let response = sut.query("what dose?").await.unwrap();

    assert_eq!(response.sources, vec!["a.png", "b.pdf"]);
    assert_eq!(response.answer, "Take 500 mg twice daily.");
    assert_eq!(response.explanation, "The label says so.");
    assert_eq!(
        response.cross_document_analysis.as_deref(),
        Some("Both scans agree.")
    );

    let requests = llm.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].1,
        vec![
            "From a.png: Amoxicillin 500 mg".to_string(),
            "From b.pdf: Take twice daily".to_string(),
        ]
    );
}

#[tokio::test]
async fn given_single_source_when_querying_then_cross_document_analysis_is_absent() {
    let store = RecordingVectorStore::with_hits(vec![hit("Amoxicillin 500 mg", Some("a.png"), 0.9)]);
    let sut = RetrievalService::new(
        Arc::new(ScriptedLlm::replying(FORMATTED_REPLY)),
        Arc::new(store),
        5,
    );

    let response = sut.query("what dose?").await.unwrap();

    assert_eq!(response.cross_document_analysis, None);
}

#[tokio::test]
async fn given_sourceless_hits_when_querying_then_they_are_dropped() {
    let store = RecordingVectorStore::with_hits(vec![hit("orphan chunk", None, 0.95)]);
    let llm = Arc::new(ScriptedLlm::replying(FORMATTED_REPLY));
    let sut = RetrievalService::new(llm.clone(), Arc::new(store), 5);

    let response = sut.query("what dose?").await.unwrap();

    assert!(response.sources.is_empty());
    assert!(llm.requests()[0].1.is_empty());
}

#[tokio::test]
async fn given_generation_failure_when_querying_then_degrades_to_unavailable_message() {
    let store = RecordingVectorStore::with_hits(vec![hit("Amoxicillin 500 mg", Some("a.png"), 0.9)]);
    let sut = RetrievalService::new(Arc::new(ScriptedLlm::failing()), Arc::new(store), 5);

    let response = sut.query("what dose?").await.unwrap();

    assert_eq!(response.sources, vec!["a.png"]);
    assert!(response.explanation.contains("unable to generate a detailed response"));
}

#[tokio::test]
async fn given_top_k_when_querying_then_search_is_limited() {
    let store = RecordingVectorStore::with_hits(vec![
        hit("one", Some("a.png"), 0.9),
        hit("two", Some("b.png"), 0.8),
        hit("three", Some("c.png"), 0.7),
    ]);
    let sut = RetrievalService::new(
        Arc::new(ScriptedLlm::replying(FORMATTED_REPLY)),
        Arc::new(store),
        2,
    );

    let response = sut.query("what dose?").await.unwrap();

    assert_eq!(response.sources, vec!["a.png", "b.png"]);
}

#[tokio::test]
async fn given_model_reply_when_asking_then_reply_is_returned_verbatim() {
    let llm = Arc::new(ScriptedLlm::replying("Take it with food."));
    let sut = RetrievalService::new(llm.clone(), Arc::new(RecordingVectorStore::new()), 5);

    let reply = sut.ask("how?", "Ibuprofen 200 mg").await;

    assert_eq!(reply, "Take it with food.");
    assert_eq!(llm.requests()[0].1, vec!["Ibuprofen 200 mg".to_string()]);
}

#[tokio::test]
async fn given_failing_model_when_asking_then_fallback_reply_is_returned() {
    let sut = RetrievalService::new(
        Arc::new(ScriptedLlm::failing()),
        Arc::new(RecordingVectorStore::new()),
        5,
    );

    let reply = sut.ask("read this prescription", "Ibuprofen 200 mg").await;

    assert_eq!(reply, fallback_reply("read this prescription", "Ibuprofen 200 mg"));
}

#[tokio::test]
async fn given_blank_model_reply_when_asking_then_fallback_reply_is_returned() {
    let sut = RetrievalService::new(
        Arc::new(ScriptedLlm::replying("   ")),
        Arc::new(RecordingVectorStore::new()),
        5,
    );

    let reply = sut.ask("summarize", "Ibuprofen 200 mg").await;

    assert!(reply.starts_with("**Analysis Result (Fallback Mode)**"));
}

#[test]
fn given_prescription_query_when_building_fallback_then_uses_prescription_layout() {
    let reply = fallback_reply("What MEDICINE is this?", "Ibuprofen 200 mg");

    assert!(reply.starts_with("**Prescription Analysis (Fallback Mode)**"));
    assert!(reply.contains("Ibuprofen 200 mg"));
}

#[test]
fn given_long_context_when_building_fallback_then_excerpt_is_truncated() {
    let context = "x".repeat(600);

    let reply = fallback_reply("summarize", &context);

    assert!(reply.contains(&format!("{}...", "x".repeat(500))));
    assert!(!reply.contains(&"x".repeat(501)));
}
