use std::sync::Arc;

use crate::application::ports::{LlmClient, VectorStore, VectorStoreError};

use super::response_parser::parse_formatted_reply;

const NO_MATCH_ANSWER: &str = "No relevant information found";
const NO_MATCH_EXPLANATION: &str = "I couldn't find any information in your uploaded documents \
that relates to your question. Please make sure you've uploaded documents and try again.";
const GENERATION_UNAVAILABLE: &str = "I found relevant information in your documents, but I'm \
unable to generate a detailed response at the moment. Please try again.";
const FALLBACK_CONTEXT_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResponse {
    pub answer: String,
    pub explanation: String,
    pub sources: Vec<String>,
    pub cross_document_analysis: Option<String>,
}

pub struct RetrievalService<L, V>
where
    L: LlmClient,
    V: VectorStore,
{
    llm_client: Arc<L>,
    vector_store: Arc<V>,
    top_k: usize,
}

impl<L, V> RetrievalService<L, V>
where
    L: LlmClient,
    V: VectorStore,
{
    pub fn new(llm_client: Arc<L>, vector_store: Arc<V>, top_k: usize) -> Self {
        Self {
            llm_client,
            vector_store,
            top_k,
        }
    }

    /// Searches stored chunks and asks the model for an answer grounded in
    /// the best chunk of each matching source.
    #[tracing::instrument(skip(self, question), fields(top_k = self.top_k))]
    pub async fn query(&self, question: &str) -> Result<QueryResponse, RetrievalError> {
        let hits = self.vector_store.search(question, self.top_k).await?;

        if hits.is_empty() {
            return Ok(QueryResponse {
                answer: NO_MATCH_ANSWER.to_string(),
                explanation: NO_MATCH_EXPLANATION.to_string(),
                sources: Vec::new(),
                cross_document_analysis: None,
            });
        }

        let mut grouped: Vec<(String, String)> = Vec::new();
        for hit in hits {
            let Some(source) = hit.source else { continue };
            if !grouped.iter().any(|(seen, _)| *seen == source) {
                grouped.push((source, hit.content));
            }
        }

        let sources: Vec<String> = grouped.iter().map(|(source, _)| source.clone()).collect();
        let context: Vec<String> = grouped
            .iter()
            .map(|(source, content)| format!("From {source}: {content}"))
            .collect();

        let reply = match self.llm_client.generate(question, &context, &sources).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "Generation failed");
                GENERATION_UNAVAILABLE.to_string()
            }
        };
        let parsed = parse_formatted_reply(&reply);

        tracing::info!(source_count = sources.len(), "Query answered");

        Ok(QueryResponse {
            answer: parsed.answer,
            explanation: parsed.explanation,
            cross_document_analysis: (sources.len() > 1).then_some(parsed.cross_document_analysis),
            sources,
        })
    }

    /// Direct generation over caller-supplied context. Never fails: an empty
    /// or failed generation yields [`fallback_reply`].
    #[tracing::instrument(skip(self, query, context))]
    pub async fn ask(&self, query: &str, context: &str) -> String {
        let context_lines = vec![context.to_string()];

        match self.llm_client.generate(query, &context_lines, &[]).await {
            Ok(reply) if !reply.trim().is_empty() => reply,
            Ok(_) => {
                tracing::warn!("Empty generation, using fallback reply");
                fallback_reply(query, context)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Generation failed, using fallback reply");
                fallback_reply(query, context)
            }
        }
    }
}

/// Deterministic reply quoting up to 500 chars of the context.
pub fn fallback_reply(query: &str, context: &str) -> String {
    let excerpt = if context.chars().count() > FALLBACK_CONTEXT_CHARS {
        let head: String = context.chars().take(FALLBACK_CONTEXT_CHARS).collect();
        format!("{head}...")
    } else {
        context.to_string()
    };

    let lowered = query.to_lowercase();
    if lowered.contains("prescription") || lowered.contains("medicine") {
        format!(
            "**Prescription Analysis (Fallback Mode)**\n\n\
             **Extracted Content:**\n{excerpt}\n\n\
             **Analysis Request:** {query}\n\n\
             **Note:** AI processing is currently unavailable. Please review the extracted \
             text above for:\n\
             - Medicine names and dosages\n\
             - Frequency and duration instructions\n\
             - Doctor information\n\
             - Special warnings or notes\n\n\
             **Status:** Manual review required - AI analysis offline\n"
        )
    } else {
        format!(
            "**Analysis Result (Fallback Mode)**\n\n\
             **Query:** {query}\n\n\
             **Content:** {excerpt}\n\n\
             **Note:** AI processing is currently unavailable. The extracted content is \
             provided above for manual review.\n"
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("search: {0}")]
    Search(#[from] VectorStoreError),
}
