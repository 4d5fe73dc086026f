use std::sync::Arc;

use futures::future::join_all;

use crate::application::ports::TextRecognizer;
use crate::domain::{
    Candidate, ExtractionResult, PageImage, PreprocessVariant, RecognitionConfig,
};

use super::candidate_scorer::score_candidate;
use super::image_preprocessor::derive_variants;
use super::recognition_attempt::RecognitionAttempt;

pub const DEFAULT_SELECTION_THRESHOLD: u32 = 10;
pub const DEFAULT_RETRY_MIN_CHARS: usize = 10;

#[derive(Debug, Clone, Copy)]
pub struct SelectionPolicy {
    /// A winning candidate must score strictly above this.
    pub selection_threshold: u32,
    pub retry_min_chars: usize,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            selection_threshold: DEFAULT_SELECTION_THRESHOLD,
            retry_min_chars: DEFAULT_RETRY_MIN_CHARS,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("preprocessing page {page_index} failed: {reason}")]
    Preprocessing { page_index: u32, reason: String },
}

/// Recognizes every preprocessing variant of a page and keeps the
/// highest-scoring text.
///
/// Variants are recognized concurrently but folded in evaluation order, so
/// the outcome does not depend on completion order.
pub struct StrategySelector {
    recognizer: Arc<dyn TextRecognizer>,
    config: RecognitionConfig,
    policy: SelectionPolicy,
}

impl StrategySelector {
    pub fn new(
        recognizer: Arc<dyn TextRecognizer>,
        config: RecognitionConfig,
        policy: SelectionPolicy,
    ) -> Self {
        Self {
            recognizer,
            config,
            policy,
        }
    }

    #[tracing::instrument(skip(self, page), fields(page_index = page.page_index()))]
    pub async fn select(
        &self,
        page: PageImage,
        source_name: &str,
    ) -> Result<ExtractionResult, SelectionError> {
        let page_index = page.page_index();
        let source = Arc::new(page.into_bitmap());

        let variants = tokio::task::spawn_blocking(move || derive_variants(source))
            .await
            .map_err(|e| SelectionError::Preprocessing {
                page_index,
                reason: format!("task join error: {e}"),
            })?;

        let candidates = join_all(variants.iter().map(|variant| self.evaluate(variant))).await;

        let best_score = candidates.iter().map(|c| c.score).max().unwrap_or(0);

        match pick_best(candidates) {
            Some(winner) if winner.score > self.policy.selection_threshold => {
                tracing::info!(
                    strategy = %winner.strategy,
                    score = winner.score,
                    "Page recognized"
                );
                Ok(ExtractionResult {
                    page_index,
                    chosen_text: winner.text,
                    chosen_score: winner.score,
                    strategy_used: Some(winner.strategy),
                })
            }
            _ => {
                tracing::warn!(
                    best_score,
                    threshold = self.policy.selection_threshold,
                    "No candidate cleared the selection threshold"
                );
                Ok(ExtractionResult {
                    page_index,
                    chosen_text: unrecognized_page_notice(source_name),
                    chosen_score: best_score,
                    strategy_used: None,
                })
            }
        }
    }

    async fn evaluate(&self, variant: &PreprocessVariant) -> Candidate {
        let attempt = RecognitionAttempt::new(
            self.recognizer.as_ref(),
            &self.config,
            self.policy.retry_min_chars,
        );

        let text = match attempt.run(Arc::clone(&variant.bitmap)).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(strategy = %variant.strategy, error = %e, "Recognition failed");
                String::new()
            }
        };

        let score = score_candidate(&text);
        tracing::debug!(strategy = %variant.strategy, score, "Candidate scored");

        Candidate::new(variant.strategy, text, score)
    }
}

/// Highest score wins; an equal score never displaces an earlier candidate.
/// Zero-score candidates are never picked.
pub fn pick_best(candidates: impl IntoIterator<Item = Candidate>) -> Option<Candidate> {
    candidates
        .into_iter()
        .fold(None, |best: Option<Candidate>, candidate| {
            let best_score = best.as_ref().map_or(0, |b| b.score);
            if candidate.score > best_score {
                Some(candidate)
            } else {
                best
            }
        })
}

/// Placeholder text for a page no strategy could read.
pub fn unrecognized_page_notice(source_name: &str) -> String {
    format!(
        "IMAGE PROCESSED: {source_name}\n\n\
         OCR Note: Text extraction was unsuccessful.\n\
         This could be due to:\n\
         - Poor image quality or low resolution\n\
         - Handwritten text (recognition works best with printed text)\n\
         - Complex layouts or backgrounds\n\
         - Non-standard fonts or rotated text\n\n\
         Suggestions:\n\
         - Try a clearer, higher resolution image\n\
         - Ensure text is clearly visible and not handwritten\n\
         - Use good lighting when taking the photo\n\
         - Avoid shadows or glare on the document"
    )
}
