use std::sync::Arc;

use image::RgbImage;

use crate::application::ports::{RecognitionError, TextRecognizer};
use crate::domain::{RecognitionConfig, SegmentationMode};

/// Modes tried in order. A later mode runs only when the previous one
/// produced too little text, and its result replaces the earlier one.
const MODE_SEQUENCE: [SegmentationMode; 2] =
    [SegmentationMode::UniformBlock, SegmentationMode::SingleToken];

#[derive(Debug)]
enum AttemptState {
    Pending,
    Attempted { step: usize, text: String },
    Resolved(Result<String, RecognitionError>),
}

/// Runs recognition on one bitmap, retrying in single-token mode when the
/// uniform-block pass yields fewer than `retry_min_chars` trimmed chars.
///
/// A failing call resolves the attempt immediately with that error.
pub struct RecognitionAttempt<'a> {
    recognizer: &'a dyn TextRecognizer,
    base_config: &'a RecognitionConfig,
    retry_min_chars: usize,
}

impl<'a> RecognitionAttempt<'a> {
    pub fn new(
        recognizer: &'a dyn TextRecognizer,
        base_config: &'a RecognitionConfig,
        retry_min_chars: usize,
    ) -> Self {
        Self {
            recognizer,
            base_config,
            retry_min_chars,
        }
    }

    pub async fn run(&self, bitmap: Arc<RgbImage>) -> Result<String, RecognitionError> {
        let mut state = AttemptState::Pending;

        loop {
            state = match state {
                AttemptState::Pending => self.attempt(&bitmap, 0).await,
                AttemptState::Attempted { step, text } => {
                    let last_step = step + 1 == MODE_SEQUENCE.len();
                    if last_step || !self.needs_retry(&text) {
                        AttemptState::Resolved(Ok(text))
                    } else {
                        self.attempt(&bitmap, step + 1).await
                    }
                }
                AttemptState::Resolved(outcome) => return outcome,
            };
        }
    }

    fn needs_retry(&self, text: &str) -> bool {
        text.trim().chars().count() < self.retry_min_chars
    }

    async fn attempt(&self, bitmap: &Arc<RgbImage>, step: usize) -> AttemptState {
        let mode = MODE_SEQUENCE[step];
        let config = self.base_config.with_segmentation_mode(mode);

        match self.recognizer.recognize(Arc::clone(bitmap), &config).await {
            Ok(text) => {
                tracing::debug!(
                    segmentation_mode = %mode,
                    chars = text.trim().chars().count(),
                    "Recognition pass complete"
                );
                AttemptState::Attempted { step, text }
            }
            Err(e) => {
                tracing::debug!(segmentation_mode = %mode, error = %e, "Recognition pass failed");
                AttemptState::Resolved(Err(e))
            }
        }
    }
}
