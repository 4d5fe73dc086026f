use super::normalized_text::NormalizedText;
use super::preprocess_strategy::PreprocessStrategy;

/// The text chosen for one page.
///
/// `strategy_used` is `None` when no candidate cleared the selection
/// threshold and `chosen_text` holds the unrecognized-page notice instead.
/// `chosen_score` is always the best score seen, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub page_index: u32,
    pub chosen_text: String,
    pub chosen_score: u32,
    pub strategy_used: Option<PreprocessStrategy>,
}

impl ExtractionResult {
    pub fn is_recognized(&self) -> bool {
        self.strategy_used.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionSource {
    Recognition,
    TextLayer,
    UnrecognizedNotice,
    Nothing,
}

impl ExtractionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recognition => "recognition",
            Self::TextLayer => "text_layer",
            Self::UnrecognizedNotice => "unrecognized_notice",
            Self::Nothing => "nothing",
        }
    }
}

/// Extraction record for a whole document: per-page results in ascending
/// page order plus the normalized concatenation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentExtraction {
    pub text: NormalizedText,
    pub pages: Vec<ExtractionResult>,
    pub source: ExtractionSource,
}

impl DocumentExtraction {
    pub fn nothing(pages: Vec<ExtractionResult>) -> Self {
        Self {
            text: NormalizedText::default(),
            pages,
            source: ExtractionSource::Nothing,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
