mod candidate_scorer;
mod image_preprocessor;
mod recognition_attempt;
mod strategy_selector;
mod tesseract_recognizer;

pub use candidate_scorer::{
    DOMAIN_KEYWORDS, SCORING_RULES, ScoringRule, TextProfile, density_term, keyword_bonus,
    length_term, noise_penalty, score_candidate,
};
pub use image_preprocessor::{derive_variants, enhance_contrast, to_grayscale};
pub use recognition_attempt::RecognitionAttempt;
pub use strategy_selector::{
    DEFAULT_RETRY_MIN_CHARS, DEFAULT_SELECTION_THRESHOLD, SelectionError, SelectionPolicy,
    StrategySelector, pick_best, unrecognized_page_notice,
};
pub use tesseract_recognizer::TesseractRecognizer;
