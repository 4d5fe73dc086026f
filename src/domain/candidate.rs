use super::preprocess_strategy::PreprocessStrategy;

/// One scored recognition result for one variant of one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub strategy: PreprocessStrategy,
    pub text: String,
    pub score: u32,
}

impl Candidate {
    pub fn new(strategy: PreprocessStrategy, text: String, score: u32) -> Self {
        Self {
            strategy,
            text,
            score,
        }
    }
}
