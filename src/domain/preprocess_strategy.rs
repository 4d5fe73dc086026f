use std::fmt;
use std::sync::Arc;

use image::RgbImage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreprocessStrategy {
    Identity,
    Enhanced,
    Grayscale,
}

impl PreprocessStrategy {
    /// Evaluation order. Earlier strategies win score ties.
    pub const EVALUATION_ORDER: [Self; 3] = [Self::Identity, Self::Enhanced, Self::Grayscale];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Enhanced => "enhanced",
            Self::Grayscale => "grayscale",
        }
    }
}

impl fmt::Display for PreprocessStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bitmap derived from a page by one strategy.
#[derive(Debug, Clone)]
pub struct PreprocessVariant {
    pub strategy: PreprocessStrategy,
    pub bitmap: Arc<RgbImage>,
}
