mod candidate;
mod chunk;
mod document;
mod extraction;
mod normalized_text;
mod page_image;
mod preprocess_strategy;
mod recognition_config;

pub use candidate::Candidate;
pub use chunk::{Chunk, DocumentId};
pub use document::{Document, DocumentKind, RawDocument};
pub use extraction::{DocumentExtraction, ExtractionResult, ExtractionSource};
pub use normalized_text::NormalizedText;
pub use page_image::PageImage;
pub use preprocess_strategy::{PreprocessStrategy, PreprocessVariant};
pub use recognition_config::{RecognitionConfig, SegmentationMode};
