mod file_loader;
mod llm_client;
mod page_renderer;
mod search_result;
mod text_layer_extractor;
mod text_recognizer;
mod text_splitter;
mod vector_store;
mod vector_store_error;

pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{LlmClient, LlmClientError};
pub use page_renderer::{PageRenderer, PageSink, RenderError};
pub use search_result::SearchResult;
pub use text_layer_extractor::TextLayerExtractor;
pub use text_recognizer::{RecognitionError, TextRecognizer};
pub use text_splitter::{TextSplitter, TextSplitterError};
pub use vector_store::VectorStore;
pub use vector_store_error::VectorStoreError;
