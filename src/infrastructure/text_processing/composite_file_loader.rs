use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{DocumentExtraction, DocumentKind, RawDocument};

/// Routes each document to the loader registered for its kind.
pub struct CompositeFileLoader {
    loaders: HashMap<DocumentKind, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(loaders: Vec<(DocumentKind, Arc<dyn FileLoader>)>) -> Self {
        Self {
            loaders: loaders.into_iter().collect(),
        }
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        document: &RawDocument,
    ) -> Result<DocumentExtraction, FileLoaderError> {
        let loader = self.loaders.get(&document.kind()).ok_or_else(|| {
            FileLoaderError::UnsupportedContentType(document.kind().as_str().to_string())
        })?;

        loader.extract_text(document).await
    }
}
