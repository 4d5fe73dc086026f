#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Cursor;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use image::{ImageFormat, Rgb, RgbImage};

use docsift::application::ports::{
    FileLoader, FileLoaderError, LlmClient, LlmClientError, PageRenderer, PageSink, RecognitionError,
    RenderError, SearchResult, TextLayerExtractor, TextRecognizer, VectorStore, VectorStoreError,
};
use docsift::domain::{
    Chunk, DocumentExtraction, ExtractionSource, PreprocessStrategy, RawDocument,
    RecognitionConfig, SegmentationMode,
};
use docsift::infrastructure::text_processing::normalize_text;

/// Source pixel whose three preprocessing variants are distinguishable:
/// identity keeps it, enhancement saturates red, grayscale equalizes channels.
pub const MARKER_PIXEL: Rgb<u8> = Rgb([200, 40, 40]);

pub fn marker_bitmap() -> RgbImage {
    RgbImage::from_pixel(4, 4, MARKER_PIXEL)
}

pub fn png_bytes(bitmap: &RgbImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    bitmap
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("PNG encode");
    bytes
}

/// Which preprocessing strategy produced a bitmap derived from [`marker_bitmap`].
pub fn classify_variant(bitmap: &RgbImage) -> PreprocessStrategy {
    let Rgb([r, g, b]) = *bitmap.get_pixel(0, 0);
    if r == g && g == b {
        PreprocessStrategy::Grayscale
    } else if r == 255 {
        PreprocessStrategy::Enhanced
    } else {
        PreprocessStrategy::Identity
    }
}

type Script =
    dyn Fn(PreprocessStrategy, SegmentationMode) -> Result<String, RecognitionError> + Send + Sync;

/// Recognizer driven by a closure over (variant, segmentation mode).
pub struct ScriptedRecognizer {
    script: Box<Script>,
    delays: Vec<(PreprocessStrategy, Duration)>,
    calls: Mutex<Vec<(PreprocessStrategy, SegmentationMode)>>,
    available: bool,
}

impl ScriptedRecognizer {
    pub fn new(
        script: impl Fn(PreprocessStrategy, SegmentationMode) -> Result<String, RecognitionError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            script: Box::new(script),
            delays: Vec::new(),
            calls: Mutex::new(Vec::new()),
            available: true,
        }
    }

    /// Same text for every variant and mode.
    pub fn constant(text: &'static str) -> Self {
        Self::new(move |_, _| Ok(text.to_string()))
    }

    pub fn per_strategy(identity: &'static str, enhanced: &'static str, grayscale: &'static str) -> Self {
        Self::new(move |strategy, _| {
            Ok(match strategy {
                PreprocessStrategy::Identity => identity,
                PreprocessStrategy::Enhanced => enhanced,
                PreprocessStrategy::Grayscale => grayscale,
            }
            .to_string())
        })
    }

    pub fn with_delay(mut self, strategy: PreprocessStrategy, delay: Duration) -> Self {
        self.delays.push((strategy, delay));
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    pub fn calls(&self) -> Vec<(PreprocessStrategy, SegmentationMode)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, strategy: PreprocessStrategy) -> Vec<SegmentationMode> {
        self.calls()
            .into_iter()
            .filter(|(s, _)| *s == strategy)
            .map(|(_, mode)| mode)
            .collect()
    }
}

#[async_trait::async_trait]
impl TextRecognizer for ScriptedRecognizer {
    async fn recognize(
        &self,
        bitmap: Arc<RgbImage>,
        config: &RecognitionConfig,
    ) -> Result<String, RecognitionError> {
        let strategy = classify_variant(&bitmap);
        let mode = config.segmentation_mode();
        self.calls.lock().unwrap().push((strategy, mode));

        if let Some((_, delay)) = self.delays.iter().find(|(s, _)| *s == strategy) {
            tokio::time::sleep(*delay).await;
        }

        (self.script)(strategy, mode)
    }

    async fn is_available(&self) -> bool {
        self.available
    }
}

/// Renderer over a fake document of `page_count` pages; listed pages fail.
pub struct StubRenderer {
    page_count: Result<usize, String>,
    failing_pages: HashSet<usize>,
    rendered: Mutex<Vec<(usize, f32)>>,
    opened: Mutex<usize>,
}

impl StubRenderer {
    pub fn with_pages(page_count: usize) -> Self {
        Self {
            page_count: Ok(page_count),
            failing_pages: HashSet::new(),
            rendered: Mutex::new(Vec::new()),
            opened: Mutex::new(0),
        }
    }

    pub fn unreadable(reason: &str) -> Self {
        Self {
            page_count: Err(reason.to_string()),
            failing_pages: HashSet::new(),
            rendered: Mutex::new(Vec::new()),
            opened: Mutex::new(0),
        }
    }

    pub fn failing_on(mut self, page_index: usize) -> Self {
        self.failing_pages.insert(page_index);
        self
    }

    pub fn rendered(&self) -> Vec<(usize, f32)> {
        self.rendered.lock().unwrap().clone()
    }

    pub fn opened(&self) -> usize {
        *self.opened.lock().unwrap()
    }
}

impl PageRenderer for StubRenderer {
    fn render_pages(
        &self,
        _data: &[u8],
        dpi: f32,
        max_pages: usize,
        sink: &mut PageSink<'_>,
    ) -> Result<usize, RenderError> {
        *self.opened.lock().unwrap() += 1;
        let page_count = self
            .page_count
            .clone()
            .map_err(RenderError::DocumentUnreadable)?;

        for page_index in 0..page_count.min(max_pages) {
            self.rendered.lock().unwrap().push((page_index, dpi));
            let bitmap = if self.failing_pages.contains(&page_index) {
                Err(RenderError::PageFailed {
                    page_index,
                    reason: "corrupt page stream".to_string(),
                })
            } else {
                Ok(marker_bitmap())
            };
            if !sink(page_index, bitmap) {
                break;
            }
        }

        Ok(page_count)
    }
}

pub struct StubTextLayer {
    outcome: Result<String, String>,
}

impl StubTextLayer {
    pub fn with_text(text: &str) -> Self {
        Self {
            outcome: Ok(text.to_string()),
        }
    }

    pub fn empty() -> Self {
        Self::with_text("")
    }

    pub fn failing() -> Self {
        Self {
            outcome: Err("no text objects".to_string()),
        }
    }
}

impl TextLayerExtractor for StubTextLayer {
    fn extract_text_layer(&self, _data: &[u8]) -> Result<String, RenderError> {
        self.outcome
            .clone()
            .map_err(RenderError::DocumentUnreadable)
    }
}

/// Loader returning a fixed extraction regardless of input.
pub struct StubLoader {
    text: Option<String>,
}

impl StubLoader {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { text: None }
    }
}

#[async_trait::async_trait]
impl FileLoader for StubLoader {
    async fn extract_text(
        &self,
        _document: &RawDocument,
    ) -> Result<DocumentExtraction, FileLoaderError> {
        match &self.text {
            Some(text) => {
                let text = normalize_text(text);
                let source = if text.is_empty() {
                    ExtractionSource::Nothing
                } else {
                    ExtractionSource::Recognition
                };
                Ok(DocumentExtraction {
                    text,
                    pages: Vec::new(),
                    source,
                })
            }
            None => Err(FileLoaderError::DecodeFailed("corrupt upload".to_string())),
        }
    }
}

/// In-memory store that records writes and replays canned search hits.
#[derive(Default)]
pub struct RecordingVectorStore {
    hits: Vec<SearchResult>,
    accept_nothing: bool,
    unhealthy: bool,
    stored: Mutex<Vec<(Chunk, String)>>,
    cleared: Mutex<usize>,
}

impl RecordingVectorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hits(hits: Vec<SearchResult>) -> Self {
        Self {
            hits,
            ..Self::default()
        }
    }

    pub fn accepting_nothing() -> Self {
        Self {
            accept_nothing: true,
            ..Self::default()
        }
    }

    pub fn unhealthy() -> Self {
        Self {
            unhealthy: true,
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Vec<(Chunk, String)> {
        self.stored.lock().unwrap().clone()
    }

    pub fn clear_count(&self) -> usize {
        *self.cleared.lock().unwrap()
    }
}

pub fn hit(content: &str, source: Option<&str>, score: f32) -> SearchResult {
    SearchResult {
        content: content.to_string(),
        source: source.map(str::to_string),
        score,
    }
}

#[async_trait::async_trait]
impl VectorStore for RecordingVectorStore {
    async fn store_chunks(&self, chunks: &[Chunk], source: &str) -> Result<usize, VectorStoreError> {
        if self.accept_nothing {
            return Ok(0);
        }
        let mut stored = self.stored.lock().unwrap();
        stored.extend(chunks.iter().cloned().map(|c| (c, source.to_string())));
        Ok(chunks.len())
    }

    async fn search(&self, _query: &str, limit: usize) -> Result<Vec<SearchResult>, VectorStoreError> {
        Ok(self.hits.iter().take(limit).cloned().collect())
    }

    async fn clear(&self) -> Result<(), VectorStoreError> {
        self.stored.lock().unwrap().clear();
        *self.cleared.lock().unwrap() += 1;
        Ok(())
    }

    async fn health_check(&self) -> Result<(), VectorStoreError> {
        if self.unhealthy {
            return Err(VectorStoreError::ConnectionFailed("refused".to_string()));
        }
        Ok(())
    }
}

/// Model stub replaying one reply and recording what it was asked.
pub struct ScriptedLlm {
    reply: Option<String>,
    requests: Mutex<Vec<(String, Vec<String>, Vec<String>)>>,
}

impl ScriptedLlm {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<(String, Vec<String>, Vec<String>)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LlmClient for ScriptedLlm {
    async fn generate(
        &self,
        query: &str,
        context: &[String],
        sources: &[String],
    ) -> Result<String, LlmClientError> {
        self.requests
            .lock()
            .unwrap()
            .push((query.to_string(), context.to_vec(), sources.to_vec()));
        self.reply.clone().ok_or(LlmClientError::RateLimited)
    }

    async fn health_check(&self) -> Result<(), LlmClientError> {
        self.reply
            .as_ref()
            .map(|_| ())
            .ok_or_else(|| LlmClientError::ApiRequestFailed("offline".to_string()))
    }
}
