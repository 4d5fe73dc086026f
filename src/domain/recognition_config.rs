use std::fmt;

/// How the recognition engine partitions a bitmap into text regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentationMode {
    UniformBlock,
    SingleToken,
}

impl SegmentationMode {
    /// Tesseract `--psm` value for this mode.
    pub fn page_seg_mode(&self) -> u8 {
        match self {
            Self::UniformBlock => 6,
            Self::SingleToken => 8,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UniformBlock => "uniform_block",
            Self::SingleToken => "single_token",
        }
    }
}

impl fmt::Display for SegmentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable engine configuration handed to every recognition call.
/// Switching modes produces a new value; nothing is shared or mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionConfig {
    language: String,
    segmentation_mode: SegmentationMode,
    char_whitelist: Option<String>,
}

impl RecognitionConfig {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            segmentation_mode: SegmentationMode::UniformBlock,
            char_whitelist: None,
        }
    }

    pub fn with_char_whitelist(mut self, whitelist: Option<String>) -> Self {
        self.char_whitelist = whitelist.filter(|w| !w.is_empty());
        self
    }

    pub fn with_segmentation_mode(&self, segmentation_mode: SegmentationMode) -> Self {
        Self {
            segmentation_mode,
            ..self.clone()
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn segmentation_mode(&self) -> SegmentationMode {
        self.segmentation_mode
    }

    pub fn char_whitelist(&self) -> Option<&str> {
        self.char_whitelist.as_deref()
    }
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self::new("eng")
    }
}
