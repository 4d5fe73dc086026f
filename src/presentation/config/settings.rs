use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub ocr: OcrSettings,
    pub extraction: ExtractionSettings,
    pub chunking: ChunkingSettings,
    pub retrieval: RetrievalSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrSettings {
    pub tesseract_path: String,
    pub language: String,
    pub retry_min_chars: usize,
    pub char_whitelist: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub render_dpi: f32,
    pub max_pages: usize,
    pub selection_threshold: u32,
    pub document_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChunkingSettings {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub min_chunk_length: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalSettings {
    pub top_k: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers built-in defaults, then `appsettings.{environment}.toml` if
    /// present, then `APP__SECTION__KEY` environment variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::builder_with_defaults()?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Defaults only; no files or environment.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder_with_defaults()?.build()?.try_deserialize()
    }

    fn builder_with_defaults()
    -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.max_upload_mb", 50)?
            .set_default("ocr.tesseract_path", "tesseract")?
            .set_default("ocr.language", "eng")?
            .set_default("ocr.retry_min_chars", 10)?
            .set_default("extraction.render_dpi", 300.0)?
            .set_default("extraction.max_pages", 200)?
            .set_default("extraction.selection_threshold", 10)?
            .set_default("extraction.document_timeout_secs", 300)?
            .set_default("chunking.chunk_size", 500)?
            .set_default("chunking.chunk_overlap", 50)?
            .set_default("chunking.min_chunk_length", 30)?
            .set_default("retrieval.top_k", 5)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)
    }
}

impl ServerSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

impl ExtractionSettings {
    pub fn document_timeout(&self) -> Duration {
        Duration::from_secs(self.document_timeout_secs)
    }
}
