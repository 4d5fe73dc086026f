mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ChunkingSettings, ExtractionSettings, LoggingSettings, OcrSettings, RetrievalSettings,
    ServerSettings, Settings,
};
