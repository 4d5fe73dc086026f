use std::sync::Arc;

use super::chunk::DocumentId;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub kind: DocumentKind,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    RasterImage,
}

const RASTER_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "tif", "tiff"];

impl DocumentKind {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.to_ascii_lowercase().as_str() {
            "application/pdf" => Some(Self::Pdf),
            "image/jpeg" | "image/jpg" | "image/png" | "image/bmp" | "image/x-ms-bmp"
            | "image/tiff" => Some(Self::RasterImage),
            _ => None,
        }
    }

    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, extension) = filename.rsplit_once('.')?;
        let extension = extension.to_ascii_lowercase();

        if extension == "pdf" {
            Some(Self::Pdf)
        } else if RASTER_EXTENSIONS.contains(&extension.as_str()) {
            Some(Self::RasterImage)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::RasterImage => "raster_image",
        }
    }
}

impl Document {
    pub fn new(filename: String, kind: DocumentKind, size_bytes: u64) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            kind,
            size_bytes,
        }
    }
}

/// Uploaded bytes plus their declared kind. Never mutated after ingestion;
/// the buffer is shared so blocking stages can take a cheap handle to it.
#[derive(Debug, Clone)]
pub struct RawDocument {
    document: Document,
    data: Arc<[u8]>,
}

impl RawDocument {
    pub fn new(filename: String, kind: DocumentKind, data: impl Into<Arc<[u8]>>) -> Self {
        let data = data.into();
        Self {
            document: Document::new(filename, kind, data.len() as u64),
            data,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn id(&self) -> DocumentId {
        self.document.id
    }

    pub fn filename(&self) -> &str {
        &self.document.filename
    }

    pub fn kind(&self) -> DocumentKind {
        self.document.kind
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn shared_data(&self) -> Arc<[u8]> {
        Arc::clone(&self.data)
    }
}
