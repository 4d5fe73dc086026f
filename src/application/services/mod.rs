mod health_service;
mod ingestion_service;
mod response_parser;
mod retrieval_service;

pub use health_service::{CollaboratorHealth, HealthService};
pub use ingestion_service::{IngestionError, IngestionReport, IngestionService};
pub use response_parser::{ParsedReply, parse_formatted_reply};
pub use retrieval_service::{QueryResponse, RetrievalError, RetrievalService, fallback_reply};
