mod init_tracing;
mod log_sanitizer;
mod request_context;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use log_sanitizer::sanitize_for_log;
pub use request_context::{REQUEST_ID_HEADER, RequestId, request_context_middleware};
pub use tracing_config::TracingConfig;
