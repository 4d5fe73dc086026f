mod ask;
mod documents;
mod error_response;
mod extract_text;
mod health;
mod query;
mod upload;
mod upload_form;

pub use ask::ask_handler;
pub use documents::{clear_documents_handler, list_documents_handler};
pub use error_response::ErrorResponse;
pub use extract_text::extract_text_handler;
pub use health::{health_handler, root_handler};
pub use query::query_handler;
pub use upload::{upload_handler, upload_single_handler};
