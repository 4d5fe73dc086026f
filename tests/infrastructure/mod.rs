mod llm;
mod observability;
mod text_processing;
