pub mod geo;
pub mod llm;
