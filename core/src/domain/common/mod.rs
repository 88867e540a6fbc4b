pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct WayfarerConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
}
