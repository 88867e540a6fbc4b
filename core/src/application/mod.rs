use crate::domain::common::{WayfarerConfig, services::Service};
use crate::infrastructure::llm::GeminiModel;

/// Production service type, wired to the live Gemini client.
pub type WayfarerService = Service<GeminiModel>;

pub fn create_service(config: WayfarerConfig) -> WayfarerService {
    Service::new(GeminiModel::new(
        config.llm.gemini_api_key,
        config.llm.gemini_model,
    ))
}
