use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    guide::{
        entities::{ChatAnswer, GuideResult},
        value_objects::{AnalyzeGuideInput, ChatInput, ImageInput},
    },
};

/// Client trait for the external generative model. One capability: turn a
/// prompt (plus an optional image) into text, exactly once per call.
#[cfg_attr(test, mockall::automock)]
pub trait GenerativeModel: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image: ImageInput,
        response_schema: Option<serde_json::Value>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: Option<serde_json::Value>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the travel-guide relay business logic
#[cfg_attr(test, mockall::automock)]
pub trait GuideService: Send + Sync {
    fn analyze(
        &self,
        input: AnalyzeGuideInput,
    ) -> impl Future<Output = Result<GuideResult, CoreError>> + Send;

    fn chat(&self, input: ChatInput) -> impl Future<Output = Result<ChatAnswer, CoreError>> + Send;
}
