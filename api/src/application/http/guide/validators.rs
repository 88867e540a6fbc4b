use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use wayfarer_core::domain::guide::entities::ChatContext;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ChatRequest {
    /// Subset of a prior analyze result the client resends with each turn.
    pub context: ChatContext,

    #[validate(length(
        min = 1,
        max = 2000,
        message = "question must be between 1 and 2000 characters"
    ))]
    pub question: String,
}
