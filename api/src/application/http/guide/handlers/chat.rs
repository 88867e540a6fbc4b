use axum::extract::State;

use crate::application::http::{
    guide::validators::ChatRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use wayfarer_core::domain::guide::{
    entities::ChatAnswer,
    ports::{GenerativeModel, GuideService},
    value_objects::ChatInput,
};

#[utoipa::path(
    post,
    path = "/chat",
    tag = "guide",
    summary = "Ask a follow-up question",
    description = "Relays one follow-up question with the client-held context; the server keeps no conversation memory",
    responses(
        (status = 200, body = ChatAnswer)
    ),
    request_body = ChatRequest
)]
pub async fn chat<M: GenerativeModel + 'static>(
    State(state): State<AppState<M>>,
    ValidateJson(payload): ValidateJson<ChatRequest>,
) -> Result<Response<ChatAnswer>, ApiError> {
    let answer = state
        .service
        .chat(ChatInput {
            context: payload.context,
            question: payload.question,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(answer))
}
