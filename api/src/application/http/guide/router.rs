use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;
use wayfarer_core::domain::guide::ports::GenerativeModel;

use super::handlers::{
    analyze::{MAX_IMAGE_SIZE, __path_analyze, analyze},
    chat::{__path_chat, chat},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(analyze, chat))]
pub struct GuideApiDoc;

pub fn guide_routes<M>() -> Router<AppState<M>>
where
    M: GenerativeModel + 'static,
{
    Router::new()
        .route("/analyze", post(analyze::<M>))
        .route("/chat", post(chat::<M>))
        // Leave headroom above the image cap for multipart framing.
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 1024 * 1024))
}
