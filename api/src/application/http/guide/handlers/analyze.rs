use axum::extract::{Multipart, State};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use wayfarer_core::domain::guide::{
    entities::GuideResult,
    ports::{GenerativeModel, GuideService},
    value_objects::{AnalyzeGuideInput, ImageInput},
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "guide",
    summary = "Analyze a landmark",
    description = "Identifies a landmark from an uploaded photo or a typed location and returns a six-field travel guide",
    responses(
        (status = 200, body = GuideResult)
    ),
)]
pub async fn analyze<M: GenerativeModel + 'static>(
    State(state): State<AppState<M>>,
    mut multipart: Multipart,
) -> Result<Response<GuideResult>, ApiError> {
    let mut image: Option<ImageInput> = None;
    let mut location: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let mime_type = field.content_type().unwrap_or("image/jpeg").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                image = Some(ImageInput {
                    data: data.to_vec(),
                    mime_type,
                });
            }
            "location" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read location: {}", e)))?;
                location = Some(value);
            }
            _ => {}
        }
    }

    let result = state
        .service
        .analyze(AnalyzeGuideInput { image, location })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
