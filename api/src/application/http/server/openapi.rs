use utoipa::OpenApi;

use crate::application::http::{guide::router::GuideApiDoc, health::HealthApiDoc};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wayfarer API",
        description = "Travel-guide relay over a hosted generative model"
    ),
    tags(
        (name = "guide", description = "Landmark analysis and follow-up chat"),
        (name = "health", description = "Service health")
    )
)]
struct BaseApiDoc;

pub struct ApiDoc;

impl ApiDoc {
    /// Full document with every feature router's paths merged in.
    pub fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = BaseApiDoc::openapi();
        doc.merge(GuideApiDoc::openapi());
        doc.merge(HealthApiDoc::openapi());
        doc
    }
}
