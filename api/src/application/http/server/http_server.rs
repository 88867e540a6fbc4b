use std::sync::{Arc, LazyLock};

use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE},
    },
    routing::get,
};
use axum_prometheus::{PrometheusMetricLayer, metrics_exporter_prometheus::PrometheusHandle};
use tower_http::cors::CorsLayer;
use tracing::info_span;
use utoipa_swagger_ui::SwaggerUi;
use wayfarer_core::{
    application::create_service,
    domain::{common::WayfarerConfig, guide::ports::GenerativeModel},
    infrastructure::llm::GeminiModel,
};

use crate::application::http::{
    guide::router::guide_routes,
    health::health_routes,
    server::{app_state::AppState, openapi::ApiDoc},
};
use crate::args::Args;

pub fn state(args: Arc<Args>) -> AppState<GeminiModel> {
    let config = WayfarerConfig::from(args.as_ref().clone());
    let service = create_service(config);

    AppState::new(args, service)
}

///  Returns the [`Router`] of this application.
pub fn router<M>(state: AppState<M>) -> Result<Router, anyhow::Error>
where
    M: GenerativeModel + 'static,
{
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT]);

    // The metrics recorder is a process-wide global; installing it twice
    // panics, so the layer/handle pair is created at most once per process.
    static PROMETHEUS: LazyLock<(PrometheusMetricLayer<'static>, PrometheusHandle)> =
        LazyLock::new(PrometheusMetricLayer::pair);
    let (prometheus_layer, metric_handle) = PROMETHEUS.clone();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(guide_routes::<M>())
        .merge(health_routes::<M>())
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);

    Ok(router)
}
