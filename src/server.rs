//! HTTP surface of the proxy

use crate::config::{ProviderModels, ProxyConfig};
use crate::proxy::ProviderProxy;
use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub proxy: ProviderProxy,
    pub catalog: Arc<Vec<ProviderModels>>,
}

impl AppState {
    pub fn new(config: &ProxyConfig, proxy: ProviderProxy) -> Self {
        Self {
            proxy,
            catalog: Arc::new(config.model_catalog()),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/models", get(models))
        .route("/api/test", post(test_prompt))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn models(State(state): State<AppState>) -> Json<Vec<ProviderModels>> {
    Json(state.catalog.as_ref().clone())
}

// Raw bytes, so a malformed body gets the proxy's own 400 instead of axum's rejection.
async fn test_prompt(State(state): State<AppState>, body: Bytes) -> Response {
    let reply = state.proxy.handle(&body).await;
    (reply.status, Json(reply.body)).into_response()
}
