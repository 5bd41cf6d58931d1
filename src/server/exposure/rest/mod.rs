//! REST exposure
//!
//! Consumes a `ServerHost` and produces the Axum router: health checks, the
//! CRUD routes of every registered resource and any custom routes, wrapped in
//! request tracing and a permissive CORS layer.

use super::super::host::ServerHost;
use anyhow::Result;
use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let mut app = Self::health_routes(host.clone()).merge(host.registry.build_routes());

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.layer(TraceLayer::new_for_http()).layer(Self::cors()))
    }

    fn cors() -> CorsLayer {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    }

    fn health_routes(host: Arc<ServerHost>) -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
            .with_state(host)
    }

    async fn health_check(State(host): State<Arc<ServerHost>>) -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "ba-rest",
            "storage": host.backend,
            "resources": host.resource_names(),
        }))
    }
}
