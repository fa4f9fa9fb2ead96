//! API route definitions and router builder.

pub mod cars;
pub mod chat;
pub mod contact;
pub mod copy;
pub mod health;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with all routes and middleware, allowing any origin.
pub fn build_router(state: AppState) -> Router {
    build_router_with_origins(state, &[])
}

/// Build the router with CORS restricted to `origins` (any origin when empty).
pub fn build_router_with_origins(state: AppState, origins: &[String]) -> Router {
    let api = Router::new()
        // Catalog
        .route("/cars", get(cars::list_cars))
        .route("/cars/{slug}", get(cars::get_car))
        // Site copy
        .route("/copy", get(copy::get_copy))
        // Chat assistant
        .route("/chat", post(chat::send_message))
        .route("/chat/history", get(chat::history))
        // Leads
        .route("/contact", post(contact::submit_contact));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(origins))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}
