//! Storefront copy endpoint.

use axum::Json;
use serde_json::Value;

use crate::content::site_copy;

/// GET /api/v1/copy: bilingual site text.
pub async fn get_copy() -> Json<Value> {
    Json(site_copy())
}
