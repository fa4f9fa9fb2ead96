//! Contact form endpoint.

use ad_protocol::contact::ContactRequest;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for a contact lead.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    /// Slug of the preferred car.
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Trimmed fields, or the first problem found.
    fn validated(self) -> ApiResult<ContactForm> {
        let form = ContactForm {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            model: self.model.trim().to_string(),
            message: self.message.trim().to_string(),
        };
        if form.name.is_empty() {
            return Err(ApiError::BadRequest("name is required".into()));
        }
        if !is_phone_number(&form.phone) {
            return Err(ApiError::BadRequest("a valid phone number is required".into()));
        }
        if form.model.is_empty() {
            return Err(ApiError::BadRequest("model is required".into()));
        }
        Ok(form)
    }
}

/// Digits with optional `+`, spaces, dashes and parentheses.
fn is_phone_number(phone: &str) -> bool {
    phone.chars().any(|c| c.is_ascii_digit())
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')'))
}

/// POST /api/v1/contact: store a lead for a catalog car.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let form = form.validated()?;
    if !state.car_exists(&form.model).await? {
        return Err(ApiError::BadRequest(format!(
            "model '{}' is not in the catalog",
            form.model
        )));
    }

    let request = ContactRequest::new(form.name, form.phone, form.model, form.message);
    state.record_contact(&request).await?;
    tracing::info!(contact_id = %request.id, model = %request.model, "contact request stored");

    Ok((StatusCode::CREATED, Json(json!({ "id": request.id }))))
}
