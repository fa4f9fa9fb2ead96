use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A lead submitted through the storefront contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub id: Uuid,
    /// Full name of the prospective buyer.
    pub name: String,
    pub phone: String,
    /// Slug of the preferred car.
    pub model: String,
    #[serde(default)]
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactRequest {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        model: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            phone: phone.into(),
            model: model.into(),
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}
