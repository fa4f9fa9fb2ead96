//! Contact form leads.

use ad_protocol::contact::ContactRequest;
use sqlx::PgPool;

/// Insert a new lead.
pub async fn insert(pool: &PgPool, request: &ContactRequest) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO contact_requests (id, name, phone, model, message, created_at)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(request.id)
    .bind(&request.name)
    .bind(&request.phone)
    .bind(&request.model)
    .bind(&request.message)
    .bind(request.created_at)
    .execute(pool)
    .await?;
    Ok(())
}
