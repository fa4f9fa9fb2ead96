//! Chat turn persistence.

use ad_protocol::chat::{ConversationTurn, PromptKind};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Chat row returned from the database.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ChatRow {
    pub id: Uuid,
    pub user_id: String,
    pub message: String,
    pub response: String,
    pub prompt_kind: String,
    pub created_at: DateTime<Utc>,
}

impl From<ChatRow> for ConversationTurn {
    fn from(row: ChatRow) -> Self {
        ConversationTurn {
            id: row.id,
            user_id: row.user_id,
            message: row.message,
            response: row.response,
            prompt_kind: PromptKind::from_stored(&row.prompt_kind),
            created_at: row.created_at,
        }
    }
}

/// Insert one turn.
pub async fn insert(pool: &PgPool, turn: &ConversationTurn) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO chats (id, user_id, message, response, prompt_kind, created_at)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(turn.id)
    .bind(&turn.user_id)
    .bind(&turn.message)
    .bind(&turn.response)
    .bind(turn.prompt_kind.as_str())
    .bind(turn.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// All turns of one user, oldest first.
pub async fn list_for_user(pool: &PgPool, user_id: &str) -> Result<Vec<ChatRow>, sqlx::Error> {
    sqlx::query_as::<_, ChatRow>(
        "SELECT * FROM chats WHERE user_id = $1 ORDER BY created_at, id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// The user's most recent turn.
pub async fn latest_for_user(pool: &PgPool, user_id: &str) -> Result<Option<ChatRow>, sqlx::Error> {
    sqlx::query_as::<_, ChatRow>(
        "SELECT * FROM chats WHERE user_id = $1 ORDER BY created_at DESC, id DESC LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
