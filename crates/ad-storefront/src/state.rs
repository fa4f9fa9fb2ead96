//! Shared application state for the Axum server.
//!
//! Supports two modes:
//! - **Database mode**: uses `PgPool` for persistent storage (production).
//! - **In-memory mode**: uses `RwLock<Vec<_>>` (tests and development).
//!
//! Handlers go through the storage methods here and never branch on the
//! mode themselves.

use std::sync::Arc;

use ad_assistant::catalog::sample_inventory;
use ad_assistant::{
    CatalogError, CatalogSource, CompletionBackend, DialogueResolver, MatcherMode,
    UnconfiguredBackend,
};
use ad_assistant::prompt::DEFAULT_SYSTEM_PROMPT;
use ad_protocol::chat::ConversationTurn;
use ad_protocol::contact::ContactRequest;
use ad_protocol::vehicle::{VehicleRecord, is_valid_slug, sort_for_display};
use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::db;
use crate::error::{ApiError, ApiResult};

/// Shared application state, cheap to clone for Axum handler sharing.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool (None in test/in-memory mode).
    pub pool: Option<PgPool>,
    /// In-memory catalog (used when pool is None).
    pub cars: Arc<RwLock<Vec<VehicleRecord>>>,
    /// In-memory chat log (used when pool is None).
    pub turns: Arc<RwLock<Vec<ConversationTurn>>>,
    /// In-memory contact leads (used when pool is None).
    pub contacts: Arc<RwLock<Vec<ContactRequest>>>,
    /// Remote completion backend for messages no local rule answers.
    pub completion: Arc<dyn CompletionBackend>,
    pub mode: MatcherMode,
    pub system_prompt: Arc<str>,
}

impl AppState {
    /// Create state backed by a PostgreSQL pool.
    pub fn with_pool(pool: PgPool) -> Self {
        Self {
            pool: Some(pool),
            ..Self::new()
        }
    }

    /// Create empty in-memory state (for tests).
    ///
    /// The completion backend reports `Configuration` until one is set with
    /// [`AppState::with_completion`].
    pub fn new() -> Self {
        Self {
            pool: None,
            cars: Arc::new(RwLock::new(Vec::new())),
            turns: Arc::new(RwLock::new(Vec::new())),
            contacts: Arc::new(RwLock::new(Vec::new())),
            completion: Arc::new(UnconfiguredBackend),
            mode: MatcherMode::default(),
            system_prompt: Arc::from(DEFAULT_SYSTEM_PROMPT),
        }
    }

    /// Create in-memory state with the sample inventory for development / tests.
    pub fn with_sample_data() -> Self {
        Self::new().with_cars(sample_inventory())
    }

    /// Replace the in-memory catalog. Records with an invalid slug are dropped.
    pub fn with_cars(self, mut cars: Vec<VehicleRecord>) -> Self {
        cars.retain(|car| {
            let valid = is_valid_slug(&car.slug);
            if !valid {
                tracing::warn!(slug = %car.slug, "skipping car with invalid slug");
            }
            valid
        });
        sort_for_display(&mut cars);
        Self {
            cars: Arc::new(RwLock::new(cars)),
            ..self
        }
    }

    pub fn with_completion(self, completion: Arc<dyn CompletionBackend>) -> Self {
        Self { completion, ..self }
    }

    pub fn with_mode(self, mode: MatcherMode) -> Self {
        Self { mode, ..self }
    }

    pub fn with_system_prompt(self, prompt: &str) -> Self {
        Self {
            system_prompt: Arc::from(prompt),
            ..self
        }
    }

    /// Catalog source matching the storage mode.
    pub fn catalog(&self) -> Arc<dyn CatalogSource> {
        match &self.pool {
            Some(pool) => Arc::new(db::cars::PgCatalog::new(pool.clone())),
            None => Arc::new(MemoryCatalog {
                cars: self.cars.clone(),
            }),
        }
    }

    /// A resolver over the current catalog and completion backend.
    pub fn resolver(&self) -> DialogueResolver {
        DialogueResolver::new(self.catalog(), self.completion.clone())
            .with_mode(self.mode)
            .with_system_prompt(self.system_prompt.as_ref())
    }

    // ── Catalog ─────────────────────────────────────────────────

    /// All cars in display order.
    pub async fn list_cars(&self) -> ApiResult<Vec<VehicleRecord>> {
        match &self.pool {
            Some(pool) => Ok(db::cars::list_all(pool)
                .await?
                .into_iter()
                .map(VehicleRecord::from)
                .collect()),
            None => Ok(self.cars.read().await.clone()),
        }
    }

    pub async fn find_car(&self, slug: &str) -> ApiResult<Option<VehicleRecord>> {
        match &self.pool {
            Some(pool) => Ok(db::cars::get_by_slug(pool, slug)
                .await?
                .map(VehicleRecord::from)),
            None => Ok(self
                .cars
                .read()
                .await
                .iter()
                .find(|c| c.slug == slug)
                .cloned()),
        }
    }

    /// Add a car to the catalog. An existing slug is left untouched.
    pub async fn add_car(&self, car: &VehicleRecord) -> ApiResult<()> {
        if !is_valid_slug(&car.slug) {
            return Err(ApiError::BadRequest(format!(
                "invalid car slug '{}': use lowercase letters, digits, '-' or '_'",
                car.slug
            )));
        }

        match &self.pool {
            Some(pool) => Ok(db::cars::insert(pool, car).await?),
            None => {
                let mut cars = self.cars.write().await;
                if !cars.iter().any(|c| c.slug == car.slug) {
                    cars.push(car.clone());
                    sort_for_display(&mut cars);
                }
                Ok(())
            }
        }
    }

    pub async fn car_exists(&self, slug: &str) -> ApiResult<bool> {
        match &self.pool {
            Some(pool) => Ok(db::cars::exists(pool, slug).await?),
            None => Ok(self.cars.read().await.iter().any(|c| c.slug == slug)),
        }
    }

    // ── Chat turns ──────────────────────────────────────────────

    /// Persist one turn as a single write.
    pub async fn record_turn(&self, turn: &ConversationTurn) -> ApiResult<()> {
        match &self.pool {
            Some(pool) => Ok(db::chats::insert(pool, turn).await?),
            None => {
                self.turns.write().await.push(turn.clone());
                Ok(())
            }
        }
    }

    /// A user's turns, oldest first.
    pub async fn history(&self, user_id: &str) -> ApiResult<Vec<ConversationTurn>> {
        match &self.pool {
            Some(pool) => Ok(db::chats::list_for_user(pool, user_id)
                .await?
                .into_iter()
                .map(ConversationTurn::from)
                .collect()),
            None => Ok(self
                .turns
                .read()
                .await
                .iter()
                .filter(|t| t.user_id == user_id)
                .cloned()
                .collect()),
        }
    }

    pub async fn latest_turn(&self, user_id: &str) -> ApiResult<Option<ConversationTurn>> {
        match &self.pool {
            Some(pool) => Ok(db::chats::latest_for_user(pool, user_id)
                .await?
                .map(ConversationTurn::from)),
            None => Ok(self
                .turns
                .read()
                .await
                .iter()
                .rev()
                .find(|t| t.user_id == user_id)
                .cloned()),
        }
    }

    // ── Contact leads ───────────────────────────────────────────

    pub async fn record_contact(&self, request: &ContactRequest) -> ApiResult<()> {
        match &self.pool {
            Some(pool) => Ok(db::contacts::insert(pool, request).await?),
            None => {
                self.contacts.write().await.push(request.clone());
                Ok(())
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Catalog source over the in-memory car list.
struct MemoryCatalog {
    cars: Arc<RwLock<Vec<VehicleRecord>>>,
}

#[async_trait]
impl CatalogSource for MemoryCatalog {
    async fn list_all(&self) -> Result<Vec<VehicleRecord>, CatalogError> {
        let mut cars = self.cars.read().await.clone();
        sort_for_display(&mut cars);
        Ok(cars)
    }
}
