//! Car catalog queries.

use ad_assistant::{CatalogError, CatalogSource};
use ad_protocol::vehicle::VehicleRecord;
use async_trait::async_trait;
use sqlx::PgPool;

/// Car row returned from the database.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CarRow {
    pub slug: String,
    pub name_en: String,
    pub name_ar: String,
    pub price_en: String,
    pub price_ar: String,
    pub feature_one_en: String,
    pub feature_one_ar: String,
    pub feature_two_en: String,
    pub feature_two_ar: String,
    pub feature_three_en: String,
    pub feature_three_ar: String,
    pub image_url: String,
}

impl From<CarRow> for VehicleRecord {
    fn from(row: CarRow) -> Self {
        VehicleRecord {
            slug: row.slug,
            name_en: row.name_en,
            name_ar: row.name_ar,
            price_en: row.price_en,
            price_ar: row.price_ar,
            feature_one_en: row.feature_one_en,
            feature_one_ar: row.feature_one_ar,
            feature_two_en: row.feature_two_en,
            feature_two_ar: row.feature_two_ar,
            feature_three_en: row.feature_three_en,
            feature_three_ar: row.feature_three_ar,
            image_url: row.image_url,
        }
    }
}

const CAR_COLUMNS: &str = "slug, name_en, name_ar, price_en, price_ar, \
     feature_one_en, feature_one_ar, feature_two_en, feature_two_ar, \
     feature_three_en, feature_three_ar, image_url";

/// Byte-wise ordering, matching `sort_for_display` whatever the database locale.
const DISPLAY_ORDER: &str = r#"name_en COLLATE "C", slug COLLATE "C""#;

/// List all cars in display order.
pub async fn list_all(pool: &PgPool) -> Result<Vec<CarRow>, sqlx::Error> {
    sqlx::query_as::<_, CarRow>(&format!(
        "SELECT {CAR_COLUMNS} FROM cars ORDER BY {DISPLAY_ORDER}"
    ))
    .fetch_all(pool)
    .await
}

/// Get a car by slug.
pub async fn get_by_slug(pool: &PgPool, slug: &str) -> Result<Option<CarRow>, sqlx::Error> {
    sqlx::query_as::<_, CarRow>(&format!("SELECT {CAR_COLUMNS} FROM cars WHERE slug = $1"))
        .bind(slug)
        .fetch_optional(pool)
        .await
}

/// Check if a car with this slug exists.
pub async fn exists(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM cars WHERE slug = $1)")
        .bind(slug)
        .fetch_one(pool)
        .await
}

/// Number of cars in the catalog.
pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cars")
        .fetch_one(pool)
        .await
}

/// Insert a car; an existing slug is left untouched. Callers validate the
/// slug (see `AppState::add_car`); the table's CHECK constraint backs it up.
pub async fn insert(pool: &PgPool, car: &VehicleRecord) -> Result<(), sqlx::Error> {
    sqlx::query(&format!(
        "INSERT INTO cars ({CAR_COLUMNS})
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
         ON CONFLICT (slug) DO NOTHING"
    ))
    .bind(&car.slug)
    .bind(&car.name_en)
    .bind(&car.name_ar)
    .bind(&car.price_en)
    .bind(&car.price_ar)
    .bind(&car.feature_one_en)
    .bind(&car.feature_one_ar)
    .bind(&car.feature_two_en)
    .bind(&car.feature_two_ar)
    .bind(&car.feature_three_en)
    .bind(&car.feature_three_ar)
    .bind(&car.image_url)
    .execute(pool)
    .await?;
    Ok(())
}

/// Catalog source backed by the `cars` table. Every call hits the database.
#[derive(Clone)]
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogSource for PgCatalog {
    async fn list_all(&self) -> Result<Vec<VehicleRecord>, CatalogError> {
        let rows = list_all(&self.pool)
            .await
            .map_err(|e| CatalogError::Storage(e.to_string()))?;
        Ok(rows.into_iter().map(VehicleRecord::from).collect())
    }
}
