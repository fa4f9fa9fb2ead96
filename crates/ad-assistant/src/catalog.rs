//! Read-only access to the car catalog.

use ad_protocol::vehicle::{VehicleRecord, sort_for_display};
use async_trait::async_trait;

use crate::error::CatalogError;

/// Source of catalog snapshots.
///
/// Implementations return every record in display order (`name_en`
/// ascending). The resolver asks for a fresh snapshot on every message.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn list_all(&self) -> Result<Vec<VehicleRecord>, CatalogError>;
}

/// Fixed in-memory catalog for development and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    records: Vec<VehicleRecord>,
}

impl StaticCatalog {
    /// Build a catalog from arbitrary records; they are sorted for display.
    pub fn new(mut records: Vec<VehicleRecord>) -> Self {
        sort_for_display(&mut records);
        Self { records }
    }

    /// Catalog with no cars.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Four-car demo inventory.
    pub fn with_sample_inventory() -> Self {
        Self::new(sample_inventory())
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn list_all(&self) -> Result<Vec<VehicleRecord>, CatalogError> {
        Ok(self.records.clone())
    }
}

/// Demo inventory, unsorted.
pub fn sample_inventory() -> Vec<VehicleRecord> {
    vec![
        VehicleRecord {
            slug: "toyota-camry".into(),
            name_en: "Toyota Camry".into(),
            name_ar: "تويوتا كامري".into(),
            price_en: "USD32,500".into(),
            price_ar: "32,500 دولار".into(),
            feature_one_en: "Hybrid powertrain".into(),
            feature_one_ar: "محرك هجين".into(),
            feature_two_en: "Adaptive cruise control".into(),
            feature_two_ar: "مثبت سرعة تكيفي".into(),
            feature_three_en: "Apple CarPlay".into(),
            feature_three_ar: "دعم Apple CarPlay".into(),
            image_url: "https://images.autodrive.example/toyota-camry.jpg".into(),
        },
        VehicleRecord {
            slug: "bmw-x5".into(),
            name_en: "BMW X5".into(),
            name_ar: "بي إم دبليو X5".into(),
            price_en: "USD65,700".into(),
            price_ar: "65,700 دولار".into(),
            feature_one_en: "All-wheel drive".into(),
            feature_one_ar: "دفع رباعي".into(),
            feature_two_en: "Panoramic sunroof".into(),
            feature_two_ar: "فتحة سقف بانورامية".into(),
            feature_three_en: "Leather interior".into(),
            feature_three_ar: "مقاعد جلدية".into(),
            image_url: "https://images.autodrive.example/bmw-x5.jpg".into(),
        },
        VehicleRecord {
            slug: "tesla-model-3".into(),
            name_en: "Tesla Model 3".into(),
            name_ar: "تسلا موديل 3".into(),
            price_en: "USD41,990".into(),
            price_ar: "41,990 دولار".into(),
            feature_one_en: "500 km range".into(),
            feature_one_ar: "مدى 500 كم".into(),
            feature_two_en: "Autopilot".into(),
            feature_two_ar: "قيادة آلية".into(),
            feature_three_en: "Over-the-air updates".into(),
            feature_three_ar: "تحديثات لاسلكية".into(),
            image_url: "https://images.autodrive.example/tesla-model-3.jpg".into(),
        },
        VehicleRecord {
            slug: "hyundai-tucson".into(),
            name_en: "Hyundai Tucson".into(),
            name_ar: "هيونداي توسان".into(),
            price_en: "USD28,900".into(),
            price_ar: "28,900 دولار".into(),
            feature_one_en: "Blind-spot monitoring".into(),
            feature_one_ar: "مراقبة النقطة العمياء".into(),
            feature_two_en: "Wireless charging".into(),
            feature_two_ar: "شحن لاسلكي".into(),
            feature_three_en: "5-year warranty".into(),
            feature_three_ar: "ضمان 5 سنوات".into(),
            image_url: "https://images.autodrive.example/hyundai-tucson.jpg".into(),
        },
    ]
}
