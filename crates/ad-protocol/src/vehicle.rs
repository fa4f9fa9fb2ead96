use serde::{Deserialize, Serialize};

/// One car listed for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// URL-safe identifier, unique across the catalog.
    pub slug: String,
    pub name_en: String,
    pub name_ar: String,
    /// Display price, currency included (e.g. "USD 32,500").
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

impl VehicleRecord {
    /// The three English feature strings, in display order.
    pub fn features_en(&self) -> [&str; 3] {
        [
            &self.feature_one_en,
            &self.feature_two_en,
            &self.feature_three_en,
        ]
    }

    /// The three Arabic feature strings, in display order.
    pub fn features_ar(&self) -> [&str; 3] {
        [
            &self.feature_one_ar,
            &self.feature_two_ar,
            &self.feature_three_ar,
        ]
    }
}

/// Sort records into catalog display order (`name_en` ascending).
///
/// Ties fall back to `slug` so the order is total.
pub fn sort_for_display(records: &mut [VehicleRecord]) {
    records.sort_by(|a, b| a.name_en.cmp(&b.name_en).then_with(|| a.slug.cmp(&b.slug)));
}

/// Check that a slug is URL-safe: lowercase ASCII letters, digits, `-` and `_`.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}
