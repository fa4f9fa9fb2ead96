//! Name/FAQ rules: greetings, car lookup by name, canned topics.

use ad_protocol::vehicle::VehicleRecord;

use super::{InfoTopic, Intent, ListStyle, matches_any};

const GREETINGS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
    "مرحبا",
    "اهلا",
    "أهلا",
    "السلام عليكم",
];

const INVENTORY_KEYWORDS: &[&str] = &["inventory", "available", "cars", "سيارات", "متوفر"];

const TEST_DRIVE_KEYWORDS: &[&str] = &["test drive", "book", "تجربة قيادة", "احجز"];

const FINANCE_KEYWORDS: &[&str] = &["finance", "payment", "تمويل", "تقسيط"];

/// Apply the FAQ rules to a cleaned message.
pub fn match_faq(cleaned: &str, catalog: &[VehicleRecord]) -> Option<Intent> {
    if GREETINGS.iter().any(|g| cleaned.starts_with(g)) {
        return Some(Intent::Greeting);
    }

    if matches_any(cleaned, INVENTORY_KEYWORDS) {
        return Some(Intent::ListInventory(ListStyle::Summary));
    }

    if let Some(car) = find_by_name(cleaned, catalog) {
        return Some(Intent::CarDetailByName(car.slug.clone()));
    }

    if matches_any(cleaned, TEST_DRIVE_KEYWORDS) {
        return Some(Intent::GenericInfo(InfoTopic::TestDrive));
    }

    if matches_any(cleaned, FINANCE_KEYWORDS) {
        return Some(Intent::GenericInfo(InfoTopic::Financing));
    }

    None
}

/// First car (in catalog order) whose name or slug appears in the message.
pub fn find_by_name<'a>(cleaned: &str, catalog: &'a [VehicleRecord]) -> Option<&'a VehicleRecord> {
    catalog.iter().find(|car| {
        [&car.name_en, &car.name_ar, &car.slug]
            .into_iter()
            .map(|name| name.trim().to_lowercase())
            .any(|name| !name.is_empty() && cleaned.contains(&name))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_inventory;
    use ad_protocol::vehicle::sort_for_display;

    fn catalog() -> Vec<VehicleRecord> {
        let mut cars = sample_inventory();
        sort_for_display(&mut cars);
        cars
    }

    #[test]
    fn greeting_prefix() {
        let cars = catalog();
        assert_eq!(match_faq("hello there", &cars), Some(Intent::Greeting));
        assert_eq!(match_faq("good evening!", &cars), Some(Intent::Greeting));
        assert_eq!(match_faq("مرحبا بك", &cars), Some(Intent::Greeting));
        // Greeting words elsewhere in the message do not count.
        assert_ne!(match_faq("well, hello", &cars), Some(Intent::Greeting));
    }

    #[test]
    fn inventory_keywords() {
        let cars = catalog();
        for msg in ["what cars do you have", "is anything available", "inventory?"] {
            assert_eq!(
                match_faq(msg, &cars),
                Some(Intent::ListInventory(ListStyle::Summary)),
                "{msg}"
            );
        }
    }

    #[test]
    fn car_by_english_name() {
        let cars = catalog();
        assert_eq!(
            match_faq("how much is the toyota camry", &cars),
            Some(Intent::CarDetailByName("toyota-camry".into()))
        );
    }

    #[test]
    fn car_by_slug_and_arabic_name() {
        let cars = catalog();
        assert_eq!(
            match_faq("price of tesla-model-3", &cars),
            Some(Intent::CarDetailByName("tesla-model-3".into()))
        );
        assert_eq!(
            match_faq("كم سعر هيونداي توسان", &cars),
            Some(Intent::CarDetailByName("hyundai-tucson".into()))
        );
    }

    #[test]
    fn empty_names_never_match() {
        let mut cars = catalog();
        cars[0].name_ar.clear();
        assert_eq!(
            match_faq("something unrelated", &cars),
            None
        );
    }

    #[test]
    fn test_drive_and_finance() {
        let cars = catalog();
        assert_eq!(
            match_faq("can i book a test drive", &cars),
            Some(Intent::GenericInfo(InfoTopic::TestDrive))
        );
        assert_eq!(
            match_faq("what are the payment options", &cars),
            Some(Intent::GenericInfo(InfoTopic::Financing))
        );
        assert_eq!(
            match_faq("هل يوجد تمويل", &cars),
            Some(Intent::GenericInfo(InfoTopic::Financing))
        );
    }

    #[test]
    fn name_match_beats_test_drive() {
        let cars = catalog();
        assert_eq!(
            match_faq("book a test drive in the bmw x5", &cars),
            Some(Intent::CarDetailByName("bmw-x5".into()))
        );
    }

    #[test]
    fn unmatched_falls_through() {
        let cars = catalog();
        assert_eq!(match_faq("what is your opening time", &cars), None);
    }
}
