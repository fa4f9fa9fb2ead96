//! Reply text for deterministic intents, and prompt-kind markers.
//!
//! Replies are bilingual: English first, Arabic second. Replies that ask the
//! user for a number carry a marker phrase so the prompt kind can be
//! recovered from raw text when the stored kind is not available.

use ad_protocol::chat::{BotReply, PromptKind};
use ad_protocol::vehicle::VehicleRecord;

use crate::matcher::{InfoTopic, Intent, ListStyle};

/// Header of the numbered inventory list.
pub const INVENTORY_MARKER_EN: &str = "Available cars:";
pub const INVENTORY_MARKER_AR: &str = "السيارات المتاحة:";

/// Phrase used by every "enter a car number" prompt.
pub const DETAIL_PROMPT_MARKER_EN: &str = "enter a car number";
pub const DETAIL_PROMPT_MARKER_AR: &str = "أدخل رقم السيارة";

const CURRENCY_CODES: &[&str] = &["USD", "SAR"];

/// Recover the prompt kind of a previous reply from its text.
///
/// The detail-prompt marker is checked first.
pub fn sniff_prompt_kind(text: &str) -> PromptKind {
    let lower = text.to_lowercase();
    if lower.contains(DETAIL_PROMPT_MARKER_EN) || text.contains(DETAIL_PROMPT_MARKER_AR) {
        PromptKind::DetailPrompt
    } else if lower.contains(&INVENTORY_MARKER_EN.to_lowercase())
        || text.contains(INVENTORY_MARKER_AR)
    {
        PromptKind::InventoryList
    } else {
        PromptKind::Other
    }
}

/// Render an intent against the catalog snapshot it was matched with.
pub fn render(intent: &Intent, catalog: &[VehicleRecord]) -> BotReply {
    match intent {
        Intent::ListInventory(ListStyle::Numbered) => numbered_list(catalog),
        Intent::ListInventory(ListStyle::Summary) => inventory_summary(catalog),
        Intent::CarDetailByIndex(index) => detail_by_index(*index, catalog),
        Intent::CarDetailByName(slug) => match catalog.iter().find(|c| &c.slug == slug) {
            Some(car) => car_highlights(car),
            None => inventory_summary(catalog),
        },
        Intent::Greeting => BotReply::local(concat!(
            "Hello! I can help you discover vehicles, pricing and services at AutoDrive Market.\n",
            "مرحباً! يمكنني مساعدتك في استكشاف السيارات والأسعار والخدمات في أوتودرايف ماركت."
        )),
        Intent::GenericInfo(InfoTopic::TestDrive) => BotReply::local(concat!(
            "You can book a test drive directly from the vehicle page by selecting ",
            "'Book a test drive' and sharing your preferred schedule.\n",
            "يمكنك حجز تجربة قيادة من صفحة السيارة باختيار \"احجز تجربة قيادة\" ",
            "وتحديد الموعد المناسب لك."
        )),
        Intent::GenericInfo(InfoTopic::Financing) => BotReply::local(concat!(
            "We partner with several banks and offer in-house financing with instant approval. ",
            "Let us know your budget and we will prepare options for you.\n",
            "نتعاون مع عدة بنوك ونوفر تمويلاً داخلياً بموافقة فورية. ",
            "أخبرنا بميزانيتك وسنجهز لك الخيارات المناسبة."
        )),
    }
}

fn inventory_updating() -> BotReply {
    BotReply::local(concat!(
        "Our inventory is being updated. Please check back shortly.\n",
        "نقوم حالياً بتحديث السيارات المتوفرة، يرجى المراجعة لاحقاً."
    ))
}

fn all_slugs(catalog: &[VehicleRecord]) -> Vec<String> {
    catalog.iter().map(|c| c.slug.clone()).collect()
}

fn numbered_list(catalog: &[VehicleRecord]) -> BotReply {
    if catalog.is_empty() {
        return inventory_updating();
    }

    let mut text = format!("{INVENTORY_MARKER_EN} / {INVENTORY_MARKER_AR}\n");
    for (i, car) in catalog.iter().enumerate() {
        text.push_str(&format!("{}. {} / {}\n", i + 1, car.name_en, car.name_ar));
    }
    text.push_str("Reply with a car's number to see its details.\n");
    text.push_str("أرسل رقم السيارة لعرض تفاصيلها.");

    BotReply::local(text)
        .with_sources(all_slugs(catalog))
        .with_prompt_kind(PromptKind::InventoryList)
}

fn inventory_summary(catalog: &[VehicleRecord]) -> BotReply {
    if catalog.is_empty() {
        return inventory_updating();
    }

    let names_en: Vec<&str> = catalog.iter().map(|c| c.name_en.as_str()).collect();
    let names_ar: Vec<&str> = catalog.iter().map(|c| c.name_ar.as_str()).collect();
    let text = format!(
        "We currently feature these models: {}. Let me know if you'd like details on any of them.\n\
         نعرض حالياً الطرازات التالية: {}. أخبرني إذا رغبت في تفاصيل أي منها.",
        names_en.join(", "),
        names_ar.join("، "),
    );
    BotReply::local(text).with_sources(all_slugs(catalog))
}

fn detail_by_index(index: u64, catalog: &[VehicleRecord]) -> BotReply {
    if catalog.is_empty() {
        return BotReply::local(concat!(
            "No cars are available right now.\n",
            "لا توجد سيارات متاحة حالياً."
        ));
    }

    let len = catalog.len();
    let car = usize::try_from(index)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| catalog.get(i));

    match car {
        Some(car) => detail_block(car),
        None => BotReply::local(format!(
            "Please {DETAIL_PROMPT_MARKER_EN} between 1 and {len}.\n\
             {DETAIL_PROMPT_MARKER_AR} بين 1 و {len}."
        ))
        .with_prompt_kind(PromptKind::DetailPrompt),
    }
}

/// Full bilingual detail block for one car.
fn detail_block(car: &VehicleRecord) -> BotReply {
    let mut text = format!("{} / {}\n", car.name_en, car.name_ar);
    text.push_str(&format!("Price: {}\n", format_currency(&car.price_en)));
    text.push_str(&format!("السعر: {}\n", format_currency(&car.price_ar)));
    text.push_str("Features:\n");
    for feature in car.features_en() {
        text.push_str(&format!("- {feature}\n"));
    }
    text.push_str("المميزات:\n");
    for feature in car.features_ar() {
        text.push_str(&format!("- {feature}\n"));
    }
    BotReply::local(text.trim_end()).with_sources(vec![car.slug.clone()])
}

/// Short sales pitch for a car found by name.
fn car_highlights(car: &VehicleRecord) -> BotReply {
    let features_en = non_empty_joined(&car.features_en(), ", ");
    let features_ar = non_empty_joined(&car.features_ar(), "، ");
    let text = format!(
        "The {} is priced at {}. Key highlights include {}. Would you like to schedule a test drive?\n\
         سعر {} هو {}. من أبرز مميزاتها: {}. هل ترغب في حجز تجربة قيادة؟",
        car.name_en,
        format_currency(&car.price_en),
        features_en,
        car.name_ar,
        format_currency(&car.price_ar),
        features_ar,
    );
    BotReply::local(text).with_sources(vec![car.slug.clone()])
}

fn non_empty_joined(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Put a single space between a currency code and the amount that follows.
pub fn format_currency(value: &str) -> String {
    let mut out = value.to_string();
    for code in CURRENCY_CODES {
        let spaced = format!("{code} ");
        if out.contains(code) && !out.contains(&spaced) {
            out = out.replace(code, &spaced);
        }
    }
    out.trim_end().to_string()
}
