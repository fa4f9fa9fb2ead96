//! Message list sent to the completion endpoint.

use ad_protocol::vehicle::VehicleRecord;

use crate::completion::ChatMessage;
use crate::matcher::MatcherMode;
use crate::render::{DETAIL_PROMPT_MARKER_EN, format_currency};

/// Default persona: an Arabic-speaking sales assistant for AutoDrive.
pub const DEFAULT_SYSTEM_PROMPT: &str = "أنت مساعد مبيعات سيارات لدى AutoDrive. تحدث دائمًا باللغة العربية الفصحى وقدم إجابات مركزة حول سياراتنا، الأسعار، وخدمات ما بعد البيع، مع الحفاظ على ردود موجزة وواضحة.";

const SERVICES_SUMMARY: &str = "AutoDrive Market offers in-house financing with partner banks, \
a 2-year comprehensive warranty on every car, and nationwide delivery within 72 hours.";

/// Build `[system prompt, catalog context, user message]`.
pub fn build_messages(
    system_prompt: &str,
    mode: MatcherMode,
    catalog: &[VehicleRecord],
    user_message: &str,
) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_prompt),
        ChatMessage::system(context_for(mode, catalog)),
        ChatMessage::user(user_message),
    ]
}

fn context_for(mode: MatcherMode, catalog: &[VehicleRecord]) -> String {
    let mut context = match mode {
        MatcherMode::NumberedMenu => format!(
            "Customers can type \"show cars\" to see a numbered list of the inventory, \
             then send a number to see that car's details. When you ask the customer \
             to pick a car, use the exact phrase \"{DETAIL_PROMPT_MARKER_EN}\"."
        ),
        MatcherMode::Faq => SERVICES_SUMMARY.to_string(),
    };

    if let Some(inventory) = inventory_line(catalog) {
        context.push('\n');
        context.push_str(&inventory);
    }
    context
}

fn inventory_line(catalog: &[VehicleRecord]) -> Option<String> {
    if catalog.is_empty() {
        return None;
    }
    let entries: Vec<String> = catalog
        .iter()
        .map(|car| format!("{} ({})", car.name_en, format_currency(&car.price_en)))
        .collect();
    Some(format!("Current inventory: {}.", entries.join("; ")))
}
