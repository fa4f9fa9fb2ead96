//! Numbered-menu rules: "show cars" plus numeric picks.

use ad_protocol::chat::PromptKind;

use super::{Intent, ListStyle, matches_any};
use crate::digits::{first_integer, is_bare_number, normalize_digits};

/// Trigger pairs for the inventory list. Both halves must come from the same
/// language. No bare "عرض": it is a substring of "معرض" (showroom).
const LIST_TRIGGERS: &[(&[&str], &[&str])] = &[
    (&["show"], &["cars"]),
    (&["اعرض", "ورني"], &["سيارات"]),
];

/// Words that mark a number as a car pick.
const DETAIL_KEYWORDS: &[&str] = &["car", "detail", "سيارة", "تفاصيل"];

/// Everything the numeric decision depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericContext {
    pub value: u64,
    /// The message is only the number, give or take punctuation.
    pub bare: bool,
    pub prior: PromptKind,
    pub mentions_detail: bool,
}

/// What a number in the message means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericChoice {
    Detail(u64),
    ListInventory,
}

/// Decision table for numeric input. Rows are checked top to bottom.
///
/// | value | bare | prior          | detail word | result        |
/// |-------|------|----------------|-------------|---------------|
/// | 1     | yes  | detail prompt  | any         | detail 1      |
/// | 1     | yes  | other / list   | any         | list          |
/// | any   | any  | inventory list | any         | detail n      |
/// | any   | any  | any            | yes         | detail n      |
/// | not 1 | any  | any            | any         | detail n      |
/// | 1     | no   | other / prompt | no          | no match      |
pub fn decide(ctx: NumericContext) -> Option<NumericChoice> {
    use NumericChoice::{Detail, ListInventory};
    use PromptKind::{DetailPrompt, InventoryList};

    let n = ctx.value;
    match (n == 1, ctx.bare, ctx.prior, ctx.mentions_detail) {
        (true, true, DetailPrompt, _) => Some(Detail(1)),
        (true, true, _, _) => Some(ListInventory),
        (_, _, InventoryList, _) => Some(Detail(n)),
        (_, _, _, true) => Some(Detail(n)),
        (false, _, _, _) => Some(Detail(n)),
        (true, false, _, false) => None,
    }
}

/// Apply the numbered-menu rules to a cleaned message.
pub fn match_menu(cleaned: &str, prior: PromptKind) -> Option<Intent> {
    if wants_inventory_list(cleaned) {
        return Some(Intent::ListInventory(ListStyle::Numbered));
    }

    let normalized = normalize_digits(cleaned);
    let value = first_integer(&normalized)?;
    let ctx = NumericContext {
        value,
        bare: is_bare_number(&normalized),
        prior,
        mentions_detail: matches_any(&normalized, DETAIL_KEYWORDS),
    };

    match decide(ctx)? {
        NumericChoice::Detail(index) => Some(Intent::CarDetailByIndex(index)),
        NumericChoice::ListInventory => Some(Intent::ListInventory(ListStyle::Numbered)),
    }
}

fn wants_inventory_list(text: &str) -> bool {
    LIST_TRIGGERS
        .iter()
        .any(|(show, cars)| matches_any(text, show) && matches_any(text, cars))
}
