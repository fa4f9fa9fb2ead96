//! Deterministic intent matching.
//!
//! Two mutually exclusive rule sets share the same catalog input:
//! - [`MatcherMode::NumberedMenu`]: "show cars" lists the inventory and bare
//!   numbers pick a car from it.
//! - [`MatcherMode::Faq`]: greetings, car lookup by name, and canned answers
//!   for test drives and financing.
//!
//! Matching is a pure function of (message, previous prompt kind, catalog).
//! `None` means the message should go to the completion endpoint.

pub mod faq;
pub mod menu;

use ad_protocol::chat::PromptKind;
use ad_protocol::vehicle::VehicleRecord;
use serde::{Deserialize, Serialize};

/// Which rule set the assistant runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatcherMode {
    #[default]
    NumberedMenu,
    Faq,
}

impl MatcherMode {
    /// Parse a mode name as written in config (`numbered_menu` / `faq`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "numbered_menu" | "menu" => Some(Self::NumberedMenu),
            "faq" => Some(Self::Faq),
            _ => None,
        }
    }
}

/// How an inventory listing is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    /// One numbered line per car; numbers feed back into detail lookups.
    Numbered,
    /// A single comma-separated sentence.
    Summary,
}

/// Canned informational topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoTopic {
    TestDrive,
    Financing,
}

/// A deterministic answer, with the data needed to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ListInventory(ListStyle),
    /// 1-based position in catalog display order, not yet range-checked.
    CarDetailByIndex(u64),
    /// Catalog slug of a car named in the message.
    CarDetailByName(String),
    Greeting,
    GenericInfo(InfoTopic),
}

/// Trim, collapse inner whitespace, and lower-case.
pub fn clean_message(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Run the rule set for `mode` over an already cleaned message.
pub fn match_intent(
    mode: MatcherMode,
    cleaned: &str,
    prior: PromptKind,
    catalog: &[VehicleRecord],
) -> Option<Intent> {
    match mode {
        MatcherMode::NumberedMenu => menu::match_menu(cleaned, prior),
        MatcherMode::Faq => faq::match_faq(cleaned, catalog),
    }
}

/// Check if the text contains any of the given patterns.
pub(crate) fn matches_any(text: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| text.contains(p))
}
