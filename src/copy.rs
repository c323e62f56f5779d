//! Heuristics over a unit's marketing copy.
//!
//! Copy is free text written at listing time, e.g.
//! `"MacBook Air 13-inch 2020 8GB SSD - usado"`. It is the fallback source
//! when structured data is missing.

use crate::entity::Condition;
use regex::Regex;
use std::sync::LazyLock;

/// Cut points for model-name extraction. `find` returns the leftmost match,
/// which is the earliest cut point among all alternatives.
///
/// Stop-words match as prefixes after a literal space: " HDMI" cuts at " HD".
static MODEL_CUT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i) (?:",
        r"\d*(?:gb|tb|ssd|ram|inch|hz|led|lcd|oled|qled|full|hd|4k|8k)",
        r"|\(\d{4}\)",
        r#"|\d{1,2}(?:\.\d{1,2})?(?:-inch|"|”)"#,
        r")"
    ))
    .expect("valid model cut pattern")
});

/// Derive a unit's condition from the suffix convention used in copy.
///
/// `"... - nuevo"` → new, `"... - usado"` → used, `"... - reparacion"` or any
/// mention of "reparación" → repaired. Anything else is treated as used.
pub fn condition_from_copy(copy: &str) -> Condition {
    let lowered = copy.to_lowercase();

    if lowered.contains("- nuevo") {
        Condition::New
    } else if lowered.contains("- usado") {
        Condition::Used
    } else if lowered.contains("- reparacion") || lowered.contains("reparación") {
        Condition::Repaired
    } else {
        Condition::Used
    }
}

/// Extract the model name from copy by cutting before the first hardware token.
///
/// Hardware tokens are capacity and display words ("8GB", "SSD", "LED", "4K")
/// starting right after a space, a parenthesised year (" (2021)") and screen
/// sizes (" 13-inch", ` 15.6"`).
///
/// ```
/// use warranty_kit::copy::model_name;
///
/// assert_eq!(model_name("MacBook Air 13-inch 2020 8GB SSD"), "MacBook Air");
/// assert_eq!(model_name("iPhone 12 (2020) 128GB"), "iPhone 12");
/// assert_eq!(model_name("Cargador USB-C"), "Cargador USB-C");
/// ```
pub fn model_name(copy: &str) -> String {
    let cut = match MODEL_CUT_RE.find(copy) {
        Some(m) => copy[..m.start()].trim(),
        None => return copy.to_string(),
    };

    if cut.is_empty() {
        copy.trim().to_string()
    } else {
        cut.to_string()
    }
}
