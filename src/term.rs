//! Warranty phrase parsing.
//!
//! Turns the free text captured at intake ("6 meses", "1 año", "año y medio")
//! into a canonical [`WarrantyTerm`]. Phrases are matched against a rule table
//! evaluated in declared order; the first rule whose needle occurs in the
//! lowercased text wins.
//!
//! # Rule Order
//!
//! | # | Needles | Days | Label |
//! |---|---------|------|-------|
//! | 1 | "18 meses", "1.5 años", "año y medio" | 540 | 18 meses |
//! | 2 | "12 meses", "1 año", "un año" | 365 | 1 año |
//! | 3 | "6 meses", "seis meses", "medio año" | 180 | 6 meses |
//! | 4 | "3 meses", "tres meses" | 90 (180 for new units) | 3 meses |
//! | 5 | "2 meses", "dos meses" | 60 | 2 meses |
//! | 6 | "1 mes", "un mes" | 30 | 1 mes |
//! | 7 | `N meses` / `N años` | N×30 / N×365 | as written |
//!
//! When nothing matches, new units get six months and everything else three.
//!
//! Matching is by substring, so "13 meses" hits rule 4 before the generic
//! rule ever sees it. Historical certificates were issued that way.

use crate::entity::Condition;
use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static MONTHS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(?:meses|mes)").expect("valid months pattern")
});

static YEARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(?:años|año)").expect("valid years pattern")
});

/// Canonical warranty duration.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WarrantyTerm {
    /// Length in calendar days.
    pub days: u32,
    /// Human-readable label printed on certificates.
    pub label: String,
}

impl WarrantyTerm {
    pub fn new(days: u32, label: impl Into<String>) -> Self {
        WarrantyTerm {
            days,
            label: label.into(),
        }
    }

    pub fn one_month() -> Self {
        WarrantyTerm::new(30, "1 mes")
    }

    pub fn three_months() -> Self {
        WarrantyTerm::new(90, "3 meses")
    }

    pub fn six_months() -> Self {
        WarrantyTerm::new(180, "6 meses")
    }

    /// Default for a unit whose warranty text could not be read.
    pub fn default_for(condition: Condition) -> Self {
        match condition {
            Condition::New => WarrantyTerm::six_months(),
            Condition::Used | Condition::Repaired => WarrantyTerm::three_months(),
        }
    }
}

impl fmt::Display for WarrantyTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} days)", self.label, self.days)
    }
}

/// One row of a phrase table.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TermRule {
    needles: &'static [&'static str],
    days: u32,
    label: &'static str,
    upgrade_new: bool,
}

impl TermRule {
    pub(crate) const fn new(
        needles: &'static [&'static str],
        days: u32,
        label: &'static str,
    ) -> Self {
        TermRule {
            needles,
            days,
            label,
            upgrade_new: false,
        }
    }

    /// New units hitting this rule get six months instead.
    const fn upgraded_when_new(mut self) -> Self {
        self.upgrade_new = true;
        self
    }

    fn matches(&self, lowered: &str) -> bool {
        self.needles.iter().any(|needle| lowered.contains(needle))
    }

    fn term(&self, condition: Option<Condition>) -> WarrantyTerm {
        if self.upgrade_new && condition == Some(Condition::New) {
            return WarrantyTerm::six_months();
        }
        WarrantyTerm::new(self.days, self.label)
    }
}

/// Condition-aware table used for inventory units.
pub(crate) const INVENTORY_TERM_RULES: &[TermRule] = &[
    TermRule::new(&["18 meses", "1.5 años", "año y medio"], 540, "18 meses"),
    TermRule::new(&["12 meses", "1 año", "un año"], 365, "1 año"),
    TermRule::new(&["6 meses", "seis meses", "medio año"], 180, "6 meses"),
    TermRule::new(&["3 meses", "tres meses"], 90, "3 meses").upgraded_when_new(),
    TermRule::new(&["2 meses", "dos meses"], 60, "2 meses"),
    TermRule::new(&["1 mes", "un mes"], 30, "1 mes"),
];

/// Evaluate `rules` in order, then the generic `N meses` / `N años` patterns.
///
/// Returns `None` when nothing matches.
pub(crate) fn match_rules(
    rules: &[TermRule],
    text: &str,
    condition: Option<Condition>,
) -> Option<WarrantyTerm> {
    let lowered = text.to_lowercase();

    rules
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.term(condition))
        .or_else(|| generic_term(&lowered))
}

fn generic_term(lowered: &str) -> Option<WarrantyTerm> {
    if let Some(n) = leading_count(&MONTHS_RE, lowered) {
        let label = if n == 1 {
            "1 mes".to_string()
        } else {
            format!("{} meses", n)
        };
        return n.checked_mul(30).map(|days| WarrantyTerm::new(days, label));
    }

    if let Some(n) = leading_count(&YEARS_RE, lowered) {
        let label = if n == 1 {
            "1 año".to_string()
        } else {
            format!("{} años", n)
        };
        return n.checked_mul(365).map(|days| WarrantyTerm::new(days, label));
    }

    None
}

fn leading_count(re: &Regex, lowered: &str) -> Option<u32> {
    re.captures(lowered)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Recognize a warranty phrase without applying the condition default.
///
/// # Errors
///
/// Returns `Error::TermUnrecognized` when no rule or generic pattern matches.
pub fn try_parse_term(text: &str, condition: Condition) -> Result<WarrantyTerm> {
    match_rules(INVENTORY_TERM_RULES, text, Some(condition))
        .ok_or_else(|| Error::TermUnrecognized(text.to_string()))
}

/// Parse a warranty phrase for a unit in the given condition.
///
/// Never fails: unrecognized or empty text falls back to six months for new
/// units and three months otherwise.
///
/// # Example
///
/// ```
/// use warranty_kit::entity::Condition;
/// use warranty_kit::term::parse_term;
///
/// assert_eq!(parse_term("6 meses", Condition::Used).days, 180);
/// assert_eq!(parse_term("3 meses", Condition::New).label, "6 meses");
/// ```
pub fn parse_term(text: &str, condition: Condition) -> WarrantyTerm {
    match try_parse_term(text, condition) {
        Ok(term) => term,
        Err(e) => {
            debug!("{}; using {} default", e, condition);
            WarrantyTerm::default_for(condition)
        }
    }
}
