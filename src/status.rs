//! Warranty status classification.
//!
//! Pure date arithmetic: no clock access. Callers pass the as-of date.
//!
//! ```text
//!   sale_date                    expiration_date
//!       │◄──────── Active ────────►│◄──── Expired ────
//!       │                          │
//!   as_of < expiration         as_of >= expiration
//! ```
//!
//! The expiration day itself is already expired.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a warranty still covers the unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarrantyStatus {
    Active,
    Expired,
}

impl WarrantyStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, WarrantyStatus::Active)
    }
}

impl std::fmt::Display for WarrantyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WarrantyStatus::Active => write!(f, "Active"),
            WarrantyStatus::Expired => write!(f, "Expired"),
        }
    }
}

/// Classify a warranty expiring on `expiration` as seen on `as_of`.
pub fn classify(expiration: NaiveDate, as_of: NaiveDate) -> WarrantyStatus {
    if as_of < expiration {
        WarrantyStatus::Active
    } else {
        WarrantyStatus::Expired
    }
}

/// Whole days from `as_of` until `expiration`. Negative once expired.
///
/// Both dates are midnight-aligned, so this is the ceiling of the elapsed
/// fraction of days.
pub fn days_remaining(expiration: NaiveDate, as_of: NaiveDate) -> i64 {
    (expiration - as_of).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_classify_boundary() {
        let expiration = date(2024, 3, 31);
        assert_eq!(classify(expiration, date(2024, 3, 30)), WarrantyStatus::Active);
        assert_eq!(classify(expiration, date(2024, 3, 31)), WarrantyStatus::Expired);
        assert_eq!(classify(expiration, date(2024, 4, 2)), WarrantyStatus::Expired);
    }

    #[test]
    fn test_days_remaining_sign() {
        let expiration = date(2024, 3, 31);
        assert_eq!(days_remaining(expiration, date(2024, 3, 30)), 1);
        assert_eq!(days_remaining(expiration, date(2024, 3, 31)), 0);
        assert_eq!(days_remaining(expiration, date(2024, 4, 2)), -2);
    }

    #[test]
    fn test_status_agrees_with_days_remaining() {
        let expiration = date(2025, 1, 15);
        for offset in -5..5 {
            let as_of = expiration + chrono::Duration::days(offset);
            let active = classify(expiration, as_of).is_active();
            assert_eq!(active, days_remaining(expiration, as_of) > 0);
        }
    }

    #[test]
    fn test_status_display() {
        assert_eq!(WarrantyStatus::Active.to_string(), "Active");
        assert_eq!(WarrantyStatus::Expired.to_string(), "Expired");
    }
}
