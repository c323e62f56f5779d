//! Derived warranty records.
//!
//! A record is recomputed from its sale on every query and never stored.

use crate::entity::ProductType;
use crate::status::WarrantyStatus;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a record's warranty length came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordSource {
    /// The line item's `garantia` text was recognized.
    SaleTerm,
    /// `garantia` was absent or unrecognized; the flat three-month default applied.
    SaleDefault,
}

impl fmt::Display for RecordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSource::SaleTerm => write!(f, "sale-term"),
            RecordSource::SaleDefault => write!(f, "sale-default"),
        }
    }
}

/// Warranty state of one sold serialized line item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WarrantyRecord {
    pub sale_line_item_id: String,
    pub transaction_id: String,
    pub transaction_number: String,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub model_name: String,
    pub serial_number: String,
    pub product_type: ProductType,
    pub total_price: Decimal,
    pub sale_date: NaiveDate,
    pub warranty_days: u32,
    pub warranty_label: String,
    pub expiration_date: NaiveDate,
    pub days_remaining: i64,
    pub status: WarrantyStatus,
    pub source: RecordSource,
}

impl WarrantyRecord {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
