//! Aggregate view over a set of warranty records.

use crate::entity::ProductType;
use crate::record::WarrantyRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Record counts per product type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTypeCounts {
    pub computer: usize,
    pub phone: usize,
    pub other: usize,
}

impl ProductTypeCounts {
    fn bump(&mut self, product_type: ProductType) {
        match product_type {
            ProductType::Computer => self.computer += 1,
            ProductType::Phone => self.phone += 1,
            ProductType::Other => self.other += 1,
        }
    }
}

/// Totals for the warranty report header.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WarrantySummary {
    pub total: usize,
    pub active: usize,
    pub expired: usize,
    pub by_product_type: ProductTypeCounts,
    /// Sum of `total_price` over active records.
    pub total_insured_value: Decimal,
}

/// Summarize `records` in a single pass.
pub fn summarize(records: &[WarrantyRecord]) -> WarrantySummary {
    records
        .iter()
        .fold(WarrantySummary::default(), |mut summary, record| {
            summary.total += 1;
            summary.by_product_type.bump(record.product_type);

            if record.is_active() {
                summary.active += 1;
                summary.total_insured_value += record.total_price;
            } else {
                summary.expired += 1;
            }

            summary
        })
}
