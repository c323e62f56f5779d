//! Sale query filters.

use crate::entity::{ProductType, SaleLineItem, SaleTransaction};
use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Filters for the sales query and the projection that follows it.
///
/// Text filters are case-insensitive substring matches. Blank text counts as
/// no filter. The date range is inclusive on both ends.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use warranty_kit::entity::ProductType;
/// use warranty_kit::filter::SaleFilter;
///
/// let filter = SaleFilter::default()
///     .with_customer("garcía")
///     .with_product_type(ProductType::Computer)
///     .with_date_range(
///         NaiveDate::from_ymd_opt(2024, 1, 1),
///         NaiveDate::from_ymd_opt(2024, 6, 30),
///     );
/// assert!(filter.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleFilter {
    pub serial: Option<String>,
    pub customer: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub product_type: Option<ProductType>,
}

impl SaleFilter {
    pub fn with_serial(mut self, serial: impl Into<String>) -> Self {
        self.serial = Some(serial.into());
        self
    }

    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }

    pub fn with_date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    pub fn with_product_type(mut self, product_type: ProductType) -> Self {
        self.product_type = Some(product_type);
        self
    }

    /// Reject inconsistent filters before they reach a collaborator.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidFilter` when `date_from` is after `date_to`.
    pub fn validate(&self) -> Result<()> {
        if let (Some(from), Some(to)) = (self.date_from, self.date_to) {
            if from > to {
                return Err(Error::InvalidFilter(format!(
                    "date_from {} is after date_to {}",
                    from, to
                )));
            }
        }
        Ok(())
    }

    /// Transaction-level criteria: customer and sale date.
    pub fn matches_transaction(&self, tx: &SaleTransaction) -> bool {
        if let Some(from) = self.date_from {
            if tx.sale_date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if tx.sale_date > to {
                return false;
            }
        }

        match needle(&self.customer) {
            Some(customer) => {
                contains_ci(&tx.customer_name, &customer)
                    || tx
                        .customer_email
                        .as_deref()
                        .is_some_and(|email| contains_ci(email, &customer))
            }
            None => true,
        }
    }

    /// Item-level criteria: serial and product type.
    pub fn matches_item(&self, item: &SaleLineItem) -> bool {
        if let Some(product_type) = self.product_type {
            if item.product_type != product_type {
                return false;
            }
        }

        match needle(&self.serial) {
            Some(serial) => item
                .serial_number
                .as_deref()
                .is_some_and(|s| contains_ci(s, &serial)),
            None => true,
        }
    }
}

fn needle(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
