//! Sale projection: sales transactions → warranty records.
//!
//! Each sold serialized line item yields exactly one [`WarrantyRecord`].
//! The warranty length comes from the line item's own `garantia` text, read
//! with a condition-blind table: line items carry no unit condition, so the
//! new-unit three-month upgrade applied to inventory units has no
//! counterpart here. Keep the two tables apart; historical reports depend on
//! the difference.

use crate::copy::model_name;
use crate::entity::{SaleLineItem, SaleTransaction};
use crate::filter::SaleFilter;
use crate::record::{RecordSource, WarrantyRecord};
use crate::status::{classify, days_remaining};
use crate::term::{match_rules, TermRule, WarrantyTerm};
use chrono::{Days, NaiveDate};

/// Condition-blind table for sale-time warranty text.
const SALE_TERM_RULES: &[TermRule] = &[
    TermRule::new(&["18 meses", "1.5 años", "año y medio"], 540, "18 meses"),
    TermRule::new(&["12 meses", "1 año", "un año"], 365, "1 año"),
    TermRule::new(&["6 meses", "seis meses", "medio año"], 180, "6 meses"),
    TermRule::new(&["2 meses", "dos meses"], 60, "2 meses"),
    TermRule::new(&["1 mes", "un mes"], 30, "1 mes"),
];

/// Read a line item's `garantia` text.
///
/// Absent or unrecognized text yields three months regardless of condition.
pub fn sale_term(garantia: Option<&str>) -> (WarrantyTerm, RecordSource) {
    match garantia.and_then(|text| match_rules(SALE_TERM_RULES, text, None)) {
        Some(term) => (term, RecordSource::SaleTerm),
        None => (WarrantyTerm::three_months(), RecordSource::SaleDefault),
    }
}

fn expiration(sale_date: NaiveDate, days: u32) -> Option<NaiveDate> {
    sale_date.checked_add_days(Days::new(u64::from(days)))
}

/// Sale term plus its expiration date.
///
/// A term that runs past the end of the calendar counts as unrecognized and
/// takes the sale default.
fn dated_term(
    sale_date: NaiveDate,
    garantia: Option<&str>,
) -> (WarrantyTerm, RecordSource, NaiveDate) {
    let (term, source) = sale_term(garantia);
    if let Some(expires) = expiration(sale_date, term.days) {
        return (term, source, expires);
    }

    debug!(
        "{} days from {} is out of range; using the sale default",
        term.days, sale_date
    );
    let term = WarrantyTerm::three_months();
    let expires = expiration(sale_date, term.days).unwrap_or(NaiveDate::MAX);
    (term, RecordSource::SaleDefault, expires)
}

/// Project a single line item. `None` for items without a serial number.
pub fn project_item(
    tx: &SaleTransaction,
    item: &SaleLineItem,
    as_of: NaiveDate,
) -> Option<WarrantyRecord> {
    let serial_number = item.serial_number.clone()?;
    let (term, source, expiration_date) = dated_term(tx.sale_date, item.garantia.as_deref());

    Some(WarrantyRecord {
        sale_line_item_id: item.id.clone(),
        transaction_id: tx.id.clone(),
        transaction_number: tx.transaction_number.clone(),
        customer_name: tx.customer_name.clone(),
        customer_email: tx.customer_email.clone(),
        customer_phone: tx.customer_phone.clone(),
        model_name: model_name(&item.copy),
        serial_number,
        product_type: item.product_type,
        total_price: item.total_price,
        sale_date: tx.sale_date,
        warranty_days: term.days,
        warranty_label: term.label,
        expiration_date,
        days_remaining: days_remaining(expiration_date, as_of),
        status: classify(expiration_date, as_of),
        source,
    })
}

/// Expand `transactions` into warranty records as of `as_of`.
///
/// Order follows the input: transactions as given (the sales store returns
/// most recent first), then line items in sale order.
pub fn project(
    transactions: &[SaleTransaction],
    filter: &SaleFilter,
    as_of: NaiveDate,
) -> Vec<WarrantyRecord> {
    transactions
        .iter()
        .filter(|tx| filter.matches_transaction(tx))
        .flat_map(move |tx| {
            tx.serialized_items()
                .filter(move |item| filter.matches_item(item))
                .filter_map(move |item| project_item(tx, item, as_of))
        })
        .collect()
}
