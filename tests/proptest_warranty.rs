//! Property-based tests for term parsing and projection.
//!
//! # Properties Tested
//!
//! 1. **Totality**: parsing never panics and always yields a label
//! 2. **Condition**: used and repaired units always parse alike
//! 3. **Generic Counts**: "N meses" and "N años" scale linearly
//! 4. **Record Invariants**: expiration = sale + days, Active ⇔ days_remaining > 0

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use warranty_kit::projector::{project_item, sale_term};
use warranty_kit::{
    classify, parse_term, Condition, ProductType, SaleLineItem, SaleTransaction, WarrantyStatus,
};

fn condition_strategy() -> impl Strategy<Value = Condition> {
    prop_oneof![
        Just(Condition::New),
        Just(Condition::Used),
        Just(Condition::Repaired),
    ]
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..20_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

fn garantia_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("3 meses".to_string())),
        Just(Some("año y medio".to_string())),
        Just(Some("un mes".to_string())),
        (4u32..60).prop_map(|n| Some(format!("{} meses", n))),
        (300_000u32..2_000_000).prop_map(|n| Some(format!("{} años", n))),
        ".{0,20}".prop_map(Some),
    ]
}

fn sale(sale_date: NaiveDate, garantia: Option<String>) -> SaleTransaction {
    SaleTransaction {
        id: "t".to_string(),
        transaction_number: "V-1".to_string(),
        sale_date,
        customer_name: "Ana".to_string(),
        customer_email: None,
        customer_phone: None,
        payment_method: "cash".to_string(),
        seller: "luis".to_string(),
        items: vec![SaleLineItem {
            id: "i".to_string(),
            transaction_id: "t".to_string(),
            product_type: ProductType::Computer,
            serial_number: Some("SN".to_string()),
            copy: "ThinkPad T14 16GB".to_string(),
            quantity: 1,
            unit_price: Decimal::from(10),
            total_price: Decimal::from(10),
            garantia,
        }],
    }
}

proptest! {
    #[test]
    fn prop_parse_term_is_total(text in ".*", condition in condition_strategy()) {
        let term = parse_term(&text, condition);
        prop_assert!(!term.label.is_empty());
    }

    #[test]
    fn prop_parse_term_is_deterministic(text in ".{0,30}", condition in condition_strategy()) {
        prop_assert_eq!(parse_term(&text, condition), parse_term(&text, condition));
    }

    #[test]
    fn prop_used_and_repaired_agree(text in ".{0,30}") {
        prop_assert_eq!(
            parse_term(&text, Condition::Used),
            parse_term(&text, Condition::Repaired)
        );
    }

    #[test]
    fn prop_generic_months_scale(n in 19u32..200) {
        // skip counts whose suffix is itself a literal needle
        prop_assume!(![1, 2, 3, 6].contains(&(n % 10)) && n % 100 != 18);
        let term = parse_term(&format!("{} meses", n), Condition::Used);
        prop_assert_eq!(term.days, n * 30);
        prop_assert_eq!(term.label, format!("{} meses", n));
    }

    #[test]
    fn prop_generic_years_scale(n in 2u32..50) {
        prop_assume!(n % 10 != 1);
        let term = parse_term(&format!("{} años", n), Condition::Used);
        prop_assert_eq!(term.days, n * 365);
    }

    #[test]
    fn prop_sale_term_defaults_are_flat(text in "[a-z ]{0,20}") {
        // letters only: no digits, so no generic match either
        let (term, _) = sale_term(Some(&text));
        let recognized = [30, 60, 90, 180, 365, 540].contains(&term.days);
        prop_assert!(recognized);
    }

    #[test]
    fn prop_record_invariants(
        sale_date in date_strategy(),
        as_of in date_strategy(),
        garantia in garantia_strategy(),
    ) {
        let tx = sale(sale_date, garantia);
        let record = project_item(&tx, &tx.items[0], as_of).expect("serialized item");

        prop_assert_eq!(
            sale_date.checked_add_days(Days::new(u64::from(record.warranty_days))),
            Some(record.expiration_date)
        );
        prop_assert_eq!(record.status.is_active(), record.days_remaining > 0);
        prop_assert_eq!(record.status, classify(record.expiration_date, as_of));
        prop_assert_eq!(record.model_name.as_str(), "ThinkPad T14");
    }

    #[test]
    fn prop_expired_on_and_after_expiration(sale_date in date_strategy(), extra in 0u64..400) {
        let tx = sale(sale_date, Some("3 meses".to_string()));
        let expiration = sale_date.checked_add_days(Days::new(90)).unwrap();
        let as_of = expiration.checked_add_days(Days::new(extra)).unwrap();

        let record = project_item(&tx, &tx.items[0], as_of).unwrap();
        prop_assert_eq!(record.status, WarrantyStatus::Expired);
    }
}
