//! Source entities read from the inventory and sales stores.
//!
//! These mirror rows owned by the intake and point-of-sale workflows. The
//! engine never mutates them.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of product a unit or line item refers to.
///
/// Serializes as the English tag; deserializes from any tag [`FromStr`] accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Computer,
    Phone,
    Other,
}

impl ProductType {
    /// Canonical lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Computer => "computer",
            ProductType::Phone => "phone",
            ProductType::Other => "other",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = Error;

    /// Accepts the English tags and the Spanish ones the store also carries.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "computer" | "computadora" | "computador" => Ok(ProductType::Computer),
            "phone" | "celular" | "telefono" | "teléfono" => Ok(ProductType::Phone),
            "other" | "otro" => Ok(ProductType::Other),
            other => Err(Error::Other(format!("unknown product type: {:?}", other))),
        }
    }
}

impl<'de> Deserialize<'de> for ProductType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(de::Error::custom)
    }
}

/// Physical condition of a unit at intake.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
    #[default]
    Used,
    Repaired,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::New => write!(f, "new"),
            Condition::Used => write!(f, "used"),
            Condition::Repaired => write!(f, "repaired"),
        }
    }
}

impl FromStr for Condition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "new" | "nuevo" => Ok(Condition::New),
            "used" | "usado" => Ok(Condition::Used),
            "repaired" | "reparado" | "reparacion" | "reparación" => Ok(Condition::Repaired),
            other => Err(Error::Other(format!("unknown condition: {:?}", other))),
        }
    }
}

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(de::Error::custom)
    }
}

/// A unit registered by the intake workflow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventoryUnit {
    pub serial: String,
    pub product_type: ProductType,
    pub condition: Condition,
    #[serde(default)]
    pub warranty_term_text: Option<String>,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
}

/// One product entry within a sale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaleLineItem {
    pub id: String,
    pub transaction_id: String,
    pub product_type: ProductType,
    /// `None` for non-serialized goods (cables, accessories).
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub copy: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    /// Warranty phrase captured at sale time.
    #[serde(default)]
    pub garantia: Option<String>,
}

/// A completed sale with its ordered line items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaleTransaction {
    pub id: String,
    pub transaction_number: String,
    pub sale_date: NaiveDate,
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub seller: String,
    #[serde(default)]
    pub items: Vec<SaleLineItem>,
}

impl SaleTransaction {
    /// Line items that carry a serial number.
    pub fn serialized_items(&self) -> impl Iterator<Item = &SaleLineItem> {
        self.items.iter().filter(|item| item.serial_number.is_some())
    }
}
