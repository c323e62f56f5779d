//! # warranty-kit
//!
//! Warranty determination and reporting for a small electronics reseller.
//!
//! ## Features
//!
//! - **Policy Resolution:** Decide a sold unit's warranty from inventory data,
//!   its marketing copy, or its product type, and record which source decided
//! - **Phrase Parsing:** Canonicalize Spanish warranty phrases ("6 meses",
//!   "año y medio") into days and a printable label
//! - **Sale Projection:** One warranty record per sold serialized item, with
//!   expiration, days remaining and status as of any date
//! - **Aggregation:** Active/expired counts and insured value for reports
//! - **Store Agnostic:** Collaborators are traits; in-memory versions included
//!
//! ## Quick Start
//!
//! ```ignore
//! use warranty_kit::{
//!     SaleFilter, WarrantyService, ProductType,
//!     repository::{InMemoryInventory, InMemorySales},
//! };
//!
//! let service = WarrantyService::new(InMemoryInventory::new(), InMemorySales::new());
//!
//! // Certificate printing: one unit
//! let decision = service
//!     .resolve("C02XK1ABJGH5", "MacBook Air 13-inch - nuevo", ProductType::Computer)
//!     .await;
//! println!("{} via {}", decision.term, decision.source);
//!
//! // Warranty report: all sales, as of today
//! let as_of = service.today();
//! let records = service.records(&SaleFilter::default(), as_of).await?;
//! let summary = service.summary(&SaleFilter::default(), as_of).await?;
//! ```
//!
//! ### Pure Building Blocks
//!
//! The projection and aggregation steps are plain functions over data and can
//! be used without any collaborator:
//!
//! ```
//! use chrono::NaiveDate;
//! use warranty_kit::{classify, WarrantyStatus};
//!
//! let expiration = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
//! let as_of = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
//! assert_eq!(classify(expiration, as_of), WarrantyStatus::Expired);
//! ```

#[macro_use]
extern crate log;

pub mod config;
pub mod copy;
pub mod entity;
pub mod error;
pub mod filter;
pub mod observability;
pub mod projector;
pub mod record;
pub mod repository;
pub mod resolver;
pub mod service;
pub mod status;
pub mod summary;
pub mod term;

// Re-exports for convenience
pub use config::WarrantyConfig;
pub use entity::{Condition, InventoryUnit, ProductType, SaleLineItem, SaleTransaction};
pub use error::{Error, Result};
pub use filter::SaleFilter;
pub use projector::project;
pub use record::{RecordSource, WarrantyRecord};
pub use repository::{InventoryRepository, SalesRepository};
pub use resolver::{PolicyDecision, PolicyResolver, PolicySource};
pub use service::WarrantyService;
pub use status::{classify, WarrantyStatus};
pub use summary::{summarize, WarrantySummary};
pub use term::{parse_term, WarrantyTerm};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
