//! Per-unit warranty policy resolution.
//!
//! Decides how long a sold unit's warranty lasts, and from which source,
//! for certificate printing. Resolution walks a fixed ladder and stops at the
//! first tier that applies:
//!
//! ```text
//! computer ──► inventory lookup ──found──► parse unit's warranty text   (inventory)
//!                    │
//!                    └─not found / failed──► condition from copy       (copy)
//! phone    ──────────────────────────────► 1 mes                       (type-default)
//! other    ──────────────────────────────► 1 mes                       (type-default)
//! anything unexpected ───────────────────► 3 meses                     (error-fallback)
//! ```
//!
//! Resolution never returns an error; every failure degrades to a concrete
//! term and the source tag records which tier produced it.

use crate::config::WarrantyConfig;
use crate::copy::condition_from_copy;
use crate::entity::{Condition, InventoryUnit, ProductType};
use crate::error::{Error, Result};
use crate::observability::{NoOpMetrics, WarrantyMetrics};
use crate::repository::InventoryRepository;
use crate::term::{parse_term, WarrantyTerm};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Which resolution tier produced a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicySource {
    /// Parsed from the inventory unit's warranty text.
    Inventory,
    /// Fixed rule keyed on the condition found in the copy.
    Copy,
    /// Fixed rule for phones and other products.
    TypeDefault,
    /// Something unexpected happened; conservative default.
    ErrorFallback,
}

impl PolicySource {
    /// Audit tag stored alongside issued certificates.
    pub fn tag(&self) -> &'static str {
        match self {
            PolicySource::Inventory => "inventory",
            PolicySource::Copy => "copy",
            PolicySource::TypeDefault => "type-default",
            PolicySource::ErrorFallback => "error-fallback",
        }
    }
}

impl fmt::Display for PolicySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Outcome of a resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDecision {
    pub term: WarrantyTerm,
    pub source: PolicySource,
}

impl PolicyDecision {
    pub fn days(&self) -> u32 {
        self.term.days
    }

    pub fn label(&self) -> &str {
        &self.term.label
    }

    fn error_fallback() -> Self {
        PolicyDecision {
            term: WarrantyTerm::three_months(),
            source: PolicySource::ErrorFallback,
        }
    }

    fn type_default() -> Self {
        PolicyDecision {
            term: WarrantyTerm::one_month(),
            source: PolicySource::TypeDefault,
        }
    }

    /// Fixed copy rule keyed on condition only; the phrase parser is not consulted.
    fn from_copy(copy: &str) -> Self {
        let term = match condition_from_copy(copy) {
            Condition::New => WarrantyTerm::six_months(),
            Condition::Used | Condition::Repaired => WarrantyTerm::three_months(),
        };
        PolicyDecision {
            term,
            source: PolicySource::Copy,
        }
    }
}

/// Resolves warranty policies against an inventory collaborator.
///
/// # Example
///
/// ```ignore
/// use warranty_kit::{PolicyResolver, ProductType};
/// use warranty_kit::repository::InMemoryInventory;
///
/// let resolver = PolicyResolver::new(InMemoryInventory::new());
/// let decision = resolver
///     .resolve("C02XK1ABJGH5", "MacBook Air 13-inch - nuevo", ProductType::Computer)
///     .await;
/// assert_eq!(decision.days(), 180);
/// ```
pub struct PolicyResolver<I: InventoryRepository> {
    inventory: I,
    config: WarrantyConfig,
    metrics: Box<dyn WarrantyMetrics>,
}

impl<I: InventoryRepository> PolicyResolver<I> {
    pub fn new(inventory: I) -> Self {
        PolicyResolver {
            inventory,
            config: WarrantyConfig::default(),
            metrics: Box::new(NoOpMetrics),
        }
    }

    pub fn with_config(mut self, config: WarrantyConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_metrics(mut self, metrics: Box<dyn WarrantyMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn config(&self) -> &WarrantyConfig {
        &self.config
    }

    /// Resolve the warranty for one sold unit.
    pub async fn resolve(
        &self,
        serial: &str,
        copy: &str,
        product_type: ProductType,
    ) -> PolicyDecision {
        let timer = Instant::now();
        let result = self.try_resolve(serial, copy, product_type).await;
        self.finish(serial, result, timer)
    }

    /// Resolve with the product type as stored, e.g. `"computadora"`.
    ///
    /// An unknown product type resolves to the error fallback.
    pub async fn resolve_raw(
        &self,
        serial: &str,
        copy: &str,
        product_type: &str,
    ) -> PolicyDecision {
        let timer = Instant::now();
        let result = match product_type.parse::<ProductType>() {
            Ok(product_type) => self.try_resolve(serial, copy, product_type).await,
            Err(e) => Err(e),
        };
        self.finish(serial, result, timer)
    }

    fn finish(
        &self,
        serial: &str,
        result: Result<PolicyDecision>,
        timer: Instant,
    ) -> PolicyDecision {
        let decision = result.unwrap_or_else(|e| {
            warn!("Warranty resolution for {} degraded to fallback: {}", serial, e);
            self.metrics.record_error("resolve", &e.to_string());
            PolicyDecision::error_fallback()
        });
        self.metrics
            .record_resolution(serial, decision.source, timer.elapsed());
        decision
    }

    async fn try_resolve(
        &self,
        serial: &str,
        copy: &str,
        product_type: ProductType,
    ) -> Result<PolicyDecision> {
        match product_type {
            ProductType::Computer => self.resolve_computer(serial, copy).await,
            ProductType::Phone | ProductType::Other => Ok(PolicyDecision::type_default()),
        }
    }

    async fn resolve_computer(&self, serial: &str, copy: &str) -> Result<PolicyDecision> {
        match self.lookup(serial).await {
            Ok(unit) => {
                if !unit.serial.trim().eq_ignore_ascii_case(serial.trim()) {
                    return Err(Error::Other(format!(
                        "inventory returned unit {} for serial {}",
                        unit.serial, serial
                    )));
                }
                let text = unit.warranty_term_text.as_deref().unwrap_or_default();
                debug!("» {} resolved from inventory ({})", serial, unit.condition);
                Ok(PolicyDecision {
                    term: parse_term(text, unit.condition),
                    source: PolicySource::Inventory,
                })
            }
            Err(e) if !e.is_fatal() => {
                debug!("{}; falling back to copy", e);
                Ok(PolicyDecision::from_copy(copy))
            }
            Err(e) => {
                warn!("Inventory lookup for {} failed, falling back to copy: {}", serial, e);
                self.metrics.record_error("inventory lookup", &e.to_string());
                Ok(PolicyDecision::from_copy(copy))
            }
        }
    }

    async fn lookup(&self, serial: &str) -> Result<InventoryUnit> {
        if serial.trim().is_empty() {
            return Err(Error::LookupNotFound(serial.to_string()));
        }

        let found = match self.config.lookup_timeout {
            Some(limit) => tokio::time::timeout(limit, self.inventory.lookup(serial)).await??,
            None => self.inventory.lookup(serial).await?,
        };

        found.ok_or_else(|| Error::LookupNotFound(serial.to_string()))
    }
}
