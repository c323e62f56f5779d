//! High-level warranty service for downstream consumers.
//!
//! Wires the resolver and the projector to their collaborators behind one
//! cheaply cloneable handle. Certificate printing calls [`WarrantyService::resolve`]
//! or [`WarrantyService::certificate_terms`]; the warranty report calls
//! [`WarrantyService::records`] and [`WarrantyService::summary`].

use crate::config::WarrantyConfig;
use crate::entity::{ProductType, SaleTransaction};
use crate::error::Result;
use crate::filter::SaleFilter;
use crate::observability::{NoOpMetrics, WarrantyMetrics};
use crate::projector::project;
use crate::record::WarrantyRecord;
use crate::repository::{InventoryRepository, SalesRepository};
use crate::resolver::{PolicyDecision, PolicyResolver};
use crate::summary::{summarize, WarrantySummary};
use chrono::NaiveDate;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Resolved warranty for one line item of a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemDecision {
    pub sale_line_item_id: String,
    pub serial_number: String,
    pub decision: PolicyDecision,
}

struct ServiceInner<I: InventoryRepository, S: SalesRepository> {
    resolver: PolicyResolver<I>,
    sales: S,
    metrics: Box<dyn WarrantyMetrics>,
}

/// Warranty service shared across request handlers.
///
/// Holds no state besides its collaborators: every call re-queries and
/// re-derives its result.
///
/// # Example
///
/// ```ignore
/// use warranty_kit::{WarrantyService, SaleFilter};
///
/// let service = WarrantyService::new(inventory, sales);
/// let as_of = service.today();
/// let records = service.records(&SaleFilter::default(), as_of).await?;
/// let summary = service.summary(&SaleFilter::default(), as_of).await?;
/// ```
pub struct WarrantyService<I: InventoryRepository, S: SalesRepository> {
    inner: Arc<ServiceInner<I, S>>,
}

impl<I: InventoryRepository, S: SalesRepository> Clone for WarrantyService<I, S> {
    fn clone(&self) -> Self {
        WarrantyService {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<I: InventoryRepository, S: SalesRepository> WarrantyService<I, S> {
    /// Create a service with default configuration.
    pub fn new(inventory: I, sales: S) -> Self {
        Self::with_config(inventory, sales, WarrantyConfig::default())
    }

    /// Create a service with custom configuration.
    pub fn with_config(inventory: I, sales: S, config: WarrantyConfig) -> Self {
        Self::from_parts(
            PolicyResolver::new(inventory).with_config(config),
            sales,
            Box::new(NoOpMetrics),
        )
    }

    /// Assemble a service from a configured resolver and projection metrics.
    pub fn from_parts(
        resolver: PolicyResolver<I>,
        sales: S,
        metrics: Box<dyn WarrantyMetrics>,
    ) -> Self {
        WarrantyService {
            inner: Arc::new(ServiceInner {
                resolver,
                sales,
                metrics,
            }),
        }
    }

    /// Get a reference to the underlying resolver.
    pub fn resolver(&self) -> &PolicyResolver<I> {
        &self.inner.resolver
    }

    /// Current date in the configured business timezone.
    pub fn today(&self) -> NaiveDate {
        self.inner.resolver.config().today()
    }

    /// Resolve the warranty for one unit. Never fails.
    pub async fn resolve(
        &self,
        serial: &str,
        copy: &str,
        product_type: ProductType,
    ) -> PolicyDecision {
        self.inner.resolver.resolve(serial, copy, product_type).await
    }

    /// Resolve every serialized line item of a transaction for its certificate.
    ///
    /// Items are resolved concurrently; results follow line-item order.
    pub async fn certificate_terms(&self, transaction: &SaleTransaction) -> Vec<LineItemDecision> {
        let pending = transaction.items.iter().filter_map(|item| {
            let serial = item.serial_number.as_deref()?;
            Some(async move {
                let decision = self
                    .inner
                    .resolver
                    .resolve(serial, &item.copy, item.product_type)
                    .await;
                LineItemDecision {
                    sale_line_item_id: item.id.clone(),
                    serial_number: serial.to_string(),
                    decision,
                }
            })
        });

        join_all(pending).await
    }

    /// Project warranty records for all sales matching `filter`.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidFilter`: Filter rejected before querying
    /// - Any error from the sales collaborator; no partial batch is returned
    pub async fn records(
        &self,
        filter: &SaleFilter,
        as_of: NaiveDate,
    ) -> Result<Vec<WarrantyRecord>> {
        filter.validate()?;
        let timer = Instant::now();

        let transactions = self.inner.sales.query(filter).await.map_err(|e| {
            self.inner.metrics.record_error("sales query", &e.to_string());
            e
        })?;

        let records = project(&transactions, filter, as_of);
        self.inner
            .metrics
            .record_projection(records.len(), timer.elapsed());
        info!(
            "✓ Projected {} warranty records from {} sales in {:?}",
            records.len(),
            transactions.len(),
            timer.elapsed()
        );

        Ok(records)
    }

    /// Summarize warranty status for all sales matching `filter`.
    ///
    /// Re-queries and re-projects on every call.
    ///
    /// # Errors
    ///
    /// Same as [`WarrantyService::records`].
    pub async fn summary(&self, filter: &SaleFilter, as_of: NaiveDate) -> Result<WarrantySummary> {
        let records = self.records(filter, as_of).await?;
        Ok(summarize(&records))
    }
}
