//! Performance benchmarks for warranty-kit
//!
//! This benchmark suite measures:
//! - Phrase parsing across rule hits, generic matches and defaults
//! - Projection and summary over growing sales histories
//! - The service report path against the in-memory stores
//!
//! Run with: cargo bench
//! View results: open target/criterion/report/index.html

use chrono::{Days, NaiveDate};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;
use std::hint::black_box;
use warranty_kit::copy::model_name;
use warranty_kit::repository::{InMemoryInventory, InMemorySales};
use warranty_kit::{
    parse_term, project, summarize, Condition, ProductType, SaleFilter, SaleLineItem,
    SaleTransaction, WarrantyService,
};

// ============================================================================
// Benchmark Fixtures
// ============================================================================

const GARANTIAS: [&str; 6] = ["3 meses", "1 año", "año y medio", "10 meses", "", "sin garantía"];

fn sales_history(count: usize) -> Vec<SaleTransaction> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date");

    (0..count)
        .map(|i| {
            let id = format!("tx-{}", i);
            let items = (0..3)
                .map(|j| SaleLineItem {
                    id: format!("{}-{}", id, j),
                    transaction_id: id.clone(),
                    product_type: match j {
                        0 => ProductType::Computer,
                        1 => ProductType::Phone,
                        _ => ProductType::Other,
                    },
                    serial_number: (j < 2).then(|| format!("SN{:06}{}", i, j)),
                    copy: "MacBook Pro 14-inch 16GB 512GB SSD - usado".to_string(),
                    quantity: 1,
                    unit_price: Decimal::new(129900, 2),
                    total_price: Decimal::new(129900, 2),
                    garantia: Some(GARANTIAS[(i + j) % GARANTIAS.len()].to_string()),
                })
                .collect();

            SaleTransaction {
                id,
                transaction_number: format!("V-{:05}", i),
                sale_date: start
                    .checked_add_days(Days::new((i % 700) as u64))
                    .expect("valid date"),
                customer_name: format!("Cliente {}", i % 50),
                customer_email: Some(format!("cliente{}@example.com", i % 50)),
                customer_phone: None,
                payment_method: "card".to_string(),
                seller: "luis".to_string(),
                items,
            }
        })
        .collect()
}

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
}

// ============================================================================
// Phrase Parsing
// ============================================================================

fn parsing_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for text in ["6 meses", "año y medio", "24 meses", "garantía de fábrica"] {
        group.bench_with_input(BenchmarkId::new("parse_term", text), text, |b, text| {
            b.iter(|| parse_term(black_box(text), Condition::New));
        });
    }

    group.bench_function("model_name", |b| {
        b.iter(|| model_name(black_box("MacBook Air 13-inch 2020 8GB SSD - usado")));
    });

    group.finish();
}

// ============================================================================
// Projection and Summary
// ============================================================================

fn projection_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");

    for count in [100, 1_000, 10_000].iter() {
        let sales = sales_history(*count);
        let filter = SaleFilter::default();

        group
            .throughput(Throughput::Elements(*count as u64))
            .bench_with_input(BenchmarkId::new("project", count), &sales, |b, sales| {
                b.iter(|| project(black_box(sales), &filter, as_of()));
            });

        let records = project(&sales, &filter, as_of());
        group
            .throughput(Throughput::Elements(records.len() as u64))
            .bench_with_input(BenchmarkId::new("summarize", count), &records, |b, records| {
                b.iter(|| summarize(black_box(records)));
            });

        let by_customer = SaleFilter::default().with_customer("cliente 7");
        group
            .throughput(Throughput::Elements(*count as u64))
            .bench_with_input(
                BenchmarkId::new("project_filtered", count),
                &sales,
                |b, sales| {
                    b.iter(|| project(black_box(sales), &by_customer, as_of()));
                },
            );
    }

    group.finish();
}

// ============================================================================
// Service
// ============================================================================

fn service_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("service");

    // Create tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");

    let mut sales = InMemorySales::new();
    for tx in sales_history(1_000) {
        sales.insert(tx);
    }
    let service = WarrantyService::new(InMemoryInventory::new(), sales);
    let transaction = sales_history(1).remove(0);

    group.bench_function("summary", |b| {
        b.to_async(&rt).iter(|| async {
            service
                .summary(black_box(&SaleFilter::default()), as_of())
                .await
                .expect("Failed to summarize")
        });
    });

    group.bench_function("certificate_terms", |b| {
        b.to_async(&rt)
            .iter(|| async { service.certificate_terms(black_box(&transaction)).await });
    });

    group.finish();
}

criterion_group!(
    benches,
    parsing_benchmarks,
    projection_benchmarks,
    service_benchmarks
);
criterion_main!(benches);
