//! Simulated latency tests
//!
//! Time is paused, so the configured delays are observed on the tokio clock
//! without slowing the suite down.
//!
//! Run with: cargo test --test latency_test -- --nocapture

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use clientlink_core::adapters::memory::{InMemoryDirectory, InMemoryFileStore, InMemoryLedger};
use clientlink_core::config::Config;
use clientlink_core::services::Operation;
use clientlink_core::{ClientLinkContext, FileUpload, Latency};

fn simulated_context() -> ClientLinkContext {
    ClientLinkContext::with_backends(
        Config::default(),
        Latency::simulated(),
        Arc::new(InMemoryDirectory::demo()),
        Arc::new(InMemoryFileStore::demo()),
        Arc::new(InMemoryLedger::demo()),
    )
}

#[tokio::test(start_paused = true)]
async fn test_search_waits_its_delay() {
    let ctx = simulated_context();

    let start = Instant::now();
    let results = ctx.search_service.search("acme").await.unwrap();
    assert!(!results.is_empty());
    assert!(start.elapsed() >= Operation::Search.simulated_delay());
}

#[tokio::test(start_paused = true)]
async fn test_short_query_still_waits() {
    let ctx = simulated_context();

    let start = Instant::now();
    assert!(ctx.search_service.search("a").await.unwrap().is_empty());
    assert!(start.elapsed() >= Duration::from_millis(300));
}

#[tokio::test(start_paused = true)]
async fn test_each_operation_uses_its_own_delay() {
    let ctx = simulated_context();

    let start = Instant::now();
    ctx.file_service.list_files("1").await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(1200));

    let start = Instant::now();
    ctx.billing_service.customer_summary("1").await.unwrap();
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(600));
    assert!(elapsed < Duration::from_millis(1200));

    let start = Instant::now();
    let upload = FileUpload::new("spec.pdf", 100, "application/pdf");
    ctx.file_service.upload(&upload, "9", "Docs", None).await.unwrap();
    assert!(start.elapsed() >= Duration::from_secs(2));
}

#[tokio::test(start_paused = true)]
async fn test_no_latency_returns_immediately() {
    let ctx = ClientLinkContext::in_memory();

    let start = Instant::now();
    ctx.search_service.search("acme").await.unwrap();
    ctx.billing_service.payments_for_customer("1").await.unwrap();
    assert_eq!(start.elapsed(), Duration::ZERO);
}
