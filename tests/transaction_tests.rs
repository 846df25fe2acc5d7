//! Transaction identity resolution: caching, fallback and independence

use std::sync::Arc;
use std::time::Duration;

use chrono::DateTime;
use futures::future::join_all;
use lightning_logger::internal::backend::mock::MockBackend;
use lightning_logger::internal::facade::{IdSource, FALLBACK_PREFIX};

mod fixtures;

#[tokio::test]
async fn test_identifier_is_issued_once_and_cached() {
    let h = fixtures::harness(MockBackend::new().with_issued_id("tx-remote-42"));
    let transaction = h.registry.current_transaction();

    assert!(transaction.cached().is_none());

    let first = transaction.resolve_identifier().await;
    let second = transaction.resolve_identifier().await;
    let third = transaction.resolve_identifier().await;

    assert_eq!(first, "tx-remote-42");
    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(h.backend.issuance_count(), 1);
    assert_eq!(transaction.cached().map(|id| id.source), Some(IdSource::Remote));
}

#[tokio::test]
async fn test_concurrent_first_resolution_issues_one_call() {
    let backend = MockBackend::new().with_issuance_delay(Duration::from_millis(20));
    let h = fixtures::harness(backend);
    let transaction = h.registry.current_transaction();

    let ids = join_all((0..8).map(|_| {
        let transaction = Arc::clone(&transaction);
        async move { transaction.resolve_identifier().await }
    }))
    .await;

    assert_eq!(h.backend.issuance_count(), 1);
    assert!(ids.iter().all(|id| id == &ids[0]));
}

#[tokio::test]
async fn test_issuance_failure_falls_back_to_timestamped_id() {
    let h = fixtures::harness(MockBackend::new().failing_issuance());
    let transaction = h.registry.current_transaction();

    let id = transaction.resolve_identifier().await;

    assert!(id.starts_with(FALLBACK_PREFIX), "unexpected id: {}", id);
    let timestamp = &id[FALLBACK_PREFIX.len()..];
    assert!(DateTime::parse_from_rfc3339(timestamp).is_ok(), "bad timestamp: {}", timestamp);
    assert!(timestamp.ends_with('Z'));

    // Failure is reported once on the console and never retried
    assert_eq!(h.console.get_errors().len(), 1);
    assert_eq!(transaction.resolve_identifier().await, id);
    assert_eq!(transaction.resolve_identifier().await, id);
    assert_eq!(h.backend.issuance_count(), 1);
    assert_eq!(transaction.cached().map(|id| id.source), Some(IdSource::Fallback));
}

#[tokio::test]
async fn test_created_transactions_are_independent() {
    let h = fixtures::harness(MockBackend::new());

    let shared = h.registry.current_transaction();
    let first = h.registry.create_transaction();
    let second = h.registry.create_transaction();

    assert!(!Arc::ptr_eq(&first, &second));
    assert!(!Arc::ptr_eq(&first, &shared));

    let shared_id = shared.resolve_identifier().await;
    let first_id = first.resolve_identifier().await;
    let second_id = second.resolve_identifier().await;

    assert_ne!(first_id, second_id);
    assert_ne!(first_id, shared_id);
    assert_eq!(h.backend.issuance_count(), 3);

    // Creating transactions leaves the shared one in place
    assert!(Arc::ptr_eq(&shared, &h.registry.current_transaction()));
    assert_eq!(h.registry.current_transaction().resolve_identifier().await, shared_id);
}
