//! Lookup must try both the internal id and the order number, and report
//! NotFound when neither matches.

use pm_orders::{OrderError, OrderService};
use pm_testkit::MemoryStore;

#[tokio::test]
async fn unknown_identifier_is_not_found() {
    let svc = OrderService::new(MemoryStore::new());

    let err = svc
        .request_cancellation("nonexistent-id")
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::NotFound));
}

#[tokio::test]
async fn well_formed_but_absent_uuid_is_not_found() {
    let svc = OrderService::new(MemoryStore::new());

    let err = svc
        .request_cancellation("00000000-0000-4000-8000-000000000000")
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::NotFound));
}

#[tokio::test]
async fn absent_order_number_is_not_found() {
    let svc = OrderService::new(MemoryStore::new());

    let err = svc.request_cancellation("PM-0101-999").await.unwrap_err();
    assert!(matches!(err, OrderError::NotFound));
}
