//! A cart whose total overflows i64 is rejected as invalid before any
//! counter is consumed or row persisted — client-supplied prices and
//! quantities must never wrap the total.

use pm_orders::{CustomerDetails, OrderError, OrderItem, OrderService};
use pm_testkit::MemoryStore;

fn customer() -> CustomerDetails {
    CustomerDetails {
        name: "Ravi".to_string(),
        phone: "90000 00004".to_string(),
        table_number: None,
    }
}

#[tokio::test]
async fn overflowing_cart_is_invalid_and_nothing_persisted() {
    let svc = OrderService::new(MemoryStore::new());

    let cart = vec![OrderItem {
        id: "cake-absurd".to_string(),
        name: "Absurdly Priced Cake".to_string(),
        price_cents: i64::MAX,
        qty: 2,
    }];

    let err = svc.create_order(customer(), cart).await.unwrap_err();
    assert!(matches!(err, OrderError::InvalidOrder(_)));
    assert_eq!(svc.store().order_count(), 0, "no partial order row");
}
