//! N concurrent checkouts on the same day must receive pairwise distinct
//! order numbers. The allocator performs no local arithmetic; uniqueness
//! comes entirely from the store's linearized counter bump.

use std::collections::HashSet;
use std::sync::Arc;

use pm_orders::{CustomerDetails, OrderItem, OrderService};
use pm_testkit::MemoryStore;

fn customer(n: usize) -> CustomerDetails {
    CustomerDetails {
        name: format!("Customer {n}"),
        phone: "98765 43210".to_string(),
        table_number: None,
    }
}

fn cart() -> Vec<OrderItem> {
    vec![OrderItem {
        id: "cake-chocolate".to_string(),
        name: "Chocolate Truffle".to_string(),
        price_cents: 450,
        qty: 1,
    }]
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_checkouts_get_distinct_numbers() {
    const N: usize = 64;

    let svc = Arc::new(OrderService::new(MemoryStore::new()));

    let mut handles = Vec::with_capacity(N);
    for n in 0..N {
        let svc = Arc::clone(&svc);
        handles.push(tokio::spawn(async move {
            svc.create_order(customer(n), cart()).await
        }));
    }

    let mut numbers = HashSet::new();
    for h in handles {
        let receipt = h.await.expect("task panicked").expect("create_order failed");
        assert!(
            numbers.insert(receipt.order_number.clone()),
            "duplicate order number issued: {}",
            receipt.order_number
        );
    }

    assert_eq!(numbers.len(), N);
    assert_eq!(svc.store().order_count(), N);
}
