//! The two exposed operations: order creation and cancellation.
//!
//! `OrderService` holds nothing but the store handle — no caches, no locks,
//! no timers. Every invocation is independent; correctness under concurrent
//! requests is delegated to the store's transactional operations (see
//! [`crate::store`]).

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::error::OrderError;
use crate::number::OrderNumber;
use crate::status::OrderStatus;
use crate::store::OrderStore;
use crate::types::{
    cart_total_cents, CancellationOutcome, CustomerDetails, NewOrder, OrderItem, OrderReceipt,
};
use crate::window;

pub struct OrderService<S> {
    store: S,
}

impl<S: OrderStore> OrderService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create an order: allocate a number, then persist.
    ///
    /// The number is allocated before the order row is committed — there is
    /// no compensating transaction to fix up a duplicate or missing number
    /// after the fact, so any allocation failure aborts creation with
    /// [`OrderError::Allocation`] and nothing is persisted.
    pub async fn create_order(
        &self,
        customer: CustomerDetails,
        items: Vec<OrderItem>,
    ) -> Result<OrderReceipt, OrderError> {
        validate_cart(&customer, &items)?;
        let total_cents = cart_total_cents(&items)
            .ok_or_else(|| OrderError::InvalidOrder("cart total overflows".into()))?;

        let day = Utc::now().date_naive();
        let counter = self
            .store
            .next_daily_counter(day)
            .await
            .map_err(|e| OrderError::Allocation(e.0))?;
        let order_number = OrderNumber::format_daily(day, counter);

        let order = NewOrder {
            id: Uuid::new_v4(),
            order_number: order_number.clone(),
            total_cents,
            customer,
            items,
        };
        let record = self.store.insert_order(order).await?;

        info!(order_number = %order_number, id = %record.id, "order placed");
        Ok(OrderReceipt {
            id: record.id,
            order_number: record.order_number,
        })
    }

    /// Cancel an order if it is still `placed` and inside the window.
    ///
    /// The status flip is a conditional update (`placed → cancelled` only
    /// where the status is still `placed`), so a double-cancel race or a
    /// kitchen that already advanced the order yields
    /// [`OrderError::AlreadyFinalized`] rather than a second mutation.
    /// Retrying after success hits the same rejection.
    pub async fn request_cancellation(
        &self,
        id_or_number: &str,
    ) -> Result<CancellationOutcome, OrderError> {
        let record = self
            .store
            .find_order(id_or_number)
            .await?
            .ok_or(OrderError::NotFound)?;

        if !window::permits(Utc::now(), record.created_at) {
            return Err(OrderError::WindowExpired);
        }

        let updated = self
            .store
            .update_status_if(record.id, OrderStatus::Placed, OrderStatus::Cancelled)
            .await?;
        if !updated {
            return Err(OrderError::AlreadyFinalized);
        }

        info!(id = %record.id, "order cancelled");
        Ok(CancellationOutcome {
            id: record.id,
            status: OrderStatus::Cancelled,
        })
    }

    /// Ticket-page lookup by id or order number.
    pub async fn find_order(
        &self,
        id_or_number: &str,
    ) -> Result<crate::types::OrderRecord, OrderError> {
        self.store
            .find_order(id_or_number)
            .await?
            .ok_or(OrderError::NotFound)
    }
}

fn validate_cart(customer: &CustomerDetails, items: &[OrderItem]) -> Result<(), OrderError> {
    if customer.name.trim().is_empty() {
        return Err(OrderError::InvalidOrder("customer name is required".into()));
    }
    if customer.phone.trim().is_empty() {
        return Err(OrderError::InvalidOrder("phone number is required".into()));
    }
    if items.is_empty() {
        return Err(OrderError::InvalidOrder("cart is empty".into()));
    }
    for item in items {
        if item.qty == 0 {
            return Err(OrderError::InvalidOrder(format!(
                "item {} has zero quantity",
                item.id
            )));
        }
        if item.price_cents < 0 {
            return Err(OrderError::InvalidOrder(format!(
                "item {} has a negative price",
                item.id
            )));
        }
    }
    Ok(())
}
