//! Row and DTO types shared between the service, the stores, and the daemon.
//! No business logic lives here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::number::OrderNumber;
use crate::status::OrderStatus;

/// Fixed payment marker: the shop only takes payment at the counter.
pub const PAYMENT_AT_COUNTER: &str = "pay-at-counter";

/// One line of the cart. Prices are integer cents; `price_cents` is the unit
/// price and the order total is derived as `Σ price_cents × qty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Menu item id (opaque to this core).
    pub id: String,
    pub name: String,
    pub price_cents: i64,
    pub qty: u32,
}

/// Who placed the order, as captured by the checkout form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    /// Dine-in table, absent for takeaway.
    pub table_number: Option<String>,
}

/// A fully validated order ready for insertion. The store assigns
/// `created_at`; the id is generated by the service so the receipt can be
/// returned without a read-back.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub id: Uuid,
    pub order_number: OrderNumber,
    pub customer: CustomerDetails,
    pub items: Vec<OrderItem>,
    pub total_cents: i64,
}

/// An order row as persisted. `created_at` is set once at insertion and
/// never changes; `items` and `total_cents` are read-only after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: Uuid,
    pub order_number: String,
    pub name: String,
    pub phone: String,
    pub table_number: Option<String>,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub total_cents: i64,
    pub payment: String,
    pub created_at: DateTime<Utc>,
}

/// Returned to the customer right after checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub id: Uuid,
    pub order_number: String,
}

/// Result of a successful cancellation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancellationOutcome {
    pub id: Uuid,
    pub status: OrderStatus,
}

impl OrderItem {
    /// `price × qty`, `None` on i64 overflow. Prices and quantities come
    /// straight from the client, so the arithmetic must not wrap.
    pub fn line_total_cents(&self) -> Option<i64> {
        self.price_cents.checked_mul(self.qty as i64)
    }
}

/// Sum of all line totals; `None` if any line or the sum overflows.
pub fn cart_total_cents(items: &[OrderItem]) -> Option<i64> {
    items
        .iter()
        .try_fold(0i64, |acc, item| acc.checked_add(item.line_total_cents()?))
}
