//! Request and response types for all pm-daemon HTTP endpoints.
//!
//! These types are `Serialize + Deserialize` so they can be JSON-encoded
//! by Axum and decoded by tests. No business logic lives here.

use pm_orders::{OrderItem, OrderRecord, OrderStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// /v1/health
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: &'static str,
    pub version: &'static str,
}

// ---------------------------------------------------------------------------
// POST /v1/orders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub name: String,
    pub phone: String,
    pub table_number: Option<String>,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub id: Uuid,
    pub order_number: String,
}

// ---------------------------------------------------------------------------
// POST /v1/orders/cancel
// ---------------------------------------------------------------------------

/// `?id=` takes either the internal id or the human order number.
#[derive(Debug, Clone, Deserialize)]
pub struct CancelParams {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelResponse {
    pub id: Uuid,
    pub status: OrderStatus,
}

// ---------------------------------------------------------------------------
// GET /v1/orders/:id
// ---------------------------------------------------------------------------

/// Ticket-page payload: the stored order plus the countdown the UI shows.
/// `cancellable_for_secs` is recomputed per request from the fixed window —
/// the server-side check on the cancel route stays authoritative regardless
/// of what any client displays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    #[serde(flatten)]
    pub order: OrderRecord,
    pub cancellable_for_secs: u64,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Uniform error body; `kind` is the stable machine-readable tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}
