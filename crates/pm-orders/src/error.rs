//! Error taxonomy for the order core.
//!
//! Every operation returns a typed result; nothing is swallowed and nothing
//! is retried here. Of the variants, only `StoreUnavailable` is transient —
//! callers may retry it with backoff. The rest are terminal for the request
//! and the HTTP layer maps each to a distinct status and message.

use thiserror::Error;

/// Failure raised by an [`crate::store::OrderStore`] implementation.
///
/// Store backends collapse their driver errors (sqlx, poisoned state, …)
/// into this one transient kind; the service layer decides whether it
/// surfaces as [`OrderError::Allocation`] or [`OrderError::StoreUnavailable`]
/// depending on which operation was in flight.
#[derive(Debug, Error)]
#[error("store operation failed: {0}")]
pub struct StoreError(pub String);

#[derive(Debug, Error)]
pub enum OrderError {
    /// Order-number allocation failed; order creation aborted and no order
    /// row was persisted.
    #[error("order number allocation failed: {0}")]
    Allocation(String),

    /// No order matched the given id or order number.
    #[error("order not found")]
    NotFound,

    /// Cancellation requested after the fixed window elapsed. The order is
    /// unchanged.
    #[error("cancellation window expired")]
    WindowExpired,

    /// The order's status had already advanced past `placed` (including a
    /// prior cancellation), so the conditional flip matched zero rows.
    #[error("order already finalized")]
    AlreadyFinalized,

    /// Transient store failure. Safe for the caller to retry with backoff.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// Request-shape problem (empty cart, non-positive quantity, …).
    #[error("invalid order: {0}")]
    InvalidOrder(String),
}

impl OrderError {
    /// Stable machine-readable tag, used in HTTP error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            OrderError::Allocation(_) => "allocation_failed",
            OrderError::NotFound => "not_found",
            OrderError::WindowExpired => "window_expired",
            OrderError::AlreadyFinalized => "already_finalized",
            OrderError::StoreUnavailable(_) => "store_unavailable",
            OrderError::InvalidOrder(_) => "invalid_order",
        }
    }
}

impl From<StoreError> for OrderError {
    fn from(e: StoreError) -> Self {
        OrderError::StoreUnavailable(e.0)
    }
}
