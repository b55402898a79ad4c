//! The persistence seam.
//!
//! Implementations: `pm_db::PgStore` (production) and
//! `pm_testkit::MemoryStore` (deterministic in-memory fake).
//!
//! # Concurrency contract
//!
//! The service layer is stateless and shared-nothing; all serialization
//! happens inside the store. Two operations carry the whole burden:
//!
//! - [`next_daily_counter`](OrderStore::next_daily_counter) must be a single
//!   get-or-create-then-increment as seen by concurrent callers. Two
//!   simultaneous calls for the same day must never observe the same value.
//!   A select followed by an update is NOT an acceptable implementation.
//! - [`update_status_if`](OrderStore::update_status_if) must be a single
//!   compare-and-set: of two racing cancellations exactly one sees
//!   `true`, the other `false`.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::StoreError;
use crate::status::OrderStatus;
use crate::types::{NewOrder, OrderRecord};

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Transactionally bump and return the counter for `day`, creating the
    /// row with value 1 on the first order of the day. Values returned for a
    /// given day are strictly increasing and never reused.
    async fn next_daily_counter(&self, day: NaiveDate) -> Result<u32, StoreError>;

    /// Persist a new order with status `placed` and a store-assigned
    /// `created_at`. Returns the stored row.
    async fn insert_order(&self, order: NewOrder) -> Result<OrderRecord, StoreError>;

    /// Look an order up by internal id or by human order number.
    /// `Ok(None)` means neither matched.
    async fn find_order(&self, id_or_number: &str) -> Result<Option<OrderRecord>, StoreError>;

    /// Set `status = new` only where the current status is still `expected`.
    /// Returns whether a row was updated. This is the single serialized
    /// point that makes double-cancellation race-free.
    async fn update_status_if(
        &self,
        id: Uuid,
        expected: OrderStatus,
        new: OrderStatus,
    ) -> Result<bool, StoreError>;
}
