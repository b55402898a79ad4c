use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

use pm_orders::{
    error::StoreError,
    status::OrderStatus,
    store::OrderStore,
    types::{NewOrder, OrderRecord, PAYMENT_AT_COUNTER},
};

#[derive(Default)]
struct Tables {
    orders: HashMap<Uuid, OrderRecord>,
    counters: HashMap<NaiveDate, u32>,
}

/// In-memory [`OrderStore`] with the same linearized counter and
/// compare-and-set semantics as the Postgres store.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    /// When set, every operation fails — simulates store downtime.
    unavailable: Mutex<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with [`StoreError`], or restore
    /// normal service.
    pub fn set_unavailable(&self, down: bool) {
        *self.unavailable.lock().unwrap() = down;
    }

    /// Shift an order's `created_at` into the past, for driving the
    /// cancellation window across its boundary without sleeping.
    pub fn backdate_order(&self, id: Uuid, by: Duration) {
        let mut t = self.tables.lock().unwrap();
        if let Some(rec) = t.orders.get_mut(&id) {
            rec.created_at = rec.created_at - by;
        }
    }

    /// Directly advance an order's status, standing in for kitchen staff.
    pub fn force_status(&self, id: Uuid, status: OrderStatus) {
        let mut t = self.tables.lock().unwrap();
        if let Some(rec) = t.orders.get_mut(&id) {
            rec.status = status;
        }
    }

    pub fn order_count(&self) -> usize {
        self.tables.lock().unwrap().orders.len()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if *self.unavailable.lock().unwrap() {
            Err(StoreError("simulated outage".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn next_daily_counter(&self, day: NaiveDate) -> Result<u32, StoreError> {
        self.check_available()?;
        let mut t = self.tables.lock().map_err(lock_err)?;
        let counter = t.counters.entry(day).and_modify(|c| *c += 1).or_insert(1);
        Ok(*counter)
    }

    async fn insert_order(&self, order: NewOrder) -> Result<OrderRecord, StoreError> {
        self.check_available()?;
        let mut t = self.tables.lock().map_err(lock_err)?;

        let number: String = order.order_number.into();
        if t.orders.values().any(|r| r.order_number == number) {
            return Err(StoreError(format!("duplicate order number {number}")));
        }

        let record = OrderRecord {
            id: order.id,
            order_number: number,
            name: order.customer.name,
            phone: order.customer.phone,
            table_number: order.customer.table_number,
            items: order.items,
            status: OrderStatus::Placed,
            total_cents: order.total_cents,
            payment: PAYMENT_AT_COUNTER.to_string(),
            created_at: Utc::now(),
        };
        t.orders.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_order(&self, id_or_number: &str) -> Result<Option<OrderRecord>, StoreError> {
        self.check_available()?;
        let t = self.tables.lock().map_err(lock_err)?;

        if let Ok(id) = Uuid::parse_str(id_or_number) {
            if let Some(rec) = t.orders.get(&id) {
                return Ok(Some(rec.clone()));
            }
        }
        Ok(t.orders
            .values()
            .find(|r| r.order_number == id_or_number)
            .cloned())
    }

    async fn update_status_if(
        &self,
        id: Uuid,
        expected: OrderStatus,
        new: OrderStatus,
    ) -> Result<bool, StoreError> {
        self.check_available()?;
        let mut t = self.tables.lock().map_err(lock_err)?;

        match t.orders.get_mut(&id) {
            Some(rec) if rec.status == expected => {
                rec.status = new;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

fn lock_err<T>(_: std::sync::PoisonError<T>) -> StoreError {
    StoreError("store lock poisoned".to_string())
}
