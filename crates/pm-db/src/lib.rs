//! Postgres-backed [`OrderStore`].
//!
//! Both correctness-critical operations are single SQL statements, so the
//! database linearizes concurrent callers and the application layer never
//! does read-modify-write:
//!
//! - the daily counter bump is one `INSERT .. ON CONFLICT .. DO UPDATE ..
//!   RETURNING` — two simultaneous checkouts on the same day can never
//!   observe the same counter value;
//! - the cancellation flip is one `UPDATE .. WHERE id = $1 AND status =
//!   'placed'` — of two racing cancels exactly one affects a row.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use uuid::Uuid;

use pm_orders::{
    error::StoreError,
    status::OrderStatus,
    store::OrderStore,
    types::{NewOrder, OrderRecord},
};

pub const ENV_DB_URL: &str = "PM_DATABASE_URL";
pub const ENV_DB_TIMEOUT_SECS: &str = "PM_DB_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Connect to Postgres using PM_DATABASE_URL.
///
/// PM_DB_TIMEOUT_SECS bounds how long a request waits for a connection.
pub async fn connect_from_env() -> Result<PgPool> {
    let url =
        std::env::var(ENV_DB_URL).with_context(|| format!("missing env var {ENV_DB_URL}"))?;

    let timeout = std::env::var(ENV_DB_TIMEOUT_SECS)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(timeout))
        .connect(&url)
        .await
        .context("failed to connect to Postgres")?;

    Ok(pool)
}

/// Run embedded SQLx migrations.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("db migrate failed")?;
    Ok(())
}

/// Simple status query (connectivity + schema presence).
pub async fn status(pool: &PgPool) -> Result<DbStatus> {
    let (one,): (i32,) = sqlx::query_as::<_, (i32,)>("select 1")
        .fetch_one(pool)
        .await
        .context("status connectivity query failed")?;
    let ok = one == 1;

    let (exists,): (bool,) = sqlx::query_as::<_, (bool,)>(
        r#"
        select exists (
            select 1
            from information_schema.tables
            where table_schema='public' and table_name='orders'
        )
        "#,
    )
    .fetch_one(pool)
    .await
    .context("status table-exists query failed")?;

    Ok(DbStatus {
        ok,
        has_orders_table: exists,
    })
}

#[derive(Debug, Clone)]
pub struct DbStatus {
    pub ok: bool,
    pub has_orders_table: bool,
}

/// The production [`OrderStore`].
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl OrderStore for PgStore {
    async fn next_daily_counter(&self, day: NaiveDate) -> Result<u32, StoreError> {
        // Single statement: the RETURNING value is the post-increment
        // counter as this transaction committed it. No select-then-update.
        let (counter,): (i32,) = sqlx::query_as(
            r#"
            insert into daily_counters (day, counter)
            values ($1, 1)
            on conflict (day)
            do update set counter = daily_counters.counter + 1
            returning counter
            "#,
        )
        .bind(day)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(counter as u32)
    }

    async fn insert_order(&self, order: NewOrder) -> Result<OrderRecord, StoreError> {
        let number: String = order.order_number.into();
        let items = serde_json::to_value(&order.items)
            .map_err(|e| StoreError(format!("items not serializable: {e}")))?;

        let row = sqlx::query(
            r#"
            insert into orders (
              id, order_number, name, phone, table_number, items, total_cents
            ) values (
              $1, $2, $3, $4, $5, $6, $7
            )
            returning status, payment, created_at
            "#,
        )
        .bind(order.id)
        .bind(&number)
        .bind(&order.customer.name)
        .bind(&order.customer.phone)
        .bind(&order.customer.table_number)
        .bind(&items)
        .bind(order.total_cents)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(OrderRecord {
            id: order.id,
            order_number: number,
            name: order.customer.name,
            phone: order.customer.phone,
            table_number: order.customer.table_number,
            items: order.items,
            status: parse_status(row.try_get("status").map_err(db_err)?)?,
            total_cents: order.total_cents,
            payment: row.try_get("payment").map_err(db_err)?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at").map_err(db_err)?,
        })
    }

    async fn find_order(&self, id_or_number: &str) -> Result<Option<OrderRecord>, StoreError> {
        // The identifier may be either the internal uuid or the human order
        // number; a non-uuid identifier binds NULL and matches numbers only.
        let as_id = Uuid::parse_str(id_or_number).ok();

        let row = sqlx::query(
            r#"
            select
              id, order_number, name, phone, table_number, items,
              status, total_cents, payment, created_at
            from orders
            where order_number = $1 or id = $2
            limit 1
            "#,
        )
        .bind(id_or_number)
        .bind(as_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.map(row_to_record).transpose()
    }

    async fn update_status_if(
        &self,
        id: Uuid,
        expected: OrderStatus,
        new: OrderStatus,
    ) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            update orders
            set status = $3
            where id = $1 and status = $2
            "#,
        )
        .bind(id)
        .bind(expected.as_str())
        .bind(new.as_str())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(result.rows_affected() == 1)
    }
}

fn row_to_record(row: sqlx::postgres::PgRow) -> Result<OrderRecord, StoreError> {
    let items: serde_json::Value = row.try_get("items").map_err(db_err)?;
    let items = serde_json::from_value(items)
        .map_err(|e| StoreError(format!("stored items not decodable: {e}")))?;

    Ok(OrderRecord {
        id: row.try_get("id").map_err(db_err)?,
        order_number: row.try_get("order_number").map_err(db_err)?,
        name: row.try_get("name").map_err(db_err)?,
        phone: row.try_get("phone").map_err(db_err)?,
        table_number: row.try_get("table_number").map_err(db_err)?,
        items,
        status: parse_status(row.try_get("status").map_err(db_err)?)?,
        total_cents: row.try_get("total_cents").map_err(db_err)?,
        payment: row.try_get("payment").map_err(db_err)?,
        created_at: row.try_get("created_at").map_err(db_err)?,
    })
}

fn parse_status(s: String) -> Result<OrderStatus, StoreError> {
    OrderStatus::parse(&s).map_err(|e| StoreError(format!("corrupt status column: {e}")))
}

fn db_err(e: sqlx::Error) -> StoreError {
    StoreError(e.to_string())
}
