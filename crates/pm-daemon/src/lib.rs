//! HTTP surface for the order core.
//!
//! Thin by construction: handlers translate between JSON and
//! `pm_orders::OrderService` calls, and [`error::ApiError`] maps each
//! [`pm_orders::OrderError`] kind to a distinct status code and message.
//! All ordering/cancellation semantics live in `pm-orders`.

pub mod api_types;
pub mod error;
pub mod routes;
pub mod state;
