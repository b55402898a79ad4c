//! Deterministic in-memory store for service-level scenario tests.
//!
//! No I/O, no randomness beyond the v4 ids the service itself generates.
//! The mutex makes every store operation linearizable, which is exactly the
//! contract `pm_db::PgStore` gets from Postgres — so concurrency scenarios
//! (duplicate counters, double-cancel races) exercise the same semantics the
//! production store provides.

pub mod memory_store;

pub use memory_store::MemoryStore;
