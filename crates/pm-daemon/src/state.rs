//! Shared runtime state for pm-daemon.
//!
//! Handlers receive `State<Arc<AppState<S>>>` from Axum. The state is
//! generic over the store so scenario tests can run the same router against
//! the in-memory testkit store.

use pm_orders::{OrderService, OrderStore};
use serde::{Deserialize, Serialize};

/// Static build metadata included in the health response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BuildInfo {
    pub service: &'static str,
    pub version: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            service: "pm-daemon",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Cloneable (Arc) handle shared across all Axum handlers.
pub struct AppState<S> {
    pub service: OrderService<S>,
    pub build: BuildInfo,
}

impl<S: OrderStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self {
            service: OrderService::new(store),
            build: BuildInfo::current(),
        }
    }
}
