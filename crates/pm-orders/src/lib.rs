//! Order core for the Pastry Magics storefront.
//!
//! Two responsibilities live here, both stateless over a shared persistent
//! store:
//!
//! 1. **Order number allocation** — every new order gets a unique,
//!    human-readable number built from a per-day counter. Correctness under
//!    concurrent checkouts is delegated entirely to the store: the counter
//!    bump must be a single transactional operation (see [`OrderStore`]).
//! 2. **Cancellation window guard** — a customer may cancel an order only
//!    while it is still `placed` and younger than [`window::CANCEL_WINDOW`].
//!    The `placed → cancelled` flip is a conditional compare-and-set so two
//!    racing cancellations produce exactly one success.
//!
//! The HTTP surface lives in `pm-daemon`; the Postgres store in `pm-db`.

pub mod error;
pub mod number;
pub mod service;
pub mod status;
pub mod store;
pub mod types;
pub mod window;

pub use error::{OrderError, StoreError};
pub use number::OrderNumber;
pub use service::OrderService;
pub use status::OrderStatus;
pub use store::OrderStore;
pub use types::{
    CancellationOutcome, CustomerDetails, NewOrder, OrderItem, OrderReceipt, OrderRecord,
};
