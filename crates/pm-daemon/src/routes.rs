//! Axum router and all HTTP handlers for pm-daemon.
//!
//! `build_router` is the single entry point; `main.rs` calls it and attaches
//! middleware layers. All handlers are `pub(crate)` so the scenario tests in
//! `tests/` can compose the router directly, backed by the testkit store.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use pm_orders::{window, CustomerDetails, OrderStore};

use crate::{
    api_types::{
        CancelParams, CancelResponse, CreateOrderRequest, CreateOrderResponse, ErrorResponse,
        HealthResponse, OrderResponse,
    },
    error::ApiError,
    state::AppState,
};

/// Build the complete application router wired to the given shared state.
///
/// Middleware layers (CORS, tracing) are **not** applied here; `main.rs`
/// attaches them after this call so tests can use the bare router.
pub fn build_router<S: OrderStore + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/v1/health", get(health))
        .route("/v1/orders", post(create_order))
        .route("/v1/orders/cancel", post(cancel_order))
        .route("/v1/orders/:id", get(get_order))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// GET /v1/health
// ---------------------------------------------------------------------------

pub(crate) async fn health<S: OrderStore>(State(st): State<Arc<AppState<S>>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            ok: true,
            service: st.build.service,
            version: st.build.version,
        }),
    )
}

// ---------------------------------------------------------------------------
// POST /v1/orders
// ---------------------------------------------------------------------------

/// Checkout. Allocates the order number and persists the order; any
/// allocation failure aborts with nothing persisted (mapped to 500).
pub(crate) async fn create_order<S: OrderStore>(
    State(st): State<Arc<AppState<S>>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let customer = CustomerDetails {
        name: req.name,
        phone: req.phone,
        table_number: req.table_number,
    };
    let receipt = st.service.create_order(customer, req.items).await?;

    Ok((
        StatusCode::OK,
        Json(CreateOrderResponse {
            id: receipt.id,
            order_number: receipt.order_number,
        }),
    ))
}

// ---------------------------------------------------------------------------
// POST /v1/orders/cancel?id=<id-or-number>
// ---------------------------------------------------------------------------

pub(crate) async fn cancel_order<S: OrderStore>(
    State(st): State<Arc<AppState<S>>>,
    Query(params): Query<CancelParams>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(id) = params.id.filter(|s| !s.is_empty()) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(serde_json::to_value(ErrorResponse {
                error: "missing id".to_string(),
                kind: "missing_id".to_string(),
            })
            .unwrap_or_default()),
        ));
    };

    let outcome = st.service.request_cancellation(&id).await?;
    Ok((
        StatusCode::OK,
        Json(
            serde_json::to_value(CancelResponse {
                id: outcome.id,
                status: outcome.status,
            })
            .unwrap_or_default(),
        ),
    ))
}

// ---------------------------------------------------------------------------
// GET /v1/orders/:id
// ---------------------------------------------------------------------------

/// Ticket page data. The countdown field is a pure function of the stored
/// `created_at` and the fixed window, recomputed per request.
pub(crate) async fn get_order<S: OrderStore>(
    State(st): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let order = st.service.find_order(&id).await?;

    let cancellable_for_secs = if order.status == pm_orders::OrderStatus::Placed {
        window::remaining(Utc::now(), order.created_at).as_secs()
    } else {
        0
    };

    Ok((
        StatusCode::OK,
        Json(OrderResponse {
            order,
            cancellable_for_secs,
        }),
    ))
}
