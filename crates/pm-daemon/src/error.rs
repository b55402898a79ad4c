//! OrderError → HTTP mapping.
//!
//! Each error kind gets a distinct status so the storefront can show a
//! distinct message; only `store_unavailable` (503) invites a retry.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pm_orders::OrderError;

use crate::api_types::ErrorResponse;

/// Wrapper so handlers can use `?` on service calls.
#[derive(Debug)]
pub struct ApiError(pub OrderError);

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            OrderError::InvalidOrder(_) => StatusCode::UNPROCESSABLE_ENTITY,
            OrderError::NotFound => StatusCode::NOT_FOUND,
            OrderError::WindowExpired | OrderError::AlreadyFinalized => StatusCode::CONFLICT,
            OrderError::Allocation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            OrderError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        let body = ErrorResponse {
            error: self.0.to_string(),
            kind: self.0.kind().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: OrderError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn each_kind_maps_to_its_status() {
        assert_eq!(
            status_of(OrderError::InvalidOrder("empty".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(status_of(OrderError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_of(OrderError::WindowExpired), StatusCode::CONFLICT);
        assert_eq!(
            status_of(OrderError::AlreadyFinalized),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(OrderError::Allocation("rpc".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(OrderError::StoreUnavailable("down".into())),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
