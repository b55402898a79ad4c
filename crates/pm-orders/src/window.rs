//! Cancellation window policy.
//!
//! A customer-initiated cancellation is honored only while the order is
//! younger than [`CANCEL_WINDOW`]. Everything here is a pure function of
//! `(now, created_at)` — no timers, no cached deadlines. The UI recomputes
//! [`remaining`] per poll for its countdown; the server-side check in
//! [`crate::service`] uses [`permits`] with the same constant and is
//! authoritative regardless of client display drift.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Fixed customer cancellation window, applied both for UI countdown display
/// and as the authoritative server-side check.
pub const CANCEL_WINDOW: Duration = Duration::from_secs(60);

/// Milliseconds elapsed since the order was created. Clamped to zero for
/// clocks that report `created_at` slightly in the future.
pub fn age_ms(now: DateTime<Utc>, created_at: DateTime<Utc>) -> i64 {
    now.signed_duration_since(created_at).num_milliseconds().max(0)
}

/// Whether a cancellation request at `now` is still inside the window.
pub fn permits(now: DateTime<Utc>, created_at: DateTime<Utc>) -> bool {
    age_ms(now, created_at) <= CANCEL_WINDOW.as_millis() as i64
}

/// Time left in the window, zero once expired. Countdown display only.
pub fn remaining(now: DateTime<Utc>, created_at: DateTime<Utc>) -> Duration {
    let left = CANCEL_WINDOW.as_millis() as i64 - age_ms(now, created_at);
    Duration::from_millis(left.max(0) as u64)
}
