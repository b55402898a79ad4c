//! Order lifecycle states.
//!
//! Fulfilment only moves forward: `placed → preparing → ready → completed`.
//! The single backward-looking exception is `placed → cancelled`, and the
//! cancellation windowguard in [`crate::service`] is the only caller allowed
//! to take that edge. `completed` and `cancelled` are terminal.

use crate::error::OrderError;
use serde::{Deserialize, Serialize};

/// All valid states an order can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order persisted, cancellation window open. Initial state.
    Placed,
    /// Kitchen has picked the order up.
    Preparing,
    /// Ready for pickup at the counter.
    Ready,
    /// Handed over. **Terminal.**
    Completed,
    /// Cancelled by the customer within the window. **Terminal.**
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Result<Self, OrderError> {
        match s {
            "placed" => Ok(OrderStatus::Placed),
            "preparing" => Ok(OrderStatus::Preparing),
            "ready" => Ok(OrderStatus::Ready),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(OrderError::InvalidOrder(format!(
                "invalid order status: {other}"
            ))),
        }
    }

    /// Returns `true` if no further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Fulfilment rank used for the forward-only rule. `Cancelled` has no
    /// rank; it is reachable only through the dedicated edge below.
    fn rank(&self) -> Option<u8> {
        match self {
            OrderStatus::Placed => Some(0),
            OrderStatus::Preparing => Some(1),
            OrderStatus::Ready => Some(2),
            OrderStatus::Completed => Some(3),
            OrderStatus::Cancelled => None,
        }
    }

    /// Whether `self → to` is a legal transition.
    ///
    /// Forward fulfilment moves are allowed (including skips, e.g. a small
    /// order going straight `placed → ready`); the only path into
    /// `Cancelled` is from `Placed`.
    pub fn can_transition(&self, to: OrderStatus) -> bool {
        if to == OrderStatus::Cancelled {
            return *self == OrderStatus::Placed;
        }
        match (self.rank(), to.rank()) {
            (Some(from), Some(to)) => to > from,
            _ => false,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_parse_round_trip() {
        for s in [
            OrderStatus::Placed,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(OrderStatus::parse(s.as_str()).unwrap(), s);
        }
    }

    #[test]
    fn parse_rejects_unknown_status() {
        assert!(OrderStatus::parse("refunded").is_err());
    }

    #[test]
    fn forward_moves_are_legal() {
        assert!(OrderStatus::Placed.can_transition(OrderStatus::Preparing));
        assert!(OrderStatus::Preparing.can_transition(OrderStatus::Ready));
        assert!(OrderStatus::Ready.can_transition(OrderStatus::Completed));
        // Skipping a stage forward is allowed.
        assert!(OrderStatus::Placed.can_transition(OrderStatus::Ready));
    }

    #[test]
    fn backward_moves_are_illegal() {
        assert!(!OrderStatus::Ready.can_transition(OrderStatus::Preparing));
        assert!(!OrderStatus::Completed.can_transition(OrderStatus::Placed));
    }

    #[test]
    fn only_placed_can_cancel() {
        assert!(OrderStatus::Placed.can_transition(OrderStatus::Cancelled));
        assert!(!OrderStatus::Preparing.can_transition(OrderStatus::Cancelled));
        assert!(!OrderStatus::Ready.can_transition(OrderStatus::Cancelled));
        assert!(!OrderStatus::Completed.can_transition(OrderStatus::Cancelled));
        assert!(!OrderStatus::Cancelled.can_transition(OrderStatus::Cancelled));
    }

    #[test]
    fn terminal_states() {
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Placed.is_terminal());
    }
}
