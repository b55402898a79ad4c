//! Human-facing order numbers.
//!
//! Format: `PM-MMDD-XXX` — shop prefix, month+day of the UTC calendar day,
//! zero-padded per-day counter. The counter comes from the store's
//! transactional daily-counter bump, never from local arithmetic, so the
//! formatted number inherits the store's uniqueness guarantee.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const PREFIX: &str = "PM";

/// A formatted order number, distinct from the internal row id. Printed on
/// tickets and used in pickup links.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Build the number for `counter`-th order of `day`.
    pub fn format_daily(day: NaiveDate, counter: u32) -> Self {
        OrderNumber(format!(
            "{PREFIX}-{:02}{:02}-{:03}",
            day.month(),
            day.day(),
            counter
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<OrderNumber> for String {
    fn from(n: OrderNumber) -> String {
        n.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn pads_counter_to_three_digits() {
        let n = OrderNumber::format_daily(day(2025, 3, 7), 1);
        assert_eq!(n.as_str(), "PM-0307-001");
    }

    #[test]
    fn counter_beyond_padding_is_not_truncated() {
        let n = OrderNumber::format_daily(day(2025, 12, 31), 1042);
        assert_eq!(n.as_str(), "PM-1231-1042");
    }

    #[test]
    fn different_days_same_counter_differ() {
        let a = OrderNumber::format_daily(day(2025, 3, 7), 5);
        let b = OrderNumber::format_daily(day(2025, 3, 8), 5);
        assert_ne!(a, b);
    }
}
