use chrono::{Duration, NaiveDateTime};

use crate::errors::ServiceError;

/// Refund tiers, ordered from the earliest cancellation to the latest.
/// Each entry is the minimal number of hours before the start and the refunded percentage.
const REFUND_TIERS: [(i64, i64); 3] = [(24, 100), (12, 75), (2, 50)];

/// refunded percentage when cancelling less than two hours before the start
const LATE_CANCELLATION_PERCENTAGE: i64 = 25;

/// The part of `value` that is refunded when a reservation for a schedule
/// starting at `start` is cancelled at `now`.
///
/// Cancelling once the schedule started is refused.
pub fn refund_value(
    value: i64,
    start: NaiveDateTime,
    now: NaiveDateTime,
) -> Result<i64, ServiceError> {
    let remaining = start.signed_duration_since(now);
    if remaining <= Duration::zero() {
        bad_request!("Can cancel/reschedule only future dates.");
    }

    let percentage = REFUND_TIERS
        .iter()
        .find(|(hours, _)| remaining >= Duration::hours(*hours))
        .map(|(_, percentage)| *percentage)
        .unwrap_or(LATE_CANCELLATION_PERCENTAGE);

    Ok(value * percentage / 100)
}
