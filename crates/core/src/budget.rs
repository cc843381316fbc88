// Budget derivation
//
// `budget.spent` is always the sum of the event's cost amounts. It is
// recomputed on create and whenever an update replaces `costs`.

use crate::error::{EventDeckError, Result};
use crate::event::CostEntry;

/// Sum of `amount` over all cost entries.
///
/// Each amount is finite, but the sum can still overflow; that is reported
/// against `costs` so nothing unrepresentable reaches the store.
pub fn spent(costs: &[CostEntry]) -> Result<f64> {
    let total: f64 = costs.iter().map(|c| c.amount).sum();
    if !total.is_finite() {
        return Err(EventDeckError::validation(
            "costs",
            "total amount is too large",
        ));
    }
    Ok(total)
}
