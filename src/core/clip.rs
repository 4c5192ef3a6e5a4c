//! Data-space visibility checks against an axis range.
//!
//! Both bounds are inclusive. Non-finite inputs fall through to plain
//! IEEE-754 comparisons, so a NaN value is never visible.

use crate::core::AxisRange;

/// Returns `true` when `value` lies inside the closed range.
#[must_use]
pub fn contains(value: f64, range: AxisRange) -> bool {
    value >= range.lower() && value <= range.upper()
}

/// Returns `true` when the closed interval spanned by `start` and `end`
/// overlaps the closed range. `start` and `end` may come in either order.
#[must_use]
pub fn intersects(start: f64, end: f64, range: AxisRange) -> bool {
    let (low, high) = if start <= end {
        (start, end)
    } else {
        (end, start)
    };
    low <= range.upper() && high >= range.lower()
}
