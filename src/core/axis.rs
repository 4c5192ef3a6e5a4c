use crate::core::{AxisRange, DeviceRect, RectangleEdge};
use crate::error::MarkerResult;

/// Axis-side collaborator consumed by marker painters.
///
/// `value_to_device` must be monotonic in `value` for a fixed rectangle and
/// edge. It may return coordinates outside `area` when `value` lies outside
/// the visible range; callers clip.
pub trait ValueAxis {
    fn range(&self) -> AxisRange;

    fn value_to_device(&self, value: f64, area: DeviceRect, edge: RectangleEdge) -> f64;
}

/// Linear axis over a closed value range.
///
/// Axes on the top/bottom edge map the range onto `[min_x, max_x]`; axes on
/// the left/right edge map it onto `[max_y, min_y]` so larger values sit
/// higher on screen. `inverted` flips both directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearAxis {
    range: AxisRange,
    inverted: bool,
}

impl LinearAxis {
    pub fn new(lower: f64, upper: f64) -> MarkerResult<Self> {
        Ok(Self::from_range(AxisRange::new(lower, upper)?))
    }

    #[must_use]
    pub fn from_range(range: AxisRange) -> Self {
        Self {
            range,
            inverted: false,
        }
    }

    #[must_use]
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    #[must_use]
    pub fn is_inverted(self) -> bool {
        self.inverted
    }

    /// Replaces the visible range, as a zoom or pan would.
    pub fn set_range(&mut self, lower: f64, upper: f64) -> MarkerResult<()> {
        self.range = AxisRange::new(lower, upper)?;
        Ok(())
    }

    /// Inverse of [`ValueAxis::value_to_device`].
    #[must_use]
    pub fn device_to_value(self, coordinate: f64, area: DeviceRect, edge: RectangleEdge) -> f64 {
        let (min, max) = self.device_span(area, edge);
        let span = self.range.length();
        if span == 0.0 || max == min {
            return self.range.lower();
        }
        self.range.lower() + (coordinate - min) / (max - min) * span
    }

    // Device coordinates for the range's lower and upper bound.
    fn device_span(self, area: DeviceRect, edge: RectangleEdge) -> (f64, f64) {
        let (low, high) = if edge.is_top_or_bottom() {
            (area.min_x(), area.max_x())
        } else {
            (area.max_y(), area.min_y())
        };
        if self.inverted {
            (high, low)
        } else {
            (low, high)
        }
    }
}

impl ValueAxis for LinearAxis {
    fn range(&self) -> AxisRange {
        self.range
    }

    fn value_to_device(&self, value: f64, area: DeviceRect, edge: RectangleEdge) -> f64 {
        let (min, max) = self.device_span(area, edge);
        let span = self.range.length();
        if span == 0.0 {
            return (min + max) * 0.5;
        }
        let normalized = (value - self.range.lower()) / span;
        min + normalized * (max - min)
    }
}
