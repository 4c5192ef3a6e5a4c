//! Device-space shapes of markers.
//!
//! Interval markers resolve to a band spanning the full drawing area across
//! the value direction; value markers resolve to a line doing the same.

use crate::core::{DeviceRect, Line, Plot, PlotOrientation, ValueAxis};
use crate::markers::{IntervalMarker, ValueMarker};

/// Maps both interval endpoints to device space, in `(start, end)` order.
#[must_use]
pub fn map_interval<A, P>(
    marker: &IntervalMarker,
    axis: &A,
    plot: &P,
    area: DeviceRect,
) -> (f64, f64)
where
    A: ValueAxis + ?Sized,
    P: Plot + ?Sized,
{
    let edge = plot.marker_edge();
    (
        axis.value_to_device(marker.start_value(), area, edge),
        axis.value_to_device(marker.end_value(), area, edge),
    )
}

/// Band between two mapped coordinates, clamped to `area`.
///
/// The coordinates may come in either order. A band lying wholly outside
/// `area` collapses to zero thickness on the nearer edge.
#[must_use]
pub fn interval_rect(
    mapped_start: f64,
    mapped_end: f64,
    area: DeviceRect,
    orientation: PlotOrientation,
) -> DeviceRect {
    let low = mapped_start.min(mapped_end);
    let high = mapped_start.max(mapped_end);
    match orientation {
        PlotOrientation::Vertical => {
            let (low, high) = clamp_span(low, high, area.min_y(), area.max_y());
            DeviceRect::new(area.min_x(), low, area.width, high - low)
        }
        PlotOrientation::Horizontal => {
            let (low, high) = clamp_span(low, high, area.min_x(), area.max_x());
            DeviceRect::new(low, area.min_y(), high - low, area.height)
        }
    }
}

/// Resolves the filled band of an interval marker.
#[must_use]
pub fn resolve_interval_rect<A, P>(
    marker: &IntervalMarker,
    axis: &A,
    plot: &P,
    area: DeviceRect,
) -> DeviceRect
where
    A: ValueAxis + ?Sized,
    P: Plot + ?Sized,
{
    let (start, end) = map_interval(marker, axis, plot, area);
    interval_rect(start, end, area, plot.orientation())
}

/// Line across the whole of `area` at device offset `coordinate`.
#[must_use]
pub fn value_line(coordinate: f64, area: DeviceRect, orientation: PlotOrientation) -> Line {
    match orientation {
        PlotOrientation::Vertical => Line::new(area.min_x(), coordinate, area.max_x(), coordinate),
        PlotOrientation::Horizontal => {
            Line::new(coordinate, area.min_y(), coordinate, area.max_y())
        }
    }
}

/// Resolves the line of a value marker. Visibility is not checked here.
#[must_use]
pub fn resolve_value_line<A, P>(marker: &ValueMarker, axis: &A, plot: &P, area: DeviceRect) -> Line
where
    A: ValueAxis + ?Sized,
    P: Plot + ?Sized,
{
    let coordinate = axis.value_to_device(marker.value(), area, plot.marker_edge());
    value_line(coordinate, area, plot.orientation())
}

// Both ends are pulled into [min, max]; order is preserved.
fn clamp_span(low: f64, high: f64, min: f64, max: f64) -> (f64, f64) {
    (low.max(min).min(max), high.min(max).max(min))
}
