//! Outline boundaries of interval markers.

use smallvec::SmallVec;

use crate::core::{AxisRange, DeviceRect, Line, PlotOrientation, clip};
use crate::render::DrawSurface;

/// One interval endpoint, in data space and mapped to device space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub value: f64,
    pub device: f64,
}

impl Boundary {
    #[must_use]
    pub const fn new(value: f64, device: f64) -> Self {
        Self { value, device }
    }
}

/// Device extent a boundary line spans, perpendicular to the value axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryExtent {
    pub axis_min: f64,
    pub axis_max: f64,
}

impl BoundaryExtent {
    #[must_use]
    pub fn across(area: DeviceRect, orientation: PlotOrientation) -> Self {
        match orientation {
            PlotOrientation::Vertical => Self {
                axis_min: area.min_x(),
                axis_max: area.max_x(),
            },
            PlotOrientation::Horizontal => Self {
                axis_min: area.min_y(),
                axis_max: area.max_y(),
            },
        }
    }
}

/// Line for one boundary, or `None` when its data value is outside `range`.
#[must_use]
pub fn boundary_line(
    boundary: Boundary,
    extent: BoundaryExtent,
    range: AxisRange,
    orientation: PlotOrientation,
) -> Option<Line> {
    if !clip::contains(boundary.value, range) {
        return None;
    }
    let p = boundary.device;
    Some(match orientation {
        PlotOrientation::Vertical => Line::new(extent.axis_min, p, extent.axis_max, p),
        PlotOrientation::Horizontal => Line::new(p, extent.axis_min, p, extent.axis_max),
    })
}

/// Start then end boundary lines; each is kept independently of the other.
#[must_use]
pub fn boundary_lines(
    start: Boundary,
    end: Boundary,
    extent: BoundaryExtent,
    range: AxisRange,
    orientation: PlotOrientation,
) -> SmallVec<[Line; 2]> {
    [start, end]
        .into_iter()
        .filter_map(|boundary| boundary_line(boundary, extent, range, orientation))
        .collect()
}

/// Strokes `lines` with whatever paint and stroke the surface currently has.
pub fn draw_boundary_lines<S: DrawSurface + ?Sized>(surface: &mut S, lines: &[Line]) {
    for line in lines {
        surface.stroke_line(*line);
    }
}
