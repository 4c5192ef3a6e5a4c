//! Side-effecting marker drawing.
//!
//! Every draw that gets past the visibility check runs inside a
//! [`CompositeGuard`], so the surface composite is restored exactly once
//! whichever optional steps (outline, label) ran.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{DeviceRect, Line, Plot, Point, ValueAxis, clip};
use crate::markers::line_geometry::{self, Boundary, BoundaryExtent};
use crate::markers::shape;
use crate::markers::{
    IntervalMarker, LineLabelAnchor, Marker, MarkerStyle, RectLabelAnchor, ValueMarker,
};
use crate::render::{AlphaComposite, CompositeGuard, DrawSurface, Paint};

/// Why a marker produced no draw calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The value, or the whole interval, lies outside the axis range.
    OutsideRange,
}

/// Device-space shape a marker was drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkerShape {
    Band(DeviceRect),
    Line(Line),
}

/// Geometry emitted by a marker draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnMarker {
    pub shape: MarkerShape,
    /// Outline boundaries; always empty for value markers.
    pub boundary_lines: SmallVec<[Line; 2]>,
    pub label_anchor: Option<Point>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MarkerDrawOutcome {
    Skipped(SkipReason),
    Drawn(DrawnMarker),
}

impl MarkerDrawOutcome {
    #[must_use]
    pub fn is_drawn(&self) -> bool {
        matches!(self, Self::Drawn(_))
    }

    #[must_use]
    pub fn drawn(&self) -> Option<&DrawnMarker> {
        match self {
            Self::Drawn(drawn) => Some(drawn),
            Self::Skipped(_) => None,
        }
    }
}

/// Draws an interval marker as a filled band with optional outline and label.
pub fn draw_interval_marker<S, A, P, R>(
    surface: &mut S,
    marker: &IntervalMarker,
    axis: &A,
    plot: &P,
    area: DeviceRect,
    label_anchor: &R,
) -> MarkerDrawOutcome
where
    S: DrawSurface + ?Sized,
    A: ValueAxis + ?Sized,
    P: Plot + ?Sized,
    R: RectLabelAnchor + ?Sized,
{
    let orientation = plot.orientation();
    let range = axis.range();
    let start = marker.start_value();
    let end = marker.end_value();
    let (mapped_start, mapped_end) = shape::map_interval(marker, axis, plot, area);
    let band = shape::interval_rect(mapped_start, mapped_end, area, orientation);

    if !clip::intersects(start, end, range) {
        debug!(
            start,
            end,
            lower = range.lower(),
            upper = range.upper(),
            reason = "outside_range",
            "skip interval marker"
        );
        return MarkerDrawOutcome::Skipped(SkipReason::OutsideRange);
    }

    let style = marker.style();
    let mut surface = CompositeGuard::new(surface, AlphaComposite::source_over(style.alpha()));

    surface.set_paint(fill_paint(marker, band));
    surface.fill_rect(band);

    let mut boundary_lines = SmallVec::new();
    if let Some((outline_paint, outline_stroke)) = style.outline() {
        surface.set_paint(*outline_paint);
        surface.set_stroke(outline_stroke.clone());
        boundary_lines = line_geometry::boundary_lines(
            Boundary::new(start, mapped_start),
            Boundary::new(end, mapped_end),
            BoundaryExtent::across(area, orientation),
            range,
            orientation,
        );
        line_geometry::draw_boundary_lines(&mut *surface, &boundary_lines);
    }

    let mut label_point = None;
    if let Some(label) = style.label() {
        let point = label_anchor.anchor_on_rect(orientation, band, style.label_anchor());
        draw_label(&mut *surface, style, label, point);
        label_point = Some(point);
    }

    trace!(
        start,
        end,
        ?band,
        boundaries = boundary_lines.len(),
        "drew interval marker"
    );
    MarkerDrawOutcome::Drawn(DrawnMarker {
        shape: MarkerShape::Band(band),
        boundary_lines,
        label_anchor: label_point,
    })
}

/// Draws a value marker as a line across the drawing area with an optional label.
pub fn draw_value_marker<S, A, P, R>(
    surface: &mut S,
    marker: &ValueMarker,
    axis: &A,
    plot: &P,
    area: DeviceRect,
    label_anchor: &R,
) -> MarkerDrawOutcome
where
    S: DrawSurface + ?Sized,
    A: ValueAxis + ?Sized,
    P: Plot + ?Sized,
    R: LineLabelAnchor + ?Sized,
{
    let value = marker.value();
    let range = axis.range();
    if !clip::contains(value, range) {
        debug!(
            value,
            lower = range.lower(),
            upper = range.upper(),
            reason = "outside_range",
            "skip value marker"
        );
        return MarkerDrawOutcome::Skipped(SkipReason::OutsideRange);
    }

    let orientation = plot.orientation();
    let line = shape::resolve_value_line(marker, axis, plot, area);

    let style = marker.style();
    let mut surface = CompositeGuard::new(surface, AlphaComposite::source_over(style.alpha()));
    surface.set_paint(*style.paint());
    surface.set_stroke(style.stroke().clone());
    surface.stroke_line(line);

    let mut label_point = None;
    if let Some(label) = style.label() {
        let point = label_anchor.anchor_on_line(orientation, line, style.label_anchor());
        draw_label(&mut *surface, style, label, point);
        label_point = Some(point);
    }

    trace!(value, ?line, "drew value marker");
    MarkerDrawOutcome::Drawn(DrawnMarker {
        shape: MarkerShape::Line(line),
        boundary_lines: SmallVec::new(),
        label_anchor: label_point,
    })
}

/// Draws either marker kind, resolving labels through `label_anchor`.
pub fn draw_marker<S, A, P, R>(
    surface: &mut S,
    marker: &Marker,
    axis: &A,
    plot: &P,
    area: DeviceRect,
    label_anchor: &R,
) -> MarkerDrawOutcome
where
    S: DrawSurface + ?Sized,
    A: ValueAxis + ?Sized,
    P: Plot + ?Sized,
    R: RectLabelAnchor + LineLabelAnchor + ?Sized,
{
    match marker {
        Marker::Value(value) => draw_value_marker(surface, value, axis, plot, area, label_anchor),
        Marker::Interval(interval) => {
            draw_interval_marker(surface, interval, axis, plot, area, label_anchor)
        }
    }
}

fn fill_paint(marker: &IntervalMarker, band: DeviceRect) -> Paint {
    let paint = *marker.style().paint();
    match (paint.as_gradient(), marker.gradient_transformer()) {
        (Some(gradient), Some(transformer)) => Paint::Gradient(transformer.transform(gradient, band)),
        _ => paint,
    }
}

fn draw_label<S: DrawSurface + ?Sized>(
    surface: &mut S,
    style: &MarkerStyle,
    label: &str,
    point: Point,
) {
    surface.set_font(style.label_font().clone());
    surface.set_paint(*style.label_paint());
    surface.draw_aligned_text(label, point, style.label_text_anchor());
}
