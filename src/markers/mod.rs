//! Value and interval markers: model, geometry and drawing.

pub mod anchor;
pub mod gradient;
pub mod interval;
pub mod line_geometry;
pub mod listeners;
pub mod marker;
pub mod painter;
pub mod shape;
pub mod spec;
pub mod style;
pub mod value;

pub use anchor::{
    InsetLabelAnchor, LengthAdjustment, LineLabelAnchor, RectLabelAnchor, RectangleAnchor,
    RectangleInsets,
};
pub use gradient::{GradientPaintTransformer, GradientTransformType, StandardGradientTransformer};
pub use interval::IntervalMarker;
pub use line_geometry::{Boundary, BoundaryExtent, boundary_line, boundary_lines};
pub use listeners::{ListenerId, MarkerChangeEvent, MarkerListeners, MarkerProperty};
pub use marker::{Marker, MarkerKind};
pub use painter::{
    DrawnMarker, MarkerDrawOutcome, MarkerShape, SkipReason, draw_interval_marker, draw_marker,
    draw_value_marker,
};
pub use shape::{interval_rect, resolve_interval_rect, resolve_value_line, value_line};
pub use spec::{MARKER_SPEC_JSON_SCHEMA_V1, MarkerSpec, MarkerSpecJsonContractV1};
pub use style::MarkerStyle;
pub use value::ValueMarker;
