//! plot-markers: value and interval marker rendering for 2D plots.
//!
//! Markers are mapped from data space to device space through a
//! [`core::ValueAxis`], clipped against the axis range and the plot's
//! drawing area, and drawn onto a [`render::DrawSurface`]. The recording
//! surface turns draw calls into a backend-agnostic [`render::RenderFrame`].

pub mod core;
pub mod error;
pub mod markers;
pub mod render;
pub mod telemetry;

pub use error::{MarkerError, MarkerResult};
pub use markers::{IntervalMarker, Marker, MarkerDrawOutcome, ValueMarker};
