use serde::{Deserialize, Serialize};

use crate::core::{DeviceRect, Plot, ValueAxis};
use crate::markers::painter::{self, MarkerDrawOutcome};
use crate::markers::{IntervalMarker, MarkerStyle, ValueMarker};
use crate::render::DrawSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Value,
    Interval,
}

/// Any marker a plot can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Marker {
    Value(ValueMarker),
    Interval(IntervalMarker),
}

impl Marker {
    #[must_use]
    pub fn kind(&self) -> MarkerKind {
        match self {
            Self::Value(_) => MarkerKind::Value,
            Self::Interval(_) => MarkerKind::Interval,
        }
    }

    #[must_use]
    pub fn style(&self) -> &MarkerStyle {
        match self {
            Self::Value(marker) => marker.style(),
            Self::Interval(marker) => marker.style(),
        }
    }

    pub fn style_mut(&mut self) -> &mut MarkerStyle {
        match self {
            Self::Value(marker) => marker.style_mut(),
            Self::Interval(marker) => marker.style_mut(),
        }
    }

    #[must_use]
    pub fn as_value(&self) -> Option<&ValueMarker> {
        match self {
            Self::Value(marker) => Some(marker),
            Self::Interval(_) => None,
        }
    }

    #[must_use]
    pub fn as_interval(&self) -> Option<&IntervalMarker> {
        match self {
            Self::Interval(marker) => Some(marker),
            Self::Value(_) => None,
        }
    }

    /// Draws the marker, anchoring its label with its own offset settings.
    pub fn draw<S, A, P>(
        &self,
        surface: &mut S,
        axis: &A,
        plot: &P,
        area: DeviceRect,
    ) -> MarkerDrawOutcome
    where
        S: DrawSurface + ?Sized,
        A: ValueAxis + ?Sized,
        P: Plot + ?Sized,
    {
        let anchor = self.style().inset_label_anchor();
        painter::draw_marker(surface, self, axis, plot, area, &anchor)
    }
}

impl From<ValueMarker> for Marker {
    fn from(marker: ValueMarker) -> Self {
        Self::Value(marker)
    }
}

impl From<IntervalMarker> for Marker {
    fn from(marker: IntervalMarker) -> Self {
        Self::Interval(marker)
    }
}
