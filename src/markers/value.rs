use crate::error::MarkerResult;
use crate::markers::{MarkerProperty, MarkerStyle};
use crate::render::{Paint, Stroke};

/// Marker highlighting a single data value with a line across the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueMarker {
    value: f64,
    style: MarkerStyle,
}

impl ValueMarker {
    /// Gray 0.5px marker at 80% alpha.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            style: MarkerStyle::default(),
        }
    }

    /// Opaque marker whose outline reuses `paint` and `stroke`.
    pub fn with_paint(value: f64, paint: Paint, stroke: Stroke) -> MarkerResult<Self> {
        Self::with_style(value, paint, stroke.clone(), Some(paint), Some(stroke), 1.0)
    }

    pub fn with_style(
        value: f64,
        paint: Paint,
        stroke: Stroke,
        outline_paint: Option<Paint>,
        outline_stroke: Option<Stroke>,
        alpha: f64,
    ) -> MarkerResult<Self> {
        Ok(Self {
            value,
            style: MarkerStyle::new(paint, stroke, outline_paint, outline_stroke, alpha)?,
        })
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        self.style.fire(MarkerProperty::Value);
    }

    #[must_use]
    pub fn style(&self) -> &MarkerStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut MarkerStyle {
        &mut self.style
    }
}
