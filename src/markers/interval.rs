use std::fmt;
use std::rc::Rc;

use crate::error::MarkerResult;
use crate::markers::style::{DEFAULT_ALPHA, DEFAULT_STROKE_WIDTH};
use crate::markers::{GradientPaintTransformer, LengthAdjustment, MarkerProperty, MarkerStyle};
use crate::render::{Paint, Stroke};

/// Marker highlighting the band between two data values.
///
/// `start_value` and `end_value` form an unordered pair. Labels are placed
/// inside the band by default ([`LengthAdjustment::Contract`]).
#[derive(Clone)]
pub struct IntervalMarker {
    start_value: f64,
    end_value: f64,
    gradient_transformer: Option<Rc<dyn GradientPaintTransformer>>,
    style: MarkerStyle,
}

impl IntervalMarker {
    /// Gray band with a gray 0.5px outline at 80% alpha.
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self::from_style(start, end, MarkerStyle::default())
    }

    /// Band filled with `paint`, without an outline, at 80% alpha.
    pub fn with_paint(start: f64, end: f64, paint: Paint) -> MarkerResult<Self> {
        Self::with_style(
            start,
            end,
            paint,
            Stroke::new(DEFAULT_STROKE_WIDTH),
            None,
            None,
            DEFAULT_ALPHA,
        )
    }

    pub fn with_style(
        start: f64,
        end: f64,
        paint: Paint,
        stroke: Stroke,
        outline_paint: Option<Paint>,
        outline_stroke: Option<Stroke>,
        alpha: f64,
    ) -> MarkerResult<Self> {
        Ok(Self::from_style(
            start,
            end,
            MarkerStyle::new(paint, stroke, outline_paint, outline_stroke, alpha)?,
        ))
    }

    fn from_style(start: f64, end: f64, style: MarkerStyle) -> Self {
        Self {
            start_value: start,
            end_value: end,
            gradient_transformer: None,
            style: style.with_label_offset_type(LengthAdjustment::Contract),
        }
    }

    #[must_use]
    pub fn start_value(&self) -> f64 {
        self.start_value
    }

    pub fn set_start_value(&mut self, value: f64) {
        self.start_value = value;
        self.style.fire(MarkerProperty::StartValue);
    }

    #[must_use]
    pub fn end_value(&self) -> f64 {
        self.end_value
    }

    pub fn set_end_value(&mut self, value: f64) {
        self.end_value = value;
        self.style.fire(MarkerProperty::EndValue);
    }

    /// `(min, max)` of the two endpoint values.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        if self.start_value <= self.end_value {
            (self.start_value, self.end_value)
        } else {
            (self.end_value, self.start_value)
        }
    }

    #[must_use]
    pub fn gradient_transformer(&self) -> Option<&dyn GradientPaintTransformer> {
        self.gradient_transformer.as_deref()
    }

    pub fn set_gradient_transformer(
        &mut self,
        transformer: Option<Rc<dyn GradientPaintTransformer>>,
    ) {
        self.gradient_transformer = transformer;
        self.style.fire(MarkerProperty::GradientTransformer);
    }

    #[must_use]
    pub fn style(&self) -> &MarkerStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut MarkerStyle {
        &mut self.style
    }
}

impl PartialEq for IntervalMarker {
    fn eq(&self, other: &Self) -> bool {
        let same_transformer = match (&self.gradient_transformer, &other.gradient_transformer) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => Rc::ptr_eq(lhs, rhs),
            _ => false,
        };
        self.start_value == other.start_value
            && self.end_value == other.end_value
            && same_transformer
            && self.style == other.style
    }
}

impl fmt::Debug for IntervalMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalMarker")
            .field("start_value", &self.start_value)
            .field("end_value", &self.end_value)
            .field(
                "gradient_transformer",
                &self.gradient_transformer.as_ref().map(|_| ".."),
            )
            .field("style", &self.style)
            .finish()
    }
}
