use serde::{Deserialize, Serialize};

use crate::core::{DeviceRect, Line, Point};
use crate::error::{MarkerError, MarkerResult};
use crate::render::{LabelFont, Paint, Stroke, TextAnchor};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Returns this color with its alpha multiplied by `factor`.
    #[must_use]
    pub fn with_alpha_factor(self, factor: f64) -> Self {
        Self {
            alpha: self.alpha * factor,
            ..self
        }
    }

    pub fn validate(self) -> MarkerResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(MarkerError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one stroked line segment in device space.
///
/// `alpha` is the composite alpha active when the line was drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePrimitive {
    pub line: Line,
    pub paint: Paint,
    pub stroke: Stroke,
    pub alpha: f64,
}

impl LinePrimitive {
    #[must_use]
    pub fn new(line: Line, paint: Paint, stroke: Stroke, alpha: f64) -> Self {
        Self {
            line,
            paint,
            stroke,
            alpha,
        }
    }

    pub fn validate(&self) -> MarkerResult<()> {
        if !self.line.start.is_finite() || !self.line.end.is_finite() {
            return Err(MarkerError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        self.stroke.validate()?;
        self.paint.validate()?;
        validate_alpha(self.alpha)
    }
}

/// Draw command for one filled rectangle in device space.
#[derive(Debug, Clone, PartialEq)]
pub struct RectPrimitive {
    pub rect: DeviceRect,
    pub paint: Paint,
    pub alpha: f64,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(rect: DeviceRect, paint: Paint, alpha: f64) -> Self {
        Self { rect, paint, alpha }
    }

    pub fn validate(&self) -> MarkerResult<()> {
        self.rect.validate()?;
        self.paint.validate()?;
        validate_alpha(self.alpha)
    }
}

/// Draw command for one label aligned against an anchor point.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub position: Point,
    pub font: LabelFont,
    pub paint: Paint,
    pub anchor: TextAnchor,
    pub alpha: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        position: Point,
        font: LabelFont,
        paint: Paint,
        anchor: TextAnchor,
        alpha: f64,
    ) -> Self {
        Self {
            text: text.into(),
            position,
            font,
            paint,
            anchor,
            alpha,
        }
    }

    pub fn validate(&self) -> MarkerResult<()> {
        if self.text.is_empty() {
            return Err(MarkerError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.position.is_finite() {
            return Err(MarkerError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        self.font.validate()?;
        self.paint.validate()?;
        validate_alpha(self.alpha)
    }
}

/// One recorded draw command, in submission order.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect(RectPrimitive),
    Line(LinePrimitive),
    Text(TextPrimitive),
}

/// Discriminant of a [`Primitive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Rect,
    Line,
    Text,
}

impl Primitive {
    #[must_use]
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Rect(_) => PrimitiveKind::Rect,
            Self::Line(_) => PrimitiveKind::Line,
            Self::Text(_) => PrimitiveKind::Text,
        }
    }

    pub fn validate(&self) -> MarkerResult<()> {
        match self {
            Self::Rect(rect) => rect.validate(),
            Self::Line(line) => line.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

impl From<RectPrimitive> for Primitive {
    fn from(rect: RectPrimitive) -> Self {
        Self::Rect(rect)
    }
}

impl From<LinePrimitive> for Primitive {
    fn from(line: LinePrimitive) -> Self {
        Self::Line(line)
    }
}

impl From<TextPrimitive> for Primitive {
    fn from(text: TextPrimitive) -> Self {
        Self::Text(text)
    }
}

fn validate_alpha(alpha: f64) -> MarkerResult<()> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(MarkerError::InvalidAlpha(alpha));
    }
    Ok(())
}
