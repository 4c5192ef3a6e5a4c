use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Point;
use crate::error::{MarkerError, MarkerResult};
use crate::render::Color;

/// Linear two-stop gradient between two device-space points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientPaint {
    pub start: Point,
    pub start_color: Color,
    pub end: Point,
    pub end_color: Color,
    #[serde(default)]
    pub cyclic: bool,
}

impl GradientPaint {
    #[must_use]
    pub const fn new(start: Point, start_color: Color, end: Point, end_color: Color) -> Self {
        Self {
            start,
            start_color,
            end,
            end_color,
            cyclic: false,
        }
    }

    #[must_use]
    pub fn with_cyclic(mut self, cyclic: bool) -> Self {
        self.cyclic = cyclic;
        self
    }

    pub fn validate(self) -> MarkerResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(MarkerError::InvalidData(
                "gradient points must be finite".to_owned(),
            ));
        }
        self.start_color.validate()?;
        self.end_color.validate()
    }
}

/// Fill or stroke source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    Solid(Color),
    Gradient(GradientPaint),
}

impl Paint {
    #[must_use]
    pub fn as_gradient(&self) -> Option<&GradientPaint> {
        match self {
            Self::Gradient(gradient) => Some(gradient),
            Self::Solid(_) => None,
        }
    }

    pub fn validate(&self) -> MarkerResult<()> {
        match self {
            Self::Solid(color) => color.validate(),
            Self::Gradient(gradient) => gradient.validate(),
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl From<GradientPaint> for Paint {
    fn from(gradient: GradientPaint) -> Self {
        Self::Gradient(gradient)
    }
}

/// Line stroke: width plus an optional on/off dash pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width: f64,
    #[serde(default)]
    pub dash: SmallVec<[f64; 4]>,
}

impl Stroke {
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self {
            width,
            dash: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_dash(mut self, pattern: &[f64]) -> Self {
        self.dash = SmallVec::from_slice(pattern);
        self
    }

    #[must_use]
    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }

    pub fn validate(&self) -> MarkerResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(MarkerError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        if self
            .dash
            .iter()
            .any(|segment| !segment.is_finite() || *segment < 0.0)
        {
            return Err(MarkerError::InvalidData(
                "dash segments must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(0.5)
    }
}

/// Font descriptor handed to the surface; measuring is left to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelFont {
    pub family: String,
    pub size_px: f64,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

impl LabelFont {
    #[must_use]
    pub fn new(family: impl Into<String>, size_px: f64) -> Self {
        Self {
            family: family.into(),
            size_px,
            bold: false,
            italic: false,
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn validate(&self) -> MarkerResult<()> {
        if self.family.trim().is_empty() {
            return Err(MarkerError::InvalidData(
                "font family must not be empty".to_owned(),
            ));
        }
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(MarkerError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for LabelFont {
    fn default() -> Self {
        Self::new("SansSerif", 9.0)
    }
}

/// Source-over compositing with a constant alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlphaComposite {
    pub alpha: f64,
}

impl AlphaComposite {
    pub const OPAQUE: Self = Self { alpha: 1.0 };

    #[must_use]
    pub const fn source_over(alpha: f64) -> Self {
        Self { alpha }
    }
}

impl Default for AlphaComposite {
    fn default() -> Self {
        Self::OPAQUE
    }
}
