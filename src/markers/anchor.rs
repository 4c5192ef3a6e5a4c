//! Label anchoring against resolved marker shapes.

use serde::{Deserialize, Serialize};

use crate::core::{DeviceRect, Line, Point, PlotOrientation};
use crate::error::{MarkerError, MarkerResult};

/// Named position on a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RectangleAnchor {
    Center,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl RectangleAnchor {
    /// Anchor point on `rect`.
    ///
    /// Works from the raw origin and size, so a rectangle contracted past
    /// zero size still yields points on the expected side.
    #[must_use]
    pub fn coordinates(self, rect: DeviceRect) -> Point {
        let left = rect.x;
        let right = rect.x + rect.width;
        let top = rect.y;
        let bottom = rect.y + rect.height;
        let center_x = rect.x + rect.width * 0.5;
        let center_y = rect.y + rect.height * 0.5;
        match self {
            Self::Center => Point::new(center_x, center_y),
            Self::Top => Point::new(center_x, top),
            Self::Bottom => Point::new(center_x, bottom),
            Self::Left => Point::new(left, center_y),
            Self::Right => Point::new(right, center_y),
            Self::TopLeft => Point::new(left, top),
            Self::TopRight => Point::new(right, top),
            Self::BottomLeft => Point::new(left, bottom),
            Self::BottomRight => Point::new(right, bottom),
        }
    }
}

/// How label offsets change a shape's extent along one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthAdjustment {
    NoChange,
    Expand,
    Contract,
}

/// Per-side offsets in device units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangleInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl RectangleInsets {
    pub const ZERO: Self = Self::uniform(0.0);

    #[must_use]
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn validate(self) -> MarkerResult<()> {
        if [self.top, self.left, self.bottom, self.right]
            .iter()
            .any(|inset| !inset.is_finite())
        {
            return Err(MarkerError::InvalidData(
                "label offset insets must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    /// Applies the insets to `base`, independently per dimension.
    #[must_use]
    pub fn adjust(
        self,
        base: DeviceRect,
        horizontal: LengthAdjustment,
        vertical: LengthAdjustment,
    ) -> DeviceRect {
        let (x, width) = match horizontal {
            LengthAdjustment::NoChange => (base.x, base.width),
            LengthAdjustment::Contract => (base.x + self.left, base.width - self.left - self.right),
            LengthAdjustment::Expand => (base.x - self.left, base.width + self.left + self.right),
        };
        let (y, height) = match vertical {
            LengthAdjustment::NoChange => (base.y, base.height),
            LengthAdjustment::Contract => (base.y + self.top, base.height - self.top - self.bottom),
            LengthAdjustment::Expand => (base.y - self.top, base.height + self.top + self.bottom),
        };
        DeviceRect::new(x, y, width, height)
    }
}

impl Default for RectangleInsets {
    fn default() -> Self {
        Self::uniform(3.0)
    }
}

/// Resolves the label anchor point of an interval marker's rectangle.
pub trait RectLabelAnchor {
    fn anchor_on_rect(
        &self,
        orientation: PlotOrientation,
        shape: DeviceRect,
        anchor: RectangleAnchor,
    ) -> Point;
}

/// Resolves the label anchor point of a value marker's line.
pub trait LineLabelAnchor {
    fn anchor_on_line(&self, orientation: PlotOrientation, line: Line, anchor: RectangleAnchor)
    -> Point;
}

impl<F> RectLabelAnchor for F
where
    F: Fn(PlotOrientation, DeviceRect, RectangleAnchor) -> Point,
{
    fn anchor_on_rect(
        &self,
        orientation: PlotOrientation,
        shape: DeviceRect,
        anchor: RectangleAnchor,
    ) -> Point {
        self(orientation, shape, anchor)
    }
}

impl<F> LineLabelAnchor for F
where
    F: Fn(PlotOrientation, Line, RectangleAnchor) -> Point,
{
    fn anchor_on_line(
        &self,
        orientation: PlotOrientation,
        line: Line,
        anchor: RectangleAnchor,
    ) -> Point {
        self(orientation, line, anchor)
    }
}

/// Anchor resolver that offsets labels from the shape by a set of insets.
///
/// Across the value direction the shape is adjusted by `offset_type`; along
/// the marker's length it is always contracted, keeping labels off the
/// drawing-area border. Lines are handled as zero-thickness rectangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsetLabelAnchor {
    pub offset: RectangleInsets,
    pub offset_type: LengthAdjustment,
}

impl InsetLabelAnchor {
    #[must_use]
    pub const fn new(offset: RectangleInsets, offset_type: LengthAdjustment) -> Self {
        Self {
            offset,
            offset_type,
        }
    }

    #[must_use]
    pub fn adjusted_area(self, orientation: PlotOrientation, shape: DeviceRect) -> DeviceRect {
        match orientation {
            PlotOrientation::Vertical => {
                self.offset
                    .adjust(shape, LengthAdjustment::Contract, self.offset_type)
            }
            PlotOrientation::Horizontal => {
                self.offset
                    .adjust(shape, self.offset_type, LengthAdjustment::Contract)
            }
        }
    }
}

impl RectLabelAnchor for InsetLabelAnchor {
    fn anchor_on_rect(
        &self,
        orientation: PlotOrientation,
        shape: DeviceRect,
        anchor: RectangleAnchor,
    ) -> Point {
        anchor.coordinates(self.adjusted_area(orientation, shape))
    }
}

impl LineLabelAnchor for InsetLabelAnchor {
    fn anchor_on_line(
        &self,
        orientation: PlotOrientation,
        line: Line,
        anchor: RectangleAnchor,
    ) -> Point {
        anchor.coordinates(self.adjusted_area(orientation, line.bounds()))
    }
}
