use serde::{Deserialize, Serialize};

use crate::error::{MarkerError, MarkerResult};

/// A point in device space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A device-space line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
        }
    }

    /// Axis-aligned bounds of the segment. Horizontal or vertical lines
    /// produce a zero-height or zero-width rectangle.
    #[must_use]
    pub fn bounds(self) -> DeviceRect {
        DeviceRect::from_extents(self.start.x, self.start.y, self.end.x, self.end.y)
    }
}

/// Axis-aligned rectangle in device coordinates.
///
/// Device Y grows downward, so `min_y` is the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DeviceRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from its extents; reversed extents are swapped.
    #[must_use]
    pub fn from_extents(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let (min_x, max_x) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let (min_y, max_y) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    #[must_use]
    pub fn min_x(self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn max_x(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn min_y(self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn max_y(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        self.x + self.width * 0.5
    }

    #[must_use]
    pub fn center_y(self) -> f64 {
        self.y + self.height * 0.5
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    /// Returns `true` when `other` lies entirely inside this rectangle.
    #[must_use]
    pub fn contains_rect(self, other: DeviceRect) -> bool {
        other.min_x() >= self.min_x()
            && other.max_x() <= self.max_x()
            && other.min_y() >= self.min_y()
            && other.max_y() <= self.max_y()
    }

    pub fn validate(self) -> MarkerResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(MarkerError::InvalidData(
                "rectangle coordinates must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(MarkerError::InvalidData(
                "rectangle width and height must be >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}
