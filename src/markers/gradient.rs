use serde::{Deserialize, Serialize};

use crate::core::{DeviceRect, Point};
use crate::render::GradientPaint;

/// Re-targets a gradient onto the rectangle it is about to fill.
pub trait GradientPaintTransformer {
    fn transform(&self, gradient: &GradientPaint, target: DeviceRect) -> GradientPaint;
}

impl<F> GradientPaintTransformer for F
where
    F: Fn(&GradientPaint, DeviceRect) -> GradientPaint,
{
    fn transform(&self, gradient: &GradientPaint, target: DeviceRect) -> GradientPaint {
        self(gradient, target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradientTransformType {
    /// Top to bottom.
    Vertical,
    /// Left to right.
    Horizontal,
    /// From the vertical center outwards, reflected.
    CenterVertical,
    /// From the horizontal center outwards, reflected.
    CenterHorizontal,
}

/// Stretches a gradient across the target rectangle in a fixed direction,
/// keeping its two colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardGradientTransformer {
    pub kind: GradientTransformType,
}

impl StandardGradientTransformer {
    #[must_use]
    pub const fn new(kind: GradientTransformType) -> Self {
        Self { kind }
    }
}

impl Default for StandardGradientTransformer {
    fn default() -> Self {
        Self::new(GradientTransformType::Vertical)
    }
}

impl GradientPaintTransformer for StandardGradientTransformer {
    fn transform(&self, gradient: &GradientPaint, target: DeviceRect) -> GradientPaint {
        let (start, end, cyclic) = match self.kind {
            GradientTransformType::Vertical => (
                Point::new(target.center_x(), target.min_y()),
                Point::new(target.center_x(), target.max_y()),
                false,
            ),
            GradientTransformType::Horizontal => (
                Point::new(target.min_x(), target.center_y()),
                Point::new(target.max_x(), target.center_y()),
                false,
            ),
            GradientTransformType::CenterVertical => (
                Point::new(target.center_x(), target.center_y()),
                Point::new(target.center_x(), target.min_y()),
                true,
            ),
            GradientTransformType::CenterHorizontal => (
                Point::new(target.center_x(), target.center_y()),
                Point::new(target.min_x(), target.center_y()),
                true,
            ),
        };
        GradientPaint::new(start, gradient.start_color, end, gradient.end_color).with_cyclic(cyclic)
    }
}
