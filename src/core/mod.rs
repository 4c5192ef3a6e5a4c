pub mod axis;
pub mod clip;
pub mod geometry;
pub mod orientation;
pub mod range;

pub use axis::{LinearAxis, ValueAxis};
pub use geometry::{DeviceRect, Line, Point};
pub use orientation::{Plot, PlotContext, PlotOrientation, RectangleEdge};
pub use range::AxisRange;
