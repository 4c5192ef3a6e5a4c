mod frame;
mod null_renderer;
mod paint;
mod primitives;
mod recording;
mod surface;
mod text;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use paint::{AlphaComposite, GradientPaint, LabelFont, Paint, Stroke};
pub use primitives::{
    Color, LinePrimitive, Primitive, PrimitiveKind, RectPrimitive, TextPrimitive,
};
pub use recording::RecordingSurface;
pub use surface::{CompositeGuard, DrawSurface};
pub use text::{TextAnchor, TextHAlign, TextVAlign};

use crate::error::MarkerResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so geometry
/// decisions stay isolated from rasterization.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> MarkerResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
