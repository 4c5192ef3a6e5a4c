use cairo::{Context, Extend, Format, ImageSurface, LinearGradient};
use pango::FontDescription;

use crate::error::{MarkerError, MarkerResult};
use crate::render::{
    Color, LabelFont, Paint, Primitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
    TextVAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can replay a frame into an
/// external Cairo context (for example a GTK drawing callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> MarkerResult<()>;
}

/// Cairo + Pango renderer backend.
///
/// Replays recorded marker frames either into its own offscreen image
/// surface through `Renderer::render`, or into an external Cairo context
/// through `CairoContextRenderer`. Primitives are replayed in submission
/// order. The frame is not cleared first: markers are overlays on an
/// already painted plot.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> MarkerResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(MarkerError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> MarkerResult<()> {
        frame.validate()?;

        let mut stats = CairoRenderStats::default();

        for primitive in &frame.primitives {
            match primitive {
                Primitive::Rect(rect) => {
                    apply_paint(context, &rect.paint, rect.alpha)?;
                    context.rectangle(rect.rect.x, rect.rect.y, rect.rect.width, rect.rect.height);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                    stats.rects_drawn += 1;
                }
                Primitive::Line(line) => {
                    apply_paint(context, &line.paint, line.alpha)?;
                    context.set_line_width(line.stroke.width);
                    context.set_dash(&line.stroke.dash, 0.0);
                    context.move_to(line.line.start.x, line.line.start.y);
                    context.line_to(line.line.end.x, line.line.end.y);
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke line", err))?;
                    context.set_dash(&[], 0.0);
                    stats.lines_drawn += 1;
                }
                Primitive::Text(text) => {
                    draw_text(context, text)?;
                    stats.texts_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> MarkerResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> MarkerResult<()> {
        self.render_with_context(context, frame)
    }
}

// Composite alpha is folded into the source colors.
fn apply_paint(context: &Context, paint: &Paint, alpha: f64) -> MarkerResult<()> {
    match paint {
        Paint::Solid(color) => {
            apply_color(context, color.with_alpha_factor(alpha));
            Ok(())
        }
        Paint::Gradient(gradient) => {
            let pattern = LinearGradient::new(
                gradient.start.x,
                gradient.start.y,
                gradient.end.x,
                gradient.end.y,
            );
            add_stop(&pattern, 0.0, gradient.start_color.with_alpha_factor(alpha));
            add_stop(&pattern, 1.0, gradient.end_color.with_alpha_factor(alpha));
            pattern.set_extend(if gradient.cyclic {
                Extend::Reflect
            } else {
                Extend::Pad
            });
            context
                .set_source(&pattern)
                .map_err(|err| map_backend_error("failed to set gradient source", err))
        }
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn add_stop(pattern: &LinearGradient, offset: f64, color: Color) {
    pattern.add_color_stop_rgba(offset, color.red, color.green, color.blue, color.alpha);
}

fn draw_text(context: &Context, text: &TextPrimitive) -> MarkerResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    layout.set_font_description(Some(&font_description(&text.font)));
    layout.set_text(&text.text);

    let (text_width, text_height) = layout.pixel_size();
    let width = f64::from(text_width);
    let height = f64::from(text_height);
    let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

    let x = match text.anchor.h_align() {
        TextHAlign::Left => text.position.x,
        TextHAlign::Center => text.position.x - width / 2.0,
        TextHAlign::Right => text.position.x - width,
    };
    let y = match text.anchor.v_align() {
        TextVAlign::Top => text.position.y,
        TextVAlign::Center => text.position.y - height / 2.0,
        TextVAlign::Baseline => text.position.y - baseline,
        TextVAlign::Bottom => text.position.y - height,
    };

    apply_paint(context, &text.paint, text.alpha)?;
    context.move_to(x, y);
    pangocairo::functions::show_layout(context, &layout);
    Ok(())
}

fn font_description(font: &LabelFont) -> FontDescription {
    let mut spec = font.family.clone();
    if font.bold {
        spec.push_str(" Bold");
    }
    if font.italic {
        spec.push_str(" Italic");
    }
    FontDescription::from_string(&format!("{spec} {}px", font.size_px))
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> MarkerError {
    MarkerError::Backend(format!("{prefix}: {err}"))
}
