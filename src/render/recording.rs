use crate::core::{DeviceRect, Line, Point};
use crate::render::{
    AlphaComposite, Color, DrawSurface, LabelFont, LinePrimitive, Paint, RectPrimitive,
    RenderFrame, Stroke, TextAnchor, TextPrimitive,
};

/// `DrawSurface` that records every draw call into a [`RenderFrame`].
///
/// Each primitive carries the paint, stroke, font and composite alpha that
/// were current when it was submitted, and primitives keep their submission
/// order, so a `Renderer` can replay the frame later.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSurface {
    frame: RenderFrame,
    composite: AlphaComposite,
    paint: Paint,
    stroke: Stroke,
    font: LabelFont,
    composite_changes: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(area: DeviceRect) -> Self {
        Self {
            frame: RenderFrame::new(area),
            composite: AlphaComposite::OPAQUE,
            paint: Paint::Solid(Color::BLACK),
            stroke: Stroke::new(1.0),
            font: LabelFont::default(),
            composite_changes: 0,
        }
    }

    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    #[must_use]
    pub fn into_frame(self) -> RenderFrame {
        self.frame
    }

    #[must_use]
    pub fn paint(&self) -> Paint {
        self.paint
    }

    #[must_use]
    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    #[must_use]
    pub fn font(&self) -> &LabelFont {
        &self.font
    }

    /// Number of `set_composite` calls seen so far.
    #[must_use]
    pub fn composite_changes(&self) -> usize {
        self.composite_changes
    }

    #[must_use]
    pub fn draw_call_count(&self) -> usize {
        self.frame.primitive_count()
    }

    /// Drops recorded primitives; surface state is kept.
    pub fn clear(&mut self) {
        self.frame = RenderFrame::new(self.frame.area);
    }
}

impl DrawSurface for RecordingSurface {
    fn composite(&self) -> AlphaComposite {
        self.composite
    }

    fn set_composite(&mut self, composite: AlphaComposite) {
        self.composite = composite;
        self.composite_changes += 1;
    }

    fn set_paint(&mut self, paint: Paint) {
        self.paint = paint;
    }

    fn set_stroke(&mut self, stroke: Stroke) {
        self.stroke = stroke;
    }

    fn set_font(&mut self, font: LabelFont) {
        self.font = font;
    }

    fn fill_rect(&mut self, rect: DeviceRect) {
        self.frame
            .push(RectPrimitive::new(rect, self.paint, self.composite.alpha));
    }

    fn stroke_line(&mut self, line: Line) {
        self.frame.push(LinePrimitive::new(
            line,
            self.paint,
            self.stroke.clone(),
            self.composite.alpha,
        ));
    }

    fn draw_aligned_text(&mut self, text: &str, position: Point, anchor: TextAnchor) {
        self.frame.push(TextPrimitive::new(
            text,
            position,
            self.font.clone(),
            self.paint,
            anchor,
            self.composite.alpha,
        ));
    }
}
