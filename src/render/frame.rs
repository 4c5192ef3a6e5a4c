use crate::core::DeviceRect;
use crate::error::MarkerResult;
use crate::render::{LinePrimitive, Primitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic record of one marker draw pass.
///
/// Primitives are kept in submission order and backends replay them in
/// that order, so a later marker's fill lands over an earlier marker's
/// outline and label.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub area: DeviceRect,
    pub primitives: Vec<Primitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(area: DeviceRect) -> Self {
        Self {
            area,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.push(rect);
        self
    }

    pub fn validate(&self) -> MarkerResult<()> {
        self.area.validate()?;
        for primitive in &self.primitives {
            primitive.validate()?;
        }
        Ok(())
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Text(text) => Some(text),
            _ => None,
        })
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
