use tracing::debug;

use crate::error::MarkerResult;
use crate::render::{Primitive, PrimitiveKind, RenderFrame, Renderer};

/// Headless renderer that validates a marker frame and records what it
/// would have drawn.
///
/// `last_sequence` holds the primitive kinds in replay order, which is the
/// order the markers submitted them.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_rect_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_sequence: Vec<PrimitiveKind>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> MarkerResult<()> {
        frame.validate()?;
        self.last_sequence = frame.primitives.iter().map(Primitive::kind).collect();
        self.last_rect_count = frame.rects().count();
        self.last_line_count = frame.lines().count();
        self.last_text_count = frame.texts().count();
        debug!(
            rects = self.last_rect_count,
            lines = self.last_line_count,
            texts = self.last_text_count,
            "replayed marker frame"
        );
        Ok(())
    }
}
