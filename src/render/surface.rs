use std::ops::{Deref, DerefMut};

use crate::core::{DeviceRect, Line, Point};
use crate::render::{AlphaComposite, LabelFont, Paint, Stroke, TextAnchor};

/// Stateful drawing surface that marker painters draw onto.
///
/// Paint, stroke, font and composite are current-state settings, consumed
/// by the draw calls that follow them.
pub trait DrawSurface {
    fn composite(&self) -> AlphaComposite;
    fn set_composite(&mut self, composite: AlphaComposite);

    fn set_paint(&mut self, paint: Paint);
    fn set_stroke(&mut self, stroke: Stroke);
    fn set_font(&mut self, font: LabelFont);

    fn fill_rect(&mut self, rect: DeviceRect);
    fn stroke_line(&mut self, line: Line);
    fn draw_aligned_text(&mut self, text: &str, position: Point, anchor: TextAnchor);
}

/// Scoped alpha composite.
///
/// Captures the surface composite on creation, installs the requested one,
/// and puts the captured composite back when dropped. Draw through the guard
/// via `Deref`.
pub struct CompositeGuard<'a, S: DrawSurface + ?Sized> {
    surface: &'a mut S,
    original: AlphaComposite,
}

impl<'a, S: DrawSurface + ?Sized> CompositeGuard<'a, S> {
    pub fn new(surface: &'a mut S, composite: AlphaComposite) -> Self {
        let original = surface.composite();
        surface.set_composite(composite);
        Self { surface, original }
    }
}

impl<S: DrawSurface + ?Sized> Deref for CompositeGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: DrawSurface + ?Sized> DerefMut for CompositeGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: DrawSurface + ?Sized> Drop for CompositeGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_composite(self.original);
    }
}

impl<S: DrawSurface + ?Sized> std::fmt::Debug for CompositeGuard<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeGuard")
            .field("original", &self.original)
            .finish_non_exhaustive()
    }
}
