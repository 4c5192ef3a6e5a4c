use crate::error::{MarkerError, MarkerResult};
use crate::markers::{
    InsetLabelAnchor, LengthAdjustment, ListenerId, MarkerChangeEvent, MarkerListeners,
    MarkerProperty, RectangleAnchor, RectangleInsets,
};
use crate::render::{Color, LabelFont, Paint, Stroke, TextAnchor};

pub(crate) const DEFAULT_ALPHA: f64 = 0.8;
pub(crate) const DEFAULT_STROKE_WIDTH: f64 = 0.5;

/// Visual properties shared by every marker kind.
///
/// Each setter applies its change and then synchronously notifies the
/// registered change listeners. Setters taking paints, strokes, fonts,
/// labels or alpha validate first and leave the style untouched (and fire
/// nothing) on error, so every accepted style renders. Listener
/// registrations are not part of equality and are not carried over by
/// `clone`.
#[derive(Debug)]
pub struct MarkerStyle {
    paint: Paint,
    stroke: Stroke,
    outline_paint: Option<Paint>,
    outline_stroke: Option<Stroke>,
    alpha: f64,
    label: Option<String>,
    label_font: LabelFont,
    label_paint: Paint,
    label_anchor: RectangleAnchor,
    label_text_anchor: TextAnchor,
    label_offset: RectangleInsets,
    label_offset_type: LengthAdjustment,
    listeners: MarkerListeners,
}

impl MarkerStyle {
    pub fn new(
        paint: Paint,
        stroke: Stroke,
        outline_paint: Option<Paint>,
        outline_stroke: Option<Stroke>,
        alpha: f64,
    ) -> MarkerResult<Self> {
        paint.validate()?;
        stroke.validate()?;
        if let Some(paint) = &outline_paint {
            paint.validate()?;
        }
        if let Some(stroke) = &outline_stroke {
            stroke.validate()?;
        }
        Ok(Self::from_parts(
            paint,
            stroke,
            outline_paint,
            outline_stroke,
            checked_alpha(alpha)?,
        ))
    }

    // Callers pass parts that are already validated.
    fn from_parts(
        paint: Paint,
        stroke: Stroke,
        outline_paint: Option<Paint>,
        outline_stroke: Option<Stroke>,
        alpha: f64,
    ) -> Self {
        Self {
            paint,
            stroke,
            outline_paint,
            outline_stroke,
            alpha,
            label: None,
            label_font: LabelFont::default(),
            label_paint: Paint::Solid(Color::BLACK),
            label_anchor: RectangleAnchor::TopLeft,
            label_text_anchor: TextAnchor::Center,
            label_offset: RectangleInsets::default(),
            label_offset_type: LengthAdjustment::Expand,
            listeners: MarkerListeners::new(),
        }
    }

    // Construction-time override; does not notify.
    pub(crate) fn with_label_offset_type(mut self, offset_type: LengthAdjustment) -> Self {
        self.label_offset_type = offset_type;
        self
    }

    #[must_use]
    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    pub fn set_paint(&mut self, paint: Paint) -> MarkerResult<()> {
        paint.validate()?;
        self.paint = paint;
        self.fire(MarkerProperty::Paint);
        Ok(())
    }

    #[must_use]
    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    pub fn set_stroke(&mut self, stroke: Stroke) -> MarkerResult<()> {
        stroke.validate()?;
        self.stroke = stroke;
        self.fire(MarkerProperty::Stroke);
        Ok(())
    }

    #[must_use]
    pub fn outline_paint(&self) -> Option<&Paint> {
        self.outline_paint.as_ref()
    }

    pub fn set_outline_paint(&mut self, paint: Option<Paint>) -> MarkerResult<()> {
        if let Some(paint) = &paint {
            paint.validate()?;
        }
        self.outline_paint = paint;
        self.fire(MarkerProperty::OutlinePaint);
        Ok(())
    }

    #[must_use]
    pub fn outline_stroke(&self) -> Option<&Stroke> {
        self.outline_stroke.as_ref()
    }

    pub fn set_outline_stroke(&mut self, stroke: Option<Stroke>) -> MarkerResult<()> {
        if let Some(stroke) = &stroke {
            stroke.validate()?;
        }
        self.outline_stroke = stroke;
        self.fire(MarkerProperty::OutlineStroke);
        Ok(())
    }

    /// Outline paint and stroke, when both are set.
    #[must_use]
    pub fn outline(&self) -> Option<(&Paint, &Stroke)> {
        self.outline_paint.as_ref().zip(self.outline_stroke.as_ref())
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Rejects values outside `[0, 1]` (including NaN) without notifying.
    pub fn set_alpha(&mut self, alpha: f64) -> MarkerResult<()> {
        self.alpha = checked_alpha(alpha)?;
        self.fire(MarkerProperty::Alpha);
        Ok(())
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: Option<String>) -> MarkerResult<()> {
        if label.as_deref() == Some("") {
            return Err(MarkerError::InvalidData(
                "marker label must not be empty; use None to hide it".to_owned(),
            ));
        }
        self.label = label;
        self.fire(MarkerProperty::Label);
        Ok(())
    }

    #[must_use]
    pub fn label_font(&self) -> &LabelFont {
        &self.label_font
    }

    pub fn set_label_font(&mut self, font: LabelFont) -> MarkerResult<()> {
        font.validate()?;
        self.label_font = font;
        self.fire(MarkerProperty::LabelFont);
        Ok(())
    }

    #[must_use]
    pub fn label_paint(&self) -> &Paint {
        &self.label_paint
    }

    pub fn set_label_paint(&mut self, paint: Paint) -> MarkerResult<()> {
        paint.validate()?;
        self.label_paint = paint;
        self.fire(MarkerProperty::LabelPaint);
        Ok(())
    }

    #[must_use]
    pub fn label_anchor(&self) -> RectangleAnchor {
        self.label_anchor
    }

    pub fn set_label_anchor(&mut self, anchor: RectangleAnchor) {
        self.label_anchor = anchor;
        self.fire(MarkerProperty::LabelAnchor);
    }

    #[must_use]
    pub fn label_text_anchor(&self) -> TextAnchor {
        self.label_text_anchor
    }

    pub fn set_label_text_anchor(&mut self, anchor: TextAnchor) {
        self.label_text_anchor = anchor;
        self.fire(MarkerProperty::LabelTextAnchor);
    }

    #[must_use]
    pub fn label_offset(&self) -> RectangleInsets {
        self.label_offset
    }

    pub fn set_label_offset(&mut self, offset: RectangleInsets) -> MarkerResult<()> {
        offset.validate()?;
        self.label_offset = offset;
        self.fire(MarkerProperty::LabelOffset);
        Ok(())
    }

    #[must_use]
    pub fn label_offset_type(&self) -> LengthAdjustment {
        self.label_offset_type
    }

    pub fn set_label_offset_type(&mut self, offset_type: LengthAdjustment) {
        self.label_offset_type = offset_type;
        self.fire(MarkerProperty::LabelOffsetType);
    }

    /// Anchor resolver built from this style's label offset settings.
    #[must_use]
    pub fn inset_label_anchor(&self) -> InsetLabelAnchor {
        InsetLabelAnchor::new(self.label_offset, self.label_offset_type)
    }

    pub fn add_change_listener(
        &mut self,
        callback: impl Fn(&MarkerChangeEvent) + 'static,
    ) -> ListenerId {
        self.listeners.add(callback)
    }

    pub fn remove_change_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn notify_listeners(&self, event: &MarkerChangeEvent) {
        self.listeners.notify(event);
    }

    pub(crate) fn fire(&self, property: MarkerProperty) {
        self.notify_listeners(&MarkerChangeEvent::new(property));
    }
}

impl Default for MarkerStyle {
    /// Gray fill and outline, 0.5px strokes, 80% alpha.
    fn default() -> Self {
        Self::from_parts(
            Paint::Solid(Color::GRAY),
            Stroke::new(DEFAULT_STROKE_WIDTH),
            Some(Paint::Solid(Color::GRAY)),
            Some(Stroke::new(DEFAULT_STROKE_WIDTH)),
            DEFAULT_ALPHA,
        )
    }
}

impl Clone for MarkerStyle {
    fn clone(&self) -> Self {
        Self {
            paint: self.paint,
            stroke: self.stroke.clone(),
            outline_paint: self.outline_paint,
            outline_stroke: self.outline_stroke.clone(),
            alpha: self.alpha,
            label: self.label.clone(),
            label_font: self.label_font.clone(),
            label_paint: self.label_paint,
            label_anchor: self.label_anchor,
            label_text_anchor: self.label_text_anchor,
            label_offset: self.label_offset,
            label_offset_type: self.label_offset_type,
            listeners: MarkerListeners::new(),
        }
    }
}

impl PartialEq for MarkerStyle {
    fn eq(&self, other: &Self) -> bool {
        self.paint == other.paint
            && self.stroke == other.stroke
            && self.outline_paint == other.outline_paint
            && self.outline_stroke == other.outline_stroke
            && self.alpha == other.alpha
            && self.label == other.label
            && self.label_font == other.label_font
            && self.label_paint == other.label_paint
            && self.label_anchor == other.label_anchor
            && self.label_text_anchor == other.label_text_anchor
            && self.label_offset == other.label_offset
            && self.label_offset_type == other.label_offset_type
    }
}

fn checked_alpha(alpha: f64) -> MarkerResult<f64> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(MarkerError::InvalidAlpha(alpha));
    }
    Ok(alpha)
}
