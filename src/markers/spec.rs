use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{MarkerError, MarkerResult};
use crate::markers::style::DEFAULT_ALPHA;
use crate::markers::{
    GradientTransformType, IntervalMarker, LengthAdjustment, Marker, MarkerKind, MarkerStyle,
    RectangleAnchor, RectangleInsets, StandardGradientTransformer, ValueMarker,
};
use crate::render::{Color, LabelFont, Paint, Stroke, TextAnchor};

pub const MARKER_SPEC_JSON_SCHEMA_V1: u32 = 1;

/// Serializable marker description.
///
/// Lets host applications persist and load markers without inventing their
/// own format. Omitted fields fall back to the constructor defaults, except
/// the outline, which is only drawn when both its paint and stroke are given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpec {
    pub kind: MarkerKind,
    /// Required for value markers.
    #[serde(default)]
    pub value: Option<f64>,
    /// Required for interval markers.
    #[serde(default)]
    pub start: Option<f64>,
    /// Required for interval markers.
    #[serde(default)]
    pub end: Option<f64>,
    #[serde(default = "default_paint")]
    pub paint: Paint,
    #[serde(default)]
    pub stroke: Stroke,
    #[serde(default)]
    pub outline_paint: Option<Paint>,
    #[serde(default)]
    pub outline_stroke: Option<Stroke>,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub label_font: LabelFont,
    #[serde(default = "default_label_paint")]
    pub label_paint: Paint,
    #[serde(default = "default_label_anchor")]
    pub label_anchor: RectangleAnchor,
    #[serde(default = "default_label_text_anchor")]
    pub label_text_anchor: TextAnchor,
    #[serde(default)]
    pub label_offset: RectangleInsets,
    /// Falls back to the marker kind's own default when omitted.
    #[serde(default)]
    pub label_offset_type: Option<LengthAdjustment>,
    /// Interval markers only.
    #[serde(default)]
    pub gradient_transform: Option<GradientTransformType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpecJsonContractV1 {
    pub schema_version: u32,
    pub markers: Vec<MarkerSpec>,
}

impl MarkerSpec {
    #[must_use]
    pub fn value(value: f64) -> Self {
        Self::with_kind(MarkerKind::Value, Some(value), None, None)
    }

    #[must_use]
    pub fn interval(start: f64, end: f64) -> Self {
        Self::with_kind(MarkerKind::Interval, None, Some(start), Some(end))
    }

    fn with_kind(kind: MarkerKind, value: Option<f64>, start: Option<f64>, end: Option<f64>) -> Self {
        Self {
            kind,
            value,
            start,
            end,
            paint: default_paint(),
            stroke: Stroke::default(),
            outline_paint: None,
            outline_stroke: None,
            alpha: default_alpha(),
            label: None,
            label_font: LabelFont::default(),
            label_paint: default_label_paint(),
            label_anchor: default_label_anchor(),
            label_text_anchor: default_label_text_anchor(),
            label_offset: RectangleInsets::default(),
            label_offset_type: None,
            gradient_transform: None,
        }
    }

    #[must_use]
    pub fn with_paint(mut self, paint: Paint) -> Self {
        self.paint = paint;
        self
    }

    #[must_use]
    pub fn with_outline(mut self, paint: Paint, stroke: Stroke) -> Self {
        self.outline_paint = Some(paint);
        self.outline_stroke = Some(stroke);
        self
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_gradient_transform(mut self, kind: GradientTransformType) -> Self {
        self.gradient_transform = Some(kind);
        self
    }

    /// Validates the description and builds the marker.
    pub fn build_marker(&self) -> MarkerResult<Marker> {
        let mut marker = match self.kind {
            MarkerKind::Value => {
                let value = required(self.value, "value marker requires `value`")?;
                Marker::Value(ValueMarker::with_style(
                    value,
                    self.paint,
                    self.stroke.clone(),
                    self.outline_paint,
                    self.outline_stroke.clone(),
                    self.alpha,
                )?)
            }
            MarkerKind::Interval => {
                let start = required(self.start, "interval marker requires `start`")?;
                let end = required(self.end, "interval marker requires `end`")?;
                let mut interval = IntervalMarker::with_style(
                    start,
                    end,
                    self.paint,
                    self.stroke.clone(),
                    self.outline_paint,
                    self.outline_stroke.clone(),
                    self.alpha,
                )?;
                if let Some(kind) = self.gradient_transform {
                    let transformer = StandardGradientTransformer::new(kind);
                    interval.set_gradient_transformer(Some(Rc::new(transformer)));
                }
                Marker::Interval(interval)
            }
        };

        self.apply_label_settings(marker.style_mut())?;
        Ok(marker)
    }

    fn apply_label_settings(&self, style: &mut MarkerStyle) -> MarkerResult<()> {
        style.set_label(self.label.clone())?;
        style.set_label_font(self.label_font.clone())?;
        style.set_label_paint(self.label_paint)?;
        style.set_label_anchor(self.label_anchor);
        style.set_label_text_anchor(self.label_text_anchor);
        style.set_label_offset(self.label_offset)?;
        if let Some(offset_type) = self.label_offset_type {
            style.set_label_offset_type(offset_type);
        }
        Ok(())
    }

    pub fn list_to_json_contract_v1_pretty(specs: &[MarkerSpec]) -> MarkerResult<String> {
        let payload = MarkerSpecJsonContractV1 {
            schema_version: MARKER_SPEC_JSON_SCHEMA_V1,
            markers: specs.to_vec(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            MarkerError::InvalidData(format!("failed to serialize marker contract v1: {e}"))
        })
    }

    /// Accepts either a versioned contract payload or a bare list of specs.
    pub fn list_from_json_compat_str(input: &str) -> MarkerResult<Vec<MarkerSpec>> {
        if let Ok(specs) = serde_json::from_str::<Vec<MarkerSpec>>(input) {
            return Ok(specs);
        }
        let payload: MarkerSpecJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            MarkerError::InvalidData(format!("failed to parse marker json payload: {e}"))
        })?;
        if payload.schema_version != MARKER_SPEC_JSON_SCHEMA_V1 {
            return Err(MarkerError::InvalidData(format!(
                "unsupported marker schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.markers)
    }
}

fn required(value: Option<f64>, message: &str) -> MarkerResult<f64> {
    value.ok_or_else(|| MarkerError::InvalidData(message.to_owned()))
}

fn default_paint() -> Paint {
    Paint::Solid(Color::GRAY)
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

fn default_label_paint() -> Paint {
    Paint::Solid(Color::BLACK)
}

fn default_label_anchor() -> RectangleAnchor {
    RectangleAnchor::TopLeft
}

fn default_label_text_anchor() -> TextAnchor {
    TextAnchor::Center
}
