use plot_markers::MarkerError;
use plot_markers::core::{DeviceRect, LinearAxis, PlotContext, PlotOrientation};
use plot_markers::markers::{
    GradientTransformType, LengthAdjustment, MARKER_SPEC_JSON_SCHEMA_V1, MarkerKind, MarkerShape,
    MarkerSpec,
};
use plot_markers::render::{Color, Paint, RecordingSurface, Stroke, TextAnchor};

#[test]
fn versioned_contract_round_trips() {
    let specs = vec![
        MarkerSpec::value(42.0)
            .with_paint(Paint::Solid(Color::rgb(0.9, 0.1, 0.1)))
            .with_label("limit"),
        MarkerSpec::interval(10.0, 20.0)
            .with_outline(Paint::Solid(Color::BLACK), Stroke::new(1.0).with_dash(&[2.0, 2.0]))
            .with_alpha(0.4)
            .with_gradient_transform(GradientTransformType::Horizontal),
    ];

    let json = MarkerSpec::list_to_json_contract_v1_pretty(&specs).expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));

    let parsed = MarkerSpec::list_from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, specs);
}

#[test]
fn bare_list_with_minimal_fields_uses_defaults() {
    let input = r#"[
        { "kind": "value", "value": 3.5 },
        { "kind": "interval", "start": 1.0, "end": 2.0 }
    ]"#;

    let specs = MarkerSpec::list_from_json_compat_str(input).expect("parse");
    assert_eq!(specs.len(), 2);
    assert_eq!(specs[0], MarkerSpec::value(3.5));
    assert_eq!(specs[1], MarkerSpec::interval(1.0, 2.0));
    assert_eq!(specs[0].alpha, 0.8);
    assert_eq!(specs[0].label_text_anchor, TextAnchor::Center);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let input = r#"{ "schema_version": 7, "markers": [] }"#;
    let err = MarkerSpec::list_from_json_compat_str(input).expect_err("version must fail");
    assert!(matches!(err, MarkerError::InvalidData(message) if message.contains('7')));

    let err = MarkerSpec::list_from_json_compat_str("{ not json").expect_err("garbage must fail");
    assert!(matches!(err, MarkerError::InvalidData(_)));
    assert_eq!(MARKER_SPEC_JSON_SCHEMA_V1, 1);
}

#[test]
fn build_marker_applies_kind_defaults() {
    let value = MarkerSpec::value(5.0).build_marker().expect("value marker");
    assert_eq!(value.kind(), MarkerKind::Value);
    assert_eq!(value.as_value().map(|marker| marker.value()), Some(5.0));
    assert!(value.as_interval().is_none());
    assert_eq!(value.style().label_offset_type(), LengthAdjustment::Expand);
    assert_eq!(value.style().outline(), None);

    let interval = MarkerSpec::interval(8.0, 2.0)
        .with_gradient_transform(GradientTransformType::Vertical)
        .build_marker()
        .expect("interval marker");
    let interval = interval.as_interval().expect("interval variant");
    assert_eq!(interval.bounds(), (2.0, 8.0));
    assert_eq!(interval.style().label_offset_type(), LengthAdjustment::Contract);
    assert!(interval.gradient_transformer().is_some());
}

#[test]
fn explicit_offset_type_overrides_kind_default() {
    let mut spec = MarkerSpec::interval(0.0, 1.0);
    spec.label_offset_type = Some(LengthAdjustment::NoChange);

    let marker = spec.build_marker().expect("marker");
    assert_eq!(marker.style().label_offset_type(), LengthAdjustment::NoChange);
    assert_eq!(marker.style().listener_count(), 0);
}

#[test]
fn build_marker_rejects_incomplete_or_invalid_specs() {
    let input = r#"[{ "kind": "interval", "start": 1.0 }]"#;
    let specs = MarkerSpec::list_from_json_compat_str(input).expect("parse");
    let err = specs[0].build_marker().expect_err("missing end");
    assert!(matches!(err, MarkerError::InvalidData(_)));

    let mut missing_value = MarkerSpec::value(1.0);
    missing_value.value = None;
    assert!(matches!(
        missing_value.build_marker(),
        Err(MarkerError::InvalidData(_))
    ));

    let err = MarkerSpec::value(1.0)
        .with_alpha(1.2)
        .build_marker()
        .expect_err("bad alpha");
    assert!(matches!(err, MarkerError::InvalidAlpha(_)));

    let err = MarkerSpec::value(1.0)
        .with_outline(Paint::Solid(Color::BLACK), Stroke::new(0.0))
        .build_marker()
        .expect_err("zero width stroke");
    assert!(matches!(err, MarkerError::InvalidData(_)));

    let err = MarkerSpec::value(1.0)
        .with_label("")
        .build_marker()
        .expect_err("empty label");
    assert!(matches!(err, MarkerError::InvalidData(_)));
}

#[test]
fn loaded_markers_draw_through_tagged_dispatch() {
    let input = r#"{
        "schema_version": 1,
        "markers": [
            { "kind": "interval", "start": 25.0, "end": 75.0, "label": "zone" },
            { "kind": "value", "value": 150.0 }
        ]
    }"#;
    let markers = MarkerSpec::list_from_json_compat_str(input)
        .expect("parse")
        .iter()
        .map(MarkerSpec::build_marker)
        .collect::<Result<Vec<_>, _>>()
        .expect("build markers");

    let area = DeviceRect::new(0.0, 0.0, 200.0, 100.0);
    let axis = LinearAxis::new(0.0, 100.0).expect("axis");
    let plot = PlotContext::new(PlotOrientation::Horizontal);
    let mut surface = RecordingSurface::new(area);

    let outcomes: Vec<_> = markers
        .iter()
        .map(|marker| marker.draw(&mut surface, &axis, &plot, area))
        .collect();

    assert_eq!(
        outcomes[0].drawn().map(|drawn| drawn.shape),
        Some(MarkerShape::Band(DeviceRect::new(50.0, 0.0, 100.0, 100.0)))
    );
    assert!(!outcomes[1].is_drawn());
    let texts: Vec<_> = surface.frame().texts().collect();
    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0].text, "zone");
}
