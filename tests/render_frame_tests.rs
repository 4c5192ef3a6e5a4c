use plot_markers::MarkerError;
use plot_markers::core::{DeviceRect, Line, LinearAxis, PlotContext, PlotOrientation, Point};
use plot_markers::markers::{IntervalMarker, Marker, ValueMarker};
use plot_markers::render::{
    Color, LabelFont, LinePrimitive, NullRenderer, Paint, Primitive, PrimitiveKind,
    RecordingSurface, RectPrimitive, RenderFrame, Renderer, Stroke, TextAnchor, TextPrimitive,
};

fn area() -> DeviceRect {
    DeviceRect::new(0.0, 0.0, 400.0, 200.0)
}

#[test]
fn recorded_marker_frame_is_valid_and_counted_by_null_renderer() {
    let axis = LinearAxis::new(0.0, 100.0).expect("axis");
    let plot = PlotContext::new(PlotOrientation::Vertical);
    let mut band = IntervalMarker::new(20.0, 40.0);
    band.style_mut()
        .set_label(Some("target zone".to_owned()))
        .expect("label");
    let markers: Vec<Marker> = vec![band.into(), ValueMarker::new(75.0).into()];

    let mut surface = RecordingSurface::new(area());
    for marker in &markers {
        marker.draw(&mut surface, &axis, &plot, area());
    }
    let frame = surface.into_frame();
    frame.validate().expect("valid frame");

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");

    assert_eq!(renderer.last_rect_count, 1);
    assert_eq!(renderer.last_line_count, 3);
    assert_eq!(renderer.last_text_count, 1);
    assert_eq!(frame.primitive_count(), 5);
}

#[test]
fn frame_builders_append_in_submission_order() {
    let frame = RenderFrame::new(area())
        .with_rect(RectPrimitive::new(
            DeviceRect::new(0.0, 10.0, 400.0, 20.0),
            Paint::Solid(Color::GRAY),
            0.8,
        ))
        .with_line(LinePrimitive::new(
            Line::new(0.0, 10.0, 400.0, 10.0),
            Paint::Solid(Color::BLACK),
            Stroke::new(1.0),
            1.0,
        ))
        .with_line(LinePrimitive::new(
            Line::new(0.0, 30.0, 400.0, 30.0),
            Paint::Solid(Color::BLACK),
            Stroke::new(1.0).with_dash(&[4.0, 2.0]),
            1.0,
        ))
        .with_text(TextPrimitive::new(
            "label",
            Point::new(3.0, 13.0),
            LabelFont::default(),
            Paint::Solid(Color::BLACK),
            TextAnchor::TopLeft,
            1.0,
        ));

    frame.validate().expect("valid frame");
    assert!(!frame.is_empty());
    assert_eq!(
        frame.primitives.iter().map(Primitive::kind).collect::<Vec<_>>(),
        vec![
            PrimitiveKind::Rect,
            PrimitiveKind::Line,
            PrimitiveKind::Line,
            PrimitiveKind::Text
        ]
    );
    let lines: Vec<_> = frame.lines().collect();
    assert_eq!(lines[0].line.start.y, 10.0);
    assert!(lines[1].stroke.is_dashed());
}

#[test]
fn null_renderer_rejects_invalid_primitives() {
    let mut renderer = NullRenderer::default();

    let bad_alpha = RenderFrame::new(area()).with_rect(RectPrimitive::new(
        DeviceRect::new(0.0, 0.0, 10.0, 10.0),
        Paint::Solid(Color::GRAY),
        1.5,
    ));
    let err = renderer.render(&bad_alpha).expect_err("alpha must fail");
    assert!(matches!(err, MarkerError::InvalidAlpha(_)));

    let non_finite = RenderFrame::new(area()).with_line(LinePrimitive::new(
        Line::new(0.0, f64::NAN, 10.0, 0.0),
        Paint::Solid(Color::BLACK),
        Stroke::new(1.0),
        1.0,
    ));
    let err = renderer.render(&non_finite).expect_err("nan must fail");
    assert!(matches!(err, MarkerError::InvalidData(_)));

    let empty_text = RenderFrame::new(area()).with_text(TextPrimitive::new(
        "",
        Point::new(0.0, 0.0),
        LabelFont::default(),
        Paint::Solid(Color::BLACK),
        TextAnchor::Center,
        1.0,
    ));
    assert!(renderer.render(&empty_text).is_err());

    let negative_area = RenderFrame::new(DeviceRect::new(0.0, 0.0, -1.0, 10.0));
    assert!(renderer.render(&negative_area).is_err());
}

#[test]
fn clearing_surface_drops_primitives_but_keeps_state() {
    let axis = LinearAxis::new(0.0, 100.0).expect("axis");
    let plot = PlotContext::new(PlotOrientation::Horizontal);
    let mut surface = RecordingSurface::new(area());
    let marker = ValueMarker::with_paint(50.0, Paint::Solid(Color::WHITE), Stroke::new(3.0))
        .expect("marker");

    Marker::from(marker).draw(&mut surface, &axis, &plot, area());
    assert_eq!(surface.draw_call_count(), 1);
    assert_eq!(surface.stroke(), &Stroke::new(3.0));

    surface.clear();
    assert_eq!(surface.draw_call_count(), 0);
    assert_eq!(surface.paint(), Paint::Solid(Color::WHITE));
    assert_eq!(surface.frame().area, area());
}

#[test]
fn overlapping_markers_replay_in_draw_order() {
    let axis = LinearAxis::new(0.0, 100.0).expect("axis");
    let plot = PlotContext::new(PlotOrientation::Vertical);
    let mut lower = IntervalMarker::new(10.0, 50.0);
    lower
        .style_mut()
        .set_label(Some("lower".to_owned()))
        .expect("label");
    let mut upper = IntervalMarker::with_paint(30.0, 70.0, Paint::Solid(Color::BLACK))
        .expect("upper band");
    upper
        .style_mut()
        .set_label(Some("upper".to_owned()))
        .expect("label");

    let mut surface = RecordingSurface::new(area());
    for marker in [Marker::from(lower), Marker::from(upper)] {
        assert!(marker.draw(&mut surface, &axis, &plot, area()).is_drawn());
    }
    let frame = surface.into_frame();

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");
    // The second band has no outline, so its fill and label follow the first label.
    assert_eq!(
        renderer.last_sequence,
        vec![
            PrimitiveKind::Rect,
            PrimitiveKind::Line,
            PrimitiveKind::Line,
            PrimitiveKind::Text,
            PrimitiveKind::Rect,
            PrimitiveKind::Text,
        ]
    );
    match (&frame.primitives[3], &frame.primitives[4], &frame.primitives[5]) {
        (Primitive::Text(first), Primitive::Rect(fill), Primitive::Text(second)) => {
            assert_eq!(first.text, "lower");
            assert_eq!(fill.paint, Paint::Solid(Color::BLACK));
            assert_eq!(second.text, "upper");
        }
        other => panic!("unexpected replay order: {other:?}"),
    }
}
