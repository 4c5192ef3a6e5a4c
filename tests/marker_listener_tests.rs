use std::cell::RefCell;
use std::rc::Rc;

use plot_markers::MarkerError;
use plot_markers::markers::{
    GradientTransformType, IntervalMarker, LengthAdjustment, MarkerChangeEvent, MarkerProperty,
    RectangleAnchor, RectangleInsets, StandardGradientTransformer, ValueMarker,
};
use plot_markers::render::{Color, LabelFont, Paint, Stroke, TextAnchor};

type EventLog = Rc<RefCell<Vec<MarkerProperty>>>;

fn recorder(log: &EventLog) -> impl Fn(&MarkerChangeEvent) + 'static {
    let log = Rc::clone(log);
    move |event: &MarkerChangeEvent| log.borrow_mut().push(event.property)
}

#[test]
fn every_style_setter_notifies_once_with_its_property() {
    let log = EventLog::default();
    let mut marker = ValueMarker::new(1.0);
    marker.style_mut().add_change_listener(recorder(&log));

    let style = marker.style_mut();
    style.set_paint(Paint::Solid(Color::BLACK)).expect("paint");
    style.set_stroke(Stroke::new(2.0)).expect("stroke");
    style.set_outline_paint(None).expect("outline paint");
    style
        .set_outline_stroke(Some(Stroke::new(1.0)))
        .expect("outline stroke");
    style.set_alpha(0.25).expect("valid alpha");
    style.set_label(Some("x".to_owned())).expect("label");
    style
        .set_label_font(LabelFont::new("Serif", 12.0))
        .expect("label font");
    style
        .set_label_paint(Paint::Solid(Color::WHITE))
        .expect("label paint");
    style.set_label_anchor(RectangleAnchor::Center);
    style.set_label_text_anchor(TextAnchor::TopRight);
    style
        .set_label_offset(RectangleInsets::uniform(5.0))
        .expect("label offset");
    style.set_label_offset_type(LengthAdjustment::NoChange);
    marker.set_value(2.0);

    assert_eq!(
        *log.borrow(),
        vec![
            MarkerProperty::Paint,
            MarkerProperty::Stroke,
            MarkerProperty::OutlinePaint,
            MarkerProperty::OutlineStroke,
            MarkerProperty::Alpha,
            MarkerProperty::Label,
            MarkerProperty::LabelFont,
            MarkerProperty::LabelPaint,
            MarkerProperty::LabelAnchor,
            MarkerProperty::LabelTextAnchor,
            MarkerProperty::LabelOffset,
            MarkerProperty::LabelOffsetType,
            MarkerProperty::Value,
        ]
    );
    assert_eq!(marker.value(), 2.0);
    assert_eq!(marker.style().alpha(), 0.25);
}

#[test]
fn interval_setters_notify_with_endpoint_properties() {
    let log = EventLog::default();
    let mut marker = IntervalMarker::new(1.0, 2.0);
    marker.style_mut().add_change_listener(recorder(&log));

    marker.set_start_value(3.0);
    marker.set_end_value(-1.0);
    marker.set_gradient_transformer(Some(Rc::new(StandardGradientTransformer::new(
        GradientTransformType::Horizontal,
    ))));

    assert_eq!(
        *log.borrow(),
        vec![
            MarkerProperty::StartValue,
            MarkerProperty::EndValue,
            MarkerProperty::GradientTransformer,
        ]
    );
    assert_eq!(marker.bounds(), (-1.0, 3.0));
}

#[test]
fn invalid_alpha_is_rejected_without_notifying() {
    let log = EventLog::default();
    let mut marker = ValueMarker::new(0.0);
    marker.style_mut().add_change_listener(recorder(&log));

    for alpha in [1.5, -0.1, f64::NAN] {
        let err = marker.style_mut().set_alpha(alpha).expect_err("alpha rejected");
        assert!(matches!(err, MarkerError::InvalidAlpha(_)));
    }

    assert!(log.borrow().is_empty());
    assert_eq!(marker.style().alpha(), 0.8);

    marker.style_mut().set_alpha(0.0).expect("lower bound");
    marker.style_mut().set_alpha(1.0).expect("upper bound");
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn listeners_run_in_registration_order_and_stop_after_removal() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut marker = ValueMarker::new(0.0);

    let first = {
        let order = Rc::clone(&order);
        marker
            .style_mut()
            .add_change_listener(move |_| order.borrow_mut().push("first"))
    };
    {
        let order = Rc::clone(&order);
        marker
            .style_mut()
            .add_change_listener(move |_| order.borrow_mut().push("second"));
    }

    marker.set_value(1.0);
    assert_eq!(*order.borrow(), vec!["first", "second"]);

    assert!(marker.style_mut().remove_change_listener(first));
    assert!(!marker.style_mut().remove_change_listener(first));
    marker.set_value(2.0);
    assert_eq!(*order.borrow(), vec!["first", "second", "second"]);
    assert_eq!(marker.style().listener_count(), 1);
}

#[test]
fn clones_start_without_listeners_and_compare_by_value() {
    let log = EventLog::default();
    let mut marker = IntervalMarker::new(1.0, 4.0);
    marker.style_mut().add_change_listener(recorder(&log));

    let mut copy = marker.clone();
    assert_eq!(copy.style().listener_count(), 0);
    assert_eq!(copy, marker);

    copy.set_start_value(2.0);
    assert!(log.borrow().is_empty());
    assert_ne!(copy, marker);
}

#[test]
fn constructors_apply_documented_defaults() {
    let value = ValueMarker::new(1.0);
    assert_eq!(value.style().paint(), &Paint::Solid(Color::GRAY));
    assert_eq!(value.style().stroke(), &Stroke::new(0.5));
    assert_eq!(value.style().outline_paint(), Some(&Paint::Solid(Color::GRAY)));
    assert_eq!(value.style().alpha(), 0.8);
    assert_eq!(value.style().label(), None);
    assert_eq!(value.style().label_anchor(), RectangleAnchor::TopLeft);
    assert_eq!(value.style().label_text_anchor(), TextAnchor::Center);
    assert_eq!(value.style().label_offset(), RectangleInsets::uniform(3.0));
    assert_eq!(value.style().label_offset_type(), LengthAdjustment::Expand);

    let solid = ValueMarker::with_paint(1.0, Paint::Solid(Color::BLACK), Stroke::new(2.0))
        .expect("solid marker");
    assert_eq!(solid.style().alpha(), 1.0);
    assert_eq!(
        solid.style().outline(),
        Some((&Paint::Solid(Color::BLACK), &Stroke::new(2.0)))
    );

    let interval = IntervalMarker::new(1.0, 2.0);
    assert_eq!(interval.style().label_offset_type(), LengthAdjustment::Contract);
    assert!(interval.gradient_transformer().is_none());
    assert!(interval.style().outline().is_some());

    let filled =
        IntervalMarker::with_paint(1.0, 2.0, Paint::Solid(Color::WHITE)).expect("filled marker");
    assert_eq!(filled.style().outline(), None);
    assert_eq!(filled.style().alpha(), 0.8);
}

#[test]
fn checked_constructors_reject_bad_alpha() {
    let err = ValueMarker::with_style(
        1.0,
        Paint::Solid(Color::BLACK),
        Stroke::default(),
        None,
        None,
        2.0,
    )
    .expect_err("alpha out of range");
    assert!(matches!(err, MarkerError::InvalidAlpha(alpha) if alpha == 2.0));

    let interval = IntervalMarker::with_style(
        1.0,
        2.0,
        Paint::Solid(Color::BLACK),
        Stroke::default(),
        None,
        None,
        0.3,
    )
    .expect("valid interval");
    assert_eq!(interval.style().label_offset_type(), LengthAdjustment::Contract);
}

#[test]
fn constructors_reject_unrenderable_styles() {
    let err = ValueMarker::with_style(
        5.0,
        Paint::Solid(Color::BLACK),
        Stroke::new(0.0),
        None,
        None,
        1.0,
    )
    .expect_err("zero width stroke");
    assert!(matches!(err, MarkerError::InvalidData(_)));

    let err = ValueMarker::with_paint(
        1.0,
        Paint::Solid(Color::rgb(1.5, 0.0, 0.0)),
        Stroke::new(1.0),
    )
    .expect_err("color channel out of range");
    assert!(matches!(err, MarkerError::InvalidData(_)));

    let err = IntervalMarker::with_style(
        1.0,
        2.0,
        Paint::Solid(Color::GRAY),
        Stroke::new(1.0),
        Some(Paint::Solid(Color::BLACK)),
        Some(Stroke::new(f64::NAN)),
        0.5,
    )
    .expect_err("non-finite outline stroke");
    assert!(matches!(err, MarkerError::InvalidData(_)));
}

#[test]
fn rejected_setters_leave_style_untouched_and_silent() {
    let log = EventLog::default();
    let mut marker = ValueMarker::new(5.0);
    marker.style_mut().add_change_listener(recorder(&log));
    let before = marker.clone();

    let style = marker.style_mut();
    assert!(style.set_stroke(Stroke::new(0.0)).is_err());
    assert!(style.set_stroke(Stroke::new(1.0).with_dash(&[-2.0])).is_err());
    assert!(
        style
            .set_paint(Paint::Solid(Color::rgb(0.0, f64::NAN, 0.0)))
            .is_err()
    );
    assert!(style.set_outline_stroke(Some(Stroke::new(-1.0))).is_err());
    assert!(style.set_label(Some(String::new())).is_err());
    assert!(style.set_label_font(LabelFont::new("Sans", 0.0)).is_err());
    assert!(
        style
            .set_label_offset(RectangleInsets::uniform(f64::NAN))
            .is_err()
    );

    assert!(log.borrow().is_empty());
    assert_eq!(marker, before);

    marker.style_mut().set_label(None).expect("hide label");
    assert_eq!(*log.borrow(), vec![MarkerProperty::Label]);
}

#[test]
fn accepted_markers_render_without_backend_errors() {
    use plot_markers::core::{DeviceRect, LinearAxis, PlotContext, PlotOrientation};
    use plot_markers::markers::Marker;
    use plot_markers::render::{NullRenderer, RecordingSurface, Renderer};

    let area = DeviceRect::new(0.0, 0.0, 200.0, 100.0);
    let axis = LinearAxis::new(0.0, 10.0).expect("axis");
    let plot = PlotContext::new(PlotOrientation::Vertical);

    let mut line = ValueMarker::with_paint(5.0, Paint::Solid(Color::BLACK), Stroke::new(0.25))
        .expect("thin line");
    line.style_mut()
        .set_label(Some("limit".to_owned()))
        .expect("label");
    let mut band = IntervalMarker::new(2.0, 4.0);
    band.style_mut()
        .set_label_font(LabelFont::new("Serif", 8.0))
        .expect("font");
    band.style_mut()
        .set_label(Some("band".to_owned()))
        .expect("label");

    let mut surface = RecordingSurface::new(area);
    for marker in [Marker::from(line), Marker::from(band)] {
        marker.draw(&mut surface, &axis, &plot, area);
    }

    let mut renderer = NullRenderer::default();
    renderer.render(&surface.into_frame()).expect("render");
    assert_eq!(renderer.last_text_count, 2);
}
