use plot_rs::api::{
    FRAME_BUFFER_RATIO, PlotConfig, PlotEngine, PlotKind, TITLE_OFFSET, X_AXIS_TITLE_OFFSET,
    X_TICK_LABEL_OFFSET, Y_AXIS_TITLE_GAP, Y_TICK_LABEL_OFFSET,
};
use plot_rs::core::{Point, Series, SeriesSet};
use plot_rs::interaction::{InteractionMode, PointerPosition, ViewportEvent};
use plot_rs::render::{NullRenderer, TextHAlign};
use plot_rs::{PlotError, PlotResult};

fn engine(config: PlotConfig) -> PlotResult<PlotEngine<NullRenderer>> {
    PlotEngine::new(NullRenderer::default(), config)
}

fn two_point_series() -> Series {
    Series::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 9.0)])
}

#[test]
fn render_without_series_surfaces_empty_input() {
    let mut engine = engine(PlotConfig::default()).expect("engine init");

    let err = engine.render().expect_err("no data");
    assert!(matches!(err, PlotError::EmptyInput { .. }));
    assert_eq!(engine.renderer().frames_rendered, 0);
}

#[test]
fn invalid_config_is_rejected() {
    let err = engine(PlotConfig::new(0.0, 400.0)).err().expect("zero width");
    assert!(matches!(err, PlotError::InvalidViewport { .. }));

    let err = engine(PlotConfig::default().with_zoom(0.5, 100))
        .err()
        .expect("max zoom below one");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn line_chart_frame_has_grid_labels_lines_and_markers() {
    let mut engine = engine(PlotConfig::default()).expect("engine init");
    engine
        .set_single_series(two_point_series())
        .expect("series");

    let frame = engine.build_frame().expect("frame");
    assert_eq!((frame.width, frame.height), (600.0, 400.0));
    // 2 x-ticks + 6 y-ticks.
    assert_eq!(frame.lines.len(), 8);
    assert_eq!(frame.texts.len(), 8);
    assert_eq!(frame.polylines.len(), 1);
    assert_eq!(frame.markers.len(), 2);

    let top_right = frame.markers[1];
    assert_eq!(top_right.center.x, 600.0);
    assert!((top_right.center.y - 360.0).abs() <= 1e-9);
    assert_eq!(top_right.value, Point::new(1.0, 9.0));
    assert_eq!(top_right.radius, 4.0);

    let x_label = &frame.texts[1];
    assert_eq!(x_label.text, "1.0");
    assert_eq!(x_label.h_align, TextHAlign::Center);
    assert_eq!((x_label.x, x_label.y), (600.0, -X_TICK_LABEL_OFFSET));

    let y_label = frame.texts.last().expect("y label");
    assert_eq!(y_label.text, "10");
    assert_eq!(y_label.h_align, TextHAlign::Right);
    assert_eq!((y_label.x, y_label.y), (-Y_TICK_LABEL_OFFSET, 400.0));

    engine.render().expect("render");
    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_line_count, 8);
    assert_eq!(renderer.last_polyline_count, 1);
    assert_eq!(renderer.last_marker_count, 2);
    assert_eq!(renderer.last_text_count, 8);
}

#[test]
fn mark_flags_select_lines_and_points() {
    let mut lines_only = engine(PlotConfig::default().with_marks(true, false)).expect("engine");
    lines_only
        .set_single_series(two_point_series())
        .expect("series");
    let frame = lines_only.build_frame().expect("frame");
    assert_eq!(frame.polylines.len(), 1);
    assert!(frame.markers.is_empty());

    let mut points_only = engine(PlotConfig::default().with_marks(false, true)).expect("engine");
    points_only
        .set_single_series(two_point_series())
        .expect("series");
    let frame = points_only.build_frame().expect("frame");
    assert!(frame.polylines.is_empty());
    assert_eq!(frame.markers.len(), 2);
}

#[test]
fn single_point_series_draws_no_polyline() {
    let mut engine = engine(PlotConfig::default()).expect("engine init");
    engine
        .set_single_series(Series::new(vec![Point::new(3.0, 3.0)]))
        .expect("single point is legal");

    let frame = engine.build_frame().expect("frame");
    assert!(frame.polylines.is_empty());
    assert_eq!(frame.markers.len(), 1);
}

#[test]
fn scatter_draws_markers_only() {
    let config = PlotConfig::default()
        .with_kind(PlotKind::Scatter)
        .with_marks(true, false);
    let mut engine = engine(config).expect("engine init");
    engine
        .set_single_series(two_point_series())
        .expect("series");

    let frame = engine.build_frame().expect("frame");
    assert!(frame.polylines.is_empty());
    assert_eq!(frame.markers.len(), 2);
}

#[test]
fn palette_cycles_across_series() {
    let config = PlotConfig::default();
    let palette = config.palette.clone();
    let mut engine = engine(config).expect("engine init");
    let set: SeriesSet = (0..7_i32)
        .map(|i| {
            let offset = f64::from(i);
            Series::new(vec![Point::new(0.0, offset), Point::new(1.0, offset + 1.0)])
        })
        .collect();
    engine.set_series(set).expect("series");

    let frame = engine.build_frame().expect("frame");
    assert_eq!(frame.polylines.len(), 7);
    for polyline in &frame.polylines {
        assert_eq!(
            polyline.color,
            palette[polyline.series_index % palette.len()]
        );
    }
    assert_eq!(frame.polylines[5].color, frame.polylines[0].color);
    assert_ne!(frame.polylines[1].color, frame.polylines[0].color);
}

#[test]
fn input_is_conditioned_to_five_significant_digits() {
    let mut engine = engine(PlotConfig::default()).expect("engine init");
    engine
        .set_single_series(Series::new(vec![
            Point::new(1.234_567, 98_765.43),
            Point::new(2.0, 1.0),
        ]))
        .expect("series");

    let first = engine.series().series()[0].points()[0];
    assert!((first.x - 1.2346).abs() <= 1e-12);
    assert!((first.y - 98_765.0).abs() <= 1e-9);

    let mut raw = self::engine(PlotConfig::default().with_condition_significant_digits(None))
        .expect("engine init");
    raw.set_single_series(Series::new(vec![Point::new(1.234_567, 0.0)]))
        .expect("series");
    assert_eq!(raw.series().series()[0].points()[0].x, 1.234_567);
}

#[test]
fn failed_update_keeps_previous_data() {
    let mut engine = engine(PlotConfig::default()).expect("engine init");
    engine
        .set_single_series(two_point_series())
        .expect("series");

    let err = engine
        .set_series(SeriesSet::default())
        .expect_err("empty set");
    assert!(matches!(err, PlotError::EmptyInput { .. }));

    let domain = engine.chart_domain().expect("previous domain kept");
    assert_eq!(domain.y.max(), 10.0);
    assert_eq!(engine.series().point_count(), 2);
    assert!(engine.render().is_ok());
}

#[test]
fn gestures_create_view_transform_lazily() {
    let mut engine = engine(PlotConfig::default()).expect("engine init");
    assert!(engine.view_transform().is_none());
    assert!((engine.layout().pan_scale - 1.3).abs() <= 1e-12);

    let scale = engine.wheel(300.0, 200.0, -1.0);
    assert!(scale > 1.0);

    engine.drag_start(0.0, 0.0);
    assert!(engine.drag_move(10.0, 0.0));
    engine.drag_end();
    assert!(!engine.drag_move(20.0, 0.0));

    engine.reset_view();
    let view = engine.view_transform().expect("created");
    assert!(view.is_identity());
    assert_eq!(view.config().view_box_x, -105.0);
}

#[test]
fn titles_are_emitted_only_when_configured() {
    let mut plain = engine(PlotConfig::default()).expect("engine init");
    plain.set_single_series(two_point_series()).expect("series");
    let plain_frame = plain.build_frame().expect("frame");
    assert!(plain_frame.texts.iter().all(|text| text.rotation_deg == 0.0));

    let config = PlotConfig::default()
        .with_title("Throughput")
        .with_axis_titles("seconds", "requests");
    let mut titled = engine(config).expect("engine init");
    titled.set_single_series(two_point_series()).expect("series");
    let frame = titled.build_frame().expect("frame");
    assert_eq!(frame.texts.len(), plain_frame.texts.len() + 3);

    let title = frame
        .texts
        .iter()
        .find(|text| text.text == "Throughput")
        .expect("chart title");
    assert_eq!((title.x, title.y), (300.0, 400.0 + TITLE_OFFSET));
    assert_eq!(title.h_align, TextHAlign::Center);
    assert_eq!(title.font_size_px, 16.0);

    let x_title = frame
        .texts
        .iter()
        .find(|text| text.text == "seconds")
        .expect("x axis title");
    assert_eq!((x_title.x, x_title.y), (300.0, -X_AXIS_TITLE_OFFSET));
    assert_eq!(x_title.rotation_deg, 0.0);

    let y_title = frame
        .texts
        .iter()
        .find(|text| text.text == "requests")
        .expect("y axis title");
    let expected_x = -(FRAME_BUFFER_RATIO * 400.0 + Y_AXIS_TITLE_GAP);
    assert!((y_title.x - expected_x).abs() <= 1e-9);
    assert_eq!(y_title.y, 200.0);
    assert_eq!(y_title.rotation_deg, 90.0);

    titled.render().expect("render");
    assert_eq!(titled.renderer().last_text_count, frame.texts.len());
}

#[test]
fn host_events_drive_the_same_transform_as_gesture_methods() {
    let mut by_event = engine(PlotConfig::default()).expect("engine init");
    let mut by_method = engine(PlotConfig::default()).expect("engine init");

    by_event.handle_event(ViewportEvent::Wheel {
        pointer: PointerPosition::new(300.0, 200.0),
        delta_y: -1.0,
    });
    by_event.handle_event(ViewportEvent::DragStart(PointerPosition::new(0.0, 0.0)));
    assert_eq!(
        by_event.view_transform().expect("created").mode(),
        InteractionMode::Dragging
    );
    by_event.handle_event(ViewportEvent::DragMove(PointerPosition::new(10.0, 4.0)));
    by_event.handle_event(ViewportEvent::DragEnd);

    by_method.wheel(300.0, 200.0, -1.0);
    by_method.drag_start(0.0, 0.0);
    by_method.drag_move(10.0, 4.0);
    by_method.drag_end();

    let view = by_event.view_transform().expect("created");
    assert_eq!(view.mode(), InteractionMode::Idle);
    assert!(view.scale() > 1.0);
    assert!(view.pan_x() > 0.0);
    assert_eq!(
        view.state(),
        by_method.view_transform().expect("created").state()
    );

    by_event.handle_event(ViewportEvent::Reset);
    assert!(by_event.view_transform().expect("created").is_identity());
}

#[test]
fn renderer_can_be_reclaimed_after_rendering() {
    let mut engine = engine(PlotConfig::default()).expect("engine init");
    engine
        .set_single_series(two_point_series())
        .expect("series");
    engine.render().expect("first render");
    engine.render().expect("second render");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_marker_count, 2);
}
