use criterion::{Criterion, criterion_group, criterion_main};
use plot_rs::api::{PlotConfig, PlotEngine};
use plot_rs::core::{Point, Series, SeriesSet, build_chart_domain};
use plot_rs::interaction::{PanZoomConfig, PointerPosition, ViewTransform};
use plot_rs::render::NullRenderer;
use std::hint::black_box;

fn wave_set(series_count: usize, points_per_series: usize) -> SeriesSet {
    (0..series_count)
        .map(|s| {
            (0..points_per_series)
                .map(|i| {
                    let t = i as f64;
                    Point::new(t * 0.5, (t * 0.01 + s as f64).sin() * 250.0 + 1_000.0)
                })
                .collect::<Series>()
        })
        .collect()
}

fn bench_chart_domain_10k(c: &mut Criterion) {
    let set = wave_set(4, 2_500);

    c.bench_function("chart_domain_10k", |b| {
        b.iter(|| {
            let _ = build_chart_domain(black_box(&set), black_box(600.0), black_box(400.0))
                .expect("domain should build");
        })
    });
}

fn bench_wheel_drag_sequence(c: &mut Criterion) {
    let config = PanZoomConfig::new(600.0, 400.0).with_pan_scale(1.3);

    c.bench_function("wheel_drag_sequence", |b| {
        b.iter(|| {
            let mut view = ViewTransform::new(config).expect("valid config");
            for i in 0..100_u32 {
                let _ = view.on_wheel(PointerPosition::new(300.0, 200.0), -1.0);
                view.on_drag_start(PointerPosition::new(f64::from(i), 100.0));
                let _ = view.on_drag_move(PointerPosition::new(f64::from(i) + 7.0, 93.0));
                view.on_drag_end();
            }
            black_box(view.state())
        })
    });
}

fn bench_engine_render_and_snapshot(c: &mut Criterion) {
    let mut engine =
        PlotEngine::new(NullRenderer::default(), PlotConfig::default()).expect("engine init");
    engine
        .set_series(wave_set(3, 1_000))
        .expect("series should be accepted");

    c.bench_function("engine_render_3k", |b| {
        b.iter(|| engine.render().expect("render should succeed"))
    });

    c.bench_function("engine_snapshot_json_3k", |b| {
        b.iter(|| {
            let _ = black_box(engine.snapshot_json_pretty().expect("snapshot json"));
        })
    });
}

criterion_group!(
    benches,
    bench_chart_domain_10k,
    bench_wheel_drag_sequence,
    bench_engine_render_and_snapshot
);
criterion_main!(benches);
