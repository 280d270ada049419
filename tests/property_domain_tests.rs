use plot_rs::core::{Axis, MAX_TICK_COUNT, Point, Series, SeriesSet, build_axis_domain};
use proptest::prelude::*;

fn series_set_strategy() -> impl Strategy<Value = SeriesSet> {
    prop::collection::vec(
        prop::collection::vec((-1_000_000.0f64..1_000_000.0, -1_000.0f64..1_000.0), 1..40),
        1..4,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|points| {
                points
                    .into_iter()
                    .map(|(x, y)| Point::new(x, y))
                    .collect::<Series>()
            })
            .collect()
    })
}

fn data_extent(set: &SeriesSet, axis: Axis) -> (f64, f64) {
    set.iter()
        .flat_map(Series::iter)
        .map(|point| point.coordinate(axis))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
            (min.min(value), max.max(value))
        })
}

proptest! {
    #[test]
    fn domain_contains_data_and_ticks_span_it(
        set in series_set_strategy(),
        expand in any::<bool>(),
        display_size in 1.0f64..4_000.0
    ) {
        for axis in [Axis::X, Axis::Y] {
            let domain = build_axis_domain(&set, axis, expand, display_size).expect("domain");
            let (data_min, data_max) = data_extent(&set, axis);

            prop_assert!(domain.min() <= data_min);
            prop_assert!(data_max <= domain.max());

            let ticks = domain.ticks();
            prop_assert!(ticks.len() >= 2);
            prop_assert!(ticks.len() <= MAX_TICK_COUNT);
            prop_assert_eq!(ticks[0], domain.min());
            prop_assert_eq!(ticks[ticks.len() - 1], domain.max());
            prop_assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
            prop_assert!(ticks.iter().all(|tick| tick.is_finite()));

            prop_assert_eq!(domain.map(domain.min()), 0.0);
            prop_assert_eq!(domain.map(domain.max()), display_size);
        }
    }

    #[test]
    fn ticks_stay_distinct_at_large_magnitudes(
        base in -1.0e18f64..1.0e18,
        span in prop_oneof![Just(0.0f64), 0.0f64..64.0, 0.0f64..1.0e6],
        expand in any::<bool>()
    ) {
        let set = SeriesSet::single(Series::new(vec![
            Point::new(base, base),
            Point::new(base + span, base),
        ]));

        for axis in [Axis::X, Axis::Y] {
            let domain = build_axis_domain(&set, axis, expand, 500.0).expect("domain");
            let (data_min, data_max) = data_extent(&set, axis);
            let ticks = domain.ticks();

            prop_assert!(domain.min() <= data_min && data_max <= domain.max());
            prop_assert!((2..=MAX_TICK_COUNT).contains(&ticks.len()), "ticks={:?}", ticks);
            prop_assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]), "ticks={:?}", ticks);
            if data_min == data_max && data_min + 1.0 == data_min {
                prop_assert_eq!(ticks.len(), 2);
            }
        }
    }

    #[test]
    fn step_never_exceeds_nine_intervals_of_raw_range(
        low in -10_000.0f64..10_000.0,
        span in 0.001f64..10_000.0
    ) {
        let set = SeriesSet::single(Series::new(vec![
            Point::new(low, 0.0),
            Point::new(low + span, 0.0),
        ]));
        let domain = build_axis_domain(&set, Axis::X, false, 100.0).expect("domain");

        prop_assert!((domain.max() - domain.min()) / domain.step() > 0.5);
        prop_assert!(span / domain.step() <= 9.0 + 1e-9);
    }

    #[test]
    fn building_is_deterministic(set in series_set_strategy()) {
        let first = build_axis_domain(&set, Axis::Y, true, 400.0).expect("first");
        let second = build_axis_domain(&set, Axis::Y, true, 400.0).expect("second");
        prop_assert_eq!(first, second);
    }
}
