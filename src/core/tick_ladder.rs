/// Smallest magnitude considered by [`order_of_magnitude`]; guards `log(0)`.
pub const MIN_MAGNITUDE: f64 = 1.0e-6;

/// `delta / step` must stay strictly below this when choosing a step.
pub const MAX_TICK_INTERVALS: f64 = 9.0;

/// Candidate step multipliers paired with the label precision each needs.
pub const STEP_LADDER: [(f64, u8); 7] = [
    (1.0, 1),
    (2.0, 1),
    (2.5, 2),
    (5.0, 1),
    (10.0, 1),
    (20.0, 1),
    (25.0, 2),
];

/// Base-10 exponent `e` such that `|value| / 10^e` lies in `[1, 10)`.
#[must_use]
pub fn order_of_magnitude(value: f64) -> i32 {
    let mut normalized = value.abs().max(MIN_MAGNITUDE);
    if !normalized.is_finite() {
        return f64::MAX_10_EXP;
    }

    let mut order = 0;
    while normalized >= 10.0 {
        order += 1;
        normalized /= 10.0;
    }
    while normalized < 1.0 {
        order -= 1;
        normalized *= 10.0;
    }
    order
}

/// Step chosen from [`STEP_LADDER`] for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickStep {
    pub step: f64,
    pub precision: u8,
    pub ladder_index: usize,
}

/// Walks the ladder upward until `delta / step < MAX_TICK_INTERVALS`.
///
/// A range spanning exactly nine base units (`0..9`) therefore gets step 2
/// and five intervals rather than nine unit ones.
///
/// `delta` must be finite and `> 0`. The last rung is returned if nothing
/// fits, which only happens for pathological inputs.
#[must_use]
pub fn select_tick_step(delta: f64) -> TickStep {
    let base = 10_f64.powi(order_of_magnitude(delta));
    let (ladder_index, (multiplier, precision)) = STEP_LADDER
        .iter()
        .copied()
        .enumerate()
        .find(|(_, (multiplier, _))| delta / (base * multiplier) < MAX_TICK_INTERVALS)
        .unwrap_or((STEP_LADDER.len() - 1, STEP_LADDER[STEP_LADDER.len() - 1]));

    TickStep {
        step: base * multiplier,
        precision,
        ladder_index,
    }
}

/// Next rung above `current`, continuing into the following decade after
/// the last ladder entry (`25 -> 50 -> 100 -> 200 -> 250 -> 500 ...`).
#[must_use]
pub fn coarser_tick_step(current: TickStep) -> TickStep {
    let (multiplier, _) = STEP_LADDER[current.ladder_index];
    let base = current.step / multiplier;
    let (base, ladder_index) = if current.ladder_index + 1 < STEP_LADDER.len() {
        (base, current.ladder_index + 1)
    } else {
        // 25 is the last rung; 50 is rung 3 of the next decade.
        (base * 10.0, 3)
    };
    let (multiplier, precision) = STEP_LADDER[ladder_index];

    TickStep {
        step: base * multiplier,
        precision,
        ladder_index,
    }
}

#[cfg(test)]
mod tests {
    use super::{coarser_tick_step, order_of_magnitude, select_tick_step};

    #[test]
    fn order_of_magnitude_normalizes_into_one_to_ten() {
        assert_eq!(order_of_magnitude(1.0), 0);
        assert_eq!(order_of_magnitude(9.99), 0);
        assert_eq!(order_of_magnitude(10.0), 1);
        assert_eq!(order_of_magnitude(1_234.0), 3);
        assert_eq!(order_of_magnitude(0.5), -1);
        assert_eq!(order_of_magnitude(-0.002), -3);
    }

    #[test]
    fn order_of_magnitude_floors_zero() {
        let order = order_of_magnitude(0.0);
        assert!((-7..=-6).contains(&order), "order={order}");
    }

    #[test]
    fn step_stays_within_nine_intervals() {
        for delta in [1.0, 1.5, 4.2, 9.0, 9.09, 9.99, 0.37, 123.0, 87_000.0] {
            let step = select_tick_step(delta);
            assert!(delta / step.step <= 9.0, "delta={delta} step={}", step.step);
        }
    }

    #[test]
    fn step_for_unit_and_near_decade_deltas() {
        assert_eq!(select_tick_step(1.0).step, 1.0);
        assert_eq!(select_tick_step(9.09).step, 2.0);
        assert_eq!(select_tick_step(9.09).precision, 1);
        assert_eq!(select_tick_step(9.0).step, 2.0);
        assert_eq!(select_tick_step(4.5).step, 1.0);
        assert!((select_tick_step(0.9).step - 0.2).abs() <= 1e-12);
    }

    #[test]
    fn coarser_steps_climb_through_decades() {
        let mut step = select_tick_step(1.0);
        let mut seen = Vec::new();
        for _ in 0..9 {
            seen.push(step.step);
            step = coarser_tick_step(step);
        }
        let expected = [1.0, 2.0, 2.5, 5.0, 10.0, 20.0, 25.0, 50.0, 100.0];
        for (got, want) in seen.iter().zip(expected) {
            assert!((got - want).abs() <= 1e-9, "got={got} want={want}");
        }
        assert!(seen.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
