/// Exponents with `|order| <= DEFAULT_PLAIN_ORDER_LIMIT` are rendered as plain
/// decimals instead of `<mantissa>e<order>`.
pub const DEFAULT_PLAIN_ORDER_LIMIT: u32 = 3;

/// Formats one tick value for its axis.
///
/// Small exponents are folded back into the value so labels read as plain
/// decimals; larger ones use a mantissa with an `e<order>` suffix. Zero is
/// always rendered as `"0"`; non-finite values as `"NaN"`, `"inf"` or `"-inf"`.
#[must_use]
pub fn format_tick_label(value: f64, order_of_magnitude: i32, precision: u8) -> String {
    format_tick_label_with(
        value,
        order_of_magnitude,
        precision,
        Some(DEFAULT_PLAIN_ORDER_LIMIT),
    )
}

/// Same as [`format_tick_label`] with an explicit folding threshold.
///
/// `None` never folds, so every non-zero order gets an exponent suffix.
#[must_use]
pub fn format_tick_label_with(
    value: f64,
    order_of_magnitude: i32,
    precision: u8,
    plain_order_limit: Option<u32>,
) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fold = plain_order_limit.is_some_and(|limit| order_of_magnitude.unsigned_abs() <= limit);
    let (mantissa, order, decimals) = if fold {
        let decimals = (i32::from(precision) - order_of_magnitude).max(0);
        (value, 0, decimals as usize)
    } else {
        (
            value / 10_f64.powi(order_of_magnitude),
            order_of_magnitude,
            usize::from(precision),
        )
    };

    if mantissa == 0.0 {
        return "0".to_owned();
    }

    let text = format!("{mantissa:.decimals$}");
    let text = normalize_negative_zero(text);
    if order != 0 {
        format!("{text}e{order}")
    } else {
        text
    }
}

// Tiny negatives can round to "-0.00"; render them without the sign.
fn normalize_negative_zero(text: String) -> String {
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|ch| ch == '0' || ch == '.') => rest.to_owned(),
        _ => text,
    }
}
