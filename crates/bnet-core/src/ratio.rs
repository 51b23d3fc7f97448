//! Rounded ratios with an explicit "no data" result.
//!
//! Win rates and collection percentages divide by counts that are zero for
//! new characters and empty ladders. These helpers return `None` instead of
//! producing NaN or infinity.

/// Round to `places` decimal places, halves away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

/// `part / whole * 100`, rounded to two decimals.
#[allow(clippy::cast_precision_loss)]
pub fn percentage(part: u64, whole: u64) -> Option<f64> {
    if whole == 0 {
        return None;
    }
    Some(round_to(part as f64 * 100.0 / whole as f64, 2))
}

/// Arithmetic mean, rounded to two decimals.
#[allow(clippy::cast_precision_loss)]
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_u64), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        return None;
    }
    Some(round_to(sum / count as f64, 2))
}
