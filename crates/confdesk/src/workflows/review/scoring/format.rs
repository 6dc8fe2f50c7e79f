/// Half-up rounding at the given decimal precision.
///
/// Decimal constants such as 2.345 are stored a hair below their true
/// midpoint in binary, so the scaled value is nudged by one ulp before
/// rounding to keep the documented half-up behavior.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    let nudged = if scaled >= 0.0 {
        scaled * (1.0 + f64::EPSILON)
    } else {
        scaled * (1.0 - f64::EPSILON)
    };
    nudged.round() / factor
}

/// Renders an average score for display: `"-"` when no score exists,
/// otherwise at most two decimals with no forced trailing zeros.
pub fn format_score(value: Option<f64>) -> String {
    match value {
        Some(score) => {
            let rounded = round_to(score, 2);
            if rounded.fract() == 0.0 {
                format!("{}", rounded as i64)
            } else {
                format!("{}", rounded)
            }
        }
        None => "-".to_string(),
    }
}

/// Renders a percentage rounded to the nearest whole number.
pub fn format_percent(value: f64) -> String {
    format!("{}%", round_to(value, 0) as i64)
}
