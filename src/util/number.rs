//! Compact rendering of large quantities such as ISK balances and PAP totals.

/// Magnitude thresholds, largest first, with the suffix appended to the scaled value.
const UNITS: [(f64, &str); 4] = [(1e12, "t"), (1e9, "b"), (1e6, "m"), (1e3, "k")];

/// Renders `num` compactly using thousand-based suffixes.
///
/// Values with a magnitude of at least one thousand are divided by the largest matching
/// unit, rounded to two decimals and stripped of trailing fractional zeros. Smaller values
/// are rendered as-is. The sign is kept and non-finite values are never scaled.
///
/// # Example
/// ```
/// use eden_names::util::humanize_number;
///
/// assert_eq!(humanize_number(999.0), "999");
/// assert_eq!(humanize_number(1_500_000.0), "1.5m");
/// assert_eq!(humanize_number(-2_000_000_000.0), "-2b");
/// ```
pub fn humanize_number(num: f64) -> String {
    if !num.is_finite() {
        return plain(num);
    }

    let abs = num.abs();

    for (scale, suffix) in UNITS {
        if abs >= scale {
            let scaled = format!("{:.2}", round_half_away(num / scale));
            return format!("{}{}", trim_fraction(&scaled), suffix);
        }
    }

    plain(num)
}

/// Rounds to two decimals with ties going away from zero.
///
/// `{:.2}` alone rounds exact ties to even (`1.125` becomes `1.12`).
fn round_half_away(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn trim_fraction(value: &str) -> &str {
    if value.contains('.') {
        value.trim_end_matches('0').trim_end_matches('.')
    } else {
        value
    }
}

fn plain(num: f64) -> String {
    if num.is_nan() {
        "NaN".to_string()
    } else if num.is_infinite() {
        let sign = if num < 0.0 { "-" } else { "" };
        format!("{}Infinity", sign)
    } else if num == 0.0 {
        // -0 renders as 0
        "0".to_string()
    } else {
        num.to_string()
    }
}
