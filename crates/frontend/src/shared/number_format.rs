//! Number formatting for rendered inference results

/// Formats `value` with `decimals` digits after the point, like JavaScript's
/// `Number.prototype.toFixed`.
///
/// `{:.N}` rounds an exact tie to the even digit; `toFixed` rounds it away
/// from zero. A value is an exact tie at `N` digits only when
/// `value * 2^(N+1)` is an odd integer, so only those values take the
/// second path.
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_fixed;
///
/// assert_eq!(format_fixed(0.03125, 4), "0.0313");
/// assert_eq!(format_fixed(0.9876, 4), "0.9876");
/// ```
pub fn format_fixed(value: f64, decimals: u32) -> String {
    let precision = decimals as usize;
    if !is_exact_tie(value, decimals) {
        return format!("{:.*}", precision, value);
    }

    let unit = 10u64.pow(decimals);
    // Exact: a tie is odd / 2^(N+1), so the scaled value is a half-integer
    let rounded = (value.abs() * unit as f64).round() as u64;
    let sign = if value < 0.0 { "-" } else { "" };
    let integer = rounded / unit;
    if decimals == 0 {
        return format!("{}{}", sign, integer);
    }
    format!(
        "{}{}.{:0width$}",
        sign,
        integer,
        rounded % unit,
        width = precision
    )
}

fn is_exact_tie(value: f64, decimals: u32) -> bool {
    // Past this magnitude the scaled integer no longer fits the u64 path
    if !value.is_finite() || decimals > 15 || value.abs() >= 1e15 {
        return false;
    }
    let scaled = value * 2f64.powi(decimals as i32 + 1);
    scaled.fract() == 0.0 && (scaled / 2.0).fract() != 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(format_fixed(0.03125, 4), "0.0313");
        assert_eq!(format_fixed(0.15625, 4), "0.1563");
        assert_eq!(format_fixed(0.53125, 4), "0.5313");
        assert_eq!(format_fixed(0.96875, 4), "0.9688");
        assert_eq!(format_fixed(-0.03125, 4), "-0.0313");
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(2.5, 0), "3");
    }

    #[test]
    fn test_non_ties_keep_nearest_rounding() {
        assert_eq!(format_fixed(0.9876, 4), "0.9876");
        assert_eq!(format_fixed(0.0124, 4), "0.0124");
        assert_eq!(format_fixed(0.99987654, 4), "0.9999");
        assert_eq!(format_fixed(1.0, 4), "1.0000");
        assert_eq!(format_fixed(0.0, 4), "0.0000");
        // 0.00015 is not exactly representable, so it is not a tie
        assert_eq!(format_fixed(0.00015, 4), format!("{:.4}", 0.00015));
    }
}
