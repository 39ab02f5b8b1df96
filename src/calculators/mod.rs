// 🧮 Multi-Calculator - Pure computation core
// Each calculator maps raw form-field strings to a tagged result value.
// No UI awareness, no side effects; safe to call on every keystroke.

pub mod basic;
pub mod drg;

/// Parse a day-count field. Empty or non-integer input is rejected.
pub(crate) fn parse_days(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Parse a rate/factor field. Rejects empty, non-numeric and non-finite input.
pub(crate) fn parse_decimal(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    if value.is_finite() {
        Some(value)
    } else {
        None
    }
}

/// Round to 2 decimal places (currency amounts).
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 4 decimal places (cost weights).
pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_days_accepts_whitespace() {
        assert_eq!(parse_days(" 6 "), Some(6));
        assert_eq!(parse_days("0"), Some(0));
        assert_eq!(parse_days("-3"), Some(-3));
    }

    #[test]
    fn test_parse_days_rejects_garbage() {
        assert_eq!(parse_days(""), None);
        assert_eq!(parse_days("abc"), None);
        assert_eq!(parse_days("6.5"), None);
    }

    #[test]
    fn test_parse_decimal_rejects_non_finite() {
        assert_eq!(parse_decimal("inf"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("4206.51"), Some(4206.51));
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round2(643.59603), 643.60);
        assert_eq!(round4(1.58899), 1.589);
    }
}
