/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Rounds to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats a score in shortest round-trip form, always with a fractional part
/// (`40.0`, `66.67`).
pub fn format_score(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[50.0, 30.0]), 40.0);
        assert_eq!(mean(&[1.0, 2.0, 4.0]), 7.0 / 3.0);
    }

    #[test]
    fn test_round2_halves_go_up() {
        // 10.125 and 0.125 are exact in binary, so these are true halves
        assert_eq!(round2(10.125), 10.13);
        assert_eq!(round2(0.125), 0.13);
    }

    #[test]
    fn test_round2_repeating_decimals() {
        assert_eq!(round2(200.0 / 3.0), 66.67);
        assert_eq!(round2(100.0 / 3.0), 33.33);
        assert_eq!(round2(15.0), 15.0);
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(40.0), "40.0");
        assert_eq!(format_score(66.67), "66.67");
        assert_eq!(format_score(0.5), "0.5");
    }
}
