//! Thousands-grouped number formatting for the report.

/// Format `value` with `decimals` fixed decimal places and comma-grouped
/// thousands in the integer part, e.g. `1337.237` -> `"1,337.237"`.
///
/// The sign is preserved; non-finite values render as `inf`/`NaN` ungrouped.
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let fixed = format!("{value:.decimals$}");
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 && digit.is_ascii_digit() {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_integer_part() {
        assert_eq!(group_thousands(130_000_000_000.0, 0), "130,000,000,000");
        assert_eq!(group_thousands(1337.2373, 3), "1,337.237");
        assert_eq!(group_thousands(97_215_353.4, 0), "97,215,353");
    }

    #[test]
    fn test_small_values_ungrouped() {
        assert_eq!(group_thousands(0.0, 0), "0");
        assert_eq!(group_thousands(999.0, 0), "999");
        assert_eq!(group_thousands(42.2, 1), "42.2");
    }

    #[test]
    fn test_negative_values_keep_sign() {
        assert_eq!(group_thousands(-1234567.0, 0), "-1,234,567");
        assert_eq!(group_thousands(-12.5, 2), "-12.50");
    }

    #[test]
    fn test_rounding_carries_into_grouping() {
        assert_eq!(group_thousands(999.6, 0), "1,000");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(group_thousands(f64::INFINITY, 0), "inf");
        assert_eq!(group_thousands(f64::NAN, 3), "NaN");
    }
}
