//! Number formatting shared by every report.

/// Render an integer with comma thousands separators.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `numerator / denominator * 100`, or 0 when the denominator is zero.
pub fn percentage(numerator: i64, denominator: i64) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64 * 100.0
}

/// Two-decimal percentage with a `%` suffix.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Fixed-precision rendering with trailing zeros and any trailing `.` removed.
pub fn trim_coordinate(value: f64) -> String {
    let fixed = format!("{value:.6}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-45000), "-45,000");
        assert_eq!(group_thousands(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1, 4), 25.0);
        assert_eq!(format_percent(percentage(2500, 3400)), "73.53%");
        assert_eq!(format_percent(percentage(200, 3400)), "5.88%");
    }

    #[test]
    fn test_percentage_of_zero_total() {
        assert_eq!(percentage(10, 0), 0.0);
        assert_eq!(format_percent(percentage(0, 0)), "0.00%");
    }

    #[test]
    fn test_trim_coordinate() {
        assert_eq!(trim_coordinate(41.885737), "41.885737");
        assert_eq!(trim_coordinate(41.88574), "41.88574");
        assert_eq!(trim_coordinate(-87.6), "-87.6");
        assert_eq!(trim_coordinate(42.0), "42");
        assert_eq!(trim_coordinate(-0.0), "0");
    }

    proptest! {
        #[test]
        fn grouped_digits_parse_back(value in any::<i64>()) {
            let grouped = group_thousands(value);
            prop_assert_eq!(grouped.replace(',', "").parse::<i64>().unwrap(), value);
        }

        #[test]
        fn groups_after_the_first_have_three_digits(value in 0i64..i64::MAX) {
            let grouped = group_thousands(value);
            let mut parts = grouped.split(',');
            let head = parts.next().unwrap();
            prop_assert!(!head.is_empty() && head.len() <= 3);
            for part in parts {
                prop_assert_eq!(part.len(), 3);
            }
        }

        #[test]
        fn partition_shares_never_exceed_total(
            a in 0i64..1_000_000,
            b in 0i64..1_000_000,
            c in 0i64..1_000_000,
        ) {
            let total = a + b + c;
            let sum = percentage(a, total) + percentage(b, total) + percentage(c, total);
            prop_assert!(sum <= 100.0 + 1e-9);
        }
    }
}
