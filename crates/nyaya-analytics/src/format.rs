//! Number rendering for tables and result cards.

use nyaya_core::enums::NumberGrouping;

/// Thousands-grouped count, e.g. `1,234,567`.
#[must_use]
pub fn format_count(value: u64) -> String {
    format_count_with(value, NumberGrouping::Western)
}

/// Grouped count in the given convention. Indian grouping splits the last
/// three digits and then pairs: `12,34,567`.
#[must_use]
pub fn format_count_with(value: u64, grouping: NumberGrouping) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 2);

    for (i, ch) in digits.chars().enumerate() {
        let remaining = len - i;
        if i > 0 && separator_before(remaining, grouping) {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

const fn separator_before(remaining: usize, grouping: NumberGrouping) -> bool {
    match grouping {
        NumberGrouping::Western => remaining % 3 == 0,
        NumberGrouping::Indian => remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0),
    }
}

/// Confidence fraction as a percent with one decimal: `0.8734` -> `87.3%`.
///
/// Scores outside `[0, 1]` are rendered as received. Non-finite scores
/// render as `0.0%`.
#[must_use]
pub fn format_confidence(score: f64) -> String {
    if !(0.0..=1.0).contains(&score) {
        tracing::debug!(score, "confidence score outside [0, 1]");
    }
    let score = if score.is_finite() { score } else { 0.0 };
    format!("{:.1}%", score * 100.0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1_000, "1,000")]
    #[case(1_234_567, "1,234,567")]
    #[case(u64::MAX, "18,446,744,073,709,551,615")]
    fn western(#[case] value: u64, #[case] expected: &str) {
        assert_eq!(format_count(value), expected);
    }

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1_000, "1,000")]
    #[case(100_000, "1,00,000")]
    #[case(1_234_567, "12,34,567")]
    #[case(3_389_925, "33,89,925")]
    fn indian(#[case] value: u64, #[case] expected: &str) {
        assert_eq!(format_count_with(value, NumberGrouping::Indian), expected);
    }

    #[rstest]
    #[case(0.8734, "87.3%")]
    #[case(1.0, "100.0%")]
    #[case(0.0, "0.0%")]
    #[case(f64::NAN, "0.0%")]
    #[case(f64::INFINITY, "0.0%")]
    #[case(1.3, "130.0%")]
    #[case(-0.25, "-25.0%")]
    fn confidence(#[case] score: f64, #[case] expected: &str) {
        assert_eq!(format_confidence(score), expected);
    }
}
