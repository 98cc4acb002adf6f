// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::Operand;

/// Stringifies a computed value back into entry text.
///
/// Uses the shortest round-trip form (`198`, not `198.0`); non-finite values
/// come out as `inf`/`-inf`/`NaN` and are displayed as-is.
pub fn value_to_digits(value: f64) -> String {
    format!("{value}")
}

/// Formats entry text for the display: the integer part is regrouped with
/// comma thousands separators, the fractional part (everything after the
/// first `.`) is reappended untouched.
///
/// The integer part is normalized through a float parse, so `00012` shows as
/// `12`. An unparsable integer part (empty entry, bare `.`) formats as the
/// empty string, which keeps live typing of `.5` rendering as `.5`.
pub fn format_digits(digits: &str) -> String {
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let mut formatted = match integer.parse::<f64>() {
        Ok(value) if value.is_finite() => group_thousands(value),
        // inf/NaN pass through ungrouped.
        Ok(_) => integer.to_owned(),
        Err(_) => String::new(),
    };

    if let Some(fraction) = fraction {
        formatted.push('.');
        formatted.push_str(fraction);
    }

    formatted
}

/// Formats an operand for one display line; `Empty` formats as `""`.
pub fn format_operand(operand: &Operand) -> String {
    format_digits(&operand.digits())
}

fn group_thousands(value: f64) -> String {
    let mut buffer = itoa::Buffer::new();
    let expanded;
    // Comfortably inside the i64 range; larger integer parts fall back to
    // plain zero-precision float formatting.
    let plain = if value.abs() < 9.0e18 {
        buffer.format(value as i64)
    } else {
        expanded = format!("{value:.0}");
        expanded.as_str()
    };
    // An integer part of `-0` parses as negative zero and the i64 cast drops
    // the sign; results in (-1, 0) must still display negative.
    if value.is_sign_negative() && !plain.starts_with('-') {
        let mut signed = String::with_capacity(plain.len() + 1);
        signed.push('-');
        signed.push_str(plain);
        return group_digit_run(&signed);
    }
    group_digit_run(plain)
}

fn group_digit_run(digits: &str) -> String {
    let (sign, run) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + run.len() / 3);
    grouped.push_str(sign);

    let lead = run.len() % 3;
    for (idx, ch) in run.char_indices() {
        if idx != 0 && idx % 3 == lead {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{format_digits, value_to_digits};
    use crate::format::format_operand;
    use crate::model::Operand;

    #[rstest]
    #[case("", "")]
    #[case("7", "7")]
    #[case("123", "123")]
    #[case("1234", "1,234")]
    #[case("12345", "12,345")]
    #[case("1234567", "1,234,567")]
    #[case("1234.5", "1,234.5")]
    #[case("1234.500", "1,234.500")]
    #[case(".", ".")]
    #[case(".5", ".5")]
    #[case("5.", "5.")]
    #[case("00012", "12")]
    fn groups_entry_text(#[case] digits: &str, #[case] expected: &str) {
        assert_eq!(format_digits(digits), expected);
    }

    #[test]
    fn fraction_is_never_grouped_or_rounded() {
        assert_eq!(format_digits("1234.56789"), "1,234.56789");
    }

    #[test]
    fn negative_integer_parts_group_after_the_sign() {
        assert_eq!(format_digits("-1234"), "-1,234");
        assert_eq!(format_digits("-1234.5"), "-1,234.5");
    }

    #[test]
    fn results_between_minus_one_and_zero_keep_their_sign() {
        assert_eq!(format_digits(&value_to_digits(-0.5)), "-0.5");
        assert_eq!(format_digits("-0.25"), "-0.25");
        assert_eq!(format_digits("-0"), "-0");
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert_eq!(format_digits(&value_to_digits(f64::INFINITY)), "inf");
        assert_eq!(format_digits(&value_to_digits(f64::NEG_INFINITY)), "-inf");
        assert_eq!(format_digits(&value_to_digits(f64::NAN)), "NaN");
    }

    #[test]
    fn value_stringification_is_shortest_form() {
        assert_eq!(value_to_digits(198.0), "198");
        assert_eq!(value_to_digits(0.5), "0.5");
        assert_eq!(value_to_digits(-3.25), "-3.25");
    }

    #[test]
    fn operands_format_through_their_entry_text() {
        assert_eq!(format_operand(&Operand::Empty), "");
        assert_eq!(format_operand(&Operand::Digits("1234".to_owned())), "1,234");
        assert_eq!(format_operand(&Operand::Value(1234.5)), "1,234.5");
    }

    #[test]
    fn huge_integer_parts_group_without_exponent() {
        let formatted = format_digits(&value_to_digits(1e21));
        assert!(!formatted.contains('e'));
        assert_eq!(formatted, "1,000,000,000,000,000,000,000");
    }
}
