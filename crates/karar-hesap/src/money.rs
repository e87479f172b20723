//! Turkish locale amount parsing and currency formatting.
//!
//! Amounts travel through the engine as [`Decimal`] values; rounding to two
//! fractional digits only happens when an amount is rendered into decision text.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Rendered when an amount cannot be formatted.
pub const FALLBACK_CURRENCY: &str = "0,00";

const CURRENCY_SUFFIX: &str = "TL";
// Four digit integers stay ungrouped ("6831,00"), longer ones are grouped.
const MIN_GROUPED_DIGITS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Geçersiz sayı formatı: {0}")]
    InvalidNumberFormat(String),
}

/// Parses a `1.234.567,89` style string. Blank input is zero.
pub fn parse_amount(text: &str) -> Result<Decimal, AmountError> {
    let trimmed = text.trim();
    let trimmed = trimmed
        .strip_suffix(CURRENCY_SUFFIX)
        .unwrap_or(trimmed)
        .trim_end();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let cleaned = trimmed.replace('.', "").replacen(',', ".", 1);
    let numeric = cleaned
        .chars()
        .enumerate()
        .all(|(idx, ch)| ch.is_ascii_digit() || ch == '.' || (idx == 0 && (ch == '-' || ch == '+')));
    if !numeric {
        return Err(AmountError::InvalidNumberFormat(text.to_string()));
    }

    Decimal::from_str(&cleaned).map_err(|_| AmountError::InvalidNumberFormat(text.to_string()))
}

/// Like [`parse_amount`], treating an absent field as zero.
pub fn parse_optional_amount(text: Option<&str>) -> Result<Decimal, AmountError> {
    text.map_or(Ok(Decimal::ZERO), parse_amount)
}

/// Formats with exactly two fractional digits, `.` grouping and `,` decimals.
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.2}", rounded.abs());

    let Some((integer, fraction)) = digits.split_once('.') else {
        return FALLBACK_CURRENCY.to_string();
    };

    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        formatted.push('-');
    }
    formatted.push_str(&group_thousands(integer));
    formatted.push(',');
    formatted.push_str(fraction);
    formatted
}

/// Formats a floating point amount; NaN, infinities and out of range values
/// render as [`FALLBACK_CURRENCY`].
pub fn format_currency_f64(value: f64) -> String {
    match Decimal::from_f64(value) {
        Some(amount) => format_currency(amount),
        None => FALLBACK_CURRENCY.to_string(),
    }
}

/// Renders a percentage or coefficient without trailing zeros, `,` as separator.
pub fn format_rate(value: Decimal) -> String {
    value.normalize().to_string().replace('.', ",")
}

fn group_thousands(integer: &str) -> String {
    if integer.len() < MIN_GROUPED_DIGITS {
        return integer.to_string();
    }

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_turkish_grouping_and_decimal_comma() {
        assert_eq!(parse_amount("1.234,56").unwrap(), dec!(1234.56));
        assert_eq!(parse_amount("600.822.115,84").unwrap(), dec!(600822115.84));
        assert_eq!(parse_amount("123,45").unwrap(), dec!(123.45));
        assert_eq!(parse_amount("100000").unwrap(), dec!(100000));
    }

    #[test]
    fn blank_and_absent_input_is_zero() {
        assert_eq!(parse_amount("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("   ").unwrap(), Decimal::ZERO);
        assert_eq!(parse_optional_amount(None).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn tolerates_currency_suffix_and_whitespace() {
        assert_eq!(parse_amount(" 615,40 TL ").unwrap(), dec!(615.40));
        assert_eq!(parse_amount("0,00 TL").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn rejects_non_numeric_text() {
        for text in ["abc", "12a", "1,2,3", "1_000", "--5", "-"] {
            match parse_amount(text) {
                Err(AmountError::InvalidNumberFormat(raw)) => assert_eq!(raw, text),
                other => panic!("expected format error for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn formats_with_two_digits_and_grouping() {
        assert_eq!(format_currency(dec!(0)), "0,00");
        assert_eq!(format_currency(dec!(615.4)), "615,40");
        assert_eq!(format_currency(dec!(6831)), "6831,00");
        assert_eq!(format_currency(dec!(12345)), "12.345,00");
        assert_eq!(format_currency(dec!(1234567.891)), "1.234.567,89");
        assert_eq!(format_currency(dec!(5004.37)), "5004,37");
    }

    #[test]
    fn rounds_midpoints_away_from_zero() {
        assert_eq!(format_currency(dec!(0.005)), "0,01");
        assert_eq!(format_currency(dec!(2.675)), "2,68");
        assert_eq!(format_currency(dec!(-1500.125)), "-1500,13");
        assert_eq!(format_currency(dec!(-0.001)), "0,00");
    }

    #[test]
    fn non_finite_floats_fall_back() {
        assert_eq!(format_currency_f64(f64::NAN), FALLBACK_CURRENCY);
        assert_eq!(format_currency_f64(f64::INFINITY), FALLBACK_CURRENCY);
        assert_eq!(format_currency_f64(1234.5), "1234,50");
    }

    #[test]
    fn formatted_amounts_parse_back() {
        for value in [dec!(0), dec!(0.01), dec!(615.40), dec!(6831), dec!(98765.43), dec!(12345678.9)] {
            assert_eq!(parse_amount(&format_currency(value)).unwrap(), value);
        }
    }

    #[test]
    fn rates_drop_trailing_zeros() {
        assert_eq!(format_rate(dec!(30)), "30");
        assert_eq!(format_rate(dec!(12.50)), "12,5");
        assert_eq!(format_rate(dec!(0.71491)), "0,71491");
    }
}
