//! Numeric values of numeric tokens
//!
//! The recognizers of numeric kinds only admit digits, an optional leading minus, one
//! decimal point or one slash, so parsing the matched text cannot fail. Fraction parts
//! too long for the target type saturate.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericValue {
    Decimal(f64),
    Fraction { numerator: i64, denominator: u64 },
}

impl NumericValue {
    pub fn parse(text: &str) -> NumericValue {
        match text.split_once('/') {
            Some((numerator, denominator)) => NumericValue::Fraction {
                numerator: signed_digits(numerator),
                denominator: saturating_digits(denominator),
            },
            // f64 parsing rounds correctly and turns huge values into infinity.
            None => NumericValue::Decimal(text.parse().unwrap_or_else(|_| {
                let whole = text.split('.').next().unwrap_or(text);
                let value = saturating_digits(whole) as f64;
                if text.starts_with('-') {
                    -value
                } else {
                    value
                }
            })),
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            NumericValue::Decimal(value) => value,
            NumericValue::Fraction {
                numerator,
                denominator,
            } => {
                if denominator == 0 {
                    f64::NAN
                } else {
                    numerator as f64 / denominator as f64
                }
            }
        }
    }
}

fn saturating_digits(text: &str) -> u64 {
    text.bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u64::from(digit - b'0'))
        })
}

fn signed_digits(text: &str) -> i64 {
    match text.strip_prefix('-') {
        Some(digits) => {
            let magnitude = saturating_digits(digits);
            i64::try_from(magnitude).map_or(i64::MIN, |value| -value)
        }
        None => i64::try_from(saturating_digits(text)).unwrap_or(i64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(NumericValue::parse("42"), NumericValue::Decimal(42.0));
        assert_eq!(NumericValue::parse("-3"), NumericValue::Decimal(-3.0));
        assert_eq!(NumericValue::parse("1.25"), NumericValue::Decimal(1.25));
        assert_eq!(NumericValue::parse("0.3"), NumericValue::Decimal(0.3));
        assert_eq!(NumericValue::parse("-2.1"), NumericValue::Decimal(-2.1));
    }

    #[test]
    fn test_parse_fraction() {
        let value = NumericValue::parse("3/4");
        assert_eq!(
            value,
            NumericValue::Fraction {
                numerator: 3,
                denominator: 4
            }
        );
        assert!((value.as_f64() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_huge_numbers_saturate() {
        let value = NumericValue::parse("99999999999999999999999999/1");
        assert_eq!(
            value,
            NumericValue::Fraction {
                numerator: i64::MAX,
                denominator: 1
            }
        );
        assert_eq!(
            NumericValue::parse("-99999999999999999999999999/1"),
            NumericValue::Fraction {
                numerator: i64::MIN,
                denominator: 1
            }
        );
    }

    #[test]
    fn test_negative_fraction_keeps_its_sign() {
        let value = NumericValue::parse("-1/2");
        assert_eq!(
            value,
            NumericValue::Fraction {
                numerator: -1,
                denominator: 2
            }
        );
        assert_eq!(value.as_f64(), -0.5);
    }

    #[test]
    fn test_zero_denominator_is_nan() {
        assert!(NumericValue::parse("1/0").as_f64().is_nan());
    }
}
