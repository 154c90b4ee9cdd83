//! Locale-aware number formatting for display.
//!
//! Formatting is applied to already-computed values only; nothing here feeds
//! back into the statistics.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thousands::{Separable as _, SeparatorPolicy, policies};

/// Supported display locales.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Locale {
    /// `1.234,56`
    #[default]
    #[display("pt-BR")]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// `1,234.56`
    #[display("en-US")]
    #[serde(rename = "en-US")]
    EnUs,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Unsupported locale '{tag}' (expected pt-BR or en-US)")]
pub struct ParseLocaleError {
    tag: String,
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Self::PtBr),
            "en-us" | "en" => Ok(Self::EnUs),
            _ => Err(ParseLocaleError { tag: s.to_owned() }),
        }
    }
}

impl Locale {
    fn group_policy(self) -> SeparatorPolicy<'static> {
        match self {
            Locale::PtBr => policies::DOT_SEPARATOR,
            Locale::EnUs => policies::COMMA_SEPARATOR,
        }
    }

    fn decimal_mark(self) -> char {
        match self {
            Locale::PtBr => ',',
            Locale::EnUs => '.',
        }
    }
}

/// Display options passed along with each rendering call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Maximum number of fraction digits.
    pub precision: usize,
    pub locale: Locale,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: 2,
            locale: Locale::default(),
        }
    }
}

impl DisplayConfig {
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        format_number(value, self.locale, self.precision)
    }
}

/// Formats `value` with thousands grouping and at most `precision` fraction
/// digits. Trailing zeros in the fraction are removed.
///
/// # Examples
///
/// ```
/// # use fipe_catalog::format::{Locale, format_number};
/// assert_eq!(format_number(1234567.891, Locale::PtBr, 2), "1.234.567,89");
/// assert_eq!(format_number(1234567.891, Locale::EnUs, 2), "1,234,567.89");
/// assert_eq!(format_number(42.5, Locale::PtBr, 2), "42,5");
/// assert_eq!(format_number(f64::NAN, Locale::PtBr, 2), "NaN");
/// ```
#[must_use]
pub fn format_number(value: f64, locale: Locale, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_owned();
    }

    let fixed = format!("{:.precision$}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    let mut out = String::new();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&int_part.separate_by_policy(locale.group_policy()));
    if !frac_part.is_empty() {
        out.push(locale.decimal_mark());
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    mod format_number {
        use super::*;

        #[test]
        fn test_grouping() {
            assert_eq!(format_number(0.0, Locale::PtBr, 2), "0");
            assert_eq!(format_number(999.0, Locale::PtBr, 2), "999");
            assert_eq!(format_number(1000.0, Locale::PtBr, 2), "1.000");
            assert_eq!(format_number(123_456.0, Locale::EnUs, 2), "123,456");
            assert_eq!(format_number(1_000_000.0, Locale::EnUs, 0), "1,000,000");
        }

        #[test]
        fn test_fraction_digits_are_never_grouped() {
            assert_eq!(format_number(1234.5678, Locale::PtBr, 4), "1.234,5678");
            assert_eq!(format_number(1234.5678, Locale::EnUs, 4), "1,234.5678");
            assert_eq!(format_number(0.123_456, Locale::EnUs, 6), "0.123456");
            assert_eq!(
                format_number(-9_876_543.21, Locale::PtBr, 2),
                "-9.876.543,21"
            );
        }

        #[test]
        fn test_precision_rounds_and_trims() {
            assert_eq!(format_number(3.14159, Locale::PtBr, 2), "3,14");
            assert_eq!(format_number(3.14159, Locale::PtBr, 4), "3,1416");
            assert_eq!(format_number(2.999, Locale::EnUs, 2), "3");
            assert_eq!(format_number(10.10, Locale::EnUs, 2), "10.1");
            assert_eq!(format_number(7.6, Locale::EnUs, 0), "8");
        }

        #[test]
        fn test_negative_values() {
            assert_eq!(format_number(-1234.5, Locale::PtBr, 2), "-1.234,5");
            assert_eq!(format_number(-0.001, Locale::PtBr, 2), "0");
        }

        #[test]
        fn test_non_finite() {
            assert_eq!(format_number(f64::NAN, Locale::EnUs, 2), "NaN");
            assert_eq!(format_number(f64::INFINITY, Locale::EnUs, 2), "∞");
            assert_eq!(format_number(f64::NEG_INFINITY, Locale::PtBr, 2), "-∞");
        }
    }

    mod locale {
        use super::*;

        #[test]
        fn test_parse() {
            assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::PtBr);
            assert_eq!("pt_br".parse::<Locale>().unwrap(), Locale::PtBr);
            assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::EnUs);
            assert!("fr-FR".parse::<Locale>().is_err());
        }

        #[test]
        fn test_display_round_trips_through_parse() {
            for locale in [Locale::PtBr, Locale::EnUs] {
                assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
            }
        }

        #[test]
        fn test_default_display_config() {
            let config = DisplayConfig::default();
            assert_eq!(config.precision, 2);
            assert_eq!(config.locale, Locale::PtBr);
            assert_eq!(config.format(48_750.456), "48.750,46");
        }
    }
}
