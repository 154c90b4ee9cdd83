//! Parsing of Brazilian real price strings such as `"R$ 123.456,78"`.

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePriceError {
    #[display("Price string '{input}' contains no digits")]
    NoDigits { input: String },
    #[display("Price string '{input}' is not a valid number")]
    InvalidNumber { input: String },
}

/// Parses a price formatted in the pt-BR convention.
///
/// Currency symbols and spaces are removed, `.` is treated as a thousands
/// separator and the first `,` as the decimal separator.
///
/// # Examples
///
/// ```
/// # use fipe_catalog::price::parse_brl;
/// assert_eq!(parse_brl("R$ 123.456,78").unwrap(), 123_456.78);
/// assert_eq!(parse_brl("R$ 9.990,00").unwrap(), 9_990.0);
/// assert!(parse_brl("consulte").is_err());
/// ```
pub fn parse_brl(input: &str) -> Result<f64, ParsePriceError> {
    let kept = input
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .filter(|&c| c != '.')
        .collect::<String>();
    if !kept.chars().any(|c| c.is_ascii_digit()) {
        return Err(ParsePriceError::NoDigits {
            input: input.to_owned(),
        });
    }
    let normalized = kept.replacen(',', ".", 1);
    let value = normalized
        .parse::<f64>()
        .map_err(|_| ParsePriceError::InvalidNumber {
            input: input.to_owned(),
        })?;
    if !value.is_finite() {
        return Err(ParsePriceError::InvalidNumber {
            input: input.to_owned(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_format() {
        assert_eq!(parse_brl("R$ 45.123,00").unwrap(), 45_123.0);
        assert_eq!(parse_brl("R$ 1.234.567,89").unwrap(), 1_234_567.89);
        assert_eq!(parse_brl("R$ 850,50").unwrap(), 850.5);
    }

    #[test]
    fn test_without_currency_symbol() {
        assert_eq!(parse_brl("12.000").unwrap(), 12_000.0);
        assert_eq!(parse_brl("12000").unwrap(), 12_000.0);
        assert_eq!(parse_brl(" 0,99 ").unwrap(), 0.99);
    }

    #[test]
    fn test_negative_value() {
        assert_eq!(parse_brl("-R$ 1.000,00").unwrap(), -1_000.0);
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(
            parse_brl("R$ -"),
            Err(ParsePriceError::NoDigits {
                input: "R$ -".to_owned()
            })
        );
        assert!(parse_brl("").is_err());
    }

    #[test]
    fn test_malformed_number() {
        assert!(matches!(
            parse_brl("1,2,3"),
            Err(ParsePriceError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_brl("10-5"),
            Err(ParsePriceError::InvalidNumber { .. })
        ));
    }
}
