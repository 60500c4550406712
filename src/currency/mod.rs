//! Shared money parsing and formatting value types.
//!
//! Amounts cross the form boundary as raw text in the user's locale
//! ("3.500,00" in the default pt-BR shape). Parsing is strict: anything that
//! is not a plain decimal number after separator normalization is rejected
//! with a [`ValidationError`] instead of being coerced to zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Locale-aware formatting preferences for money values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub currency_symbol: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "R$".into(),
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }
}

/// Parses user-typed amount text into an exact decimal value.
///
/// Grouping separators are ignored wherever they appear; at most one decimal
/// separator is accepted. Empty or otherwise malformed input is a
/// [`ValidationError::UnparseableAmount`].
pub fn parse_amount(text: &str, locale: &LocaleConfig) -> Result<Decimal, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::UnparseableAmount(text.into()));
    }
    let mut normalized = String::with_capacity(trimmed.len());
    let mut decimal_seen = false;
    for ch in trimmed.chars() {
        if ch == locale.grouping_separator {
            continue;
        }
        if ch == locale.decimal_separator {
            if decimal_seen {
                return Err(ValidationError::UnparseableAmount(text.into()));
            }
            decimal_seen = true;
            normalized.push('.');
        } else {
            normalized.push(ch);
        }
    }
    normalized
        .parse::<Decimal>()
        .map_err(|_| ValidationError::UnparseableAmount(text.into()))
}

/// Renders an amount with the locale's currency symbol, e.g. `R$ 1.234,56`.
pub fn format_currency(amount: Decimal, locale: &LocaleConfig, precision: u32) -> String {
    format!(
        "{} {}",
        locale.currency_symbol,
        format_number(amount, locale, precision)
    )
}

/// Renders a bare number with locale separators at the requested precision.
pub fn format_number(amount: Decimal, locale: &LocaleConfig, precision: u32) -> String {
    let body = format!("{:.*}", precision as usize, amount.round_dp(precision));
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), Some(frac_part.to_string())),
        None => (body, None),
    };
    let mut rendered = group_int_part(&int_part, locale.grouping_separator);
    if let Some(frac) = frac_part {
        rendered.push(locale.decimal_separator);
        rendered.push_str(&frac);
    }
    rendered
}

fn group_int_part(int_part: &str, separator: char) -> String {
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    format!("{}{}", sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_grouped_amount() {
        let locale = LocaleConfig::default();
        assert_eq!(parse_amount("3.500,00", &locale).unwrap(), dec!(3500.00));
        assert_eq!(parse_amount("45,90", &locale).unwrap(), dec!(45.90));
        assert_eq!(parse_amount(" 100 ", &locale).unwrap(), dec!(100));
    }

    #[test]
    fn rejects_malformed_amount_text() {
        let locale = LocaleConfig::default();
        for bad in ["", "   ", "abc", "1,2,3", "12,34,", "R$ 10"] {
            let err = parse_amount(bad, &locale).unwrap_err();
            assert!(
                matches!(err, ValidationError::UnparseableAmount(_)),
                "`{bad}` produced {err:?}"
            );
        }
    }

    #[test]
    fn formats_with_locale_separators() {
        let locale = LocaleConfig::default();
        assert_eq!(format_currency(dec!(1234.5), &locale, 2), "R$ 1.234,50");
        assert_eq!(format_currency(dec!(10000), &locale, 0), "R$ 10.000");
        assert_eq!(format_number(dec!(-3450.00), &locale, 2), "-3.450,00");
    }
}
