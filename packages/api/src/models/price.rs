//! Product prices as the backend sends them.
//!
//! Depending on the screen that created a product, the backend returns either a
//! plain number (`99.5`) or a currency-prefixed label (`"$99"`, `"9,99 €"`).
//! [`Price`] accepts both on the wire and keeps whatever it received, so a
//! product survives the server/client round trip unchanged.

use serde::{Deserialize, Serialize};

/// A product price, numeric or labelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Label(String),
}

impl Default for Price {
    fn default() -> Self {
        Price::Amount(0.0)
    }
}

impl From<f64> for Price {
    fn from(amount: f64) -> Self {
        Price::Amount(amount)
    }
}

impl Price {
    /// Numeric value of the price, if one can be recovered.
    pub fn amount(&self) -> Option<f64> {
        match self {
            Price::Amount(amount) if amount.is_finite() => Some(*amount),
            Price::Amount(_) => None,
            Price::Label(label) => parse_amount(label),
        }
    }

    /// `"49.90 €"` style, used by the admin table.
    pub fn display_eur(&self) -> String {
        match self.amount() {
            Some(amount) => format!("{} €", format_amount(amount)),
            None => self.raw(),
        }
    }

    /// `"$ 49.90"` style, used by the storefront cards.
    pub fn display_usd(&self) -> String {
        match self.amount() {
            Some(amount) => format!("$ {}", format_amount(amount)),
            None => self.raw(),
        }
    }

    fn raw(&self) -> String {
        match self {
            Price::Amount(amount) => amount.to_string(),
            Price::Label(label) => label.clone(),
        }
    }
}

/// Extract a number from a currency label.
///
/// Everything except digits, `.`, `,` and `-` is dropped. A `,` is read as the
/// decimal separator only when the label has no `.`.
pub fn parse_amount(label: &str) -> Option<f64> {
    let kept: String = label
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();

    let normalized = if kept.contains('.') {
        kept.replace(',', "")
    } else {
        kept.replace(',', ".")
    };

    if !normalized.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_labels() {
        assert_eq!(parse_amount("$99"), Some(99.0));
        assert_eq!(parse_amount("$9.99"), Some(9.99));
        assert_eq!(parse_amount("9,99 €"), Some(9.99));
        assert_eq!(parse_amount("1,299.00"), Some(1299.0));
        assert_eq!(parse_amount("free"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn test_price_deserializes_number_or_label() {
        let number: Price = serde_json::from_str("42.5").unwrap();
        assert_eq!(number, Price::Amount(42.5));

        let label: Price = serde_json::from_str("\"$99\"").unwrap();
        assert_eq!(label, Price::Label("$99".to_string()));
        assert_eq!(label.amount(), Some(99.0));
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(Price::Amount(120.0).display_eur(), "120 €");
        assert_eq!(Price::Amount(19.5).display_eur(), "19.50 €");
        assert_eq!(Price::Label("$9.99".into()).display_usd(), "$ 9.99");
        assert_eq!(Price::Label("sur devis".into()).display_eur(), "sur devis");
    }
}
