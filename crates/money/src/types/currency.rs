//! ISO 4217 currency registry.
//!
//! Each entry carries its alpha code, numeric code, display symbol and the
//! canonical number of fraction digits used when no explicit scale is given.

use serde::{Deserialize, Serialize};

use crate::error::MoneyError;

/// ISO 4217 currencies supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// Pound Sterling
    Gbp,
    /// Japanese Yen
    Jpy,
    /// Swiss Franc
    Chf,
    /// Brazilian Real
    Brl,
    /// Indonesian Rupiah
    Idr,
    /// Singapore Dollar
    Sgd,
    /// Canadian Dollar
    Cad,
    /// Australian Dollar
    Aud,
    /// Chinese Yuan Renminbi
    Cny,
    /// Indian Rupee
    Inr,
    /// Mexican Peso
    Mxn,
    /// Chilean Peso
    Clp,
    /// Kuwaiti Dinar
    Kwd,
    /// Bahraini Dinar
    Bhd,
}

impl Currency {
    /// Every registered currency.
    pub const ALL: [Self; 16] = [
        Self::Usd,
        Self::Eur,
        Self::Gbp,
        Self::Jpy,
        Self::Chf,
        Self::Brl,
        Self::Idr,
        Self::Sgd,
        Self::Cad,
        Self::Aud,
        Self::Cny,
        Self::Inr,
        Self::Mxn,
        Self::Clp,
        Self::Kwd,
        Self::Bhd,
    ];

    /// Three-letter ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Chf => "CHF",
            Self::Brl => "BRL",
            Self::Idr => "IDR",
            Self::Sgd => "SGD",
            Self::Cad => "CAD",
            Self::Aud => "AUD",
            Self::Cny => "CNY",
            Self::Inr => "INR",
            Self::Mxn => "MXN",
            Self::Clp => "CLP",
            Self::Kwd => "KWD",
            Self::Bhd => "BHD",
        }
    }

    /// Three-digit ISO numeric code.
    #[must_use]
    pub const fn numeric_code(self) -> u16 {
        match self {
            Self::Usd => 840,
            Self::Eur => 978,
            Self::Gbp => 826,
            Self::Jpy => 392,
            Self::Chf => 756,
            Self::Brl => 986,
            Self::Idr => 360,
            Self::Sgd => 702,
            Self::Cad => 124,
            Self::Aud => 36,
            Self::Cny => 156,
            Self::Inr => 356,
            Self::Mxn => 484,
            Self::Clp => 152,
            Self::Kwd => 414,
            Self::Bhd => 48,
        }
    }

    /// Display symbol. Fixed per currency, never localized.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Jpy => "¥",
            Self::Chf => "CHF",
            Self::Brl => "R$",
            Self::Idr => "Rp",
            Self::Sgd => "S$",
            Self::Cad => "CA$",
            Self::Aud => "A$",
            Self::Cny => "CN¥",
            Self::Inr => "₹",
            Self::Mxn => "MX$",
            Self::Clp => "CLP$",
            Self::Kwd => "KD",
            Self::Bhd => "BD",
        }
    }

    /// Canonical number of fraction digits (minor units).
    ///
    /// Example: BRL uses 2 (centavos), JPY uses 0, KWD uses 3.
    #[must_use]
    pub const fn fraction_digits(self) -> u32 {
        match self {
            Self::Jpy | Self::Clp => 0,
            Self::Kwd | Self::Bhd => 3,
            Self::Usd
            | Self::Eur
            | Self::Gbp
            | Self::Chf
            | Self::Brl
            | Self::Idr
            | Self::Sgd
            | Self::Cad
            | Self::Aud
            | Self::Cny
            | Self::Inr
            | Self::Mxn => 2,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|currency| currency.code() == code)
            .ok_or_else(|| MoneyError::UnknownCurrency(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::Brl.to_string(), "BRL");
        assert_eq!(Currency::Jpy.to_string(), "JPY");
        assert_eq!(format!("{}", Currency::Kwd), "KWD");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!(Currency::from_str("BRL").unwrap(), Currency::Brl);
        assert_eq!(Currency::from_str("brl").unwrap(), Currency::Brl);
        assert_eq!(Currency::from_str(" usd ").unwrap(), Currency::Usd);

        assert_eq!(
            Currency::from_str("XXX"),
            Err(MoneyError::UnknownCurrency("XXX".to_string()))
        );
        assert!(Currency::from_str("").is_err());
    }

    #[test]
    fn test_every_code_parses_back() {
        for currency in Currency::ALL {
            assert_eq!(Currency::from_str(currency.code()).unwrap(), currency);
        }
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(Currency::Brl.fraction_digits(), 2);
        assert_eq!(Currency::Usd.fraction_digits(), 2);
        assert_eq!(Currency::Jpy.fraction_digits(), 0);
        assert_eq!(Currency::Clp.fraction_digits(), 0);
        assert_eq!(Currency::Kwd.fraction_digits(), 3);
    }

    #[test]
    fn test_symbols_and_numeric_codes() {
        assert_eq!(Currency::Brl.symbol(), "R$");
        assert_eq!(Currency::Usd.symbol(), "$");
        assert_eq!(Currency::Eur.symbol(), "€");
        assert_eq!(Currency::Brl.numeric_code(), 986);
        assert_eq!(Currency::Aud.numeric_code(), 36);
    }

    #[test]
    fn test_currency_serde() {
        assert_eq!(serde_json::to_string(&Currency::Brl).unwrap(), "\"BRL\"");
        let parsed: Currency = serde_json::from_str("\"JPY\"").unwrap();
        assert_eq!(parsed, Currency::Jpy);
    }
}
