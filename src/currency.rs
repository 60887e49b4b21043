use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Currencies a `SpendingTracker` can report in.
///
/// Amounts are always tracked in roubles. Each currency has a fixed rate, expressed
/// as the number of roubles in one unit of that currency.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Currency {
    Rub,
    Eur,
    Usd,
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum CurrencyError {
    #[error("the currency '{0}' is not supported")]
    Unsupported(String),
}

impl Currency {
    pub fn rate(self) -> Decimal {
        match self {
            Currency::Rub => Decimal::ONE,
            Currency::Eur => dec!(70.0),
            Currency::Usd => dec!(60.0),
        }
    }

    /// The name printed after an amount in this currency
    pub fn label(self) -> &'static str {
        match self {
            Currency::Rub => "руб",
            Currency::Eur => "Euro",
            Currency::Usd => "USD",
        }
    }

    /// The code accepted by `Currency::from_str`
    pub fn code(self) -> &'static str {
        match self {
            Currency::Rub => "rub",
            Currency::Eur => "eur",
            Currency::Usd => "usd",
        }
    }

    /// Convert an amount in roubles to this currency
    pub fn convert(self, roubles: Decimal) -> Decimal {
        roubles / self.rate()
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "rub" => Ok(Currency::Rub),
            "eur" => Ok(Currency::Eur),
            "usd" => Ok(Currency::Usd),
            _ => Err(CurrencyError::Unsupported(code.into())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
