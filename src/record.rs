use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use thiserror::Error;

// Dates supplied as text are always day first, e.g. "08.11.2019"
const DATE_FORMAT: &str = "%d.%m.%Y";

/// A single transaction against a tracker's daily limit.
///
/// The amount carries no unit. Whether it is money or calories is decided by the
/// tracker it is added to. Once created, a `Record` cannot be changed.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    amount: Decimal,
    comment: String,
    date: NaiveDate,
}

#[derive(Error, Debug, PartialEq)]
pub enum RecordError {
    #[error("'{input}' is not a valid date, expected DD.MM.YYYY")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl Record {
    /// Create a new `Record` dated today (local time)
    pub fn new<S: Into<String>>(amount: Decimal, comment: S) -> Self {
        Self::on(amount, comment, Local::now().date_naive())
    }

    /// Create a new `Record` for a date formatted as `DD.MM.YYYY`
    pub fn with_date<S: Into<String>>(
        amount: Decimal,
        comment: S,
        date: &str,
    ) -> Result<Self, RecordError> {
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|source| {
            RecordError::InvalidDate {
                input: date.into(),
                source,
            }
        })?;

        Ok(Self::on(amount, comment, date))
    }

    /// Create a new `Record` for a known date
    pub fn on<S: Into<String>>(amount: Decimal, comment: S, date: NaiveDate) -> Self {
        Record {
            amount,
            comment: comment.into(),
            date,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}
