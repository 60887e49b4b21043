use crate::{
    currency::Currency,
    messages::{format_money, render, Messages},
    tracker::Tracker,
    CURRENCY_PRECISION,
};
use log::{debug, warn};
use rust_decimal::Decimal;
use std::ops::{Deref, DerefMut};

/// Tracks money spent against a daily limit.
///
/// Amounts are recorded in roubles, but the remaining balance can be reported in any
/// supported `Currency`.
#[derive(Clone, Debug)]
pub struct SpendingTracker {
    tracker: Tracker,
    messages: Messages,
}

impl SpendingTracker {
    pub fn new(limit: Decimal) -> Self {
        Self::from(Tracker::new(limit))
    }

    /// Replace the default (Russian) messages
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Describe how much money is left for today in the given currency.
    ///
    /// The currency code is checked before anything else, so an unknown code always
    /// produces the unsupported currency message, whatever the balance. A balance of
    /// exactly zero has its own message; anything below zero is reported as a debt.
    pub fn remaining_in_currency(&self, code: &str) -> String {
        let currency: Currency = match code.parse() {
            Ok(c) => c,
            Err(e) => {
                warn!("{}", e);
                return self.messages.unsupported_currency.clone();
            }
        };

        let remaining = self.remaining();
        debug!("{} remaining for {}", remaining, self.today());

        if remaining.is_zero() {
            self.messages.no_cash.clone()
        } else if remaining > Decimal::ZERO {
            render(
                &self.messages.cash_remains,
                &format_money(currency.convert(remaining), CURRENCY_PRECISION),
                currency.label(),
            )
        } else {
            let debt = self.today_total() - self.limit();
            render(
                &self.messages.cash_debt,
                &format_money(currency.convert(debt), CURRENCY_PRECISION),
                currency.label(),
            )
        }
    }
}

impl From<Tracker> for SpendingTracker {
    fn from(tracker: Tracker) -> Self {
        SpendingTracker {
            tracker,
            messages: Messages::default(),
        }
    }
}

impl Deref for SpendingTracker {
    type Target = Tracker;

    fn deref(&self) -> &Self::Target {
        &self.tracker
    }
}

impl DerefMut for SpendingTracker {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 3, 10).unwrap()
    }

    fn tracker(limit: Decimal, spent_today: &[Decimal]) -> SpendingTracker {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut t = SpendingTracker::from(Tracker::with_today(limit, today()))
            .with_messages(Messages::english());
        for amount in spent_today {
            t.add_record(Record::on(*amount, "", today()));
        }
        t
    }

    fn lunch_and_coffee() -> SpendingTracker {
        let mut t = tracker(dec!(1000), &[dec!(145), dec!(300)]);
        t.add_record(Record::with_date(dec!(3000), "bar", "08.11.2019").unwrap());
        t
    }

    #[test]
    fn remaining_in_roubles() {
        assert_eq!(
            lunch_and_coffee().remaining_in_currency("rub"),
            "today 555.00 руб remains"
        );
    }

    #[test]
    fn remaining_in_dollars() {
        assert_eq!(
            lunch_and_coffee().remaining_in_currency("usd"),
            "today 9.25 USD remains"
        );
    }

    #[test]
    fn remaining_in_euros_is_rounded() {
        // 555 / 70 = 7.928...
        assert_eq!(
            lunch_and_coffee().remaining_in_currency("eur"),
            "today 7.93 Euro remains"
        );
    }

    #[test]
    fn debt_in_euros() {
        assert_eq!(
            tracker(dec!(500), &[dec!(600)]).remaining_in_currency("eur"),
            "no money left, hold on: your debt is 1.43 Euro"
        );
    }

    #[test]
    fn debt_in_roubles() {
        assert_eq!(
            tracker(dec!(500), &[dec!(600.5)]).remaining_in_currency("rub"),
            "no money left, hold on: your debt is 100.50 руб"
        );
    }

    #[test]
    fn exactly_zero_remaining() {
        let t = tracker(dec!(500), &[dec!(200), dec!(300)]);
        for code in &["rub", "eur", "usd"] {
            assert_eq!(t.remaining_in_currency(code), "no money left, hold on");
        }
    }

    #[test]
    fn unsupported_currency_with_balance() {
        assert_eq!(
            lunch_and_coffee().remaining_in_currency("gbp"),
            "unsupported currency"
        );
    }

    #[test]
    fn unsupported_currency_with_zero_balance() {
        let t = tracker(dec!(300), &[dec!(300)]);
        assert_eq!(t.remaining_in_currency("gbp"), "unsupported currency");
    }

    #[test]
    fn default_messages_are_russian() {
        let mut t = SpendingTracker::from(Tracker::with_today(dec!(1000), today()));
        t.add_record(Record::on(dec!(145), "кофе", today()));
        t.add_record(Record::on(dec!(300), "Серёге за обед", today()));
        assert_eq!(
            t.remaining_in_currency("rub"),
            "На сегодня осталось 555.00 руб"
        );
        assert_eq!(t.remaining_in_currency("xxx"), "Такой валюты нет!");

        t.add_record(Record::on(dec!(600), "", today()));
        assert_eq!(
            t.remaining_in_currency("usd"),
            "Денег нет, держись: твой долг - 0.75 USD"
        );
    }

    #[test]
    fn remaining_in_currency_is_idempotent() {
        let t = lunch_and_coffee();
        assert_eq!(t.remaining_in_currency("usd"), t.remaining_in_currency("usd"));
    }

    #[test]
    fn new_tracker_reports_full_limit() {
        let t = SpendingTracker::new(dec!(120)).with_messages(Messages::english());
        assert_eq!(t.remaining_in_currency("usd"), "today 2.00 USD remains");
    }
}
