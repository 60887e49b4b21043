//! Message templates used when reporting a remaining balance.
//!
//! Templates may contain `{amount}` and `{currency}` placeholders, which are
//! substituted when a message is rendered. The default table is Russian;
//! `Messages::english` is provided for callers who want English output.

use rust_decimal::{Decimal, RoundingStrategy};

const AMOUNT: &str = "{amount}";
const CURRENCY: &str = "{currency}";

#[derive(Clone, Debug, PartialEq)]
pub struct Messages {
    /// Some money is left. Takes `{amount}` and `{currency}`.
    pub cash_remains: String,
    /// Exactly nothing is left
    pub no_cash: String,
    /// The limit has been exceeded. Takes `{amount}` and `{currency}`.
    pub cash_debt: String,
    pub unsupported_currency: String,
    /// Some calories are left. Takes `{amount}`.
    pub calories_remain: String,
    pub stop_eating: String,
}

impl Default for Messages {
    fn default() -> Self {
        Messages {
            cash_remains: "На сегодня осталось {amount} {currency}".into(),
            no_cash: "Денег нет, держись".into(),
            cash_debt: "Денег нет, держись: твой долг - {amount} {currency}".into(),
            unsupported_currency: "Такой валюты нет!".into(),
            calories_remain:
                "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более {amount} кКал"
                    .into(),
            stop_eating: "Хватит есть!".into(),
        }
    }
}

impl Messages {
    pub fn english() -> Self {
        Messages {
            cash_remains: "today {amount} {currency} remains".into(),
            no_cash: "no money left, hold on".into(),
            cash_debt: "no money left, hold on: your debt is {amount} {currency}".into(),
            unsupported_currency: "unsupported currency".into(),
            calories_remain: "you may eat more today, but no more than {amount} kCal total"
                .into(),
            stop_eating: "that's enough eating for today!".into(),
        }
    }
}

/// Substitute the placeholders in `template`
pub(crate) fn render(template: &str, amount: &str, currency: &str) -> String {
    template.replace(AMOUNT, amount).replace(CURRENCY, currency)
}

/// Format a money amount with exactly `precision` decimal places.
///
/// Midpoints are rounded away from zero, so 0.125 becomes 0.13.
pub(crate) fn format_money(value: Decimal, precision: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    // `round_dp` never adds trailing zeros, so pad the scale out ourselves
    rounded.rescale(precision);
    rounded.to_string()
}
