//! Display formatting for monetary amounts and percentage changes.
//!
//! Amounts are rendered in whatever currency the caller selects. No exchange-rate
//! conversion happens here: a stored amount is shown as-is under the chosen symbol.

use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, EngineResult};

const MAX_FRACTION_DIGITS: u32 = 2;
const GROUPING_SEPARATOR: char = ',';
const DECIMAL_SEPARATOR: char = '.';

/// The closed set of display currencies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum CurrencyCode {
    #[default]
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "INR")]
    Inr,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 2] = [CurrencyCode::Usd, CurrencyCode::Inr];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Inr => "INR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "$",
            CurrencyCode::Inr => "₹",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "US Dollar",
            CurrencyCode::Inr => "Indian Rupee",
        }
    }

    /// Symbol followed by the grouped absolute value, 0-2 fraction digits.
    pub fn format(&self, amount: Decimal) -> String {
        format!("{}{}", self.symbol(), format_magnitude(amount))
    }

    /// Like [`CurrencyCode::format`] with `+` for non-negative and `-` for negative amounts.
    pub fn format_with_sign(&self, amount: Decimal) -> String {
        let sign = if amount >= Decimal::ZERO { '+' } else { '-' };
        format!("{}{}", sign, self.format(amount))
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = EngineError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "USD" => Ok(CurrencyCode::Usd),
            "INR" => Ok(CurrencyCode::Inr),
            other => Err(EngineError::UnsupportedCurrency(other.to_string())),
        }
    }
}

/// Formats `amount` for the currency named by `code`. The sign is dropped.
pub fn format_currency(amount: Decimal, code: &str) -> EngineResult<String> {
    Ok(code.parse::<CurrencyCode>()?.format(amount))
}

/// Signed variant of [`format_currency`].
pub fn format_currency_with_sign(amount: Decimal, code: &str) -> EngineResult<String> {
    Ok(code.parse::<CurrencyCode>()?.format_with_sign(amount))
}

/// Renders a percentage delta as `+12.5%` / `-5.2%`.
pub fn format_percent_change(delta: Decimal) -> String {
    let sign = if delta >= Decimal::ZERO { '+' } else { '-' };
    let mut magnitude = delta
        .abs()
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    magnitude.rescale(1);
    format!("{}{}%", sign, magnitude)
}

fn format_magnitude(amount: Decimal) -> String {
    let rounded = amount
        .abs()
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let body = rounded.to_string();
    match body.split_once(DECIMAL_SEPARATOR) {
        Some((int_part, fraction)) => format!(
            "{}{}{}",
            group_digits(int_part, GROUPING_SEPARATOR),
            DECIMAL_SEPARATOR,
            fraction
        ),
        None => group_digits(&body, GROUPING_SEPARATOR),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped.chars().rev().collect()
}
