//! Display formatting for prices, dates and flight details.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rusty_money::{iso, Money};

/// Currency the backend reports prices in unless the user picked another.
pub const DEFAULT_CURRENCY: &str = "INR";

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Shown in place of a value that can't be rendered.
pub const PLACEHOLDER: &str = "—";

/// Formats `amount` in the ISO currency `code` with its symbol and grouping,
/// always with two decimals (`₹5,000.00`, `$12,000.50`).
///
/// Codes missing from the ISO table fall back to `"5000.00 XYZ"`.
pub fn format_price(amount: f64, code: &str) -> String {
    if !amount.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let code = code.trim().to_uppercase();
    let Some(value) = Decimal::from_f64(amount) else {
        return PLACEHOLDER.to_string();
    };
    let mut value = value.round_dp(2);
    value.rescale(2);

    match iso::find(&code) {
        Some(currency) => Money::from_decimal(value, currency).to_string(),
        None => format!("{} {}", value, code),
    }
}

/// Like [`format_price`] but for values that may be absent.
pub fn format_optional_price(amount: Option<f64>, code: &str) -> String {
    amount.map_or_else(|| PLACEHOLDER.to_string(), |a| format_price(a, code))
}

pub fn format_date(timestamp: &NaiveDateTime) -> String {
    timestamp.format(DATE_FORMAT).to_string()
}

pub fn format_day(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_datetime(timestamp: &NaiveDateTime) -> String {
    timestamp.format(DATETIME_FORMAT).to_string()
}

/// `"0 stops"`, `"1 stop"`, `"2 stops"`.
pub fn stops_label(stops: u32) -> String {
    if stops == 1 {
        "1 stop".to_string()
    } else {
        format!("{} stops", stops)
    }
}

/// Value shown after `progress` (0..=1) of a count-up animation from `start`
/// to `end`. Truncates toward `start` like a ticking counter.
pub fn count_up(start: f64, end: f64, progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    if progress >= 1.0 {
        return end;
    }
    let current = start + (end - start) * progress;
    if end >= start {
        current.floor()
    } else {
        current.ceil()
    }
}
