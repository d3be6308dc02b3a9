//! Amounts are carried as signed integer minor units (cents) end to end.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    #[error("empty amount")]
    Empty,
    #[error("invalid amount")]
    Invalid,
    #[error("too many decimals")]
    TooManyDecimals,
    #[error("amount too large")]
    Overflow,
}

/// Parses a decimal string into minor units.
///
/// Accepts `.` or `,` as decimal separator and an optional leading `+`/`-`;
/// rejects more than 2 fractional digits.
pub fn parse_minor(input: &str) -> Result<i64, MoneyError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MoneyError::Empty);
    }

    let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
        (true, stripped)
    } else if let Some(stripped) = trimmed.strip_prefix('+') {
        (false, stripped)
    } else {
        (false, trimmed)
    };

    let rest = rest.trim().replace(',', ".");
    if rest.is_empty() {
        return Err(MoneyError::Empty);
    }

    let (units_str, frac_str) = match rest.split_once('.') {
        Some((units, frac)) => (units, frac),
        None => (rest.as_str(), ""),
    };

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if units_str.is_empty() || !all_digits(units_str) || !all_digits(frac_str) {
        return Err(MoneyError::Invalid);
    }

    let units: i64 = units_str.parse().map_err(|_| MoneyError::Overflow)?;
    let cents: i64 = match frac_str.len() {
        0 => 0,
        1 => frac_str.parse::<i64>().map_err(|_| MoneyError::Invalid)? * 10,
        2 => frac_str.parse::<i64>().map_err(|_| MoneyError::Invalid)?,
        _ => return Err(MoneyError::TooManyDecimals),
    };

    let total = units
        .checked_mul(100)
        .and_then(|v| v.checked_add(cents))
        .ok_or(MoneyError::Overflow)?;

    if negative {
        total.checked_neg().ok_or(MoneyError::Overflow)
    } else {
        Ok(total)
    }
}

/// Formats minor units as `-12.34 EUR`.
pub fn format_minor(amount: i64, currency: &str) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{sign}{}.{:02} {currency}", abs / 100, abs % 100)
}

/// Plain `12.34` form, as typed back into an input field.
pub fn format_plain(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}
