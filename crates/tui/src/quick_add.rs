use api_types::{category::CategoryView, transaction::TransactionKind};
use thiserror::Error;
use uuid::Uuid;

use crate::money::{self, MoneyError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuickAddError {
    #[error("Enter an amount.")]
    Empty,
    #[error("Invalid amount: {0}")]
    Amount(#[from] MoneyError),
    #[error("Amount must be > 0.")]
    NotPositive,
    #[error("Add a description after the amount.")]
    MissingDescription,
    #[error("Too many tags: at most 1.")]
    TooManyTags,
    #[error("Unknown category #{0}.")]
    UnknownCategory(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickAddParsed {
    pub kind: TransactionKind,
    pub amount_minor: i64,
    pub description: String,
    pub category_id: Option<Uuid>,
}

/// Parses `[+|-]amount description [#category]`.
///
/// `+` books a deposit, anything else a withdrawal.
pub fn parse(input: &str, categories: &[CategoryView]) -> Result<QuickAddParsed, QuickAddError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(QuickAddError::Empty);
    }

    let (kind, rest) = if let Some(stripped) = trimmed.strip_prefix('+') {
        (TransactionKind::Deposit, stripped.trim_start())
    } else if let Some(stripped) = trimmed.strip_prefix('-') {
        (TransactionKind::Withdrawal, stripped.trim_start())
    } else {
        (TransactionKind::Withdrawal, trimmed)
    };

    let (amount_raw, text_raw) = match rest.split_once(' ') {
        Some((amount, text)) => (amount, text.trim()),
        None => (rest, ""),
    };
    if amount_raw.is_empty() {
        return Err(QuickAddError::Empty);
    }

    let amount_minor = money::parse_minor(amount_raw)?.abs();
    if amount_minor == 0 {
        return Err(QuickAddError::NotPositive);
    }

    let (tag, description) = split_tag(text_raw)?;
    if description.is_empty() {
        return Err(QuickAddError::MissingDescription);
    }

    let category_id = match tag {
        Some(tag) => Some(
            categories
                .iter()
                .find(|category| category.name.to_lowercase() == tag)
                .map(|category| category.id)
                .ok_or(QuickAddError::UnknownCategory(tag))?,
        ),
        None => None,
    };

    Ok(QuickAddParsed {
        kind,
        amount_minor,
        description,
        category_id,
    })
}

fn split_tag(text: &str) -> Result<(Option<String>, String), QuickAddError> {
    let mut tag: Option<String> = None;
    let mut kept: Vec<&str> = Vec::new();

    for token in text.split_whitespace() {
        match token.strip_prefix('#') {
            Some(rest) if !rest.is_empty() => {
                if tag.is_some() {
                    return Err(QuickAddError::TooManyTags);
                }
                tag = Some(rest.to_lowercase());
            }
            _ => kept.push(token),
        }
    }

    Ok((tag, kept.join(" ")))
}
