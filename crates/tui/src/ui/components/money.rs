use ratatui::{style::Style, text::Span};

use api_types::transaction::TransactionKind;

use crate::{money::format_minor, ui::theme::Theme};

/// Creates a styled span for a money amount with semantic coloring.
///
/// - Positive amounts: green with `+` prefix
/// - Negative amounts: red (negative sign shown)
/// - Zero: neutral text color
#[must_use]
pub fn styled_amount(amount: i64, currency: &str, theme: &Theme) -> Span<'static> {
    let formatted = format_minor(amount, currency);

    let (color, prefix) = if amount > 0 {
        (theme.positive, "+")
    } else if amount < 0 {
        (theme.negative, "")
    } else {
        (theme.text, "")
    };

    Span::styled(format!("{prefix}{formatted}"), Style::default().fg(color))
}

/// Transaction amounts are unsigned on the wire; the kind gives the sign.
#[must_use]
pub fn styled_transaction_amount(
    kind: TransactionKind,
    amount: i64,
    currency: &str,
    theme: &Theme,
) -> Span<'static> {
    match kind {
        TransactionKind::Withdrawal => styled_amount(-amount.abs(), currency, theme),
        TransactionKind::Deposit => styled_amount(amount.abs(), currency, theme),
        TransactionKind::Transfer => Span::styled(
            format_minor(amount.abs(), currency),
            Style::default().fg(theme.text),
        ),
    }
}
