use ratatui::{style::Style, text::Span};

use crate::{
    app::{AppState, Section, TransactionsMode},
    ui::theme::Theme,
};

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

/// Creates a separator span for dividing hint groups.
pub fn hint_separator(theme: &Theme) -> Span<'static> {
    Span::styled("  │  ", Style::default().fg(theme.border))
}

/// Hints for whatever the user is looking at right now.
pub fn context_hints(state: &AppState) -> Vec<KeyHint> {
    match state.section {
        Section::Accounts | Section::Categories => vec![
            KeyHint::new("↑↓", "select"),
            KeyHint::new("Enter", "transactions"),
            KeyHint::new("r", "refresh"),
        ],
        Section::Transactions => match state.transactions.mode {
            TransactionsMode::List => vec![
                KeyHint::new("n", "new"),
                KeyHint::new("a", "quick add"),
                KeyHint::new("e", "edit"),
                KeyHint::new("d", "delete"),
                KeyHint::new("/", "search"),
                KeyHint::new("f", "account"),
                KeyHint::new("c", "category"),
                KeyHint::new("t", "kind"),
                KeyHint::new("x", "clear"),
                KeyHint::new("[ ]", "page"),
            ],
            TransactionsMode::Detail => vec![
                KeyHint::new("b", "back"),
                KeyHint::new("e", "edit"),
                KeyHint::new("d", "delete"),
            ],
            TransactionsMode::Form => vec![
                KeyHint::new("Tab", "next"),
                KeyHint::new("↑↓", "pick"),
                KeyHint::new("Enter", "save"),
                KeyHint::new("Esc", "cancel"),
            ],
            TransactionsMode::Search | TransactionsMode::QuickAdd => vec![
                KeyHint::new("Enter", "apply"),
                KeyHint::new("Esc", "cancel"),
            ],
            TransactionsMode::ConfirmDelete => vec![
                KeyHint::new("y", "delete"),
                KeyHint::new("n", "keep"),
            ],
        },
    }
}

/// Global application shortcuts, hidden while typing.
pub fn global_hints(state: &AppState) -> Vec<KeyHint> {
    if state.text_entry_active() {
        return vec![KeyHint::new("Ctrl+C", "quit")];
    }
    vec![
        KeyHint::new("1-3", "section"),
        KeyHint::new("Esc", "dismiss"),
        KeyHint::new("q", "quit"),
    ]
}
