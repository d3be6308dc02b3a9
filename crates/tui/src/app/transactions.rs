use api_types::transaction::{TransactionKind, TransactionList, TransactionView};
use uuid::Uuid;

use super::form::TransactionForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionsMode {
    List,
    Detail,
    Search,
    Form,
    QuickAdd,
    ConfirmDelete,
}

impl TransactionsMode {
    /// Modes where printable keys are text, not commands.
    pub fn takes_text(self) -> bool {
        matches!(self, Self::Search | Self::Form | Self::QuickAdd)
    }
}

/// Server-side filters applied to the transaction list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub query: String,
    pub account_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub kind: Option<TransactionKind>,
}

impl TransactionFilter {
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.account_id.is_none()
            && self.category_id.is_none()
            && self.kind.is_none()
    }

    /// Walks kinds and wraps back to "any".
    pub fn cycle_kind(&mut self) {
        self.kind = match self.kind {
            None => Some(TransactionKind::Withdrawal),
            Some(TransactionKind::Withdrawal) => Some(TransactionKind::Deposit),
            Some(TransactionKind::Deposit) => Some(TransactionKind::Transfer),
            Some(TransactionKind::Transfer) => None,
        };
    }
}

#[derive(Debug)]
pub struct TransactionsState {
    pub items: Vec<TransactionView>,
    pub cursor: Option<String>,
    pub next_cursor: Option<String>,
    pub prev_cursors: Vec<Option<String>>,
    pub selected: usize,
    pub filter: TransactionFilter,
    /// Query being typed in search mode; applied on Enter.
    pub search_input: String,
    pub quick_input: String,
    pub form: Option<TransactionForm>,
    pub mode: TransactionsMode,
}

impl Default for TransactionsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            cursor: None,
            next_cursor: None,
            prev_cursors: Vec::new(),
            selected: 0,
            filter: TransactionFilter::default(),
            search_input: String::new(),
            quick_input: String::new(),
            form: None,
            mode: TransactionsMode::List,
        }
    }
}

impl TransactionsState {
    pub fn reset(&mut self) {
        self.cursor = None;
        self.next_cursor = None;
        self.prev_cursors.clear();
        self.items.clear();
        self.selected = 0;
    }

    pub fn push_cursor(&mut self, cursor: Option<String>) {
        self.prev_cursors.push(cursor);
    }

    pub fn pop_cursor(&mut self) -> Option<Option<String>> {
        self.prev_cursors.pop()
    }

    pub fn page(&self) -> usize {
        self.prev_cursors.len() + 1
    }

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = (self.selected + 1).min(self.items.len() - 1);
    }

    pub fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_item(&self) -> Option<&TransactionView> {
        self.items.get(self.selected)
    }

    pub fn request(&self, limit: u64) -> TransactionList {
        let query = self.filter.query.trim();
        TransactionList {
            account_id: self.filter.account_id,
            category_id: self.filter.category_id,
            kind: self.filter.kind,
            query: (!query.is_empty()).then(|| query.to_string()),
            limit: Some(limit),
            cursor: self.cursor.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    fn view(n: u128) -> TransactionView {
        TransactionView {
            id: Uuid::from_u128(n),
            kind: TransactionKind::Withdrawal,
            occurred_at: DateTime::parse_from_rfc3339("2026-01-02T10:00:00+01:00").unwrap(),
            description: format!("tx {n}"),
            amount_minor: 100,
            currency: "EUR".to_string(),
            source_account_id: None,
            destination_account_id: None,
            category_id: None,
            notes: None,
        }
    }

    #[test]
    fn selection_is_clamped() {
        let mut state = TransactionsState::default();
        state.select_next();
        assert_eq!(state.selected, 0);

        state.items = vec![view(1), view(2)];
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);
        state.select_prev();
        state.select_prev();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn cursors_stack_and_reset() {
        let mut state = TransactionsState::default();
        state.push_cursor(None);
        state.push_cursor(Some("abc".to_string()));
        assert_eq!(state.page(), 3);
        assert_eq!(state.pop_cursor(), Some(Some("abc".to_string())));

        state.reset();
        assert_eq!(state.page(), 1);
        assert_eq!(state.pop_cursor(), None);
    }

    #[test]
    fn request_carries_filters() {
        let mut state = TransactionsState::default();
        state.filter.query = "  coffee ".to_string();
        state.filter.account_id = Some(Uuid::from_u128(9));
        state.cursor = Some("next".to_string());

        let request = state.request(20);
        assert_eq!(request.query.as_deref(), Some("coffee"));
        assert_eq!(request.account_id, Some(Uuid::from_u128(9)));
        assert_eq!(request.cursor.as_deref(), Some("next"));
        assert_eq!(request.limit, Some(20));
    }

    #[test]
    fn blank_query_is_not_sent() {
        let mut state = TransactionsState::default();
        state.filter.query = "   ".to_string();
        assert!(state.filter.is_empty());
        assert_eq!(state.request(10).query, None);
    }

    #[test]
    fn kind_filter_wraps_to_any() {
        let mut filter = TransactionFilter::default();
        for _ in 0..4 {
            filter.cycle_kind();
        }
        assert_eq!(filter.kind, None);
    }
}
