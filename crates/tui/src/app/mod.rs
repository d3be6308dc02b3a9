mod form;
mod transactions;

use std::time::Duration;

use api_types::{
    account::{AccountKind, AccountView},
    category::CategoryView,
    transaction::{TransactionKind, TransactionNew},
};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use uuid::Uuid;

use crate::{
    client::{Client, ClientError},
    config::AppConfig,
    error::{AppError, Result},
    local_state::{DefaultsValue, LocalState},
    notify::{ChannelScheduler, NotificationCenter, NotificationId},
    quick_add,
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

pub use form::{FormField, TransactionForm};
pub use transactions::{TransactionFilter, TransactionsMode, TransactionsState};

/// Events re-injected into the loop from background tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    NotificationExpired(NotificationId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Accounts,
    Transactions,
    Categories,
}

impl Section {
    pub const ALL: [Section; 3] = [Self::Accounts, Self::Transactions, Self::Categories];

    pub fn label(self) -> &'static str {
        match self {
            Self::Accounts => "Accounts",
            Self::Transactions => "Transactions",
            Self::Categories => "Categories",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Accounts => Self::Transactions,
            Self::Transactions => Self::Categories,
            Self::Categories => Self::Accounts,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub section: Section,
    pub accounts: Vec<AccountView>,
    pub categories: Vec<CategoryView>,
    pub selected_account: usize,
    pub selected_category: usize,
    pub transactions: TransactionsState,
    pub notifications: NotificationCenter,
    pub last_refresh: Option<DateTime<Tz>>,
    pub connected: bool,
    pub base_url: String,
}

impl AppState {
    pub fn account_name(&self, id: Option<Uuid>) -> String {
        match id {
            Some(id) => self
                .accounts
                .iter()
                .find(|account| account.id == id)
                .map(|account| account.name.clone())
                .unwrap_or_else(|| id.to_string()),
            None => "-".to_string(),
        }
    }

    pub fn category_name(&self, id: Option<Uuid>) -> String {
        match id {
            Some(id) => self
                .categories
                .iter()
                .find(|category| category.id == id)
                .map(|category| category.name.clone())
                .unwrap_or_else(|| id.to_string()),
            None => "-".to_string(),
        }
    }

    /// Whether printable keys should go to an input rather than commands.
    pub fn text_entry_active(&self) -> bool {
        self.section == Section::Transactions && self.transactions.mode.takes_text()
    }

    fn account_ids(&self) -> Vec<Uuid> {
        self.accounts
            .iter()
            .filter(|account| account.active)
            .map(|account| account.id)
            .collect()
    }

    fn category_ids(&self) -> Vec<Uuid> {
        self.categories.iter().map(|category| category.id).collect()
    }
}

pub struct App {
    config: AppConfig,
    client: Client,
    timezone: Tz,
    local_state: LocalState,
    events: UnboundedReceiver<AppEvent>,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Client::new(&config.base_url, &config.token)?;
        let timezone = config.timezone()?;
        let (events_tx, events) = mpsc::unbounded_channel();
        let mut notifications = NotificationCenter::new(
            config.notifications,
            Box::new(ChannelScheduler::new(events_tx)),
        );

        let local_state = match LocalState::load(&config.state_path) {
            Ok(local_state) => local_state,
            Err(err) => {
                tracing::warn!("failed to load local state: {err}");
                notifications.warning("Local defaults could not be read; starting fresh.");
                LocalState::default()
            }
        };

        let state = AppState {
            section: Section::Transactions,
            accounts: Vec::new(),
            categories: Vec::new(),
            selected_account: 0,
            selected_category: 0,
            transactions: TransactionsState::default(),
            notifications,
            last_refresh: None,
            connected: false,
            base_url: config.base_url.clone(),
        };

        Ok(Self {
            config,
            client,
            timezone,
            local_state,
            events,
            state,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        self.refresh_all().await;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key).await
                    }
                    _ => {}
                }
            }

            self.drain_events();
        }

        tracing::info!("shutting down");
        Ok(())
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::NotificationExpired(id) => self.state.notifications.expire(id),
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        let action = map_key(key);
        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }

        if self.state.section == Section::Transactions {
            match self.state.transactions.mode {
                TransactionsMode::Search => return self.handle_search_key(action).await,
                TransactionsMode::QuickAdd => return self.handle_quick_add_key(action).await,
                TransactionsMode::Form => return self.handle_form_key(action).await,
                TransactionsMode::ConfirmDelete => return self.handle_confirm_key(action).await,
                TransactionsMode::Detail => return self.handle_detail_key(action).await,
                TransactionsMode::List => {}
            }
        }

        match action {
            AppAction::Input('q') => self.should_quit = true,
            AppAction::Input('1') => self.state.section = Section::Accounts,
            AppAction::Input('2') => self.state.section = Section::Transactions,
            AppAction::Input('3') => self.state.section = Section::Categories,
            AppAction::NextField => self.state.section = self.state.section.next(),
            AppAction::Cancel => self.state.notifications.dismiss(),
            _ => match self.state.section {
                Section::Accounts => self.handle_accounts_key(action).await,
                Section::Transactions => self.handle_list_key(action).await,
                Section::Categories => self.handle_categories_key(action).await,
            },
        }
    }

    async fn handle_accounts_key(&mut self, action: AppAction) {
        let len = self.state.accounts.len();
        match action {
            AppAction::Up | AppAction::Input('k') => {
                self.state.selected_account = self.state.selected_account.saturating_sub(1);
            }
            AppAction::Down | AppAction::Input('j') => {
                self.state.selected_account =
                    (self.state.selected_account + 1).min(len.saturating_sub(1));
            }
            AppAction::Input('r') => self.refresh_all().await,
            AppAction::Submit => {
                if let Some(account) = self.state.accounts.get(self.state.selected_account) {
                    let filter = TransactionFilter {
                        account_id: Some(account.id),
                        ..TransactionFilter::default()
                    };
                    self.show_filtered(filter).await;
                }
            }
            _ => {}
        }
    }

    async fn handle_categories_key(&mut self, action: AppAction) {
        let len = self.state.categories.len();
        match action {
            AppAction::Up | AppAction::Input('k') => {
                self.state.selected_category = self.state.selected_category.saturating_sub(1);
            }
            AppAction::Down | AppAction::Input('j') => {
                self.state.selected_category =
                    (self.state.selected_category + 1).min(len.saturating_sub(1));
            }
            AppAction::Input('r') => self.refresh_all().await,
            AppAction::Submit => {
                if let Some(category) = self.state.categories.get(self.state.selected_category) {
                    let filter = TransactionFilter {
                        category_id: Some(category.id),
                        ..TransactionFilter::default()
                    };
                    self.show_filtered(filter).await;
                }
            }
            _ => {}
        }
    }

    async fn show_filtered(&mut self, filter: TransactionFilter) {
        self.state.section = Section::Transactions;
        self.state.transactions.mode = TransactionsMode::List;
        self.state.transactions.search_input = filter.query.clone();
        self.state.transactions.filter = filter;
        self.load_transactions(true).await;
    }

    async fn handle_list_key(&mut self, action: AppAction) {
        let txs = &mut self.state.transactions;
        match action {
            AppAction::Up | AppAction::Input('k') => txs.select_prev(),
            AppAction::Down | AppAction::Input('j') => txs.select_next(),
            AppAction::Submit => {
                if txs.selected_item().is_some() {
                    txs.mode = TransactionsMode::Detail;
                }
            }
            AppAction::Input('n') => self.open_new_form(),
            AppAction::Input('e') => self.open_edit_form(),
            AppAction::Input('d') => {
                if txs.selected_item().is_some() {
                    txs.mode = TransactionsMode::ConfirmDelete;
                }
            }
            AppAction::Input('a') => {
                txs.quick_input.clear();
                txs.mode = TransactionsMode::QuickAdd;
            }
            AppAction::Input('/') => {
                txs.search_input = txs.filter.query.clone();
                txs.mode = TransactionsMode::Search;
            }
            AppAction::Input('f') => {
                let ids = self.state.account_ids();
                let txs = &mut self.state.transactions;
                txs.filter.account_id = form::cycle_id(txs.filter.account_id, &ids, true);
                self.load_transactions(true).await;
            }
            AppAction::Input('c') => {
                let ids = self.state.category_ids();
                let txs = &mut self.state.transactions;
                txs.filter.category_id = form::cycle_id(txs.filter.category_id, &ids, true);
                self.load_transactions(true).await;
            }
            AppAction::Input('t') => {
                txs.filter.cycle_kind();
                self.load_transactions(true).await;
            }
            AppAction::Input('x') => {
                if !txs.filter.is_empty() {
                    txs.filter = TransactionFilter::default();
                    txs.search_input.clear();
                    self.load_transactions(true).await;
                }
            }
            AppAction::Input('r') => self.refresh_all().await,
            AppAction::Input(']') => self.load_transactions_next().await,
            AppAction::Input('[') => self.load_transactions_prev().await,
            _ => {}
        }
    }

    async fn handle_detail_key(&mut self, action: AppAction) {
        match action {
            AppAction::Cancel | AppAction::Input('b') => {
                self.state.transactions.mode = TransactionsMode::List;
            }
            AppAction::Input('e') => self.open_edit_form(),
            AppAction::Input('d') => {
                self.state.transactions.mode = TransactionsMode::ConfirmDelete;
            }
            _ => {}
        }
    }

    async fn handle_confirm_key(&mut self, action: AppAction) {
        match action {
            AppAction::Input('y') | AppAction::Submit => self.delete_selected().await,
            AppAction::Input('n') | AppAction::Cancel => {
                self.state.transactions.mode = TransactionsMode::List;
            }
            _ => {}
        }
    }

    async fn handle_search_key(&mut self, action: AppAction) {
        let txs = &mut self.state.transactions;
        match action {
            AppAction::Input(ch) => txs.search_input.push(ch),
            AppAction::Backspace => {
                txs.search_input.pop();
            }
            AppAction::Submit => {
                txs.filter.query = txs.search_input.trim().to_string();
                txs.mode = TransactionsMode::List;
                self.load_transactions(true).await;
            }
            AppAction::Cancel => {
                txs.search_input = txs.filter.query.clone();
                txs.mode = TransactionsMode::List;
            }
            _ => {}
        }
    }

    async fn handle_quick_add_key(&mut self, action: AppAction) {
        let txs = &mut self.state.transactions;
        match action {
            AppAction::Input(ch) => txs.quick_input.push(ch),
            AppAction::Backspace => {
                txs.quick_input.pop();
            }
            AppAction::Submit => self.submit_quick_add().await,
            AppAction::Cancel => txs.mode = TransactionsMode::List,
            _ => {}
        }
    }

    async fn handle_form_key(&mut self, action: AppAction) {
        let accounts = self.state.account_ids();
        let categories = self.state.category_ids();
        let txs = &mut self.state.transactions;
        let Some(form) = txs.form.as_mut() else {
            txs.mode = TransactionsMode::List;
            return;
        };

        match action {
            AppAction::NextField => form.next_field(),
            AppAction::PrevField => form.prev_field(),
            AppAction::Up => form.cycle(&accounts, &categories, false),
            AppAction::Down => form.cycle(&accounts, &categories, true),
            AppAction::Input(ch) => form.input(ch),
            AppAction::Backspace => form.backspace(),
            AppAction::Submit => self.submit_form().await,
            AppAction::Cancel => {
                txs.form = None;
                txs.mode = TransactionsMode::List;
            }
            AppAction::Quit | AppAction::None => {}
        }
    }

    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }

    /// Remembered account, else the first active asset account.
    fn default_account(&self) -> Option<Uuid> {
        self.local_state
            .defaults_for(self.client.base_url())
            .account_id
            .filter(|id| self.state.accounts.iter().any(|account| account.id == *id))
            .or_else(|| {
                self.state
                    .accounts
                    .iter()
                    .find(|account| account.active && account.kind == AccountKind::Asset)
                    .map(|account| account.id)
            })
    }

    fn open_new_form(&mut self) {
        let defaults = self.local_state.defaults_for(self.client.base_url());
        let form = TransactionForm::new_with_defaults(
            self.today(),
            self.default_account(),
            defaults.category_id,
        );
        self.state.transactions.form = Some(form);
        self.state.transactions.mode = TransactionsMode::Form;
    }

    fn open_edit_form(&mut self) {
        let txs = &mut self.state.transactions;
        if let Some(item) = txs.selected_item() {
            txs.form = Some(TransactionForm::from_view(item));
            txs.mode = TransactionsMode::Form;
        }
    }

    async fn submit_form(&mut self) {
        let Some(form) = self.state.transactions.form.as_ref() else {
            return;
        };

        let payload = match form.validate(self.timezone) {
            Ok(payload) => payload,
            Err(err) => {
                self.state.notifications.warning(err.to_string());
                return;
            }
        };

        let result = match form.editing {
            Some(id) => self
                .client
                .transaction_update(id, &payload)
                .await
                .map(|_| "Transaction updated."),
            None => self
                .client
                .transaction_create(&payload)
                .await
                .map(|_| "Transaction saved."),
        };

        match result {
            Ok(message) => {
                tracing::info!(kind = ?payload.kind, "transaction submitted");
                self.state.notifications.info(message);
                self.remember_defaults(&payload);
                self.state.transactions.form = None;
                self.state.transactions.mode = TransactionsMode::List;
                self.refresh_all().await;
            }
            Err(err) => self.report(err),
        }
    }

    async fn submit_quick_add(&mut self) {
        let parsed = match quick_add::parse(
            &self.state.transactions.quick_input,
            &self.state.categories,
        ) {
            Ok(parsed) => parsed,
            Err(err) => {
                self.state.notifications.warning(err.to_string());
                return;
            }
        };

        let Some(account_id) = self.default_account() else {
            self.state
                .notifications
                .warning("No account available for quick add.");
            return;
        };

        let (source, destination) = match parsed.kind {
            TransactionKind::Deposit => (None, Some(account_id)),
            TransactionKind::Withdrawal | TransactionKind::Transfer => (Some(account_id), None),
        };
        let payload = TransactionNew {
            kind: parsed.kind,
            occurred_at: Utc::now().with_timezone(&self.timezone).fixed_offset(),
            description: parsed.description,
            amount_minor: parsed.amount_minor,
            source_account_id: source,
            destination_account_id: destination,
            category_id: parsed.category_id,
            notes: None,
        };

        match self.client.transaction_create(&payload).await {
            Ok(created) => {
                tracing::info!(id = %created.id, "quick add created transaction");
                self.state.notifications.info("Transaction saved.");
                self.state.transactions.quick_input.clear();
                self.state.transactions.mode = TransactionsMode::List;
                self.refresh_all().await;
            }
            Err(err) => self.report(err),
        }
    }

    async fn delete_selected(&mut self) {
        let Some(id) = self.state.transactions.selected_item().map(|item| item.id) else {
            self.state.transactions.mode = TransactionsMode::List;
            return;
        };

        match self.client.transaction_delete(id).await {
            Ok(()) => {
                tracing::info!(%id, "transaction deleted");
                self.state.notifications.info("Transaction deleted.");
                self.state.transactions.mode = TransactionsMode::List;
                self.refresh_all().await;
            }
            Err(err) => {
                self.state.transactions.mode = TransactionsMode::List;
                self.report(err);
            }
        }
    }

    fn remember_defaults(&mut self, payload: &TransactionNew) {
        let account_id = payload
            .source_account_id
            .or(payload.destination_account_id);
        self.local_state.set_defaults(
            self.client.base_url(),
            DefaultsValue {
                account_id,
                category_id: payload.category_id,
            },
        );
        if let Err(err) = self.local_state.save(&self.config.state_path) {
            tracing::warn!("failed to save local state: {err}");
            self.state
                .notifications
                .warning("Could not save local defaults.");
        }
    }

    /// Reloads accounts, categories and the current transactions page.
    /// Failures end up as notifications.
    async fn refresh_all(&mut self) {
        let mut ok = true;

        match self.client.accounts_list().await {
            Ok(res) => {
                self.state.accounts = res.accounts;
                self.state.selected_account = self
                    .state
                    .selected_account
                    .min(self.state.accounts.len().saturating_sub(1));
            }
            Err(err) => {
                ok = false;
                self.report(err);
            }
        }

        match self.client.categories_list().await {
            Ok(res) => {
                self.state.categories = res.categories;
                self.state.selected_category = self
                    .state
                    .selected_category
                    .min(self.state.categories.len().saturating_sub(1));
            }
            Err(err) => {
                ok = false;
                self.report(err);
            }
        }

        if let Err(err) = self.fetch_transactions().await {
            ok = false;
            self.report(err);
        }

        self.state.connected = ok;
        if ok {
            self.state.last_refresh = Some(Utc::now().with_timezone(&self.timezone));
        }
    }

    async fn load_transactions(&mut self, reset: bool) {
        if reset {
            self.state.transactions.reset();
        }
        if let Err(err) = self.fetch_transactions().await {
            self.report(err);
        }
    }

    async fn fetch_transactions(&mut self) -> std::result::Result<(), ClientError> {
        let payload = self.state.transactions.request(self.config.page_size);
        let res = self.client.transactions_list(&payload).await?;

        let txs = &mut self.state.transactions;
        txs.items = res.transactions;
        txs.next_cursor = res.next_cursor;
        txs.selected = txs.selected.min(txs.items.len().saturating_sub(1));
        Ok(())
    }

    async fn load_transactions_next(&mut self) {
        if let Some(next) = self.state.transactions.next_cursor.clone() {
            self.state
                .transactions
                .push_cursor(self.state.transactions.cursor.clone());
            self.state.transactions.cursor = Some(next);
            self.state.transactions.selected = 0;
            self.load_transactions(false).await;
        }
    }

    async fn load_transactions_prev(&mut self) {
        if let Some(prev) = self.state.transactions.pop_cursor() {
            self.state.transactions.cursor = prev;
            self.state.transactions.selected = 0;
            self.load_transactions(false).await;
        }
    }

    fn report(&mut self, err: ClientError) {
        tracing::warn!("request failed: {err}");
        if matches!(err, ClientError::Transport(_)) {
            self.state.connected = false;
        }
        self.state.notifications.error(err.user_message());
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    fn app() -> App {
        app_with(AppConfig::default())
    }

    fn app_with(config: AppConfig) -> App {
        let config = AppConfig {
            state_path: std::env::temp_dir()
                .join(format!("fintui-app-{}", std::process::id()))
                .join("missing.json")
                .to_string_lossy()
                .into_owned(),
            ..config
        };
        App::new(config).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(key(KeyCode::Char(ch))).await;
        }
    }

    fn shown(app: &App) -> Option<String> {
        app.state.notifications.render().map(|n| n.text)
    }

    #[tokio::test]
    async fn invalid_form_notifies_warning_and_stays_open() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('n'))).await;
        assert_eq!(app.state.transactions.mode, TransactionsMode::Form);

        app.handle_key(key(KeyCode::Enter)).await;

        assert_eq!(shown(&app).as_deref(), Some("Description is required."));
        assert_eq!(app.state.transactions.mode, TransactionsMode::Form);
    }

    #[tokio::test]
    async fn form_typing_reaches_focused_field() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('n'))).await;
        app.handle_key(key(KeyCode::Tab)).await;
        app.handle_key(key(KeyCode::Tab)).await;
        type_text(&mut app, "quick lunch").await;

        let form = app.state.transactions.form.as_ref().unwrap();
        assert_eq!(form.focus, FormField::Description);
        assert_eq!(form.description, "quick lunch");

        app.handle_key(key(KeyCode::Esc)).await;
        assert!(app.state.transactions.form.is_none());
        assert_eq!(app.state.transactions.mode, TransactionsMode::List);
    }

    #[tokio::test]
    async fn quick_add_parse_error_is_a_warning() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('a'))).await;
        type_text(&mut app, "abc lunch").await;
        app.handle_key(key(KeyCode::Enter)).await;

        let rendered = app.state.notifications.render().unwrap();
        assert_eq!(rendered.level, crate::notify::Level::Warning);
        assert_eq!(rendered.text, "Invalid amount: invalid amount");
        assert_eq!(app.state.transactions.mode, TransactionsMode::QuickAdd);
    }

    #[tokio::test]
    async fn quick_add_without_accounts_is_a_warning() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('a'))).await;
        type_text(&mut app, "4.50 coffee").await;
        app.handle_key(key(KeyCode::Enter)).await;

        assert_eq!(
            shown(&app).as_deref(),
            Some("No account available for quick add.")
        );
    }

    #[tokio::test]
    async fn q_is_text_while_searching() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('/'))).await;
        type_text(&mut app, "qq").await;
        assert!(!app.should_quit);
        assert_eq!(app.state.transactions.search_input, "qq");

        app.handle_key(key(KeyCode::Esc)).await;
        assert_eq!(app.state.transactions.mode, TransactionsMode::List);
        assert_eq!(app.state.transactions.search_input, "");

        app.handle_key(key(KeyCode::Char('q'))).await;
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn escape_in_list_dismisses_notification() {
        let mut app = app();
        app.state.notifications.info("first");
        app.state.notifications.info("second");

        app.handle_key(key(KeyCode::Esc)).await;
        assert_eq!(shown(&app).as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn expiry_events_are_applied_in_order() {
        let mut app = app();
        app.state.notifications.info("first");
        app.state.notifications.info("second");
        let first = app.state.notifications.current().unwrap().id;

        app.handle_event(AppEvent::NotificationExpired(first));
        assert_eq!(shown(&app).as_deref(), Some("second"));

        app.handle_event(AppEvent::NotificationExpired(first));
        assert_eq!(shown(&app).as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn failed_page_load_becomes_error_notification() {
        // Nothing listens on the discard port.
        let mut app = app_with(AppConfig {
            base_url: "http://127.0.0.1:9/api/".to_string(),
            ..AppConfig::default()
        });
        app.state.connected = true;

        app.handle_key(key(KeyCode::Char('t'))).await;

        let rendered = app.state.notifications.render().unwrap();
        assert_eq!(rendered.level, crate::notify::Level::Error);
        assert!(rendered.text.starts_with("Server unreachable"));
        assert!(!app.state.connected);
        assert_eq!(
            app.state.transactions.filter.kind,
            Some(TransactionKind::Withdrawal)
        );
        assert_eq!(app.state.transactions.mode, TransactionsMode::List);
    }

    #[tokio::test]
    async fn sections_switch_outside_text_modes() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('1'))).await;
        assert_eq!(app.state.section, Section::Accounts);
        app.handle_key(key(KeyCode::Tab)).await;
        assert_eq!(app.state.section, Section::Transactions);
    }
}
