use api_types::transaction::{TransactionKind, TransactionNew, TransactionView};
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use chrono_tz::Tz;
use thiserror::Error;
use uuid::Uuid;

use crate::money::{self, MoneyError};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Kind,
    Date,
    Description,
    Amount,
    Source,
    Destination,
    Category,
    Notes,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        Self::Kind,
        Self::Date,
        Self::Description,
        Self::Amount,
        Self::Source,
        Self::Destination,
        Self::Category,
        Self::Notes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Kind => "Kind",
            Self::Date => "Date",
            Self::Description => "Description",
            Self::Amount => "Amount",
            Self::Source => "From",
            Self::Destination => "To",
            Self::Category => "Category",
            Self::Notes => "Notes",
        }
    }

    /// Picker fields cycle through a fixed set instead of taking text.
    pub fn is_picker(self) -> bool {
        matches!(
            self,
            Self::Kind | Self::Source | Self::Destination | Self::Category
        )
    }

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|field| *field == self)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Description is required.")]
    MissingDescription,
    #[error("Invalid amount: {0}")]
    Amount(#[from] MoneyError),
    #[error("Amount must be > 0.")]
    NotPositive,
    #[error("Invalid date, expected YYYY-MM-DD.")]
    InvalidDate,
    #[error("Pick the account the money comes from.")]
    MissingSource,
    #[error("Pick the account the money goes to.")]
    MissingDestination,
    #[error("A transfer needs two different accounts.")]
    SameAccount,
}

/// Multi-step input for creating or editing a transaction.
#[derive(Debug, Clone)]
pub struct TransactionForm {
    /// `Some` when editing an existing transaction.
    pub editing: Option<Uuid>,
    pub focus: FormField,
    pub kind: TransactionKind,
    pub date: String,
    pub description: String,
    pub amount: String,
    pub source_account_id: Option<Uuid>,
    pub destination_account_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub notes: String,
    /// Timestamp of the edited transaction, kept while its date is untouched.
    pub original_occurred_at: Option<DateTime<FixedOffset>>,
}

impl TransactionForm {
    pub fn new_with_defaults(
        today: NaiveDate,
        account_id: Option<Uuid>,
        category_id: Option<Uuid>,
    ) -> Self {
        Self {
            editing: None,
            focus: FormField::Kind,
            kind: TransactionKind::Withdrawal,
            date: today.format(DATE_FORMAT).to_string(),
            description: String::new(),
            amount: String::new(),
            source_account_id: account_id,
            destination_account_id: None,
            category_id,
            notes: String::new(),
            original_occurred_at: None,
        }
    }

    pub fn from_view(view: &TransactionView) -> Self {
        Self {
            editing: Some(view.id),
            focus: FormField::Description,
            kind: view.kind,
            date: view.occurred_at.date_naive().format(DATE_FORMAT).to_string(),
            description: view.description.clone(),
            amount: money::format_plain(view.amount_minor),
            source_account_id: view.source_account_id,
            destination_account_id: view.destination_account_id,
            category_id: view.category_id,
            notes: view.notes.clone().unwrap_or_default(),
            original_occurred_at: Some(view.occurred_at),
        }
    }

    pub fn next_field(&mut self) {
        let pos = self.focus.position();
        self.focus = FormField::ALL[(pos + 1) % FormField::ALL.len()];
    }

    pub fn prev_field(&mut self) {
        let pos = self.focus.position();
        let len = FormField::ALL.len();
        self.focus = FormField::ALL[(pos + len - 1) % len];
    }

    /// Text field under focus; `None` on pickers.
    pub fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Date => Some(&mut self.date),
            FormField::Description => Some(&mut self.description),
            FormField::Amount => Some(&mut self.amount),
            FormField::Notes => Some(&mut self.notes),
            FormField::Kind
            | FormField::Source
            | FormField::Destination
            | FormField::Category => None,
        }
    }

    pub fn input(&mut self, ch: char) {
        if let Some(field) = self.active_text_mut() {
            field.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.active_text_mut() {
            field.pop();
        }
    }

    /// Cycles the focused picker through its options (accounts and categories
    /// include an empty slot).
    pub fn cycle(&mut self, accounts: &[Uuid], categories: &[Uuid], forward: bool) {
        match self.focus {
            FormField::Kind => {
                let all = TransactionKind::ALL;
                let pos = all.iter().position(|k| *k == self.kind).unwrap_or(0);
                let next = if forward {
                    (pos + 1) % all.len()
                } else {
                    (pos + all.len() - 1) % all.len()
                };
                self.kind = all[next];
            }
            FormField::Source => {
                self.source_account_id = cycle_id(self.source_account_id, accounts, forward)
            }
            FormField::Destination => {
                self.destination_account_id =
                    cycle_id(self.destination_account_id, accounts, forward)
            }
            FormField::Category => {
                self.category_id = cycle_id(self.category_id, categories, forward)
            }
            FormField::Date | FormField::Description | FormField::Amount | FormField::Notes => {}
        }
    }

    /// The original timestamp while the date field still shows it, otherwise
    /// local midnight of the typed date.
    fn occurred_at(&self, tz: Tz) -> Result<DateTime<FixedOffset>, FormError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| FormError::InvalidDate)?;

        if let Some(original) = self
            .original_occurred_at
            .filter(|original| original.date_naive() == date)
        {
            return Ok(original);
        }

        date.and_hms_opt(0, 0, 0)
            .and_then(|midnight| tz.from_local_datetime(&midnight).earliest())
            .map(|local| local.fixed_offset())
            .ok_or(FormError::InvalidDate)
    }

    /// Builds the request body, or the first problem found.
    pub fn validate(&self, tz: Tz) -> Result<TransactionNew, FormError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(FormError::MissingDescription);
        }

        let amount_minor = money::parse_minor(&self.amount)?;
        if amount_minor <= 0 {
            return Err(FormError::NotPositive);
        }

        let occurred_at = self.occurred_at(tz)?;

        let (source, destination) = match self.kind {
            TransactionKind::Withdrawal => (
                Some(self.source_account_id.ok_or(FormError::MissingSource)?),
                None,
            ),
            TransactionKind::Deposit => (
                None,
                Some(
                    self.destination_account_id
                        .ok_or(FormError::MissingDestination)?,
                ),
            ),
            TransactionKind::Transfer => {
                let source = self.source_account_id.ok_or(FormError::MissingSource)?;
                let destination = self
                    .destination_account_id
                    .ok_or(FormError::MissingDestination)?;
                if source == destination {
                    return Err(FormError::SameAccount);
                }
                (Some(source), Some(destination))
            }
        };

        let notes = self.notes.trim();
        Ok(TransactionNew {
            kind: self.kind,
            occurred_at,
            description: description.to_string(),
            amount_minor,
            source_account_id: source,
            destination_account_id: destination,
            category_id: self.category_id,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }
}

/// Steps through `ids` with a trailing "none" slot.
pub(super) fn cycle_id(current: Option<Uuid>, ids: &[Uuid], forward: bool) -> Option<Uuid> {
    if ids.is_empty() {
        return None;
    }
    // Slot `ids.len()` stands for "none".
    let slots = ids.len() + 1;
    let pos = current
        .and_then(|id| ids.iter().position(|candidate| *candidate == id))
        .unwrap_or(ids.len());
    let next = if forward {
        (pos + 1) % slots
    } else {
        (pos + slots - 1) % slots
    };
    ids.get(next).copied()
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn filled(kind: TransactionKind) -> TransactionForm {
        let mut form = TransactionForm::new_with_defaults(date(), Some(Uuid::from_u128(1)), None);
        form.kind = kind;
        form.description = " Rent ".to_string();
        form.amount = "850".to_string();
        form
    }

    #[test]
    fn withdrawal_builds_payload() {
        let payload = filled(TransactionKind::Withdrawal)
            .validate(chrono_tz::Europe::Rome)
            .unwrap();
        assert_eq!(payload.description, "Rent");
        assert_eq!(payload.amount_minor, 85_000);
        assert_eq!(payload.source_account_id, Some(Uuid::from_u128(1)));
        assert_eq!(payload.destination_account_id, None);
        assert_eq!(payload.notes, None);
        assert_eq!(payload.occurred_at.day(), 14);
        assert_eq!(payload.occurred_at.hour(), 0);
        assert_eq!(payload.occurred_at.offset().local_minus_utc(), 3600);
    }

    fn view_at(occurred_at: &str) -> TransactionView {
        TransactionView {
            id: Uuid::from_u128(9),
            kind: TransactionKind::Withdrawal,
            occurred_at: DateTime::parse_from_rfc3339(occurred_at).unwrap(),
            description: "Dinner".to_string(),
            amount_minor: 4_250,
            currency: "EUR".to_string(),
            source_account_id: Some(Uuid::from_u128(1)),
            destination_account_id: None,
            category_id: None,
            notes: None,
        }
    }

    #[test]
    fn editing_keeps_time_of_day_when_date_is_unchanged() {
        let view = view_at("2026-01-02T18:45:00+01:00");
        let mut form = TransactionForm::from_view(&view);
        form.description = "Dinner with friends".to_string();

        let payload = form.validate(chrono_tz::Europe::Rome).unwrap();
        assert_eq!(payload.occurred_at, view.occurred_at);
        assert_eq!(payload.description, "Dinner with friends");
    }

    #[test]
    fn editing_the_date_moves_to_local_midnight() {
        let view = view_at("2026-01-02T18:45:00+01:00");
        let mut form = TransactionForm::from_view(&view);
        form.date = "2026-01-05".to_string();

        let payload = form.validate(chrono_tz::Europe::Rome).unwrap();
        assert_eq!(payload.occurred_at.day(), 5);
        assert_eq!(payload.occurred_at.hour(), 0);
        assert_eq!(payload.occurred_at.offset().local_minus_utc(), 3600);
    }

    #[test]
    fn deposit_requires_destination() {
        let form = filled(TransactionKind::Deposit);
        assert_eq!(
            form.validate(chrono_tz::UTC),
            Err(FormError::MissingDestination)
        );
    }

    #[test]
    fn transfer_requires_distinct_accounts() {
        let mut form = filled(TransactionKind::Transfer);
        form.destination_account_id = Some(Uuid::from_u128(1));
        assert_eq!(form.validate(chrono_tz::UTC), Err(FormError::SameAccount));

        form.destination_account_id = Some(Uuid::from_u128(2));
        let payload = form.validate(chrono_tz::UTC).unwrap();
        assert_eq!(payload.destination_account_id, Some(Uuid::from_u128(2)));
    }

    #[test]
    fn validation_reports_first_problem() {
        let mut form = filled(TransactionKind::Withdrawal);
        form.description.clear();
        assert_eq!(
            form.validate(chrono_tz::UTC),
            Err(FormError::MissingDescription)
        );

        let mut form = filled(TransactionKind::Withdrawal);
        form.amount = "-3".to_string();
        assert_eq!(form.validate(chrono_tz::UTC), Err(FormError::NotPositive));

        let mut form = filled(TransactionKind::Withdrawal);
        form.date = "14/03/2026".to_string();
        assert_eq!(form.validate(chrono_tz::UTC), Err(FormError::InvalidDate));
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut form = filled(TransactionKind::Withdrawal);
        form.prev_field();
        assert_eq!(form.focus, FormField::Notes);
        form.next_field();
        form.next_field();
        assert_eq!(form.focus, FormField::Date);
    }

    #[test]
    fn typing_only_reaches_text_fields() {
        let mut form = filled(TransactionKind::Withdrawal);
        form.focus = FormField::Kind;
        form.input('x');
        form.focus = FormField::Notes;
        form.input('o');
        form.input('k');
        form.backspace();
        assert_eq!(form.notes, "o");
        assert_eq!(form.kind, TransactionKind::Withdrawal);
    }

    #[test]
    fn pickers_cycle_through_none() {
        let ids = [Uuid::from_u128(1), Uuid::from_u128(2)];
        assert_eq!(cycle_id(None, &ids, true), Some(ids[0]));
        assert_eq!(cycle_id(Some(ids[1]), &ids, true), None);
        assert_eq!(cycle_id(None, &ids, false), Some(ids[1]));
        assert_eq!(cycle_id(None, &[], true), None);

        let mut form = filled(TransactionKind::Withdrawal);
        form.focus = FormField::Kind;
        form.cycle(&ids, &[], false);
        assert_eq!(form.kind, TransactionKind::Transfer);
    }
}
