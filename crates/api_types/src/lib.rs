use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod account {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum AccountKind {
        Asset,
        Liability,
        Expense,
        Revenue,
    }

    impl AccountKind {
        pub fn label(self) -> &'static str {
            match self {
                Self::Asset => "Asset",
                Self::Liability => "Liability",
                Self::Expense => "Expense",
                Self::Revenue => "Revenue",
            }
        }
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct AccountView {
        pub id: Uuid,
        pub name: String,
        pub kind: AccountKind,
        /// ISO 4217 code (e.g. `EUR`).
        pub currency: String,
        /// Current balance in minor units.
        pub balance_minor: i64,
        #[serde(default = "default_active")]
        pub active: bool,
    }

    fn default_active() -> bool {
        true
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountListResponse {
        pub accounts: Vec<AccountView>,
    }
}

pub mod category {
    use super::*;

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct CategoryView {
        pub id: Uuid,
        pub name: String,
        /// Total spent in the current period, in minor units (<= 0).
        #[serde(default)]
        pub spent_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryListResponse {
        pub categories: Vec<CategoryView>,
    }
}

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TransactionKind {
        Withdrawal,
        Deposit,
        Transfer,
    }

    impl TransactionKind {
        pub const ALL: [TransactionKind; 3] = [Self::Withdrawal, Self::Deposit, Self::Transfer];

        pub fn label(self) -> &'static str {
            match self {
                Self::Withdrawal => "Withdrawal",
                Self::Deposit => "Deposit",
                Self::Transfer => "Transfer",
            }
        }
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransactionList {
        pub account_id: Option<Uuid>,
        pub category_id: Option<Uuid>,
        pub kind: Option<TransactionKind>,
        /// Free-text search on description and notes.
        pub query: Option<String>,
        pub limit: Option<u64>,
        /// Opaque pagination cursor, from `next_cursor`.
        ///
        /// Newest → older pagination.
        pub cursor: Option<String>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: Uuid,
        pub kind: TransactionKind,
        /// RFC3339 timestamp, including timezone offset (local user time).
        pub occurred_at: DateTime<FixedOffset>,
        pub description: String,
        /// Always positive; the kind defines the direction.
        pub amount_minor: i64,
        pub currency: String,
        pub source_account_id: Option<Uuid>,
        pub destination_account_id: Option<Uuid>,
        pub category_id: Option<Uuid>,
        pub notes: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionListResponse {
        pub transactions: Vec<TransactionView>,
        /// Opaque cursor for fetching the next page (older items).
        pub next_cursor: Option<String>,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TransactionNew {
        pub kind: TransactionKind,
        /// RFC3339 timestamp, including timezone offset (local user time).
        pub occurred_at: DateTime<FixedOffset>,
        pub description: String,
        /// Must be > 0. The kind defines the direction.
        pub amount_minor: i64,
        pub source_account_id: Option<Uuid>,
        pub destination_account_id: Option<Uuid>,
        pub category_id: Option<Uuid>,
        pub notes: Option<String>,
    }

    /// Full replacement of an existing transaction.
    pub type TransactionUpdate = TransactionNew;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionCreated {
        pub id: Uuid,
    }
}
