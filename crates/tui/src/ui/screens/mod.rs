pub mod accounts;
pub mod categories;
pub mod transactions;
