//! Expense tracker backend: SQLite storage for expenses and the service
//! layer built on top of it.

pub mod config;
pub mod domain;
pub mod storage;

pub use config::StorageConfig;
pub use domain::{ExpenseError, ExpenseService};
pub use storage::{Connection, DbConnection, ExpenseRepository, ExpenseStorage};
