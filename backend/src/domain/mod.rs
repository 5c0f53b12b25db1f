//! # Domain Module
//!
//! Business rules for expenses: id generation, input validation and logging
//! around the storage layer.

pub mod expense_service;

pub use expense_service::{ExpenseError, ExpenseResult, ExpenseService};
