//! # Storage Module
//!
//! Handles persistence of expenses in SQLite.
//!
//! The domain layer only sees the [`ExpenseStorage`] and [`Connection`]
//! traits; [`DbConnection`] is the query-execution handle handed to each
//! repository through its constructor.

pub mod connection;
pub mod repositories;
pub mod traits;

pub use connection::DbConnection;
pub use repositories::ExpenseRepository;
pub use traits::{Connection, ExpenseStorage};
