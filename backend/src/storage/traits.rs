//! # Storage Traits
//!
//! Storage abstractions that let the domain layer work against any backend
//! that can persist expenses.

use anyhow::Result;
use async_trait::async_trait;
use shared::Expense;
use uuid::Uuid;

/// Trait defining the interface for expense storage operations
///
/// Missing rows are never an error: reads return `None` and writes report
/// zero affected rows. Any other failure is passed through untouched.
#[async_trait]
pub trait ExpenseStorage: Send + Sync {
    /// Insert a new expense under `id`, returning the number of rows added
    async fn insert_expense(&self, id: Uuid, expense: &Expense) -> Result<u64>;

    /// Retrieve a specific expense by ID
    async fn select_expense_by_id(&self, id: Uuid) -> Result<Option<Expense>>;

    /// List every stored expense
    async fn select_all_expenses(&self) -> Result<Vec<Expense>>;

    /// Replace name, amount and date of the expense with this ID
    ///
    /// Only those three fields of `expense` are written. `expense.id` and
    /// `expense.user_id` are ignored and the stored values are kept.
    /// Returns 1 if the expense was updated, 0 if it does not exist
    async fn update_expense_by_id(&self, id: Uuid, expense: &Expense) -> Result<u64>;

    /// Delete the expense with this ID
    /// Returns 1 if the expense was deleted, 0 if it does not exist
    async fn delete_expense_by_id(&self, id: Uuid) -> Result<u64>;
}

/// Trait defining the interface for storage connections
///
/// Acts as a factory for repositories so services only depend on the
/// connection they are handed.
pub trait Connection: Send + Sync + Clone {
    /// The type of ExpenseStorage this connection creates
    type ExpenseRepository: ExpenseStorage;

    /// Create a new expense repository for this connection
    fn create_expense_repository(&self) -> Self::ExpenseRepository;
}
