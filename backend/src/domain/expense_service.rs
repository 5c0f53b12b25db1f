//! Expense service domain logic.
use shared::{CreateExpenseRequest, Expense, ExpenseValidationError, UpdateExpenseRequest};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::storage::{Connection, ExpenseStorage};

/// Errors returned by the expense service
#[derive(Debug, thiserror::Error)]
pub enum ExpenseError {
    #[error("Invalid expense: {0}")]
    Validation(#[from] ExpenseValidationError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type ExpenseResult<T> = std::result::Result<T, ExpenseError>;

/// Service for managing expenses on top of any storage connection
pub struct ExpenseService<C: Connection> {
    expense_repository: C::ExpenseRepository,
}

impl<C: Connection> ExpenseService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            expense_repository: connection.create_expense_repository(),
        }
    }

    /// Record a new expense under a freshly generated id
    pub async fn add_expense(&self, request: CreateExpenseRequest) -> ExpenseResult<Expense> {
        Expense::validate_fields(&request.name, request.amount)?;

        let id = Uuid::new_v4();
        let expense = Expense::from_request(id, request);
        self.expense_repository.insert_expense(id, &expense).await?;

        info!("Added expense {} ({}) for user {}", expense.id, expense.name, expense.user_id);
        Ok(expense)
    }

    /// Record a new expense under a caller-supplied id
    pub async fn insert_expense(&self, id: Uuid, expense: &Expense) -> ExpenseResult<u64> {
        Expense::validate_fields(&expense.name, expense.amount)?;

        let inserted = self.expense_repository.insert_expense(id, expense).await?;
        info!("Inserted expense {}", id);
        Ok(inserted)
    }

    /// Get an expense by ID, `None` if it does not exist
    pub async fn get_expense(&self, id: Uuid) -> ExpenseResult<Option<Expense>> {
        let expense = self.expense_repository.select_expense_by_id(id).await?;

        if expense.is_none() {
            warn!("Expense not found: {}", id);
        }

        Ok(expense)
    }

    pub async fn list_expenses(&self) -> ExpenseResult<Vec<Expense>> {
        let expenses = self.expense_repository.select_all_expenses().await?;
        info!("Found {} expenses", expenses.len());
        Ok(expenses)
    }

    /// Replace name, amount and date of an existing expense
    /// Returns the number of updated rows (0 if the expense does not exist)
    pub async fn update_expense(&self, id: Uuid, request: UpdateExpenseRequest) -> ExpenseResult<u64> {
        Expense::validate_fields(&request.name, request.amount)?;

        // ExpenseStorage::update_expense_by_id ignores id and user_id
        let expense = Expense {
            id,
            name: request.name,
            amount: request.amount,
            user_id: Uuid::nil(),
            date: request.date,
        };

        let updated = self.expense_repository.update_expense_by_id(id, &expense).await?;
        if updated == 0 {
            warn!("No expense updated for id {}", id);
        } else {
            info!("Updated expense {}", id);
        }

        Ok(updated)
    }

    /// Delete an expense, returning the number of deleted rows
    pub async fn delete_expense(&self, id: Uuid) -> ExpenseResult<u64> {
        let deleted = self.expense_repository.delete_expense_by_id(id).await?;
        if deleted == 0 {
            warn!("No expense deleted for id {}", id);
        } else {
            info!("Deleted expense {}", id);
        }

        Ok(deleted)
    }
}
