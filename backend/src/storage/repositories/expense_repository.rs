use anyhow::{Context, Result};
use async_trait::async_trait;
use shared::Expense;
use sqlx::{sqlite::SqliteRow, Row};
use tracing::debug;
use uuid::Uuid;

use crate::storage::connection::DbConnection;
use crate::storage::traits::ExpenseStorage;

/// Repository for expense operations
#[derive(Clone)]
pub struct ExpenseRepository {
    db: DbConnection,
}

impl ExpenseRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn expense_from_row(row: &SqliteRow) -> Result<Expense> {
        let id: String = row.try_get("id")?;
        let user_id: String = row.try_get("user_id")?;

        Ok(Expense {
            id: Uuid::parse_str(&id).with_context(|| format!("Invalid expense id in database: {}", id))?,
            name: row.try_get("name")?,
            amount: row.try_get("amount")?,
            user_id: Uuid::parse_str(&user_id)
                .with_context(|| format!("Invalid user id for expense {}: {}", id, user_id))?,
            date: row.try_get("date")?,
        })
    }
}

#[async_trait]
impl ExpenseStorage for ExpenseRepository {
    async fn insert_expense(&self, id: Uuid, expense: &Expense) -> Result<u64> {
        debug!("Inserting expense {}", id);

        let result = sqlx::query(
            r#"
            INSERT INTO expenses (id, name, amount, user_id, date)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(&expense.name)
        .bind(expense.amount)
        .bind(expense.user_id.to_string())
        .bind(expense.date)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected())
    }

    async fn select_expense_by_id(&self, id: Uuid) -> Result<Option<Expense>> {
        // fetch_optional: zero rows is a normal outcome, not an error
        let row = sqlx::query(
            r#"
            SELECT id, name, amount, user_id, date
            FROM expenses
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(Self::expense_from_row(&r)?)),
            None => Ok(None),
        }
    }

    async fn select_all_expenses(&self) -> Result<Vec<Expense>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, amount, user_id, date
            FROM expenses
            ORDER BY date ASC, name ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::expense_from_row).collect()
    }

    async fn update_expense_by_id(&self, id: Uuid, expense: &Expense) -> Result<u64> {
        debug!("Updating expense {}", id);

        let result = sqlx::query(
            r#"
            UPDATE expenses
            SET name = ?, amount = ?, date = ?
            WHERE id = ?
            "#,
        )
        .bind(&expense.name)
        .bind(expense.amount)
        .bind(expense.date)
        .bind(id.to_string())
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_expense_by_id(&self, id: Uuid) -> Result<u64> {
        debug!("Deleting expense {}", id);

        let result = sqlx::query("DELETE FROM expenses WHERE id = ?")
            .bind(id.to_string())
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected())
    }
}
