use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of characters allowed in an expense name
pub const MAX_NAME_LENGTH: usize = 256;

/// A single expense recorded for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Primary key, never changes once the expense is stored
    pub id: Uuid,
    /// Merchant or label, e.g. "Rewe"
    pub name: String,
    pub amount: f64,
    /// Owning user, fixed at creation
    pub user_id: Uuid,
    /// Calendar date of the expense (YYYY-MM-DD)
    pub date: NaiveDate,
}

/// Request for recording a new expense; the id is generated by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    pub name: String,
    pub amount: f64,
    pub user_id: Uuid,
    pub date: NaiveDate,
}

/// Request for replacing the mutable fields of an existing expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateExpenseRequest {
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
}

/// Validation errors for expense names and amounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum ExpenseValidationError {
    #[error("Expense name cannot be empty")]
    EmptyName,
    #[error("Expense name is too long ({0} characters, max 256)")]
    NameTooLong(usize),
    #[error("Expense amount must be a finite number, got {0}")]
    NonFiniteAmount(f64),
}

impl Expense {
    pub fn new(id: Uuid, name: impl Into<String>, amount: f64, user_id: Uuid, date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            user_id,
            date,
        }
    }

    /// Build an expense from a create request under the given id
    pub fn from_request(id: Uuid, request: CreateExpenseRequest) -> Self {
        Self {
            id,
            name: request.name,
            amount: request.amount,
            user_id: request.user_id,
            date: request.date,
        }
    }

    /// Copy of this expense with the mutable fields replaced
    pub fn updated(&self, request: &UpdateExpenseRequest) -> Self {
        Self {
            id: self.id,
            name: request.name.clone(),
            amount: request.amount,
            user_id: self.user_id,
            date: request.date,
        }
    }

    /// Validate the user-editable fields of an expense
    pub fn validate_fields(name: &str, amount: f64) -> Result<(), ExpenseValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        let length = trimmed.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(ExpenseValidationError::NameTooLong(length));
        }

        if !amount.is_finite() {
            return Err(ExpenseValidationError::NonFiniteAmount(amount));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_expense_serializes_date_as_iso_string() {
        let id = Uuid::parse_str("6f1c2a52-6d3e-4b8e-9d0a-1f2e3d4c5b6a").unwrap();
        let user_id = Uuid::parse_str("0e9b7c1d-2a3f-4e5d-8c7b-6a5f4e3d2c1b").unwrap();
        let expense = Expense::new(id, "Rewe", 10.0, user_id, date("2020-04-01"));

        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["id"], "6f1c2a52-6d3e-4b8e-9d0a-1f2e3d4c5b6a");
        assert_eq!(json["name"], "Rewe");
        assert_eq!(json["amount"], 10.0);
        assert_eq!(json["user_id"], "0e9b7c1d-2a3f-4e5d-8c7b-6a5f4e3d2c1b");
        assert_eq!(json["date"], "2020-04-01");
    }

    #[test]
    fn test_updated_keeps_id_and_user() {
        let expense = Expense::new(Uuid::new_v4(), "Rewe", 10.0, Uuid::new_v4(), date("2020-04-01"));
        let request = UpdateExpenseRequest {
            name: "Aldi".to_string(),
            amount: 12.5,
            date: date("2020-04-02"),
        };

        let updated = expense.updated(&request);
        assert_eq!(updated.id, expense.id);
        assert_eq!(updated.user_id, expense.user_id);
        assert_eq!(updated.name, "Aldi");
        assert_eq!(updated.amount, 12.5);
        assert_eq!(updated.date, date("2020-04-02"));
    }

    #[test]
    fn test_validate_fields() {
        assert!(Expense::validate_fields("Lidl", 5.0).is_ok());
        assert!(Expense::validate_fields("Refund", -3.5).is_ok());

        assert_eq!(
            Expense::validate_fields("   ", 5.0),
            Err(ExpenseValidationError::EmptyName)
        );

        let long_name = "x".repeat(MAX_NAME_LENGTH + 1);
        assert_eq!(
            Expense::validate_fields(&long_name, 5.0),
            Err(ExpenseValidationError::NameTooLong(MAX_NAME_LENGTH + 1))
        );

        assert!(matches!(
            Expense::validate_fields("Lidl", f64::NAN),
            Err(ExpenseValidationError::NonFiniteAmount(_))
        ));
        assert_eq!(
            Expense::validate_fields("Lidl", f64::INFINITY),
            Err(ExpenseValidationError::NonFiniteAmount(f64::INFINITY))
        );
    }
}
