//! Defines the expense record and its incoming representation.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::database_id::ExpenseId;

/// A single expense, i.e. an event where money was spent.
///
/// Expenses are created from a [NewExpense]; the ID is assigned by the
/// database and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// A short label for the expense, e.g. "Lunch".
    pub title: Option<String>,
    /// The amount of money spent.
    pub amount: f64,
    /// The spending category, e.g. "Food", "Transport".
    pub category: Option<String>,
    /// When the money was spent.
    pub date: Option<Date>,
    /// Free-form text detailing the expense.
    pub description: Option<String>,
}

/// The client-supplied fields of an expense.
///
/// This is the wire representation for create and update requests. It has no
/// ID field, so an ID in the request body is ignored and the database keeps
/// ownership of ID assignment. Fields missing from the request body default
/// to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    /// A short label for the expense.
    #[serde(default)]
    pub title: Option<String>,
    /// The amount of money spent.
    pub amount: f64,
    /// The spending category.
    #[serde(default)]
    pub category: Option<String>,
    /// When the money was spent.
    #[serde(default)]
    pub date: Option<Date>,
    /// Free-form text detailing the expense.
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod new_expense_tests {
    use time::macros::date;

    use super::NewExpense;

    #[test]
    fn deserializes_with_missing_fields() {
        let got: NewExpense =
            serde_json::from_str(r#"{"description": "lunch", "amount": 12.5}"#).unwrap();

        let want = NewExpense {
            title: None,
            amount: 12.5,
            category: None,
            date: None,
            description: Some("lunch".to_owned()),
        };

        assert_eq!(got, want);
    }

    #[test]
    fn ignores_id_in_request_body() {
        let got: NewExpense = serde_json::from_str(
            r#"{"id": 99, "title": "Bus fare", "amount": 3.2, "category": "Transport",
                "date": "2025-06-01", "description": ""}"#,
        )
        .unwrap();

        assert_eq!(got.title, Some("Bus fare".to_owned()));
        assert_eq!(got.date, Some(date!(2025 - 06 - 01)));
    }
}
