//! Implements a SQLite backed expense store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    database_id::ExpenseId,
    models::{Expense, NewExpense},
    stores::ExpenseStore,
};

/// Stores expenses in a SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteExpenseStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteExpenseStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl ExpenseStore for SqliteExpenseStore {
    /// Create a new expense in the database.
    ///
    /// The returned expense holds the ID assigned by the database.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an
    /// unexpected SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the
    /// same thread.
    fn create(&mut self, expense: NewExpense) -> Result<Expense, Error> {
        let expense = self
            .connection
            .lock()
            .unwrap()
            .prepare(
                "INSERT INTO expense (title, amount, category, date, description)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 RETURNING id, title, amount, category, date, description",
            )?
            .query_row(
                (
                    expense.title,
                    expense.amount,
                    expense.category,
                    expense.date,
                    expense.description,
                ),
                map_expense_row,
            )?;

        Ok(expense)
    }

    /// Retrieve an expense in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid expense,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn get(&self, id: ExpenseId) -> Result<Expense, Error> {
        let expense = self
            .connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, title, amount, category, date, description
                 FROM expense WHERE id = :id",
            )?
            .query_row(&[(":id", &id)], map_expense_row)?;

        Ok(expense)
    }

    /// Retrieve all expenses in the database, in the order they are stored.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is a SQL error.
    fn get_all(&self) -> Result<Vec<Expense>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, title, amount, category, date, description FROM expense")?
            .query_map((), map_expense_row)?
            .map(|maybe_expense| maybe_expense.map_err(Error::SqlError))
            .collect()
    }

    /// Overwrite the fields of the expense `id` with `expense`.
    ///
    /// The ID of the stored expense is preserved.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::UpdateMissingExpense] if `id` does not refer to a valid expense,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn update(&mut self, id: ExpenseId, expense: NewExpense) -> Result<Expense, Error> {
        let expense = self
            .connection
            .lock()
            .unwrap()
            .prepare(
                "UPDATE expense
                 SET title = ?1, amount = ?2, category = ?3, date = ?4, description = ?5
                 WHERE id = ?6
                 RETURNING id, title, amount, category, date, description",
            )?
            .query_row(
                (
                    expense.title,
                    expense.amount,
                    expense.category,
                    expense.date,
                    expense.description,
                    id,
                ),
                map_expense_row,
            )
            .map_err(|error| match error {
                rusqlite::Error::QueryReturnedNoRows => Error::UpdateMissingExpense,
                error => error.into(),
            })?;

        Ok(expense)
    }

    /// Remove the expense `id` from the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DeleteMissingExpense] if `id` does not refer to a valid expense,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn delete(&mut self, id: ExpenseId) -> Result<(), Error> {
        let rows_affected = self
            .connection
            .lock()
            .unwrap()
            .execute("DELETE FROM expense WHERE id = :id", &[(":id", &id)])?;

        match rows_affected {
            0 => Err(Error::DeleteMissingExpense),
            _ => Ok(()),
        }
    }
}

fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    Ok(Expense {
        id: row.get(0)?,
        title: row.get(1)?,
        amount: row.get(2)?,
        category: row.get(3)?,
        date: row.get(4)?,
        description: row.get(5)?,
    })
}
