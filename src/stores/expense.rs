//! Defines the expense store trait.

use crate::{
    Error,
    database_id::ExpenseId,
    models::{Expense, NewExpense},
};

/// Handles the durable storage and retrieval of expenses, keyed by ID.
///
/// Implementers own ID assignment: `create` returns the persisted record
/// with its newly assigned ID, and `update` never changes the ID of an
/// existing record.
pub trait ExpenseStore {
    /// Create a new expense in the store.
    fn create(&mut self, expense: NewExpense) -> Result<Expense, Error>;

    /// Retrieve an expense from the store.
    ///
    /// # Errors
    /// Returns an [Error::NotFound] if `id` does not refer to a stored expense.
    fn get(&self, id: ExpenseId) -> Result<Expense, Error>;

    /// Retrieve all expenses from the store, in the order they are stored.
    fn get_all(&self) -> Result<Vec<Expense>, Error>;

    /// Replace the fields of the expense `id` with `expense`, keeping the ID.
    ///
    /// # Errors
    /// Returns an [Error::UpdateMissingExpense] if `id` does not refer to a
    /// stored expense.
    fn update(&mut self, id: ExpenseId, expense: NewExpense) -> Result<Expense, Error>;

    /// Remove the expense `id` from the store.
    ///
    /// # Errors
    /// Returns an [Error::DeleteMissingExpense] if `id` does not refer to a
    /// stored expense.
    fn delete(&mut self, id: ExpenseId) -> Result<(), Error>;
}
