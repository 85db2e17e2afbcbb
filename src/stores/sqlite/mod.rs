//! Contains convenience type alias and function for [AppState] that uses
//! the SQLite backend.

pub mod expense;

pub use expense::SqliteExpenseStore;

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{AppState, Error, db::initialize};

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SqliteAppState = AppState<SqliteExpenseStore>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the table for the expense
/// model to the database.
pub fn create_app_state(db_connection: Connection) -> Result<SqliteAppState, Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));
    let expense_store = SqliteExpenseStore::new(connection);

    Ok(AppState::new(expense_store))
}
