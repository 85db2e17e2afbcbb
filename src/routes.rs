//! This file defines the route handlers for the expense resource.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState,
    database_id::ExpenseId,
    models::NewExpense,
    stores::ExpenseStore,
};

/// A route handler for creating a new expense.
///
/// The ID of the created expense is assigned by the store; an ID in the
/// request body is ignored.
pub async fn create_expense<E>(
    State(mut state): State<AppState<E>>,
    Json(new_expense): Json<NewExpense>,
) -> impl IntoResponse
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
{
    state
        .expense_store
        .create(new_expense)
        .map(|expense| (StatusCode::CREATED, Json(expense)))
}

/// A route handler for getting all expenses.
pub async fn get_expenses<E>(State(state): State<AppState<E>>) -> impl IntoResponse
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
{
    state.expense_store.get_all().map(Json)
}

/// A route handler for getting an expense by its database ID.
///
/// This function will return the status code 404 if the requested resource
/// does not exist (e.g., not created yet).
pub async fn get_expense<E>(
    State(state): State<AppState<E>>,
    Path(expense_id): Path<ExpenseId>,
) -> impl IntoResponse
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
{
    state.expense_store.get(expense_id).map(Json)
}

/// A route handler for updating an expense by its database ID.
///
/// The stored fields are replaced with the fields from the request body and
/// the ID is kept. This function will return the status code 404 if the
/// requested resource does not exist.
pub async fn update_expense<E>(
    State(mut state): State<AppState<E>>,
    Path(expense_id): Path<ExpenseId>,
    Json(new_expense): Json<NewExpense>,
) -> impl IntoResponse
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
{
    state
        .expense_store
        .update(expense_id, new_expense)
        .map(Json)
}

/// A route handler for deleting an expense by its database ID.
///
/// This function will return the status code 404 if the requested resource
/// does not exist.
pub async fn delete_expense<E>(
    State(mut state): State<AppState<E>>,
    Path(expense_id): Path<ExpenseId>,
) -> impl IntoResponse
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
{
    state
        .expense_store
        .delete(expense_id)
        .map(|_| StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod expense_route_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{
        Expense, build_router,
        endpoints::{self, format_endpoint},
        stores::sqlite::create_app_state,
    };

    fn get_test_server() -> TestServer {
        let db_connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        let state = create_app_state(db_connection).expect("Could not create app state.");
        let app = build_router(state);

        TestServer::new(app)
    }

    async fn create_lunch_expense(server: &TestServer) -> Expense {
        let response = server
            .post(endpoints::EXPENSES)
            .json(&json!({
                "title": "Lunch",
                "amount": 12.5,
                "category": "Food",
                "date": "2025-06-02",
                "description": "lunch"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);

        response.json::<Expense>()
    }

    #[tokio::test]
    async fn create_expense_returns_created_record_with_id() {
        let server = get_test_server();

        let expense = create_lunch_expense(&server).await;

        assert_eq!(expense.id, 1);
        assert_eq!(expense.title, Some("Lunch".to_owned()));
        assert_eq!(expense.amount, 12.5);
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let server = get_test_server();
        let created = create_lunch_expense(&server).await;

        let response = server
            .get(&format_endpoint(endpoints::EXPENSE, created.id))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Expense>(), created);
    }

    #[tokio::test]
    async fn create_accepts_partial_body() {
        let server = get_test_server();

        let response = server
            .post(endpoints::EXPENSES)
            .json(&json!({"description": "lunch", "amount": 12.5}))
            .await;

        response.assert_status(StatusCode::CREATED);
        let expense = response.json::<Expense>();
        assert_eq!(expense.id, 1);
        assert_eq!(expense.description, Some("lunch".to_owned()));
        assert_eq!(expense.title, None);
    }

    #[tokio::test]
    async fn get_expenses_returns_all_created_records() {
        let server = get_test_server();
        let mut want = Vec::new();
        for _ in 0..3 {
            want.push(create_lunch_expense(&server).await);
        }

        let response = server.get(endpoints::EXPENSES).await;

        response.assert_status_ok();
        let got = response.json::<Vec<Expense>>();
        assert_eq!(got.len(), want.len());
        assert_eq!(got, want);
    }

    #[tokio::test]
    async fn get_expenses_returns_empty_collection_for_empty_store() {
        let server = get_test_server();

        let response = server.get(endpoints::EXPENSES).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Vec<Expense>>(), vec![]);
    }

    #[tokio::test]
    async fn get_expense_fails_on_unused_id() {
        let server = get_test_server();

        let response = server.get(&format_endpoint(endpoints::EXPENSE, 999)).await;

        response.assert_status_not_found();
        assert_eq!(response.text(), "");
    }

    #[tokio::test]
    async fn update_expense_overwrites_stored_fields() {
        let server = get_test_server();
        let created = create_lunch_expense(&server).await;

        let response = server
            .put(&format_endpoint(endpoints::EXPENSE, created.id))
            .json(&json!({
                "title": "Dinner",
                "amount": 34.0,
                "category": "Food",
                "date": "2025-06-03",
                "description": "dinner with friends"
            }))
            .await;

        response.assert_status_ok();
        let updated = response.json::<Expense>();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, Some("Dinner".to_owned()));
        assert_eq!(updated.amount, 34.0);

        // The update must be visible on a subsequent get.
        let response = server
            .get(&format_endpoint(endpoints::EXPENSE, created.id))
            .await;
        assert_eq!(response.json::<Expense>(), updated);
    }

    #[tokio::test]
    async fn update_expense_fails_on_unused_id() {
        let server = get_test_server();

        let response = server
            .put(&format_endpoint(endpoints::EXPENSE, 999))
            .json(&json!({"title": "Dinner", "amount": 34.0}))
            .await;

        response.assert_status_not_found();
        assert_eq!(response.text(), "");
    }

    #[tokio::test]
    async fn delete_expense_returns_no_content() {
        let server = get_test_server();
        let created = create_lunch_expense(&server).await;

        let response = server
            .delete(&format_endpoint(endpoints::EXPENSE, created.id))
            .await;

        response.assert_status(StatusCode::NO_CONTENT);
        assert_eq!(response.text(), "");

        // A subsequent get on the same id must fail.
        let response = server
            .get(&format_endpoint(endpoints::EXPENSE, created.id))
            .await;
        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn delete_expense_fails_on_unused_id() {
        let server = get_test_server();

        let response = server
            .delete(&format_endpoint(endpoints::EXPENSE, 999))
            .await;

        response.assert_status_not_found();
        assert_eq!(response.text(), "");
    }
}
