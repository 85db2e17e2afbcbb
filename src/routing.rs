//! Application router configuration for the expense API routes.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    logging::logging_middleware,
    routes::{create_expense, delete_expense, get_expense, get_expenses, update_expense},
    stores::ExpenseStore,
};

/// Return a router with all the app's routes.
pub fn build_router<E>(state: AppState<E>) -> Router
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            endpoints::EXPENSES,
            post(create_expense::<E>).get(get_expenses::<E>),
        )
        .route(
            endpoints::EXPENSE,
            get(get_expense::<E>)
                .put(update_expense::<E>)
                .delete(delete_expense::<E>),
        )
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
