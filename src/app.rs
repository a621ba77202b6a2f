use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/clients/:client_id/days", get(handlers::client_days_api))
        .route("/api/days/view", post(handlers::view_days))
        .route("/:locale/login", get(handlers::login_page).post(handlers::login_submit))
        .route(
            "/:locale/users/edit-day-meals/:client_id",
            get(handlers::subscription_days),
        )
        .route(
            "/:locale/users/edit-day-meals/:client_id/days/:day_id/edit",
            post(handlers::edit_day),
        )
        .with_state(state)
}
