use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::accounts::inbound::http as accounts_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/accounts", post(accounts_http::create_account))
        .route("/accounts/{account_id}", get(accounts_http::get_account))
        .route(
            "/accounts/{account_id}/deposits",
            post(accounts_http::make_deposit),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
