use axum::{
    routing::{get, post},
    Router,
};

use crate::interface_adapters::handlers::{advance_game, index, new_game};
use crate::interface_adapters::state::AppState;

// Build the HTTP router for the snake API.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/new", get(new_game))
        .route("/validate", post(advance_game))
        .with_state(state)
}
