use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::warn;

use crate::domain::entities::GameState;
use crate::domain::errors::{Dimension, GameError};
use crate::interface_adapters::protocol::{
    AdvanceGameRequest, ErrorBody, ErrorResponse, IndexResponse, NewGameParams,
};
use crate::interface_adapters::state::{AppState, ThreadRandomSource};
use crate::use_cases::advance_game::AdvanceGameUseCase;
use crate::use_cases::create_game::CreateGameUseCase;

// Liveness handler for the index route.
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Hello from snake headless API".to_string(),
        timestamp: current_epoch_seconds(),
    })
}

// Handler for creating a new game from arena dimensions.
pub async fn new_game(
    State(state): State<AppState>,
    Query(params): Query<NewGameParams>,
) -> Result<Json<GameState>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = CreateGameUseCase {
        store: state.store.clone(),
        rng: ThreadRandomSource,
    };

    let created = use_case
        .execute(params.w, params.h)
        .await
        .map_err(map_game_error)?;

    Ok(Json(created))
}

// Handler for replaying a tick batch against a stored game.
pub async fn advance_game(
    State(state): State<AppState>,
    Json(payload): Json<AdvanceGameRequest>,
) -> Result<Json<GameState>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = AdvanceGameUseCase {
        store: state.store.clone(),
        rng: ThreadRandomSource,
    };

    let next = use_case.execute(payload).await.map_err(|err| {
        if let GameError::OutOfBounds { game_id } = &err {
            warn!(%game_id, "game over, snake out of bounds");
        }
        map_game_error(err)
    })?;

    Ok(Json(next))
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: String) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: ErrorBody { message },
        }),
    )
}

// Maps domain errors to the external failure taxonomy: client-input and
// game-logic failures are 400, missing games and dead-end batches are 404,
// game over gets its own signal, storage trouble is the gateway's fault.
fn map_game_error(err: GameError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        GameError::InvalidArenaSize => error_response(
            StatusCode::BAD_REQUEST,
            "w and h must be positive integers".to_string(),
        ),
        GameError::EmptyTicks => error_response(
            StatusCode::BAD_REQUEST,
            "ticks must contain at least 1 move".to_string(),
        ),
        GameError::InvalidTick { tick_index } => error_response(
            StatusCode::BAD_REQUEST,
            format!("Movement at ticks.[{tick_index}] is invalid. Velocity must be -1, 0 or 1"),
        ),
        GameError::GameNotFound { game_id } => error_response(
            StatusCode::NOT_FOUND,
            format!("Game ID '{game_id}' not found"),
        ),
        GameError::DimensionMismatch {
            dimension,
            client,
            stored,
        } => {
            let name = match dimension {
                Dimension::Width => "Width",
                Dimension::Height => "Height",
            };
            error_response(
                StatusCode::BAD_REQUEST,
                format!("{name} does not match. Given '{client}' while in database '{stored}'"),
            )
        }
        GameError::IllegalTurn { tick_index } => error_response(
            StatusCode::BAD_REQUEST,
            format!("Movement at ticks.[{tick_index}] is invalid. 180 degree turn is not allowed"),
        ),
        GameError::OutOfBounds { game_id } => error_response(
            StatusCode::IM_A_TEAPOT,
            format!("Game '{game_id}' is over! Snake went out of bounds"),
        ),
        GameError::NoFruitReached => error_response(
            StatusCode::NOT_FOUND,
            "Ticks does not lead to a fruit".to_string(),
        ),
        GameError::StorageFailure => {
            error_response(StatusCode::BAD_GATEWAY, "storage error".to_string())
        }
    }
}

// Get the current time as epoch seconds.
fn current_epoch_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
