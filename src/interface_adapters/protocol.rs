use serde::{Deserialize, Serialize};

use crate::domain::entities::{Position, Snake};

// Query parameters for creating a game.
#[derive(Debug, Deserialize)]
pub struct NewGameParams {
    pub w: u32,
    pub h: u32,
}

// One proposed velocity step. Components are validated against {-1, 0, 1} in
// the use case so a bad value maps to a client-input error, not a 422.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickBody {
    pub vel_x: i8,
    pub vel_y: i8,
}

// Request payload for advancing a game: the client's full state claim plus
// the ordered tick batch. Everything except gameId, width, height and ticks
// is accepted but ignored; the stored record stays authoritative.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceGameRequest {
    pub game_id: String,
    pub width: u32,
    pub height: u32,
    pub score: u64,
    pub fruit: Position,
    pub snake: Snake,
    pub ticks: Vec<TickBody>,
}

// Liveness payload for the index route.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: String,
    pub timestamp: u64,
}

// Error envelope for JSON responses: {"error": {"message": "..."}}.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}
