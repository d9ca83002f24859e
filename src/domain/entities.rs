use serde::{Deserialize, Serialize};

// A cell in the arena. Coordinates are signed so a step past the edge is
// representable before the bounds check rejects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

// The snake is a single cell with a current velocity. Length is not modeled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snake {
    pub x: i64,
    pub y: i64,
    // -1 = left, 0 = no movement, 1 = right
    pub vel_x: i8,
    // -1 = up, 0 = no movement, 1 = down
    pub vel_y: i8,
}

// One client-proposed velocity for a single simulated step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    pub vel_x: i8,
    pub vel_y: i8,
}

// Full game record, persisted as JSON text keyed by game id. The serialized
// form is identical to the wire format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub game_id: String,
    pub width: u32,
    pub height: u32,
    pub score: u64,
    pub fruit: Position,
    pub snake: Snake,
}
