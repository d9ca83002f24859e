// Domain-level errors for game workflows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    InvalidArenaSize,
    EmptyTicks,
    InvalidTick { tick_index: usize },
    GameNotFound { game_id: String },
    DimensionMismatch { dimension: Dimension, client: u32, stored: u32 },
    IllegalTurn { tick_index: usize },
    OutOfBounds { game_id: String },
    NoFruitReached,
    StorageFailure,
}

// Which arena dimension a mismatch was detected on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}
