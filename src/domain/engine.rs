use crate::domain::entities::{GameState, Position, Snake, Tick};
use crate::domain::errors::{Dimension, GameError};
use crate::domain::ports::RandomSource;

// Draw a fruit position uniformly inside the arena. The draw ignores the
// snake's current cell, so a fruit can land directly under the snake; a batch
// still needs at least one move to reach it.
pub fn place_fruit<R: RandomSource>(width: u32, height: u32, rng: &R) -> Position {
    Position {
        x: i64::from(rng.next_below(width)),
        y: i64::from(rng.next_below(height)),
    }
}

// A turn is illegal only when it reverses the current direction outright.
// 90-degree turns, stopping, and starting from a standstill are all legal.
pub fn is_legal_turn(current: (i8, i8), next: (i8, i8)) -> bool {
    let (cur_x, cur_y) = current;
    let (next_x, next_y) = next;

    // Axis-aligned reversal: moving along one axis, then the exact opposite
    // direction on the same axis.
    if (cur_x == 1 && next_x == -1 && cur_y == 0 && next_y == 0)
        || (cur_x == -1 && next_x == 1 && cur_y == 0 && next_y == 0)
        || (cur_y == 1 && next_y == -1 && cur_x == 0 && next_x == 0)
        || (cur_y == -1 && next_y == 1 && cur_x == 0 && next_x == 0)
    {
        return false;
    }

    // Componentwise reversal covers the diagonal cases. A stopped snake may
    // move in any direction.
    if (cur_x != 0 || cur_y != 0) && cur_x == -next_x && cur_y == -next_y {
        return false;
    }

    true
}

// Cross-check the client's claimed arena size against the stored record.
// Height first, then width, matching the order failures are reported in.
pub fn reconcile(
    client_width: u32,
    client_height: u32,
    stored: &GameState,
) -> Result<(), GameError> {
    if client_height != stored.height {
        return Err(GameError::DimensionMismatch {
            dimension: Dimension::Height,
            client: client_height,
            stored: stored.height,
        });
    }

    if client_width != stored.width {
        return Err(GameError::DimensionMismatch {
            dimension: Dimension::Width,
            client: client_width,
            stored: stored.width,
        });
    }

    Ok(())
}

// Replay a batch of ticks against the stored state. Ticks run strictly in
// order and the loop stops on the first fruit hit; any remaining ticks are
// accepted but never simulated, even if they would be illegal.
pub fn simulate<R: RandomSource>(
    state: &GameState,
    ticks: &[Tick],
    rng: &R,
) -> Result<GameState, GameError> {
    let mut velocity = (state.snake.vel_x, state.snake.vel_y);
    let mut position = (state.snake.x, state.snake.y);
    let mut fruit_found = false;

    for (tick_index, tick) in ticks.iter().enumerate() {
        // Legality is checked against the velocity left by the previous tick,
        // so turns compose sequentially across the batch.
        let next = (tick.vel_x, tick.vel_y);
        if !is_legal_turn(velocity, next) {
            return Err(GameError::IllegalTurn { tick_index });
        }

        velocity = next;
        position = (
            position.0 + i64::from(velocity.0),
            position.1 + i64::from(velocity.1),
        );

        if !in_arena(position, state.width, state.height) {
            // Terminal condition: the caller deletes the stored record.
            return Err(GameError::OutOfBounds {
                game_id: state.game_id.clone(),
            });
        }

        if position.0 == state.fruit.x && position.1 == state.fruit.y {
            fruit_found = true;
            break;
        }
    }

    // The whole batch is rejected when it never reaches the fruit.
    if !fruit_found {
        return Err(GameError::NoFruitReached);
    }

    Ok(GameState {
        game_id: state.game_id.clone(),
        width: state.width,
        height: state.height,
        score: state.score + 1,
        fruit: place_fruit(state.width, state.height, rng),
        snake: Snake {
            x: position.0,
            y: position.1,
            vel_x: velocity.0,
            vel_y: velocity.1,
        },
    })
}

fn in_arena(position: (i64, i64), width: u32, height: u32) -> bool {
    position.0 >= 0
        && position.1 >= 0
        && position.0 < i64::from(width)
        && position.1 < i64::from(height)
}
