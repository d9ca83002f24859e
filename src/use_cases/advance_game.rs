use tracing::warn;

use crate::domain::engine;
use crate::domain::entities::{GameState, Tick};
use crate::domain::errors::GameError;
use crate::domain::ports::{GameStore, RandomSource};
use crate::interface_adapters::protocol::{AdvanceGameRequest, TickBody};

// Game advancement use case with injected dependencies. Loads the
// authoritative state, replays the batch, and persists the outcome.
pub struct AdvanceGameUseCase<S, R> {
    pub store: S,
    pub rng: R,
}

impl<S, R> AdvanceGameUseCase<S, R>
where
    S: GameStore,
    R: RandomSource,
{
    pub async fn execute(&self, request: AdvanceGameRequest) -> Result<GameState, GameError> {
        if request.ticks.is_empty() {
            return Err(GameError::EmptyTicks);
        }
        let ticks = parse_ticks(&request.ticks)?;

        let stored = self
            .store
            .get(&request.game_id)
            .await
            .map_err(|_| GameError::StorageFailure)?
            .ok_or_else(|| GameError::GameNotFound {
                game_id: request.game_id.clone(),
            })?;

        // Only the claimed dimensions are cross-checked; the client's
        // snake/fruit/score fields never override the stored record.
        engine::reconcile(request.width, request.height, &stored)?;

        match engine::simulate(&stored, &ticks, &self.rng) {
            Ok(next) => {
                self.store
                    .put(&next.game_id, next.clone())
                    .await
                    .map_err(|_| GameError::StorageFailure)?;
                Ok(next)
            }
            Err(GameError::OutOfBounds { game_id }) => {
                // Game over: drop the stored record. Best effort; the game is
                // already unplayable either way.
                if let Err(error) = self.store.delete(&game_id).await {
                    warn!(%game_id, %error, "failed to delete finished game");
                }
                Err(GameError::OutOfBounds { game_id })
            }
            Err(other) => Err(other),
        }
    }
}

fn parse_ticks(bodies: &[TickBody]) -> Result<Vec<Tick>, GameError> {
    bodies
        .iter()
        .enumerate()
        .map(|(tick_index, body)| {
            if !is_unit_or_zero(body.vel_x) || !is_unit_or_zero(body.vel_y) {
                return Err(GameError::InvalidTick { tick_index });
            }
            Ok(Tick {
                vel_x: body.vel_x,
                vel_y: body.vel_y,
            })
        })
        .collect()
}

fn is_unit_or_zero(component: i8) -> bool {
    (-1..=1).contains(&component)
}
