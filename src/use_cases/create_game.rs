use uuid::Uuid;

use crate::domain::engine;
use crate::domain::entities::{GameState, Snake};
use crate::domain::errors::GameError;
use crate::domain::ports::{GameStore, RandomSource};

// Game creation use case with injected dependencies.
pub struct CreateGameUseCase<S, R> {
    pub store: S,
    pub rng: R,
}

impl<S, R> CreateGameUseCase<S, R>
where
    S: GameStore,
    R: RandomSource,
{
    pub async fn execute(&self, width: u32, height: u32) -> Result<GameState, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidArenaSize);
        }

        let game_id = Uuid::new_v4().to_string();
        let state = GameState {
            game_id: game_id.clone(),
            width,
            height,
            score: 0,
            fruit: engine::place_fruit(width, height, &self.rng),
            // The snake always starts at the origin moving right.
            snake: Snake {
                x: 0,
                y: 0,
                vel_x: 1,
                vel_y: 0,
            },
        };

        self.store
            .put(&game_id, state.clone())
            .await
            .map_err(|_| GameError::StorageFailure)?;

        Ok(state)
    }
}
