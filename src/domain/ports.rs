use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::GameState;

// Port for game state persistence used by game use cases.
#[async_trait]
pub trait GameStore: Send + Sync {
    async fn get(&self, game_id: &str) -> Result<Option<GameState>, String>;
    async fn put(&self, game_id: &str, state: GameState) -> Result<(), String>;
    async fn delete(&self, game_id: &str) -> Result<bool, String>;
}

// Lets the shared application store plug into store-generic use cases.
#[async_trait]
impl<T> GameStore for Arc<T>
where
    T: GameStore + ?Sized,
{
    async fn get(&self, game_id: &str) -> Result<Option<GameState>, String> {
        (**self).get(game_id).await
    }

    async fn put(&self, game_id: &str, state: GameState) -> Result<(), String> {
        (**self).put(game_id, state).await
    }

    async fn delete(&self, game_id: &str) -> Result<bool, String> {
        (**self).delete(game_id).await
    }
}

// Port for drawing random coordinates for fruit placement.
pub trait RandomSource: Send + Sync {
    // Uniform draw from [0, bound). Callers guarantee bound >= 1.
    fn next_below(&self, bound: u32) -> u32;
}
