use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;
use sqlx::PgPool;
use tokio::sync::Mutex;

use crate::domain::entities::GameState;
use crate::domain::ports::{GameStore, RandomSource};

// Application state holding the game store behind its port.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn GameStore>,
}

// In-memory game store adapter, used when no database is configured and by
// route tests.
#[derive(Clone)]
pub struct InMemoryGameStore {
    pub games: Arc<Mutex<HashMap<String, GameState>>>,
}

#[async_trait]
impl GameStore for InMemoryGameStore {
    async fn get(&self, game_id: &str) -> Result<Option<GameState>, String> {
        let games = self.games.lock().await;
        Ok(games.get(game_id).cloned())
    }

    async fn put(&self, game_id: &str, state: GameState) -> Result<(), String> {
        let mut games = self.games.lock().await;
        games.insert(game_id.to_string(), state);
        Ok(())
    }

    async fn delete(&self, game_id: &str) -> Result<bool, String> {
        let mut games = self.games.lock().await;
        Ok(games.remove(game_id).is_some())
    }
}

// PostgreSQL-backed game store. Each game is one row; the value column holds
// the full state as JSON text.
#[derive(Clone)]
pub struct PostgresGameStore {
    pub db: PgPool,
}

#[async_trait]
impl GameStore for PostgresGameStore {
    async fn get(&self, game_id: &str) -> Result<Option<GameState>, String> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT state FROM game_states WHERE game_id = $1")
                .bind(game_id)
                .fetch_optional(&self.db)
                .await
                .map_err(|err| err.to_string())?;

        match row {
            Some((raw,)) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|err| err.to_string()),
            None => Ok(None),
        }
    }

    async fn put(&self, game_id: &str, state: GameState) -> Result<(), String> {
        let raw = serde_json::to_string(&state).map_err(|err| err.to_string())?;

        sqlx::query(
            r#"
            INSERT INTO game_states (game_id, state)
            VALUES ($1, $2)
            ON CONFLICT (game_id) DO UPDATE SET
                state = EXCLUDED.state
            "#,
        )
        .bind(game_id)
        .bind(raw)
        .execute(&self.db)
        .await
        .map_err(|err| err.to_string())?;

        Ok(())
    }

    async fn delete(&self, game_id: &str) -> Result<bool, String> {
        let result = sqlx::query("DELETE FROM game_states WHERE game_id = $1")
            .bind(game_id)
            .execute(&self.db)
            .await
            .map_err(|err| err.to_string())?;

        Ok(result.rows_affected() > 0)
    }
}

// Process-wide randomness adapter used for fruit placement. Unseeded;
// reproducibility across runs is not a requirement.
#[derive(Clone)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn next_below(&self, bound: u32) -> u32 {
        rand::thread_rng().gen_range(0..bound)
    }
}
