use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::GameState;
use crate::domain::ports::{GameStore, RandomSource};

pub(crate) type GameTable = Arc<Mutex<HashMap<String, GameState>>>;

// Scripted random source for deterministic fruit placement in tests. Values
// are reduced modulo the bound so fixtures stay in range.
pub(crate) struct SequenceRandomSource {
    values: Mutex<VecDeque<u32>>,
}

impl SequenceRandomSource {
    pub(crate) fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: Mutex::new(values.into_iter().collect()),
        }
    }
}

impl RandomSource for SequenceRandomSource {
    fn next_below(&self, bound: u32) -> u32 {
        let mut values = self.values.lock().expect("values mutex poisoned");
        values.pop_front().map(|value| value % bound).unwrap_or(0)
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub get: bool,
    pub put: bool,
    pub delete: bool,
}

#[derive(Clone)]
pub(crate) struct RecordingStore {
    games: GameTable,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            games: Arc::new(Mutex::new(HashMap::new())),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_game(&self, game_id: impl Into<String>, state: GameState) {
        let mut guard = self.games.lock().expect("games mutex poisoned");
        guard.insert(game_id.into(), state);
    }

    pub(crate) fn get_test_game(&self, game_id: &str) -> Option<GameState> {
        let guard = self.games.lock().expect("games mutex poisoned");
        guard.get(game_id).cloned()
    }

    pub(crate) fn is_empty(&self) -> bool {
        let guard = self.games.lock().expect("games mutex poisoned");
        guard.is_empty()
    }
}

#[async_trait]
impl GameStore for RecordingStore {
    async fn get(&self, game_id: &str) -> Result<Option<GameState>, String> {
        if self.failures.get {
            return Err("get failed".to_string());
        }

        let guard = self.games.lock().expect("games mutex poisoned");
        Ok(guard.get(game_id).cloned())
    }

    async fn put(&self, game_id: &str, state: GameState) -> Result<(), String> {
        if self.failures.put {
            return Err("put failed".to_string());
        }

        let mut guard = self.games.lock().expect("games mutex poisoned");
        guard.insert(game_id.to_string(), state);
        Ok(())
    }

    async fn delete(&self, game_id: &str) -> Result<bool, String> {
        if self.failures.delete {
            return Err("delete failed".to_string());
        }

        let mut guard = self.games.lock().expect("games mutex poisoned");
        Ok(guard.remove(game_id).is_some())
    }
}
