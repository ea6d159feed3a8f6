//! Best-effort save/load/clear of one game under a fixed key.

use tracing::{debug, warn};

use super::record::{SaveData, SaveError};
use super::store::SaveStore;
use crate::core::GameState;

/// One save record in a store.
///
/// `save`, `load` and `clear` never fail: storage problems are logged and
/// treated as "no save available". The `try_` variants report them.
#[derive(Clone, Debug)]
pub struct SaveSlot<S> {
    store: S,
    key: String,
}

impl<S: SaveStore> SaveSlot<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Persist a state. Failures are logged and dropped.
    pub fn save(&mut self, state: &GameState) {
        if let Err(error) = self.try_save(state) {
            warn!(key = %self.key, %error, "failed to save game");
        }
    }

    pub fn try_save(&mut self, state: &GameState) -> Result<(), SaveError> {
        let json = SaveData::from_state(state).to_json()?;
        self.store.write(&self.key, &json)?;
        debug!(key = %self.key, level = state.level(), "game saved");
        Ok(())
    }

    /// Restore the saved state, or `None` if there is no usable record.
    pub fn load(&self) -> Option<GameState> {
        match self.try_load() {
            Ok(state) => state,
            Err(error) => {
                warn!(key = %self.key, %error, "discarding unusable save");
                None
            }
        }
    }

    pub fn try_load(&self) -> Result<Option<GameState>, SaveError> {
        let Some(json) = self.store.read(&self.key)? else {
            return Ok(None);
        };
        let state = SaveData::from_json(&json)?.into_state()?;
        debug!(key = %self.key, level = state.level(), "game restored");
        Ok(Some(state))
    }

    /// Erase the record. Failures are logged and dropped.
    pub fn clear(&mut self) {
        if let Err(error) = self.try_clear() {
            warn!(key = %self.key, %error, "failed to clear save");
        }
    }

    pub fn try_clear(&mut self) -> Result<(), SaveError> {
        self.store.remove(&self.key)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color::*, GameAction, GameConfig};
    use crate::persistence::MemoryStore;
    use crate::rules::GameEngine;

    const KEY: &str = "super-code-save";

    #[test]
    fn test_load_empty_store() {
        let slot = SaveSlot::new(MemoryStore::new(), KEY);
        assert_eq!(slot.load(), None);
        assert!(slot.try_load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let mut engine = GameEngine::new(GameConfig::default().with_seed(1));
        let mut state = engine.new_game(2);
        state = engine.apply(&state, &GameAction::SelectColor(Red));
        state = engine.apply(&state, &GameAction::SelectColor(Blue));

        let mut slot = SaveSlot::new(MemoryStore::new(), KEY);
        slot.save(&state);

        assert_eq!(slot.load(), Some(state));
    }

    #[test]
    fn test_save_swallows_store_failure() {
        let engine_state = GameEngine::new(GameConfig::default().with_seed(1)).new_game(1);
        let mut slot = SaveSlot::new(MemoryStore::unavailable(), KEY);

        slot.save(&engine_state);
        slot.clear();
        assert_eq!(slot.load(), None);
        assert!(matches!(slot.try_save(&engine_state), Err(SaveError::Store(_))));
    }

    #[test]
    fn test_corrupt_record_loads_as_none() {
        let mut store = MemoryStore::new();
        store.write(KEY, "{\"level\":1,\"secret\":[").unwrap();
        let slot = SaveSlot::new(store, KEY);

        assert_eq!(slot.load(), None);
        assert!(matches!(slot.try_load(), Err(SaveError::Json(_))));
    }

    #[test]
    fn test_clear_removes_record() {
        let state = GameEngine::new(GameConfig::default().with_seed(1)).new_game(1);
        let mut slot = SaveSlot::new(MemoryStore::new(), KEY);
        slot.save(&state);
        assert!(slot.store().get(KEY).is_some());

        slot.clear();
        assert!(slot.store().get(KEY).is_none());
        assert_eq!(slot.load(), None);
    }
}
