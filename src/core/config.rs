//! Game configuration.
//!
//! Runtime knobs only. The rules themselves (slots, palette, attempts,
//! repeat threshold) are constants and not configurable.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default pause between submitting a guess and receiving its score.
pub const DEFAULT_VERIFY_DELAY_MS: u64 = 800;

/// Default identifier of the persisted save record.
pub const DEFAULT_SAVE_KEY: &str = "super-code-save";

/// Configuration for a game engine and its session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the secret stream. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Pacing pause between Verify and VerifyComplete, in milliseconds.
    pub verify_delay_ms: u64,

    /// Key of the save record in the store.
    pub save_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            verify_delay_ms: DEFAULT_VERIFY_DELAY_MS,
            save_key: DEFAULT_SAVE_KEY.to_string(),
        }
    }
}

impl GameConfig {
    /// Use a fixed seed for reproducible secrets.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the verification pacing pause.
    #[must_use]
    pub fn with_verify_delay(mut self, delay: Duration) -> Self {
        self.verify_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Store saves under a different key.
    #[must_use]
    pub fn with_save_key(mut self, key: impl Into<String>) -> Self {
        self.save_key = key.into();
        self
    }

    /// The pacing pause as a `Duration`.
    #[must_use]
    pub fn verify_delay(&self) -> Duration {
        Duration::from_millis(self.verify_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.verify_delay(), Duration::from_millis(800));
        assert_eq!(config.save_key, "super-code-save");
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_seed(123)
            .with_verify_delay(Duration::from_millis(50))
            .with_save_key("slot-2");

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.verify_delay_ms, 50);
        assert_eq!(config.save_key, "slot-2");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.verify_delay_ms, DEFAULT_VERIFY_DELAY_MS);
        assert_eq!(config.save_key, DEFAULT_SAVE_KEY);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
