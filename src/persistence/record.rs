//! The persisted save record and its validation.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::store::StoreError;
use crate::core::input::LAST_SLOT;
use crate::core::{Color, CurrentInput, GameState, GameStatus, Guess, Secret, CODE_LENGTH, MAX_ATTEMPTS};

/// Why a save record could not be used.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("malformed save record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("save record has no level")]
    MissingLevel,
    #[error("save record has level 0")]
    InvalidLevel,
    #[error("save record has no secret")]
    MissingSecret,
    #[error("secret has {0} colors, expected {}", CODE_LENGTH)]
    SecretLength(usize),
    #[error("history has {0} guesses, at most {} allowed", MAX_ATTEMPTS)]
    TooManyGuesses(usize),
    #[error("history continues after a solved guess")]
    GuessAfterWin,
    #[error("stored status {stored} contradicts history ({derived})")]
    StatusMismatch {
        stored: GameStatus,
        derived: GameStatus,
    },
    #[error("active slot {0} is out of range")]
    SlotOutOfRange(usize),
    #[error("{0} fills more than one input slot")]
    DuplicateInputColor(Color),
}

/// On-disk shape of a saved game.
///
/// Everything but `level` and `secret` is optional on load; missing
/// fields fall back to an empty history, empty input, slot 0, and a status
/// derived from the history. The verifying flag is never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveData {
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub secret: Option<Vec<Color>>,
    #[serde(default)]
    pub history: Vec<Guess>,
    #[serde(default)]
    pub current_input: CurrentInput,
    #[serde(default)]
    pub active_slot_index: usize,
    #[serde(default)]
    pub status: Option<GameStatus>,
    /// Milliseconds since the Unix epoch at save time.
    #[serde(default)]
    pub timestamp: i64,
}

impl SaveData {
    /// Snapshot a state, stamped with the current time.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self::from_state_at(state, Utc::now().timestamp_millis())
    }

    #[must_use]
    pub fn from_state_at(state: &GameState, timestamp: i64) -> Self {
        Self {
            level: Some(state.level()),
            secret: Some(state.secret().colors().to_vec()),
            history: state.history().iter().copied().collect(),
            current_input: *state.input(),
            active_slot_index: state.active_slot(),
            status: Some(state.status()),
            timestamp,
        }
    }

    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SaveError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the record and rebuild the state it describes.
    pub fn into_state(self) -> Result<GameState, SaveError> {
        let level = self.level.ok_or(SaveError::MissingLevel)?;
        if level == 0 {
            return Err(SaveError::InvalidLevel);
        }

        let colors = self.secret.ok_or(SaveError::MissingSecret)?;
        let colors: [Color; CODE_LENGTH] = colors
            .try_into()
            .map_err(|c: Vec<Color>| SaveError::SecretLength(c.len()))?;

        if self.history.len() > MAX_ATTEMPTS {
            return Err(SaveError::TooManyGuesses(self.history.len()));
        }
        let solved_before_end = self
            .history
            .iter()
            .rev()
            .skip(1)
            .any(|g| g.feedback.is_solved());
        if solved_before_end {
            return Err(SaveError::GuessAfterWin);
        }

        let derived = GameStatus::from_history(&self.history);
        let status = self.status.unwrap_or(derived);
        if status != derived {
            return Err(SaveError::StatusMismatch {
                stored: status,
                derived,
            });
        }

        if self.active_slot_index > LAST_SLOT {
            return Err(SaveError::SlotOutOfRange(self.active_slot_index));
        }
        let mut seen = Vec::with_capacity(CODE_LENGTH);
        for color in self.current_input.slots().iter().flatten() {
            if seen.contains(color) {
                return Err(SaveError::DuplicateInputColor(*color));
            }
            seen.push(*color);
        }

        Ok(GameState {
            level,
            secret: Secret::new(colors),
            history: self.history.into_iter().collect(),
            input: self.current_input,
            active_slot: self.active_slot_index,
            status,
            verifying: false,
        })
    }
}
