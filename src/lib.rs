//! # super-code
//!
//! Game engine for a four-color code-breaking puzzle.
//!
//! A hidden code of four colors (drawn from a palette of seven) must be
//! cracked in at most seven guesses. Each guess is scored with two counts:
//! pegs of the right color in the right place, and pegs of the right color
//! in the wrong place.
//!
//! ## Design Principles
//!
//! 1. **Total reducer**: every action maps a state to a state. Invalid
//!    actions are ignored, never raised.
//!
//! 2. **Deterministic**: the only randomness is the secret stream, which is
//!    seedable and checkpointable.
//!
//! 3. **Injected persistence**: saves go through a [`SaveStore`] handed to
//!    the owner of the game; nothing touches global storage.
//!
//! ## Modules
//!
//! - `core`: colors, secrets, scoring, input, state, actions, RNG, config
//! - `rules`: the state machine (`GameEngine`)
//! - `persistence`: save record, stores, best-effort save slot
//! - `session`: a live game with auto-save and two-phase verification

pub mod core;
pub mod rules;
pub mod persistence;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Color, PALETTE, PALETTE_SIZE,
    GameRng, GameRngState, GameConfig,
    Secret, generate_secret, CODE_LENGTH, REPEAT_COLORS_FROM_LEVEL,
    Feedback, FeedbackError, score,
    CurrentInput, GameAction,
    GameState, GameStatus, Guess, MAX_ATTEMPTS,
};

pub use crate::rules::{GameEngine, Rejection};

pub use crate::persistence::{
    FileStore, MemoryStore, SaveData, SaveError, SaveSlot, SaveStore, StoreError,
};

pub use crate::session::{pace, PendingVerification, Session};
