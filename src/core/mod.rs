//! Core game types: colors, secrets, scoring, input, state, actions, RNG,
//! configuration.

pub mod color;
pub mod rng;
pub mod config;
pub mod secret;
pub mod feedback;
pub mod input;
pub mod action;
pub mod state;

pub use color::{Color, UnknownColor, PALETTE, PALETTE_SIZE};
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
pub use secret::{allows_repeats, generate_secret, Secret, CODE_LENGTH, REPEAT_COLORS_FROM_LEVEL};
pub use feedback::{score, Feedback, FeedbackError};
pub use input::{CurrentInput, LAST_SLOT};
pub use action::GameAction;
pub use state::{GameState, GameStatus, Guess, MAX_ATTEMPTS};
