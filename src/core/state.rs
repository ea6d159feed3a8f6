//! Game state: the aggregate root of one level attempt.
//!
//! ## GameState
//!
//! - Level and secret
//! - Guess history (append-only, at most [`MAX_ATTEMPTS`] entries)
//! - The guess being composed and the active slot
//! - Status and the transient verifying flag
//!
//! Fields are read through accessors; only the rules engine and the save
//! loader construct or mutate states, which keeps the invariants in one
//! place.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::feedback::Feedback;
use super::input::CurrentInput;
use super::secret::{Secret, CODE_LENGTH};

/// Guesses allowed per level attempt.
pub const MAX_ATTEMPTS: usize = 7;

/// Outcome of the current level attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Status implied by a history: won on any solved guess, lost once the
    /// attempts are spent.
    #[must_use]
    pub fn from_history<'a>(history: impl IntoIterator<Item = &'a Guess>) -> Self {
        let mut count = 0;
        for guess in history {
            if guess.feedback.is_solved() {
                return GameStatus::Won;
            }
            count += 1;
        }
        if count >= MAX_ATTEMPTS {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Playing
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        })
    }
}

/// A submitted guess and its score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guess {
    pub colors: [Color; CODE_LENGTH],
    pub feedback: Feedback,
}

impl Guess {
    #[must_use]
    pub fn new(colors: [Color; CODE_LENGTH], feedback: Feedback) -> Self {
        Self { colors, feedback }
    }
}

/// Full state of one level attempt.
///
/// Uses an `im` vector for the history so the reducer can hand out a new
/// state per action without copying past guesses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) level: u32,
    pub(crate) secret: Secret,
    pub(crate) history: Vector<Guess>,
    pub(crate) input: CurrentInput,
    pub(crate) active_slot: usize,
    pub(crate) status: GameStatus,
    pub(crate) verifying: bool,
}

impl GameState {
    /// A fresh attempt at `level` against `secret`.
    #[must_use]
    pub(crate) fn fresh(level: u32, secret: Secret) -> Self {
        Self {
            level,
            secret,
            history: Vector::new(),
            input: CurrentInput::empty(),
            active_slot: 0,
            status: GameStatus::Playing,
            verifying: false,
        }
    }

    /// Current level (starts at 1).
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    /// Submitted guesses, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Guess> {
        &self.history
    }

    #[must_use]
    pub fn input(&self) -> &CurrentInput {
        &self.input
    }

    /// Slot the next selected color fills.
    #[must_use]
    pub fn active_slot(&self) -> usize {
        self.active_slot
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True only between Verify and its VerifyComplete.
    #[must_use]
    pub fn is_verifying(&self) -> bool {
        self.verifying
    }

    /// Whether input mutations are currently accepted.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.status == GameStatus::Playing && !self.verifying
    }

    /// All slots filled, still playing, nothing in flight.
    #[must_use]
    pub fn can_verify(&self) -> bool {
        self.accepts_input() && self.input.is_complete()
    }

    /// 1-based number of the guess being composed.
    #[must_use]
    pub fn current_attempt(&self) -> usize {
        self.history.len() + 1
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.history.len())
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
