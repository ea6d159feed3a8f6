//! Guess scoring.
//!
//! Scoring is two passes over the code:
//!
//! 1. **Exact**: every position where guess and secret agree is counted and
//!    consumed on both sides. This pass finishes before the next begins.
//! 2. **Partial**: each unconsumed guess position, in ascending order,
//!    claims the first unconsumed secret position holding the same color.
//!
//! The greedy, index-ordered consumption is what keeps duplicate colors
//! from being credited twice on either side.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::color::Color;
use super::secret::{Secret, CODE_LENGTH};

/// A score that cannot come from a guess of [`CODE_LENGTH`] pegs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("feedback {exact} exact + {partial} partial exceeds {} pegs", CODE_LENGTH)]
pub struct FeedbackError {
    pub exact: u8,
    pub partial: u8,
}

/// Two-count score for one guess.
///
/// Invariant: `exact + partial <= CODE_LENGTH`. Deserialization goes through
/// [`Feedback::new`], so a stored record cannot break it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFeedback")]
pub struct Feedback {
    exact: u8,
    partial: u8,
}

#[derive(Deserialize)]
struct RawFeedback {
    exact: u8,
    partial: u8,
}

impl TryFrom<RawFeedback> for Feedback {
    type Error = FeedbackError;

    fn try_from(raw: RawFeedback) -> Result<Self, Self::Error> {
        Feedback::new(raw.exact, raw.partial)
    }
}

impl Feedback {
    /// Build a score, rejecting counts that exceed the code length.
    pub fn new(exact: u8, partial: u8) -> Result<Self, FeedbackError> {
        if usize::from(exact) + usize::from(partial) > CODE_LENGTH {
            return Err(FeedbackError { exact, partial });
        }
        Ok(Self { exact, partial })
    }

    /// The all-exact score of a correct guess.
    #[must_use]
    pub const fn solved() -> Self {
        Self {
            exact: CODE_LENGTH as u8,
            partial: 0,
        }
    }

    /// Pegs with the right color in the right position.
    #[must_use]
    pub fn exact(&self) -> u8 {
        self.exact
    }

    /// Pegs with the right color in the wrong position.
    #[must_use]
    pub fn partial(&self) -> u8 {
        self.partial
    }

    /// Whether this score means the code was cracked.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        usize::from(self.exact) == CODE_LENGTH
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} exact, {} partial", self.exact, self.partial)
    }
}

/// Score a complete guess against the secret.
///
/// Pure and deterministic. Completeness of the guess is the caller's job;
/// the type only admits filled codes.
#[must_use]
pub fn score(secret: &Secret, guess: &[Color; CODE_LENGTH]) -> Feedback {
    let secret = secret.colors();
    let mut secret_used = [false; CODE_LENGTH];
    let mut guess_used = [false; CODE_LENGTH];
    let mut exact = 0u8;
    let mut partial = 0u8;

    for i in 0..CODE_LENGTH {
        if guess[i] == secret[i] {
            exact += 1;
            secret_used[i] = true;
            guess_used[i] = true;
        }
    }

    for i in 0..CODE_LENGTH {
        if guess_used[i] {
            continue;
        }
        let claimed = (0..CODE_LENGTH).find(|&j| !secret_used[j] && secret[j] == guess[i]);
        if let Some(j) = claimed {
            partial += 1;
            secret_used[j] = true;
            guess_used[i] = true;
        }
    }

    Feedback { exact, partial }
}
