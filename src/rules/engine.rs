//! The game state machine.
//!
//! `GameEngine` is a synchronous reducer: given a state and an action it
//! returns the next state. It owns the randomness (for fresh secrets) and
//! nothing else; the state itself is an immutable value passed in and out.
//!
//! ## Transitions
//!
//! | Action | Precondition |
//! |---|---|
//! | SelectColor, SetActiveSlot, ClearSlot, ClearAll | playing, not verifying |
//! | Verify | playing, not verifying, all slots filled |
//! | VerifyComplete | verifying |
//! | Advance | won |
//! | Retry, Reset, Load | none |
//!
//! A failed precondition is not an error: [`GameEngine::apply`] returns an
//! unchanged copy of the state. [`GameEngine::try_apply`] exposes why.

use thiserror::Error;
use tracing::{debug, info};

use crate::core::input::LAST_SLOT;
use crate::core::{
    generate_secret, GameAction, GameConfig, GameRng, GameRngState, GameState, GameStatus, Guess,
    MAX_ATTEMPTS,
};

/// Why an action left the state unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("the level attempt is over ({0})")]
    NotPlaying(GameStatus),
    #[error("a verification is in flight")]
    Verifying,
    #[error("slot {0} is out of range")]
    SlotOutOfRange(usize),
    #[error("not every slot is filled")]
    IncompleteInput,
    #[error("no verification is in flight")]
    NotVerifying,
    #[error("only a won level can advance")]
    NotWon,
}

/// Reducer over [`GameAction`]s.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    rng: GameRng,
}

impl GameEngine {
    /// Create an engine; the RNG is seeded from `config.seed` or entropy.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Create an engine resuming a checkpointed secret stream.
    #[must_use]
    pub fn with_rng_state(config: GameConfig, state: &GameRngState) -> Self {
        Self {
            config,
            rng: GameRng::from_state(state),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Checkpoint of the secret stream.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// A fresh attempt at `level` with a newly generated secret.
    ///
    /// Levels start at 1; `0` is treated as 1.
    pub fn new_game(&mut self, level: u32) -> GameState {
        let level = level.max(1);
        let secret = generate_secret(level, &mut self.rng);
        GameState::fresh(level, secret)
    }

    /// Apply an action. Rejected actions return the state unchanged.
    pub fn apply(&mut self, state: &GameState, action: &GameAction) -> GameState {
        match self.try_apply(state, action) {
            Ok(next) => next,
            Err(reason) => {
                debug!(action = action.name(), %reason, "action rejected");
                state.clone()
            }
        }
    }

    /// Apply an action, reporting why it was rejected.
    pub fn try_apply(
        &mut self,
        state: &GameState,
        action: &GameAction,
    ) -> Result<GameState, Rejection> {
        if action.edits_input() || matches!(action, GameAction::Verify) {
            check_accepts_input(state)?;
        }

        let next = match action {
            GameAction::SelectColor(color) => {
                let mut next = state.clone();
                next.input.place(state.active_slot, *color);
                next.active_slot = (state.active_slot + 1).min(LAST_SLOT);
                next
            }
            GameAction::SetActiveSlot(slot) => {
                let slot = check_slot(*slot)?;
                GameState {
                    active_slot: slot,
                    ..state.clone()
                }
            }
            GameAction::ClearSlot(slot) => {
                let slot = check_slot(*slot)?;
                let mut next = state.clone();
                next.input.clear(slot);
                next.active_slot = slot;
                next
            }
            GameAction::ClearAll => {
                let mut next = state.clone();
                next.input = Default::default();
                next.active_slot = 0;
                next
            }
            GameAction::Verify => {
                if !state.input.is_complete() {
                    return Err(Rejection::IncompleteInput);
                }
                GameState {
                    verifying: true,
                    ..state.clone()
                }
            }
            GameAction::VerifyComplete(feedback) => {
                if !state.verifying {
                    return Err(Rejection::NotVerifying);
                }
                let colors = state.input.filled().ok_or(Rejection::IncompleteInput)?;

                let mut next = state.clone();
                next.history.push_back(Guess::new(colors, *feedback));
                next.input = Default::default();
                next.active_slot = 0;
                next.verifying = false;
                next.status = if feedback.is_solved() {
                    GameStatus::Won
                } else if next.history.len() >= MAX_ATTEMPTS {
                    GameStatus::Lost
                } else {
                    GameStatus::Playing
                };

                debug!(
                    level = next.level,
                    attempt = next.history.len(),
                    exact = feedback.exact(),
                    partial = feedback.partial(),
                    "guess scored"
                );
                if next.is_terminal() {
                    info!(
                        level = next.level,
                        attempts = next.history.len(),
                        status = %next.status,
                        "level attempt finished"
                    );
                }
                next
            }
            GameAction::Advance => {
                if state.status != GameStatus::Won {
                    return Err(Rejection::NotWon);
                }
                let next = self.new_game(state.level.saturating_add(1));
                info!(level = next.level, "advanced to next level");
                next
            }
            GameAction::Retry => {
                info!(level = state.level, "retrying level");
                GameState::fresh(state.level, state.secret)
            }
            GameAction::Reset => {
                info!("game reset to level 1");
                self.new_game(1)
            }
            GameAction::Load(restored) => GameState {
                verifying: false,
                ..(**restored).clone()
            },
        };

        if action.edits_input() {
            debug!(
                action = action.name(),
                active_slot = next.active_slot,
                "input updated"
            );
        }
        Ok(next)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

fn check_accepts_input(state: &GameState) -> Result<(), Rejection> {
    if state.status != GameStatus::Playing {
        return Err(Rejection::NotPlaying(state.status));
    }
    if state.verifying {
        return Err(Rejection::Verifying);
    }
    Ok(())
}

fn check_slot(slot: usize) -> Result<usize, Rejection> {
    if slot > LAST_SLOT {
        return Err(Rejection::SlotOutOfRange(slot));
    }
    Ok(slot)
}
