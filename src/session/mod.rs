//! A live game: engine, current state, and save slot wired together.
//!
//! ## Verification protocol
//!
//! Scoring is split in two so a host can insert a pacing pause:
//!
//! ```
//! use super_code::core::{Color, GameConfig};
//! use super_code::persistence::MemoryStore;
//! use super_code::session::Session;
//!
//! let mut session = Session::open(MemoryStore::new(), GameConfig::default().with_seed(1));
//! for color in [Color::Red, Color::Yellow, Color::Blue, Color::Green] {
//!     session.select_color(color);
//! }
//!
//! let pending = session.begin_verify().expect("input is complete");
//! assert!(session.state().is_verifying());
//!
//! // ... wait for the pacing pause ...
//! session.complete_verify(pending);
//! assert_eq!(session.state().history().len(), 1);
//! ```
//!
//! Any accepted action that replaces the level attempt (advance, retry,
//! reset, load) invalidates the ticket in flight; delivering it afterwards
//! is a no-op. A rejected action leaves the ticket live.

use std::time::Duration;

use rand::Rng;
use tracing::{debug, instrument};

use crate::core::{score, Color, Feedback, GameAction, GameConfig, GameState};
use crate::persistence::{SaveSlot, SaveStore};
use crate::rules::GameEngine;

/// Receipt for a verification in flight.
///
/// Hand it back to [`Session::complete_verify`] once the pacing pause has
/// elapsed. A ticket carries the issuing session's nonce, so one issued by
/// another session, or before the state was replaced, is discarded.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a verification only completes when its ticket is delivered"]
pub struct PendingVerification {
    session: u64,
    ticket: u64,
    feedback: Feedback,
}

impl PendingVerification {
    /// The score that will be recorded on completion.
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// Sleep for `delay`, then hand the ticket back.
pub async fn pace(pending: PendingVerification, delay: Duration) -> PendingVerification {
    tokio::time::sleep(delay).await;
    pending
}

/// Owner of one game.
///
/// Every accepted action is saved best-effort; `reset` erases the save.
pub struct Session<S: SaveStore> {
    engine: GameEngine,
    state: GameState,
    slot: SaveSlot<S>,
    nonce: u64,
    next_ticket: u64,
    in_flight: Option<u64>,
}

impl<S: SaveStore> Session<S> {
    /// Resume the saved game in `store`, or start fresh at level 1.
    pub fn open(store: S, config: GameConfig) -> Self {
        let slot = SaveSlot::new(store, config.save_key.clone());
        let mut engine = GameEngine::new(config);
        let state = match slot.load() {
            Some(state) => state,
            None => engine.new_game(1),
        };

        let mut session = Self {
            engine,
            state,
            slot,
            nonce: rand::thread_rng().gen(),
            next_ticket: 1,
            in_flight: None,
        };
        session.slot.save(&session.state);
        session
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    #[must_use]
    pub fn slot(&self) -> &SaveSlot<S> {
        &self.slot
    }

    #[must_use]
    pub fn can_verify(&self) -> bool {
        self.state.can_verify()
    }

    #[must_use]
    pub fn current_attempt(&self) -> usize {
        self.state.current_attempt()
    }

    #[instrument(level = "debug", skip(self))]
    pub fn select_color(&mut self, color: Color) -> &GameState {
        self.dispatch(GameAction::SelectColor(color));
        &self.state
    }

    #[instrument(level = "debug", skip(self))]
    pub fn set_active_slot(&mut self, slot: usize) -> &GameState {
        self.dispatch(GameAction::SetActiveSlot(slot));
        &self.state
    }

    #[instrument(level = "debug", skip(self))]
    pub fn clear_slot(&mut self, slot: usize) -> &GameState {
        self.dispatch(GameAction::ClearSlot(slot));
        &self.state
    }

    #[instrument(level = "debug", skip(self))]
    pub fn clear_all(&mut self) -> &GameState {
        self.dispatch(GameAction::ClearAll);
        &self.state
    }

    /// Submit the current input. `None` if Verify was rejected.
    #[instrument(level = "debug", skip(self))]
    pub fn begin_verify(&mut self) -> Option<PendingVerification> {
        let guess = self.state.input().filled()?;
        if !self.dispatch(GameAction::Verify) {
            return None;
        }

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight = Some(ticket);
        let feedback = score(self.state.secret(), &guess);
        debug!(ticket, "verification started");
        Some(PendingVerification {
            session: self.nonce,
            ticket,
            feedback,
        })
    }

    /// Deliver a verification. Returns the recorded score, or `None` if the
    /// ticket is stale.
    #[instrument(level = "debug", skip(self))]
    pub fn complete_verify(&mut self, pending: PendingVerification) -> Option<Feedback> {
        if pending.session != self.nonce || self.in_flight != Some(pending.ticket) {
            debug!(ticket = pending.ticket, "stale verification discarded");
            return None;
        }
        self.in_flight = None;
        self.dispatch(GameAction::VerifyComplete(pending.feedback));
        Some(pending.feedback)
    }

    /// Verify with the configured pacing pause.
    ///
    /// The session stays verifying until the pause elapses. Dropping the
    /// future abandons the verification; reopening from the save recovers.
    pub async fn verify_paced(&mut self) -> Option<Feedback> {
        let pending = self.begin_verify()?;
        let pending = pace(pending, self.engine.config().verify_delay()).await;
        self.complete_verify(pending)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn advance(&mut self) -> &GameState {
        self.dispatch(GameAction::Advance);
        &self.state
    }

    #[instrument(level = "debug", skip(self))]
    pub fn retry(&mut self) -> &GameState {
        self.dispatch(GameAction::Retry);
        &self.state
    }

    /// Start over at level 1 and erase the save.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) -> &GameState {
        self.in_flight = None;
        self.state = self.engine.apply(&self.state, &GameAction::Reset);
        self.slot.clear();
        &self.state
    }

    /// Re-read the save record and switch to it. Returns whether a usable
    /// record was found.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&mut self) -> bool {
        match self.slot.load() {
            Some(restored) => self.dispatch(GameAction::Load(Box::new(restored))),
            None => false,
        }
    }

    /// Apply an action, returning whether the engine accepted it.
    fn dispatch(&mut self, action: GameAction) -> bool {
        let next = match self.engine.try_apply(&self.state, &action) {
            Ok(next) => next,
            Err(reason) => {
                debug!(action = action.name(), %reason, "action rejected");
                return false;
            }
        };
        if action.replaces_state() {
            self.in_flight = None;
        }
        if next != self.state {
            self.state = next;
            self.slot.save(&self.state);
        }
        true
    }
}

impl<S: SaveStore> std::fmt::Debug for Session<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("level", &self.state.level())
            .field("status", &self.state.status())
            .field("attempt", &self.state.current_attempt())
            .field("in_flight", &self.in_flight)
            .finish()
    }
}
