//! The game state machine.
//!
//! `GameEngine` validates and applies [`GameAction`](crate::core::GameAction)s,
//! sequences verification, and derives win/loss. It never fails: an action
//! whose precondition is false yields the same state.

pub mod engine;

pub use engine::{GameEngine, Rejection};
