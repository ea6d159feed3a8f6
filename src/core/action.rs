//! Player actions.
//!
//! A closed set of commands dispatched through
//! [`GameEngine::apply`](crate::rules::GameEngine::apply). Every action is
//! total: one whose precondition fails leaves the state unchanged.

use super::color::Color;
use super::feedback::Feedback;
use super::state::GameState;

/// A command against the game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameAction {
    /// Place a color in the active slot, then move to the next slot.
    SelectColor(Color),
    /// Make a slot the active one.
    SetActiveSlot(usize),
    /// Empty a slot and make it active.
    ClearSlot(usize),
    /// Empty every slot and return to the first.
    ClearAll,
    /// Submit the complete input for scoring.
    Verify,
    /// Deliver the score of the submission in flight.
    VerifyComplete(Feedback),
    /// Move to the next level after a win.
    Advance,
    /// Replay the current level against the same secret.
    Retry,
    /// Start over from level 1.
    Reset,
    /// Replace the state with a restored one.
    Load(Box<GameState>),
}

impl GameAction {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GameAction::SelectColor(_) => "select_color",
            GameAction::SetActiveSlot(_) => "set_active_slot",
            GameAction::ClearSlot(_) => "clear_slot",
            GameAction::ClearAll => "clear_all",
            GameAction::Verify => "verify",
            GameAction::VerifyComplete(_) => "verify_complete",
            GameAction::Advance => "advance",
            GameAction::Retry => "retry",
            GameAction::Reset => "reset",
            GameAction::Load(_) => "load",
        }
    }

    /// Whether this action edits the guess being composed.
    #[must_use]
    pub fn edits_input(&self) -> bool {
        matches!(
            self,
            GameAction::SelectColor(_)
                | GameAction::SetActiveSlot(_)
                | GameAction::ClearSlot(_)
                | GameAction::ClearAll
        )
    }

    /// Whether this action swaps in a whole new level attempt.
    #[must_use]
    pub fn replaces_state(&self) -> bool {
        matches!(
            self,
            GameAction::Advance | GameAction::Retry | GameAction::Reset | GameAction::Load(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_categories() {
        assert!(GameAction::SelectColor(Color::Red).edits_input());
        assert!(GameAction::ClearAll.edits_input());
        assert!(!GameAction::Verify.edits_input());
        assert!(!GameAction::VerifyComplete(Feedback::default()).edits_input());

        assert!(GameAction::Advance.replaces_state());
        assert!(GameAction::Reset.replaces_state());
        assert!(!GameAction::ClearSlot(0).replaces_state());
    }

    #[test]
    fn test_action_names() {
        assert_eq!(GameAction::SetActiveSlot(2).name(), "set_active_slot");
        assert_eq!(GameAction::VerifyComplete(Feedback::solved()).name(), "verify_complete");
        assert_eq!(GameAction::Retry.name(), "retry");
    }
}
