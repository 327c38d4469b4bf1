use crate::action::Action;
use crate::state::GameStateView;

/// Interface for automatic Klondike players.
pub trait Bot {
    fn select_action(&mut self, state: &GameStateView, legal_actions: &[Action]) -> Action;
}
