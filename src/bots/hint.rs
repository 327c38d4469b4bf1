use crate::action::{Action, Move, Pile};
use crate::bot::Bot;
use crate::state::GameStateView;

/// Rule-based bot built on the hint order.
///
/// In plain English:
/// - Anything that reaches a foundation is played first.
/// - Waste cards are played whenever they fit somewhere.
/// - A tableau run is moved only when that turns up a hidden card or empties
///   a pile for something other than a king already sitting at the base.
/// - Otherwise draw from the stock (or turn the waste over).
#[derive(Default)]
pub struct HintBot;

impl HintBot {
    pub fn new() -> Self {
        Self
    }

    fn makes_progress(state: &GameStateView, mv: &Move) -> bool {
        match mv.from {
            Pile::Waste => true,
            Pile::Tableau(idx) => {
                if mv.to.is_foundation() {
                    return true;
                }
                let Some(pile) = state.tableau.get(idx) else {
                    return false;
                };
                let anchors_run = pile.face_up.first().is_some_and(|c| c.id == mv.card.id);
                anchors_run && (pile.face_down > 0 || !mv.card.is_king())
            }
            Pile::Stock | Pile::Foundation(_) => false,
        }
    }
}

impl Bot for HintBot {
    fn select_action(&mut self, state: &GameStateView, legal_actions: &[Action]) -> Action {
        let moves = || legal_actions.iter().filter_map(Action::as_move);
        if let Some(mv) = moves().find(|mv| mv.to.is_foundation()) {
            return Action::Move(*mv);
        }
        if let Some(mv) = moves().find(|mv| Self::makes_progress(state, mv)) {
            return Action::Move(*mv);
        }
        legal_actions
            .iter()
            .find(|action| matches!(action, Action::Draw))
            .or_else(|| legal_actions.first())
            .copied()
            .expect("at least one legal action must be available")
    }
}
