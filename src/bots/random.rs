use rand::Rng;
use rand::seq::SliceRandom;

use crate::action::Action;
use crate::bot::Bot;
use crate::state::GameStateView;

/// Baseline bot that samples from the legal action set.
///
/// With `draw_chance` set, the stock is only drawn with that probability
/// while card moves are available; otherwise every action is equally likely.
pub struct RandomBot<R: Rng> {
    rng: R,
    draw_chance: Option<f64>,
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            draw_chance: None,
        }
    }

    pub fn with_draw_chance(rng: R, chance: f64) -> Self {
        Self {
            rng,
            draw_chance: Some(chance.clamp(0.0, 1.0)),
        }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn select_action(&mut self, _state: &GameStateView, legal_actions: &[Action]) -> Action {
        if let Some(chance) = self.draw_chance {
            let moves: Vec<Action> = legal_actions
                .iter()
                .copied()
                .filter(|action| action.as_move().is_some())
                .collect();
            let has_draw = moves.len() < legal_actions.len();
            if !moves.is_empty() && !(has_draw && self.rng.gen_bool(chance)) {
                if let Some(action) = moves.choose(&mut self.rng) {
                    return *action;
                }
            }
        }
        *legal_actions
            .choose(&mut self.rng)
            .expect("at least one legal action must be available")
    }
}
