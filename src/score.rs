//! Scoring for Klondike moves.
//!
//! Current rule: a card (or run) landing on a foundation earns 10 points,
//! landing on a tableau earns 5. Drawing and recycling earn nothing.

use serde::{Deserialize, Serialize};

use crate::action::Pile;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRules {
    pub foundation: u32,
    pub tableau: u32,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            foundation: 10,
            tableau: 5,
        }
    }
}

impl ScoreRules {
    /// Points for a move that lands on `destination`.
    pub fn points_for(&self, destination: Pile) -> u32 {
        match destination {
            Pile::Foundation(_) => self.foundation,
            Pile::Tableau(_) => self.tableau,
            Pile::Stock | Pile::Waste => 0,
        }
    }
}
