use serde::{Deserialize, Serialize};

use crate::card::{Card, FOUNDATION_COUNT, TABLEAU_COUNT};

/// Status of the game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Completed,
}

/// Visible part of a tableau pile.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableauView {
    pub face_down: usize,
    pub face_up: Vec<Card>,
}

impl TableauView {
    pub fn top(&self) -> Option<&Card> {
        self.face_up.last()
    }

    pub fn is_empty(&self) -> bool {
        self.face_down == 0 && self.face_up.is_empty()
    }
}

/// Game snapshot with face-down cards hidden, tailored for bots and front ends.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub status: GameStatus,
    pub moves: u32,
    pub score: u32,
    pub stock_count: usize,
    pub waste: Vec<Card>,
    pub tableau: [TableauView; TABLEAU_COUNT],
    pub foundations: [Vec<Card>; FOUNDATION_COUNT],
}

impl GameStateView {
    pub fn waste_top(&self) -> Option<&Card> {
        self.waste.last()
    }

    pub fn foundation_cards(&self) -> usize {
        self.foundations.iter().map(Vec::len).sum()
    }

    pub fn hidden_cards(&self) -> usize {
        self.tableau.iter().map(|pile| pile.face_down).sum()
    }
}
