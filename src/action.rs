use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// A pile on the table, addressed by kind and zero-based index.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Pile {
    Stock,
    Waste,
    Tableau(usize),
    Foundation(usize),
}

impl Pile {
    pub fn is_foundation(&self) -> bool {
        matches!(self, Pile::Foundation(_))
    }

    pub fn is_tableau(&self) -> bool {
        matches!(self, Pile::Tableau(_))
    }
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pile::Stock => f.write_str("stock"),
            Pile::Waste => f.write_str("waste"),
            Pile::Tableau(idx) => write!(f, "tableau {idx}"),
            Pile::Foundation(idx) => write!(f, "foundation {idx}"),
        }
    }
}

/// Transfer of `card` (and, from a tableau, every card stacked on it) from one pile to another.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Pile,
    pub to: Pile,
    pub card: Card,
}

impl Move {
    pub fn new(from: Pile, to: Pile, card: Card) -> Self {
        Self { from, to, card }
    }
}

/// Anything a player can do on their turn.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Turn the next stock card onto the waste, or recycle the waste when the stock is empty.
    Draw,
    Move(Move),
}

impl Action {
    pub fn as_move(&self) -> Option<&Move> {
        match self {
            Action::Move(mv) => Some(mv),
            Action::Draw => None,
        }
    }
}

impl From<Move> for Action {
    fn from(mv: Move) -> Self {
        Action::Move(mv)
    }
}
