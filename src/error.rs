use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::card::CardId;

/// Errors raised for requests that cannot come from legal interaction:
/// malformed decks and layouts, or references to piles and cards that do not exist.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid deck: {0}")]
    InvalidDeck(&'static str),
    #[error("invalid layout: {0}")]
    InvalidLayout(&'static str),
    #[error("tableau index {0} is out of range")]
    TableauIndex(usize),
    #[error("foundation index {0} is out of range")]
    FoundationIndex(usize),
    #[error("card {0} is not in the source pile")]
    CardNotInPile(CardId),
}

/// Reasons a move attempt is rejected. A rejected move leaves the game untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IllegalMove {
    #[error("the game is already won")]
    GameOver,
    #[error("cards cannot move between these piles")]
    UnsupportedRoute,
    #[error("the source pile is empty")]
    EmptySource,
    #[error("the card is face down or covered")]
    NotPlayable,
    #[error("only single cards may go to a foundation")]
    MultipleCardsToFoundation,
    #[error("the destination does not accept this card")]
    RuleViolation,
}
