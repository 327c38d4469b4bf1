//! Klondike Solitaire rules engine: deck, deal, move legality, game state and hints.

pub mod action;
pub mod api;
pub mod bot;
pub mod bots;
pub mod card;
pub mod deal;
pub mod deck;
pub mod error;
pub mod game;
pub mod hint;
pub mod logging;
pub mod rules;
pub mod score;
pub mod state;
pub mod visualize;

pub use crate::action::{Action, Move, Pile};
pub use crate::api::{
    Attempt, AttemptError, attempt_move, draw, is_won, new_game, new_game_with_seed,
    request_hint,
};
pub use crate::bot::Bot;
pub use crate::bots::registry::{create_bot_from_spec, label_for_spec};
pub use crate::bots::{HintBot, RandomBot};
pub use crate::card::{Card, CardId, Color, Rank, Suit};
pub use crate::deal::{Layout, deal};
pub use crate::deck::{create_deck, shuffle, shuffled_deck};
pub use crate::error::{GameError, IllegalMove};
pub use crate::game::{Draw, Game, GameBuilder, GameConfig, MoveOutcome};
pub use crate::hint::find_legal_moves;
pub use crate::rules::{can_place_on_foundation, can_place_on_tableau};
pub use crate::score::ScoreRules;
pub use crate::state::{GameStateView, GameStatus, TableauView};
pub use crate::visualize::{VisualOptions, describe_action, describe_move, render_state};
