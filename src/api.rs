//! Value-passing entry points for front ends.
//!
//! The caller owns the [`Game`] and hands it to each operation; there is no
//! shared game instance behind these functions.

use thiserror::Error;

use crate::action::Move;
use crate::error::GameError;
use crate::game::{Game, GameConfig};

/// State after a move attempt, and whether the move was applied.
#[derive(Clone, Debug)]
pub struct Attempt {
    pub state: Game,
    pub applied: bool,
}

/// Deals a new game from an entropy-seeded shuffle.
pub fn new_game() -> Game {
    new_game_with_seed(rand::random())
}

pub fn new_game_with_seed(seed: u64) -> Game {
    Game::new(GameConfig::new(seed))
}

pub fn draw(mut state: Game) -> Game {
    state.draw();
    state
}

/// A malformed move request, carrying back the untouched state it was made against.
#[derive(Clone, Debug, Error)]
#[error("{error}")]
pub struct AttemptError {
    pub state: Game,
    #[source]
    pub error: GameError,
}

impl From<AttemptError> for GameError {
    fn from(err: AttemptError) -> Self {
        err.error
    }
}

/// Attempts `mv` against `state`. An illegal move comes back as an
/// [`Attempt`] with `applied` unset; a request naming a missing pile or card
/// comes back as an [`AttemptError`] that still owns the game.
pub fn attempt_move(mut state: Game, mv: &Move) -> Result<Attempt, AttemptError> {
    match state.attempt_move(mv) {
        Ok(outcome) => Ok(Attempt {
            applied: outcome.applied(),
            state,
        }),
        Err(error) => Err(AttemptError { state, error }),
    }
}

pub fn request_hint(state: &Game) -> Option<Move> {
    crate::hint::request_hint(state)
}

pub fn is_won(state: &Game) -> bool {
    state.is_won()
}
