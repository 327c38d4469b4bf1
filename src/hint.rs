//! Legal-move search used for hints and automatic players.

use crate::action::{Move, Pile};
use crate::game::Game;
use crate::rules::{can_place_on_foundation, can_place_on_tableau};

/// Enumerates every legal card move, in a fixed order:
///
/// 1. each face-up tableau top onto each foundation,
/// 2. the waste top onto each foundation,
/// 3. the waste top onto each tableau,
/// 4. each face-up tableau card, with the run stacked on it, onto each other tableau.
///
/// Piles are visited in index order inside every step. Front ends rely on
/// this order when choosing the single move they suggest.
pub fn find_legal_moves(game: &Game) -> Vec<Move> {
    let layout = game.layout();
    let mut moves = Vec::new();

    for (from, pile) in layout.tableau.iter().enumerate() {
        let Some(top) = pile.last().filter(|c| c.face_up) else {
            continue;
        };
        for (to, foundation) in layout.foundations.iter().enumerate() {
            if can_place_on_foundation(top, foundation.last()) {
                moves.push(Move::new(Pile::Tableau(from), Pile::Foundation(to), *top));
            }
        }
    }

    if let Some(top) = layout.waste.last() {
        for (to, foundation) in layout.foundations.iter().enumerate() {
            if can_place_on_foundation(top, foundation.last()) {
                moves.push(Move::new(Pile::Waste, Pile::Foundation(to), *top));
            }
        }
        for (to, pile) in layout.tableau.iter().enumerate() {
            if can_place_on_tableau(top, pile.last()) {
                moves.push(Move::new(Pile::Waste, Pile::Tableau(to), *top));
            }
        }
    }

    for (from, pile) in layout.tableau.iter().enumerate() {
        let Some(first_up) = pile.iter().position(|c| c.face_up) else {
            continue;
        };
        for card in &pile[first_up..] {
            for (to, target) in layout.tableau.iter().enumerate() {
                if to != from && can_place_on_tableau(card, target.last()) {
                    moves.push(Move::new(Pile::Tableau(from), Pile::Tableau(to), *card));
                }
            }
        }
    }

    moves
}

/// The single move to suggest: the first foundation move if there is one,
/// otherwise the first legal move.
pub fn request_hint(game: &Game) -> Option<Move> {
    let moves = find_legal_moves(game);
    moves
        .iter()
        .find(|mv| mv.to.is_foundation())
        .or_else(|| moves.first())
        .copied()
}
