use std::collections::HashSet;

use solitaire::{GameError, Move, Pile, attempt_move, draw, is_won, new_game, request_hint};
use solitaire::{find_legal_moves, new_game_with_seed};

#[test]
fn new_game_partitions_a_full_deck() {
    let game = new_game();
    let ids: HashSet<_> = game.layout().cards().map(|c| c.id).collect();
    assert_eq!(ids.len(), 52);
    let faces: HashSet<_> = game.layout().cards().map(|c| (c.suit, c.rank)).collect();
    assert_eq!(faces.len(), 52);
    assert!(!is_won(&game));
    assert!(game.layout().validate().is_ok());
}

#[test]
fn state_is_passed_through_each_call() -> Result<(), GameError> {
    let game = new_game_with_seed(2024);
    let top = *game.stock().last().expect("fresh stock");

    let game = draw(game);
    assert_eq!(game.waste().len(), 1);
    assert_eq!(game.waste()[0].id, top.id);
    assert!(game.waste()[0].face_up);
    assert_eq!(game.stock().len(), 23);

    // A stock card can never be moved directly.
    let next = *game.stock().last().expect("stock still holds cards");
    let attempt = attempt_move(game, &Move::new(Pile::Stock, Pile::Tableau(0), next))?;
    assert!(!attempt.applied);
    let game = attempt.state;
    assert_eq!(game.moves(), 1);

    if let Some(hint) = request_hint(&game) {
        assert!(find_legal_moves(&game).contains(&hint));
        let attempt = attempt_move(game, &hint)?;
        assert!(attempt.applied);
        assert_eq!(attempt.state.moves(), 2);
    }
    Ok(())
}

#[test]
fn seeded_games_repeat() {
    let a = new_game_with_seed(5);
    let b = new_game_with_seed(5);
    let c = new_game_with_seed(6);
    let faces = |game: &solitaire::Game| -> Vec<_> {
        game.layout().cards().map(|card| (card.suit, card.rank)).collect()
    };
    assert_eq!(faces(&a), faces(&b));
    assert_ne!(faces(&a), faces(&c));
}

#[test]
fn malformed_requests_hand_the_game_back() {
    let game = new_game_with_seed(11);
    let stock_top = *game.stock().last().expect("fresh stock");
    let before = game.layout().clone();

    let err = attempt_move(game, &Move::new(Pile::Tableau(9), Pile::Tableau(0), stock_top))
        .expect_err("tableau 9 does not exist");
    assert_eq!(err.error, GameError::TableauIndex(9));
    let game = err.state;
    assert_eq!(game.layout(), &before);

    let attempt = attempt_move(game, &Move::new(Pile::Waste, Pile::Tableau(0), stock_top))
        .expect("an empty waste is a rejected move, not an error");
    assert!(!attempt.applied);

    let err = attempt_move(
        attempt.state,
        &Move::new(Pile::Tableau(6), Pile::Tableau(0), stock_top),
    )
    .expect_err("stock card is not on tableau 6");
    assert_eq!(err.error, GameError::CardNotInPile(stock_top.id));
    assert_eq!(err.state.layout(), &before);
    assert_eq!(err.state.moves(), 0);
}
