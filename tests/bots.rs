use rand::SeedableRng;
use rand::rngs::StdRng;

use solitaire::{Action, Bot, Game, GameConfig, GameError, HintBot, RandomBot};

/// Plays `turns` actions and checks the table after each one.
fn play_checked(game: &mut Game, bot: &mut dyn Bot, turns: usize) -> Result<(), GameError> {
    for _ in 0..turns {
        let actions = game.legal_actions();
        if actions.is_empty() {
            break;
        }
        let state = game.view();
        let action = bot.select_action(&state, &actions);
        assert!(actions.contains(&action));

        let (moves, score) = (game.moves(), game.score());
        let changed = game.apply_action(action)?;
        assert!(changed, "legal action {action:?} did not apply");
        if let Action::Move(mv) = action {
            assert_eq!(game.moves(), moves + 1);
            let gained = game.score() - score;
            assert_eq!(gained, if mv.to.is_foundation() { 10 } else { 5 });
        }
        game.layout().validate()?;
    }
    Ok(())
}

#[test]
fn random_bot_keeps_the_table_consistent() -> Result<(), GameError> {
    for seed in 0..5u64 {
        let mut game = Game::new(GameConfig::new(seed));
        let mut bot = RandomBot::new(StdRng::seed_from_u64(seed));
        play_checked(&mut game, &mut bot, 400)?;
    }
    Ok(())
}

#[test]
fn hint_bot_keeps_the_table_consistent() -> Result<(), GameError> {
    for seed in 0..5u64 {
        let mut game = Game::new(GameConfig::new(seed));
        let mut bot = HintBot::new();
        play_checked(&mut game, &mut bot, 400)?;
        assert!(game.view().foundation_cards() <= 52);
    }
    Ok(())
}

#[test]
fn hint_bot_draws_when_nothing_progresses() -> Result<(), GameError> {
    let game = Game::new(GameConfig::new(1));
    let state = game.view();
    let mut bot = HintBot::new();
    let only_draw = [Action::Draw];
    assert_eq!(bot.select_action(&state, &only_draw), Action::Draw);
    Ok(())
}

#[test]
fn weighted_random_bot_prefers_moves_over_drawing() -> Result<(), GameError> {
    for seed in 0..5u64 {
        let mut game = Game::new(GameConfig::new(seed));
        let mut bot = RandomBot::with_draw_chance(StdRng::seed_from_u64(seed), 0.0);
        let actions = game.legal_actions();
        let state = game.view();
        let choice = bot.select_action(&state, &actions);
        if actions.iter().any(|action| action.as_move().is_some()) {
            assert!(choice.as_move().is_some(), "seed {seed}: drew with moves available");
        } else {
            assert_eq!(choice, Action::Draw);
        }
        play_checked(&mut game, &mut bot, 200)?;
    }
    Ok(())
}
