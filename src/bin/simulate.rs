use std::error::Error;
use std::process;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use solitaire::{Action, Bot, Game, GameConfig, create_bot_from_spec, describe_action, logging};
use solitaire::{GameStateView, render_state};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    about = "Play seeded Klondike games with an automatic player."
)]
struct Args {
    /// Number of games to play
    #[arg(short = 'g', long = "games", default_value_t = 1)]
    games: usize,

    /// Base RNG seed; game `n` is dealt with `seed + n`
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Bot spec: hint, random[:seed] or random-mover[:seed]
    #[arg(short = 'b', long = "bot", default_value = "hint")]
    bot: String,

    /// Safety cap on actions per game
    #[arg(long = "max-turns", default_value_t = 5_000)]
    max_turns: usize,

    /// Show the table and the chosen action every turn
    #[arg(long = "visualize", action = ArgAction::SetTrue)]
    visualize: bool,

    /// Print the final state of each game as JSON
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,

    /// Engine log level (off, error, warn, info, debug, trace)
    #[arg(long = "log-level", default_value = "warn")]
    log_level: LevelFilter,
}

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ending {
    Won,
    Stalled,
    TurnLimit,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.games == 0 {
        return Err("games must be positive".into());
    }
    logging::init(args.log_level)?;

    let mut wins = 0usize;
    for index in 0..args.games {
        let seed = args.seed.wrapping_add(index as u64);
        let mut game = Game::new(GameConfig::new(seed));
        let mut bot = create_bot_from_spec(&args.bot, seed)?;
        let ending = play(&mut game, bot.as_mut(), &args)?;
        if ending == Ending::Won {
            wins += 1;
        }
        let view = game.view();
        println!(
            "Game {index} (seed {seed:#x}): {ending:?} after {} moves, score {}, {} cards on foundations",
            view.moves,
            view.score,
            view.foundation_cards()
        );
        if args.json {
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }

    let rate = wins as f64 * 100.0 / args.games as f64;
    println!("\nWon {wins} of {} games ({rate:.1}%).", args.games);
    Ok(())
}

fn play(game: &mut Game, bot: &mut dyn Bot, args: &Args) -> Result<Ending, Box<dyn Error>> {
    // Draws since the last card move; once a full pass over stock and waste
    // yields nothing, the bot will only keep cycling.
    let mut idle_draws = 0usize;
    for _ in 0..args.max_turns {
        if game.is_won() {
            return Ok(Ending::Won);
        }
        let state = game.view();
        let legal_actions = game.legal_actions();
        if legal_actions.is_empty() || stalled(&state, idle_draws) {
            return Ok(Ending::Stalled);
        }
        let action = bot.select_action(&state, &legal_actions);
        if args.visualize {
            println!("{}", render_state(&state));
            println!("Chosen action: {}\n", describe_action(&state, &action));
        }
        game.apply_action(action)?;
        match action {
            Action::Draw => idle_draws += 1,
            Action::Move(_) => idle_draws = 0,
        }
    }
    Ok(if game.is_won() {
        Ending::Won
    } else {
        Ending::TurnLimit
    })
}

fn stalled(state: &GameStateView, idle_draws: usize) -> bool {
    idle_draws > state.stock_count + state.waste.len() + 1
}
