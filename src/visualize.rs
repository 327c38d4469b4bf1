use std::fmt::Write;

use crate::action::{Action, Move};
use crate::card::Card;
use crate::state::{GameStateView, GameStatus};

/// Customize state rendering for CLI visualization.
#[derive(Clone, Copy, Debug, Default)]
pub struct VisualOptions {
    /// Print the whole waste instead of only its top card.
    pub show_full_waste: bool,
    /// Print the whole foundation runs instead of only their tops.
    pub show_foundation_runs: bool,
}

pub fn render_state(state: &GameStateView) -> String {
    render_state_with_options(state, VisualOptions::default())
}

pub fn render_state_with_options(state: &GameStateView, options: VisualOptions) -> String {
    let mut out = String::new();
    let status = match state.status {
        GameStatus::InProgress => "In progress",
        GameStatus::Completed => "Completed",
    };
    let _ = writeln!(
        out,
        "Status: {status}  |  Moves: {}  |  Score: {}",
        state.moves, state.score
    );

    let waste = if state.waste.is_empty() {
        String::from("--")
    } else if options.show_full_waste {
        join_cards(&state.waste)
    } else {
        let top = state.waste_top().map(Card::to_string).unwrap_or_default();
        format!("{top} ({})", state.waste.len())
    };
    let _ = writeln!(out, "Stock: {}  |  Waste: {waste}", state.stock_count);

    let _ = writeln!(out, "Foundations:");
    for (idx, pile) in state.foundations.iter().enumerate() {
        let text = match pile.last() {
            None => String::from("--"),
            Some(_) if options.show_foundation_runs => join_cards(pile),
            Some(top) => format!("{top} ({})", pile.len()),
        };
        let _ = writeln!(out, "  [{idx}] {text}");
    }

    let _ = writeln!(out, "Tableau:");
    for (idx, pile) in state.tableau.iter().enumerate() {
        let mut parts = Vec::with_capacity(pile.face_down + pile.face_up.len());
        parts.extend(std::iter::repeat(String::from("##")).take(pile.face_down));
        parts.extend(pile.face_up.iter().map(Card::to_string));
        let text = if parts.is_empty() {
            String::from("--")
        } else {
            parts.join(" ")
        };
        let _ = writeln!(out, "  [{idx}] {text}");
    }
    out
}

pub fn describe_move(mv: &Move) -> String {
    format!("Move {} from {} to {}", mv.card, mv.from, mv.to)
}

pub fn describe_action(state: &GameStateView, action: &Action) -> String {
    match action {
        Action::Move(mv) => describe_move(mv),
        Action::Draw if state.stock_count > 0 => String::from("Draw from stock"),
        Action::Draw => format!("Turn over waste ({} cards)", state.waste.len()),
    }
}

fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
