use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Builds a full 52-card deck in suit-major order, every card face down with a fresh id.
pub fn create_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// Fisher–Yates shuffle driven by the supplied random source.
///
/// Walks from the last index down to 1, swapping each slot with a uniformly
/// chosen slot in `[0, i]`.
pub fn shuffle<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
    items
}

pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    shuffle(create_deck(), rng)
}
