use std::array::from_fn;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::card::{Card, DECK_SIZE, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::error::GameError;

/// Every pile of a Klondike game. Top of each pile is the last element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub stock: Vec<Card>,
    pub waste: Vec<Card>,
    pub tableau: [Vec<Card>; TABLEAU_COUNT],
    pub foundations: [Vec<Card>; FOUNDATION_COUNT],
}

impl Layout {
    /// A layout with every pile empty. Useful as a starting point for hand-built positions.
    pub fn empty() -> Self {
        Self {
            stock: Vec::new(),
            waste: Vec::new(),
            tableau: from_fn(|_| Vec::new()),
            foundations: from_fn(|_| Vec::new()),
        }
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.stock
            .iter()
            .chain(self.waste.iter())
            .chain(self.tableau.iter().flatten())
            .chain(self.foundations.iter().flatten())
    }

    /// Checks that the piles partition a full deck and that every pile is in
    /// a reachable shape: the stock is face down, the waste and foundations
    /// are face up, and each tableau is a face-down base under a face-up run.
    pub fn validate(&self) -> Result<(), GameError> {
        check_full_deck(self.cards()).map_err(GameError::InvalidLayout)?;

        if self.stock.iter().any(|c| c.face_up) {
            return Err(GameError::InvalidLayout("face-up card in the stock"));
        }
        if self.waste.iter().any(|c| !c.face_up) {
            return Err(GameError::InvalidLayout("face-down card in the waste"));
        }
        if self.foundations.iter().flatten().any(|c| !c.face_up) {
            return Err(GameError::InvalidLayout("face-down card on a foundation"));
        }

        for pile in &self.tableau {
            let first_up = pile.iter().position(|c| c.face_up).unwrap_or(pile.len());
            if pile[first_up..].iter().any(|c| !c.face_up) {
                return Err(GameError::InvalidLayout(
                    "face-down tableau card above a face-up card",
                ));
            }
            if pile.last().is_some_and(|c| !c.face_up) {
                return Err(GameError::InvalidLayout("tableau top card is face down"));
            }
        }

        for pile in &self.foundations {
            let Some(base) = pile.first() else {
                continue;
            };
            let ordered = pile
                .iter()
                .enumerate()
                .all(|(idx, c)| c.suit == base.suit && usize::from(c.value()) == idx + 1);
            if !ordered {
                return Err(GameError::InvalidLayout(
                    "foundation is not an ace-up run of one suit",
                ));
            }
        }
        Ok(())
    }
}

fn check_full_deck<'a>(cards: impl Iterator<Item = &'a Card>) -> Result<(), &'static str> {
    let mut ids = HashSet::with_capacity(DECK_SIZE);
    let mut faces = HashSet::with_capacity(DECK_SIZE);
    for card in cards {
        if !ids.insert(card.id) {
            return Err("duplicate card id");
        }
        if !faces.insert((card.suit, card.rank)) {
            return Err("duplicate suit and rank");
        }
    }
    if ids.len() != DECK_SIZE {
        return Err("expected exactly 52 cards");
    }
    Ok(())
}

/// Deals a 52-card deck into the opening Klondike layout.
///
/// Cards come off the end of the deck. Round `i` gives one card to each
/// tableau pile from `i` to 6, and the card pile `i` receives in round `i`
/// is its last and the only one turned up. The 24 leftover cards form the
/// stock in their remaining order.
pub fn deal(deck: Vec<Card>) -> Result<Layout, GameError> {
    check_full_deck(deck.iter()).map_err(GameError::InvalidDeck)?;
    Ok(deal_cards(deck))
}

/// Dealing without the deck check, for decks that come straight from [`create_deck`].
///
/// [`create_deck`]: crate::deck::create_deck
pub(crate) fn deal_cards(mut deck: Vec<Card>) -> Layout {
    let mut layout = Layout::empty();
    for round in 0..TABLEAU_COUNT {
        for pile in round..TABLEAU_COUNT {
            let Some(mut card) = deck.pop() else {
                break;
            };
            card.face_up = pile == round;
            layout.tableau[pile].push(card);
        }
    }
    for card in &mut deck {
        card.face_up = false;
    }
    layout.stock = deck;
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use crate::deck::{create_deck, shuffled_deck};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn deal_produces_klondike_shape() -> Result<(), GameError> {
        let mut rng = StdRng::seed_from_u64(3);
        let layout = deal(shuffled_deck(&mut rng))?;
        let sizes: Vec<usize> = layout.tableau.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![1, 2, 3, 4, 5, 6, 7]);
        for pile in &layout.tableau {
            let (top, rest) = pile.split_last().expect("dealt piles are non-empty");
            assert!(top.face_up);
            assert!(rest.iter().all(|c| !c.face_up));
        }
        assert_eq!(layout.stock.len(), 24);
        assert!(layout.stock.iter().all(|c| !c.face_up));
        assert!(layout.waste.is_empty());
        assert!(layout.foundations.iter().all(Vec::is_empty));
        layout.validate()
    }

    #[test]
    fn deal_goes_round_robin_from_the_end() -> Result<(), GameError> {
        let deck = create_deck();
        let expected_first_round: Vec<_> = deck.iter().rev().take(7).map(|c| c.id).collect();
        let second_round_head = deck[deck.len() - 8].id;
        let stock_ids: Vec<_> = deck[..24].iter().map(|c| c.id).collect();

        let layout = deal(deck)?;
        let bottoms: Vec<_> = layout.tableau.iter().map(|p| p[0].id).collect();
        assert_eq!(bottoms, expected_first_round);
        assert_eq!(layout.tableau[1][1].id, second_round_head);
        let dealt_stock: Vec<_> = layout.stock.iter().map(|c| c.id).collect();
        assert_eq!(dealt_stock, stock_ids);
        Ok(())
    }

    #[test]
    fn deal_rejects_short_or_duplicated_decks() {
        let mut deck = create_deck();
        deck.pop();
        assert!(matches!(deal(deck), Err(GameError::InvalidDeck(_))));

        let mut deck = create_deck();
        deck[0] = deck[1];
        assert!(matches!(deal(deck), Err(GameError::InvalidDeck(_))));

        let mut deck = create_deck();
        deck[0] = Card::new(Suit::Spades, Rank::King);
        assert!(matches!(deal(deck), Err(GameError::InvalidDeck(_))));
    }

    #[test]
    fn validate_flags_broken_foundations() -> Result<(), GameError> {
        let mut layout = deal(create_deck())?;
        let two = layout
            .stock
            .iter()
            .position(|c| c.rank == Rank::Two)
            .expect("stock holds a two");
        let card = layout.stock.remove(two);
        layout.foundations[0].push(card.turned_up());
        assert_eq!(
            layout.validate(),
            Err(GameError::InvalidLayout(
                "foundation is not an ace-up run of one suit"
            ))
        );
        Ok(())
    }

    #[test]
    fn validate_flags_cards_facing_the_wrong_way() -> Result<(), GameError> {
        let mut layout = deal(create_deck())?;
        layout.stock[0].face_up = true;
        assert_eq!(
            layout.validate(),
            Err(GameError::InvalidLayout("face-up card in the stock"))
        );

        let mut layout = deal(create_deck())?;
        let card = layout.stock.pop().expect("dealt stock is non-empty");
        layout.waste.push(card);
        assert_eq!(
            layout.validate(),
            Err(GameError::InvalidLayout("face-down card in the waste"))
        );
        layout.waste[0].face_up = true;
        layout.validate()
    }
}
