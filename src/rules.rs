//! Placement rules for Klondike piles.
//!
//! Both predicates look only at the moving card and the current top of the
//! destination; an empty pile is passed as `None`.

use crate::card::Card;

/// Foundations build up by suit from the ace.
pub fn can_place_on_foundation(card: &Card, top: Option<&Card>) -> bool {
    match top {
        None => card.is_ace(),
        Some(top) => card.suit == top.suit && card.value() == top.value() + 1,
    }
}

/// Tableaus build down in alternating colors; only a king opens an empty pile.
pub fn can_place_on_tableau(card: &Card, top: Option<&Card>) -> bool {
    match top {
        None => card.is_king(),
        Some(top) => card.color() != top.color() && card.value() + 1 == top.value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank).turned_up()
    }

    #[test]
    fn foundation_accepts_only_ace_when_empty() {
        assert!(can_place_on_foundation(&card(Suit::Hearts, Rank::Ace), None));
        assert!(!can_place_on_foundation(&card(Suit::Hearts, Rank::Two), None));
        assert!(!can_place_on_foundation(&card(Suit::Spades, Rank::King), None));
    }

    #[test]
    fn foundation_builds_up_in_suit() {
        let ace = card(Suit::Hearts, Rank::Ace);
        assert!(can_place_on_foundation(&card(Suit::Hearts, Rank::Two), Some(&ace)));
        assert!(!can_place_on_foundation(&card(Suit::Spades, Rank::Two), Some(&ace)));
        assert!(!can_place_on_foundation(&card(Suit::Hearts, Rank::Three), Some(&ace)));

        let queen = card(Suit::Clubs, Rank::Queen);
        assert!(can_place_on_foundation(&card(Suit::Clubs, Rank::King), Some(&queen)));
        assert!(!can_place_on_foundation(&card(Suit::Clubs, Rank::Jack), Some(&queen)));
        assert!(!can_place_on_foundation(&card(Suit::Clubs, Rank::Queen), Some(&queen)));
    }

    #[test]
    fn tableau_accepts_only_king_when_empty() {
        assert!(can_place_on_tableau(&card(Suit::Spades, Rank::King), None));
        assert!(!can_place_on_tableau(&card(Suit::Hearts, Rank::Queen), None));
        assert!(!can_place_on_tableau(&card(Suit::Clubs, Rank::Ace), None));
    }

    #[test]
    fn tableau_builds_down_alternating_colors() {
        let red_king = card(Suit::Hearts, Rank::King);
        assert!(can_place_on_tableau(&card(Suit::Spades, Rank::Queen), Some(&red_king)));
        assert!(!can_place_on_tableau(&card(Suit::Diamonds, Rank::Queen), Some(&red_king)));
        assert!(!can_place_on_tableau(&card(Suit::Spades, Rank::Jack), Some(&red_king)));

        let red_queen = card(Suit::Diamonds, Rank::Queen);
        assert!(can_place_on_tableau(&card(Suit::Clubs, Rank::Jack), Some(&red_queen)));

        let ace = card(Suit::Spades, Rank::Ace);
        assert!(!can_place_on_tableau(&card(Suit::Hearts, Rank::King), Some(&ace)));
    }
}
