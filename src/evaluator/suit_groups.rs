use crate::cards::{Card, Suit};

/// Cards of a pool split by suit, each group sorted by rank descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitGroups {
    by_suit: [Vec<Card>; 4],
}

impl SuitGroups {
    /// `cards` must already be sorted by rank descending.
    pub fn from_sorted(cards: &[Card]) -> Self {
        let mut by_suit: [Vec<Card>; 4] = Default::default();
        for &card in cards {
            by_suit[card.suit().index()].push(card);
        }
        Self { by_suit }
    }

    pub fn suited(&self, suit: Suit) -> &[Card] {
        &self.by_suit[suit.index()]
    }

    /// Suits holding at least five cards, with their cards.
    pub fn flush_suits(&self) -> impl Iterator<Item = (Suit, &[Card])> + '_ {
        Suit::ALL
            .iter()
            .map(move |&suit| (suit, self.suited(suit)))
            .filter(|(_, cards)| cards.len() >= 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Rank};

    fn groups(s: &str) -> SuitGroups {
        let mut cards = parse_cards(s).unwrap();
        cards.sort_by(|a, b| b.cmp(a));
        SuitGroups::from_sorted(&cards)
    }

    #[test]
    fn test_flush_in_seven() {
        let g = groups("Ah 9h 7h 3h 2h Ks Kd");
        let flushes: Vec<_> = g.flush_suits().map(|(s, _)| s).collect();
        assert_eq!(flushes, vec![Suit::Hearts]);
        let ranks: Vec<Rank> = g.suited(Suit::Hearts).iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![Rank::Ace, Rank::Nine, Rank::Seven, Rank::Three, Rank::Two]);
    }

    #[test]
    fn test_not_flush() {
        let g = groups("Ah 9h 7h 3h 2s Ks Kd");
        assert_eq!(g.flush_suits().count(), 0);
        assert_eq!(g.suited(Suit::Hearts).len(), 4);
        assert!(g.suited(Suit::Clubs).is_empty());
    }

    #[test]
    fn test_two_flush_suits_in_large_pool() {
        let g = groups("2c 3c 4c 5c 7c 2d 3d 4d 5d 8d");
        assert_eq!(g.flush_suits().count(), 2);
    }
}
