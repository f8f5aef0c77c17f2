use super::rank_groups::RankGroups;
use super::suit_groups::SuitGroups;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, RankedHand};

/// Pre-computed, read-only view of a card pool.
/// Built once and shared by all category probes.
#[derive(Debug, Clone)]
pub struct PoolAnalysis {
    /// Rank descending; equal ranks keep their input order.
    pub sorted_cards: Vec<Card>,
    pub rank_groups: RankGroups,
    pub suit_groups: SuitGroups,
}

impl PoolAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        let mut sorted_cards = cards.to_vec();
        sorted_cards.sort_by(|a, b| b.cmp(a));

        let rank_groups = RankGroups::from_cards(&sorted_cards);
        let suit_groups = SuitGroups::from_sorted(&sorted_cards);

        Self { sorted_cards, rank_groups, suit_groups }
    }

    /// The first `n` cards of `rank`, or fewer if the pool holds fewer.
    pub fn cards_of(&self, rank: Rank, n: usize) -> impl Iterator<Item = Card> + '_ {
        self.sorted_cards.iter().copied().filter(move |c| c.rank() == rank).take(n)
    }

    /// The `n` highest cards whose rank is not in `used`.
    pub fn kickers<'a>(&'a self, used: &'a [Rank], n: usize) -> impl Iterator<Item = Card> + 'a {
        self.sorted_cards.iter().copied().filter(move |c| !used.contains(&c.rank())).take(n)
    }

    /// Assemble a result; `None` unless exactly five cards were supplied.
    pub fn build<I>(&self, category: Category, tiebreak: Vec<Rank>, cards: I) -> Option<RankedHand>
    where
        I: IntoIterator<Item = Card>,
    {
        let best5: [Card; 5] = cards.into_iter().collect::<Vec<_>>().try_into().ok()?;
        Some(RankedHand::new(category, tiebreak, best5))
    }
}
