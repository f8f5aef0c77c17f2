use crate::cards::{Card, Rank};

/// Groups ranks by their frequency in a pool, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    counts: [u8; 15],
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for card in cards {
            let slot = &mut counts[card.rank().value() as usize];
            *slot = slot.saturating_add(1);
        }
        Self::from_counts(&counts)
    }

    /// Create RankGroups from a rank count array.
    /// The array should be indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .map(|&rank| (rank, rank_counts[rank.value() as usize]))
            .filter(|&(_, count)| count > 0)
            .collect();

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { counts: *rank_counts, groups }
    }

    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank.value() as usize]
    }

    /// Ranks held at least `n` times, highest rank first.
    pub fn at_least(&self, n: u8) -> Vec<Rank> {
        Rank::ALL.iter().rev().copied().filter(|&rank| self.count(rank) >= n).collect()
    }

    /// Bit `v` is set when rank value `v` is present; an Ace also sets bit 1.
    pub fn rank_mask(&self) -> u16 {
        super::straights::rank_mask(self.groups.iter().map(|(rank, _)| *rank))
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
