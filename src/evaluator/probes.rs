use super::pool_analysis::PoolAnalysis;
use super::straights::{rank_mask, straight_ranks, top_straight};
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, RankedHand};

/// One category check over a whole pool.
///
/// A probe only reads the shared analysis. It returns the best hand of its own
/// category that the pool can make, or `None` when the category is absent.
pub trait CategoryProbe {
    fn category(&self) -> Category;
    fn probe(&self, analysis: &PoolAnalysis) -> Option<RankedHand>;
}

/// First card of each rank, in the order given.
fn one_of_each(pool: &[Card], ranks: [Rank; 5]) -> Option<Vec<Card>> {
    ranks.iter().map(|&r| pool.iter().copied().find(|c| c.rank() == r)).collect()
}

/// Straight Flush: five consecutive ranks within one suit
pub struct StraightFlushProbe;

impl CategoryProbe for StraightFlushProbe {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn probe(&self, analysis: &PoolAnalysis) -> Option<RankedHand> {
        let (top, suited) = analysis
            .suit_groups
            .flush_suits()
            .filter_map(|(_, cards)| {
                top_straight(rank_mask(cards.iter().map(|c| c.rank()))).map(|top| (top, cards))
            })
            .max_by_key(|&(top, _)| top)?;
        let cards = one_of_each(suited, straight_ranks(top))?;
        analysis.build(Category::StraightFlush, vec![top], cards)
    }
}

/// Four of a Kind: four cards of the same rank
pub struct FourOfAKindProbe;

impl CategoryProbe for FourOfAKindProbe {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn probe(&self, analysis: &PoolAnalysis) -> Option<RankedHand> {
        let quad = *analysis.rank_groups.at_least(4).first()?;
        let used = [quad];
        let kicker = analysis.kickers(&used, 1).next()?;
        let cards = analysis.cards_of(quad, 4).chain([kicker]);
        analysis.build(Category::FourOfAKind, vec![quad, kicker.rank()], cards)
    }
}

/// Full House: the highest triplet plus the highest other rank held twice
pub struct FullHouseProbe;

impl CategoryProbe for FullHouseProbe {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn probe(&self, analysis: &PoolAnalysis) -> Option<RankedHand> {
        let trips = *analysis.rank_groups.at_least(3).first()?;
        let pair = analysis.rank_groups.at_least(2).into_iter().find(|&r| r != trips)?;
        let cards = analysis.cards_of(trips, 3).chain(analysis.cards_of(pair, 2));
        analysis.build(Category::FullHouse, vec![trips, pair], cards)
    }
}

/// Flush: five cards of one suit; the five highest of that suit play
pub struct FlushProbe;

impl CategoryProbe for FlushProbe {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn probe(&self, analysis: &PoolAnalysis) -> Option<RankedHand> {
        let top5 = analysis
            .suit_groups
            .flush_suits()
            .map(|(_, cards)| &cards[..5])
            .max_by(|a, b| a.iter().map(|c| c.rank()).cmp(b.iter().map(|c| c.rank())))?;
        let tiebreak = top5.iter().map(|c| c.rank()).collect();
        analysis.build(Category::Flush, tiebreak, top5.iter().copied())
    }
}

/// Straight: five consecutive ranks in any suits
pub struct StraightProbe;

impl CategoryProbe for StraightProbe {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn probe(&self, analysis: &PoolAnalysis) -> Option<RankedHand> {
        let top = top_straight(analysis.rank_groups.rank_mask())?;
        let cards = one_of_each(&analysis.sorted_cards, straight_ranks(top))?;
        analysis.build(Category::Straight, vec![top], cards)
    }
}

/// Three of a Kind: a triplet with no second rank to complete a full house
pub struct ThreeOfAKindProbe;

impl CategoryProbe for ThreeOfAKindProbe {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn probe(&self, analysis: &PoolAnalysis) -> Option<RankedHand> {
        let trips = *analysis.rank_groups.at_least(3).first()?;
        if analysis.rank_groups.at_least(2).iter().any(|&r| r != trips) {
            return None;
        }
        let used = [trips];
        let kickers: Vec<Card> = analysis.kickers(&used, 2).collect();
        let tiebreak = [trips].into_iter().chain(kickers.iter().map(|c| c.rank())).collect();
        let cards = analysis.cards_of(trips, 3).chain(kickers);
        analysis.build(Category::ThreeOfAKind, tiebreak, cards)
    }
}

/// Two Pair: the two highest ranks held at least twice
pub struct TwoPairProbe;

impl CategoryProbe for TwoPairProbe {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn probe(&self, analysis: &PoolAnalysis) -> Option<RankedHand> {
        let pairs = analysis.rank_groups.at_least(2);
        let &[high, low, ..] = pairs.as_slice() else {
            return None;
        };
        let used = [high, low];
        let kicker = analysis.kickers(&used, 1).next()?;
        let cards = analysis
            .cards_of(high, 2)
            .chain(analysis.cards_of(low, 2))
            .chain([kicker]);
        analysis.build(Category::TwoPair, vec![high, low, kicker.rank()], cards)
    }
}

/// One Pair: exactly one rank held twice
pub struct OnePairProbe;

impl CategoryProbe for OnePairProbe {
    fn category(&self) -> Category {
        Category::OnePair
    }

    fn probe(&self, analysis: &PoolAnalysis) -> Option<RankedHand> {
        let pairs = analysis.rank_groups.at_least(2);
        let &[pair] = pairs.as_slice() else {
            return None;
        };
        let used = [pair];
        let kickers: Vec<Card> = analysis.kickers(&used, 3).collect();
        let tiebreak = [pair].into_iter().chain(kickers.iter().map(|c| c.rank())).collect();
        let cards = analysis.cards_of(pair, 2).chain(kickers);
        analysis.build(Category::OnePair, tiebreak, cards)
    }
}

/// High Card: the five highest cards; matches any pool of five or more
pub struct HighCardProbe;

impl CategoryProbe for HighCardProbe {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn probe(&self, analysis: &PoolAnalysis) -> Option<RankedHand> {
        let top5 = analysis.sorted_cards.get(..5)?;
        let tiebreak = top5.iter().map(|c| c.rank()).collect();
        analysis.build(Category::HighCard, tiebreak, top5.iter().copied())
    }
}

/// Every probe, strongest category first.
pub const PROBES: [&dyn CategoryProbe; 9] = [
    &StraightFlushProbe,
    &FourOfAKindProbe,
    &FullHouseProbe,
    &FlushProbe,
    &StraightProbe,
    &ThreeOfAKindProbe,
    &TwoPairProbe,
    &OnePairProbe,
    &HighCardProbe,
];
