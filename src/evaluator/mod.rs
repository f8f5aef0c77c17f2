pub(crate) mod combinations;
pub(crate) mod pool_analysis;
pub(crate) mod probes;
pub(crate) mod rank_groups;
pub(crate) mod straights;
pub(crate) mod suit_groups;

use crate::cards::{Card, Rank};
use crate::hand::Hand;
use core::cmp::Ordering;
use std::fmt;
use tracing::trace;

/// Compact, comparable hand strength. Higher is better.
/// Encodes category and ranked tiebreakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u64);

impl HandValue {
    /// Return the packed comparable value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack a category and up to five rank tiebreakers into a comparable value.
    /// Uses 6 bits per rank; missing trailing ranks pack as zero.
    pub fn from_parts(category: Category, tiebreak: &[Rank]) -> Self {
        // Layout (most significant -> least):
        // [ category (8 bits) | r0 (6) | r1 (6) | r2 (6) | r3 (6) | r4 (6) | 10 zero bits ]
        const CAT_SHIFT: u32 = 48;
        const RANK_STRIDE: u32 = 6;
        let mut v: u64 = u64::from(category.value()) << CAT_SHIFT;
        for (i, r) in tiebreak.iter().take(5).enumerate() {
            let offset = CAT_SHIFT - RANK_STRIDE * (i as u32 + 1);
            v |= u64::from(r.value()) << offset;
        }
        HandValue(v)
    }
}

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    /// 1 for High Card up to 9 for Straight Flush.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// How many tiebreak ranks a hand of this category carries.
    pub const fn tiebreak_len(self) -> usize {
        match self {
            Category::StraightFlush | Category::Straight => 1,
            Category::FourOfAKind | Category::FullHouse => 2,
            Category::ThreeOfAKind | Category::TwoPair => 3,
            Category::OnePair => 4,
            Category::Flush | Category::HighCard => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The best five-card hand found in a pool.
///
/// Ordering and equality only consider the category and the tiebreak ranks;
/// suits and the particular cards in `best5` never decide a showdown.
///
/// With the `serde` feature a deserialized hand is re-rated from its `best5`
/// and rejected unless the stored category and tiebreak match.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RankedHandRepr"))]
pub struct RankedHand {
    category: Category,
    tiebreak: Vec<Rank>,
    best5: [Card; 5],
}

/// Unchecked wire form of [`RankedHand`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RankedHandRepr {
    category: Category,
    tiebreak: Vec<Rank>,
    best5: [Card; 5],
}

#[cfg(feature = "serde")]
impl TryFrom<RankedHandRepr> for RankedHand {
    type Error = RankedHandError;

    fn try_from(raw: RankedHandRepr) -> Result<Self, Self::Error> {
        let rated = evaluate_five(&raw.best5);
        if rated.category != raw.category {
            return Err(RankedHandError::CategoryMismatch {
                claimed: raw.category,
                actual: rated.category,
            });
        }
        if rated.tiebreak != raw.tiebreak {
            return Err(RankedHandError::TiebreakMismatch {
                claimed: raw.tiebreak,
                actual: rated.tiebreak,
            });
        }
        Ok(Self { category: raw.category, tiebreak: raw.tiebreak, best5: raw.best5 })
    }
}

/// A stored hand whose category or tiebreak disagrees with its five cards.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankedHandError {
    #[error("cards rate as {actual}, not {claimed}")]
    CategoryMismatch { claimed: Category, actual: Category },
    #[error("tiebreak {claimed:?} does not match the cards ({actual:?})")]
    TiebreakMismatch { claimed: Vec<Rank>, actual: Vec<Rank> },
}

impl RankedHand {
    pub(crate) fn new(category: Category, tiebreak: Vec<Rank>, best5: [Card; 5]) -> Self {
        debug_assert_eq!(tiebreak.len(), category.tiebreak_len());
        Self { category, tiebreak, best5 }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Ranks that order two hands of the same category, most significant first.
    pub fn tiebreak(&self) -> &[Rank] {
        &self.tiebreak
    }

    /// The five cards making this hand.
    pub fn best5(&self) -> &[Card; 5] {
        &self.best5
    }

    /// Packed comparable value, handy as a sort or cache key.
    pub fn value(&self) -> HandValue {
        HandValue::from_parts(self.category, &self.tiebreak)
    }
}

impl Ord for RankedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category.cmp(&other.category).then_with(|| self.tiebreak.cmp(&other.tiebreak))
    }
}

impl PartialOrd for RankedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankedHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedHand {}

impl fmt::Display for RankedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.category)?;
        for card in &self.best5 {
            write!(f, " {card}")?;
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("need at least 5 cards to evaluate, got {0}")]
    InsufficientCards(usize),
}

/// Run every probe over the pool and keep the strongest result.
fn rank_pool(cards: &[Card]) -> Option<RankedHand> {
    let analysis = pool_analysis::PoolAnalysis::new(cards);
    probes::PROBES
        .iter()
        .filter_map(|probe| {
            let hand = probe.probe(&analysis)?;
            debug_assert_eq!(hand.category(), probe.category());
            Some(hand)
        })
        .max()
}

/// Evaluate the best five-card hand obtainable from `cards`.
///
/// Any pool of five or more cards is accepted, e.g. two hole cards plus
/// up to five community cards.
///
/// ```
/// use poker_eval::cards::{parse_cards, Rank};
/// use poker_eval::evaluator::{evaluate_best_hand, Category};
///
/// let pool = parse_cards("Ah 2h 3h 4h 5h Kd Ks").unwrap();
/// let best = evaluate_best_hand(&pool).unwrap();
/// assert_eq!(best.category(), Category::StraightFlush);
/// assert_eq!(best.tiebreak(), &[Rank::Five]);
/// ```
pub fn evaluate_best_hand(cards: &[Card]) -> Result<RankedHand, EvalError> {
    if cards.len() < 5 {
        return Err(EvalError::InsufficientCards(cards.len()));
    }
    let best = rank_pool(cards).ok_or(EvalError::InsufficientCards(cards.len()))?;
    trace!(
        pool = cards.len(),
        category = %best.category(),
        tiebreak = ?best.tiebreak(),
        "evaluated pool"
    );
    Ok(best)
}

/// Evaluate exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> RankedHand {
    match rank_pool(cards) {
        Some(best) => best,
        // Unreachable: the high card probe matches any five cards
        None => unreachable!("HighCard probe should always match"),
    }
}

/// Evaluate every five-card subset of `cards` separately and keep the best.
/// Slower than [`evaluate_best_hand`] but independent of the pool-wide probes.
pub fn evaluate_exhaustive(cards: &[Card]) -> Result<RankedHand, EvalError> {
    use combinations::{binomial, Combinations};

    trace!(pool = cards.len(), subsets = binomial(cards.len(), 5), "exhaustive evaluation");
    Combinations::new(cards.len(), 5)
        .map(|idx| {
            let hand = [cards[idx[0]], cards[idx[1]], cards[idx[2]], cards[idx[3]], cards[idx[4]]];
            evaluate_five(&hand)
        })
        .max()
        .ok_or(EvalError::InsufficientCards(cards.len()))
}

/// Compare two hands on a shared table. `Equal` means a split pot.
///
/// ```
/// use poker_eval::cards::parse_cards;
/// use poker_eval::evaluator::compare_hands;
/// use poker_eval::hand::Hand;
/// use std::cmp::Ordering;
///
/// let table = parse_cards("10d 9d Kc Qs").unwrap();
/// let a: Hand = "Kd 4c".parse().unwrap();
/// let b: Hand = "Kh 4h".parse().unwrap();
/// assert_eq!(compare_hands(&a, &b, &table).unwrap(), Ordering::Equal);
/// ```
pub fn compare_hands(a: &Hand, b: &Hand, table: &[Card]) -> Result<Ordering, EvalError> {
    let va = a.best_poker_hand(table)?;
    let vb = b.best_poker_hand(table)?;
    Ok(va.cmp(&vb))
}
