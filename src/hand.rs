use crate::cards::{parse_cards, Card, CardParseError};
use crate::evaluator::{evaluate_best_hand, EvalError, RankedHand};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("position {index} out of range for hand of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("card parse error: {0}")]
    CardParse(#[from] CardParseError),
}

/// Cards held by one player or by the table, in the order they were added.
///
/// ```
/// use poker_eval::cards::{Card, Rank, Suit};
/// use poker_eval::hand::Hand;
///
/// let mut hand = Hand::new();
/// hand.add_card(Card::new(Rank::King, Suit::Hearts));
/// hand.add_card(Card::new(Rank::Two, Suit::Clubs));
/// hand.sort();
/// assert_eq!(hand.cards()[0].rank(), Rank::Two);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Remove the cards at `positions`, all resolved against the hand as it
    /// is before any removal. Repeated positions count once.
    ///
    /// On error the hand is left untouched.
    ///
    /// ```
    /// use poker_eval::hand::Hand;
    ///
    /// let mut hand: Hand = "2h 5s 9c Jd Ah".parse().unwrap();
    /// hand.drop_cards([3, 0, 1]).unwrap();
    /// assert_eq!(hand.to_string(), "9\u{2663} A\u{2665}");
    /// ```
    pub fn drop_cards<I>(&mut self, positions: I) -> Result<(), HandError>
    where
        I: IntoIterator<Item = usize>,
    {
        let len = self.cards.len();
        let doomed: BTreeSet<usize> = positions.into_iter().collect();
        if let Some(&index) = doomed.iter().next_back().filter(|&&i| i >= len) {
            debug!(index, len, "drop_cards position out of range");
            return Err(HandError::IndexOutOfRange { index, len });
        }
        let mut position = 0;
        self.cards.retain(|_| {
            let keep = !doomed.contains(&position);
            position += 1;
            keep
        });
        Ok(())
    }

    /// Sort ascending by rank. Cards of equal rank keep their relative order.
    pub fn sort(&mut self) {
        self.cards.sort_by_key(|c| c.rank());
    }

    /// Best five-card hand out of this hand's cards plus the `table` cards.
    pub fn best_poker_hand(&self, table: &[Card]) -> Result<RankedHand, EvalError> {
        let pool: Vec<Card> = self.cards.iter().chain(table).copied().collect();
        evaluate_best_hand(&pool)
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(parse_cards(s)?))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
