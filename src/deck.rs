use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use tracing::debug;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("cannot draw from an empty deck")]
    EmptyDeck,
}

/// A standard 52-card deck. Cards are drawn from the front.
///
/// A depleted deck is not refilled; start the next round with a fresh
/// [`Deck::new`] and shuffle it.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Full deck in canonical order: hearts, spades, clubs, diamonds,
    /// each running Two through Ace.
    ///
    /// ```
    /// use poker_eval::cards::{Rank, Suit};
    /// use poker_eval::deck::Deck;
    ///
    /// let mut deck = Deck::new();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.draw().unwrap().key(), (Rank::Two, Suit::Hearts));
    /// ```
    pub fn new() -> Self {
        let cards: VecDeque<Card> = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        debug!(cards = cards.len(), "built deck");
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from front (next to draw) to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Shuffle in place using the provided RNG.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
        debug!(cards = self.cards.len(), "shuffled deck");
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle(&mut rng);
    }

    /// Draw one card from the front of the deck.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or_else(|| {
            debug!("draw from empty deck");
            DeckError::EmptyDeck
        })
    }

    /// Draw `n` cards. Nothing is removed if fewer than `n` remain.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            debug!(requested = n, remaining = self.cards.len(), "not enough cards to draw");
            return Err(DeckError::EmptyDeck);
        }
        Ok(self.cards.drain(..n).collect())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
