//! poker-eval: poker hand evaluation core
//!
//! Goals:
//! - Cards, a 52-card deck and player/table hands as plain owned values
//! - Best five-card hand out of any pool of five or more cards
//! - Total ordering on results so callers can pick winners and split pots
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: deal and compare two hands
//! ```
//! use poker_eval::deck::Deck;
//! use poker_eval::hand::Hand;
//!
//! let mut deck = Deck::new();
//! deck.shuffle_seeded(2024);
//!
//! let mut alice = Hand::new();
//! let mut bob = Hand::new();
//! let mut table = Hand::new();
//! for _ in 0..2 {
//!     alice.add_card(deck.draw().unwrap());
//!     bob.add_card(deck.draw().unwrap());
//! }
//! for _ in 0..5 {
//!     table.add_card(deck.draw().unwrap());
//! }
//!
//! let a = alice.best_poker_hand(table.cards()).unwrap();
//! let b = bob.best_poker_hand(table.cards()).unwrap();
//! println!("alice: {a}\nbob:   {b}\nresult: {:?}", a.cmp(&b));
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod showdown;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
