use poker_eval::cards::{Card, Rank, Suit};
use poker_eval::evaluator::{evaluate_best_hand, evaluate_five, Category, EvalError};

#[test]
fn category_straight_flush() {
    let sf = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Queen, Suit::Spades),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Ten, Suit::Spades),
    ];
    let e = evaluate_five(&sf);
    assert_eq!(e.category(), Category::StraightFlush);
    assert_eq!(e.tiebreak(), &[Rank::Ace]);
}

#[test]
fn category_straight_flush_six_high() {
    let sf = [
        Card::new(Rank::Two, Suit::Hearts),
        Card::new(Rank::Three, Suit::Hearts),
        Card::new(Rank::Four, Suit::Hearts),
        Card::new(Rank::Five, Suit::Hearts),
        Card::new(Rank::Six, Suit::Hearts),
    ];
    let e = evaluate_five(&sf);
    assert_eq!(e.category(), Category::StraightFlush);
    assert_eq!(e.tiebreak(), &[Rank::Six]);
}

#[test]
fn category_straight_flush_wheel() {
    let sf = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::Two, Suit::Hearts),
        Card::new(Rank::Three, Suit::Hearts),
        Card::new(Rank::Four, Suit::Hearts),
        Card::new(Rank::Five, Suit::Hearts),
    ];
    let e = evaluate_five(&sf);
    assert_eq!(e.category(), Category::StraightFlush);
    assert_eq!(e.tiebreak(), &[Rank::Five]);
}

#[test]
fn category_four_of_a_kind() {
    let xs = [
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::King, Suit::Diamonds),
        Card::new(Rank::King, Suit::Clubs),
        Card::new(Rank::King, Suit::Hearts),
        Card::new(Rank::Two, Suit::Diamonds),
    ];
    let e = evaluate_five(&xs);
    assert_eq!(e.category(), Category::FourOfAKind);
    assert_eq!(e.tiebreak(), &[Rank::King, Rank::Two]);
}

#[test]
fn category_full_house() {
    let xs = [
        Card::new(Rank::Three, Suit::Clubs),
        Card::new(Rank::Three, Suit::Diamonds),
        Card::new(Rank::Three, Suit::Hearts),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Jack, Suit::Clubs),
    ];
    let e = evaluate_five(&xs);
    assert_eq!(e.category(), Category::FullHouse);
    assert_eq!(e.tiebreak(), &[Rank::Three, Rank::Jack]);
}

#[test]
fn category_flush() {
    let xs = [
        Card::new(Rank::King, Suit::Hearts),
        Card::new(Rank::Ten, Suit::Hearts),
        Card::new(Rank::Eight, Suit::Hearts),
        Card::new(Rank::Six, Suit::Hearts),
        Card::new(Rank::Three, Suit::Hearts),
    ];
    let e = evaluate_five(&xs);
    assert_eq!(e.category(), Category::Flush);
    assert_eq!(e.tiebreak(), &[Rank::King, Rank::Ten, Rank::Eight, Rank::Six, Rank::Three]);
}

#[test]
fn category_straight() {
    let xs = [
        Card::new(Rank::Ace, Suit::Clubs),
        Card::new(Rank::Five, Suit::Clubs),
        Card::new(Rank::Four, Suit::Diamonds),
        Card::new(Rank::Three, Suit::Hearts),
        Card::new(Rank::Two, Suit::Spades),
    ];
    let e = evaluate_five(&xs);
    assert_eq!(e.category(), Category::Straight);
    assert_eq!(e.tiebreak(), &[Rank::Five]);
}

#[test]
fn category_three_of_a_kind() {
    let xs = [
        Card::new(Rank::Queen, Suit::Clubs),
        Card::new(Rank::Queen, Suit::Diamonds),
        Card::new(Rank::Queen, Suit::Hearts),
        Card::new(Rank::Ten, Suit::Spades),
        Card::new(Rank::Two, Suit::Clubs),
    ];
    let e = evaluate_five(&xs);
    assert_eq!(e.category(), Category::ThreeOfAKind);
    assert_eq!(e.tiebreak(), &[Rank::Queen, Rank::Ten, Rank::Two]);
}

#[test]
fn category_two_pair() {
    let xs = [
        Card::new(Rank::Jack, Suit::Clubs),
        Card::new(Rank::Jack, Suit::Diamonds),
        Card::new(Rank::Nine, Suit::Clubs),
        Card::new(Rank::Nine, Suit::Hearts),
        Card::new(Rank::Two, Suit::Spades),
    ];
    let e = evaluate_five(&xs);
    assert_eq!(e.category(), Category::TwoPair);
    assert_eq!(e.tiebreak(), &[Rank::Jack, Rank::Nine, Rank::Two]);
}

#[test]
fn category_one_pair() {
    let xs = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::Ace, Suit::Diamonds),
        Card::new(Rank::Ten, Suit::Spades),
        Card::new(Rank::Nine, Suit::Clubs),
        Card::new(Rank::Two, Suit::Diamonds),
    ];
    let e = evaluate_five(&xs);
    assert_eq!(e.category(), Category::OnePair);
    assert_eq!(e.tiebreak(), &[Rank::Ace, Rank::Ten, Rank::Nine, Rank::Two]);
}

#[test]
fn category_high_card() {
    let xs = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::King, Suit::Diamonds),
        Card::new(Rank::Seven, Suit::Spades),
        Card::new(Rank::Five, Suit::Clubs),
        Card::new(Rank::Two, Suit::Diamonds),
    ];
    let e = evaluate_five(&xs);
    assert_eq!(e.category(), Category::HighCard);
    assert_eq!(e.tiebreak(), &[Rank::Ace, Rank::King, Rank::Seven, Rank::Five, Rank::Two]);
}

#[test_log::test]
fn seven_cards_pick_the_strongest_five() {
    // quads plus a spare pair: the kicker comes from the higher leftover
    let xs = [
        Card::new(Rank::Seven, Suit::Clubs),
        Card::new(Rank::Seven, Suit::Diamonds),
        Card::new(Rank::Seven, Suit::Hearts),
        Card::new(Rank::Seven, Suit::Spades),
        Card::new(Rank::Three, Suit::Clubs),
        Card::new(Rank::Three, Suit::Diamonds),
        Card::new(Rank::Jack, Suit::Hearts),
    ];
    let e = evaluate_best_hand(&xs).unwrap();
    assert_eq!(e.category(), Category::FourOfAKind);
    assert_eq!(e.tiebreak(), &[Rank::Seven, Rank::Jack]);
    assert_eq!(e.best5().iter().filter(|c| c.rank() == Rank::Seven).count(), 4);
}

#[test_log::test]
fn two_trips_make_a_full_house() {
    let xs = [
        Card::new(Rank::Nine, Suit::Clubs),
        Card::new(Rank::Nine, Suit::Diamonds),
        Card::new(Rank::Nine, Suit::Hearts),
        Card::new(Rank::Four, Suit::Spades),
        Card::new(Rank::Four, Suit::Clubs),
        Card::new(Rank::Four, Suit::Diamonds),
        Card::new(Rank::Ace, Suit::Hearts),
    ];
    let e = evaluate_best_hand(&xs).unwrap();
    assert_eq!(e.category(), Category::FullHouse);
    assert_eq!(e.tiebreak(), &[Rank::Nine, Rank::Four]);
}

#[test]
fn three_pairs_keep_best_two_and_best_kicker() {
    let xs = [
        Card::new(Rank::King, Suit::Clubs),
        Card::new(Rank::King, Suit::Diamonds),
        Card::new(Rank::Eight, Suit::Hearts),
        Card::new(Rank::Eight, Suit::Spades),
        Card::new(Rank::Five, Suit::Clubs),
        Card::new(Rank::Five, Suit::Diamonds),
        Card::new(Rank::Two, Suit::Hearts),
    ];
    let e = evaluate_best_hand(&xs).unwrap();
    assert_eq!(e.category(), Category::TwoPair);
    assert_eq!(e.tiebreak(), &[Rank::King, Rank::Eight, Rank::Five]);
}

#[test]
fn six_card_straight_uses_the_top_run() {
    let xs = [
        Card::new(Rank::Four, Suit::Clubs),
        Card::new(Rank::Five, Suit::Diamonds),
        Card::new(Rank::Six, Suit::Hearts),
        Card::new(Rank::Seven, Suit::Spades),
        Card::new(Rank::Eight, Suit::Clubs),
        Card::new(Rank::Nine, Suit::Diamonds),
    ];
    let e = evaluate_best_hand(&xs).unwrap();
    assert_eq!(e.category(), Category::Straight);
    assert_eq!(e.tiebreak(), &[Rank::Nine]);
}

#[test]
fn four_cards_are_not_enough() {
    let xs = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::King, Suit::Hearts),
        Card::new(Rank::Queen, Suit::Hearts),
        Card::new(Rank::Jack, Suit::Hearts),
    ];
    assert_eq!(evaluate_best_hand(&xs), Err(EvalError::InsufficientCards(4)));
}
