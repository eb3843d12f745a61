//! Deck integration tests.

use std::collections::HashSet;

use card_deck::{
    Card, DECK_SIZE, DealError, DealOptions, DealPolicy, Deck, DeckError, Pile, PileError, Rank,
    Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn reassemble(hands: &[Pile], deck: &Deck) -> Pile {
    let mut all: Pile = hands.iter().flatten().copied().collect();
    all.extend(deck.iter().copied());
    all
}

#[test]
fn new_deck_has_52_distinct_cards_in_sorted_order() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);
    assert!(deck.is_full());

    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    assert!(deck.cards().windows(2).all(|w| w[0] < w[1]));
    assert_eq!(deck.cards()[0], card(Rank::Two, Suit::Hearts));
    assert_eq!(deck.cards()[1], card(Rank::Two, Suit::Diamonds));
    assert_eq!(deck.peek(), Ok(&card(Rank::Ace, Suit::Spades)));
    assert_eq!(Deck::default(), deck);
}

#[test]
fn shuffle_preserves_cards_and_sort_restores_order() {
    let sorted = Deck::new();
    let mut deck = Deck::new();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    deck.shuffle(&mut rng);
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck, sorted);
    assert_ne!(deck.cards(), sorted.cards());

    deck.sort();
    assert_eq!(deck.cards(), sorted.cards());
    deck.sort();
    assert_eq!(deck.cards(), sorted.cards());
}

#[test]
fn seeded_shuffle_is_deterministic() {
    let mut a = Deck::new();
    let mut b = Deck::new();
    a.shuffle_with_seed(99);
    b.shuffle_with_seed(99);
    assert_eq!(a.cards(), b.cards());

    let mut c = Deck::new();
    c.shuffle_with_seed(100);
    assert_ne!(a.cards(), c.cards());
}

#[test]
fn shuffle_deal_reconstructs_the_deck() {
    let mut deck = Deck::new();
    deck.shuffle_with_seed(2024);

    let hands = deck.deal(3, 5).unwrap();
    assert_eq!(hands.len(), 3);
    assert!(hands.iter().all(|hand| hand.len() == 5));
    assert_eq!(deck.len(), 37);

    let all = reassemble(&hands, &deck);
    assert_eq!(all.len(), DECK_SIZE);
    assert_eq!(all, *Deck::new().as_pile());
}

#[test]
fn deal_on_sorted_deck_is_round_robin_from_the_top() {
    let mut deck = Deck::new();
    let hands = deck.deal(2, 2).unwrap();

    // Draw order from the top: AS, AC, AD, AH.
    assert_eq!(
        hands[0].cards(),
        &[card(Rank::Ace, Suit::Spades), card(Rank::Ace, Suit::Diamonds)]
    );
    assert_eq!(
        hands[1].cards(),
        &[card(Rank::Ace, Suit::Clubs), card(Rank::Ace, Suit::Hearts)]
    );
    assert_eq!(deck.peek(), Ok(&card(Rank::King, Suit::Spades)));
    assert_eq!(deck.cards(), &Deck::new().cards()[..48]);
}

#[test]
fn block_policy_keeps_runs_together() {
    let mut deck = Deck::new();
    let hands = deck
        .deal_with(DealOptions::new(2, 2).with_policy(DealPolicy::Block))
        .unwrap();

    assert_eq!(
        hands[0].cards(),
        &[card(Rank::Ace, Suit::Spades), card(Rank::Ace, Suit::Clubs)]
    );
    assert_eq!(
        hands[1].cards(),
        &[card(Rank::Ace, Suit::Diamonds), card(Rank::Ace, Suit::Hearts)]
    );
}

#[test]
fn deal_invariant_holds_for_many_shapes() {
    for (seed, (h, k)) in [(0, 1), (1, 0), (1, 52), (4, 13), (13, 4), (5, 7), (2, 26), (6, 8)]
        .into_iter()
        .enumerate()
    {
        for policy in [DealPolicy::RoundRobin, DealPolicy::Block] {
            let mut deck = Deck::new();
            deck.shuffle_with_seed(seed as u64);
            let before = deck.clone();

            let hands = deck
                .deal_with(DealOptions::new(h, k).with_policy(policy))
                .unwrap();
            assert_eq!(hands.len(), h);
            assert!(hands.iter().all(|hand| hand.len() == k));
            assert_eq!(deck.len(), DECK_SIZE - h * k);
            assert_eq!(reassemble(&hands, &deck), *before.as_pile());
            assert_eq!(deck.cards(), &before.cards()[..DECK_SIZE - h * k]);
        }
    }
}

#[test]
fn oversized_deal_fails_atomically() {
    let mut deck = Deck::new();
    deck.shuffle_with_seed(5);
    let before = deck.clone();

    assert_eq!(
        deck.deal(6, 9),
        Err(DealError::InsufficientCards {
            requested: 54,
            remaining: 52
        })
    );
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.cards(), before.cards());

    assert_eq!(
        deck.deal(usize::MAX, 2),
        Err(DealError::InsufficientCards {
            requested: usize::MAX,
            remaining: 52
        })
    );
    assert_eq!(deck.cards(), before.cards());
}

#[test]
fn empty_deck_refuses_nonzero_deals() {
    let mut deck = Deck::new();
    let hands = deck.deal(4, 13).unwrap();
    assert_eq!(hands.len(), 4);
    assert!(deck.is_empty());

    assert_eq!(
        deck.deal(1, 1),
        Err(DealError::InsufficientCards {
            requested: 1,
            remaining: 0
        })
    );
    assert_eq!(deck.deal(3, 0).unwrap().len(), 3);
    assert!(deck.deal(0, 5).unwrap().is_empty());
    assert_eq!(deck.draw(), Err(PileError::Empty));
    assert_eq!(deck.peek(), Err(PileError::Empty));
}

#[test]
fn draw_and_return_keep_cards_unique() {
    let mut deck = Deck::new();
    let top = deck.draw().unwrap();
    assert_eq!(top, card(Rank::Ace, Suit::Spades));
    assert!(!deck.contains(&top));
    assert!(!deck.is_full());

    let duplicate = card(Rank::Two, Suit::Hearts);
    assert_eq!(
        deck.return_card(duplicate),
        Err(DeckError::DuplicateCard(duplicate))
    );

    deck.return_card(top).unwrap();
    assert!(deck.is_full());
    assert_eq!(deck, Deck::new());
}

#[test]
fn return_pile_is_all_or_nothing() {
    let mut deck = Deck::new();
    let mut hands = deck.deal(2, 3).unwrap();
    let second = hands.pop().unwrap();
    let first = hands.pop().unwrap();

    let mut doubled = first.clone();
    doubled.insert(*first.peek().unwrap());
    assert!(matches!(
        deck.return_pile(doubled),
        Err(DeckError::DuplicateCard(_))
    ));
    assert_eq!(deck.len(), 46);

    deck.return_pile(first).unwrap();
    deck.return_pile(second).unwrap();
    assert!(deck.is_full());
    assert_eq!(deck, Deck::new());
}

#[test]
fn display_matches_pile_rendering() {
    let mut deck = Deck::new();
    let hands = deck.deal(1, 50).unwrap();
    assert_eq!(hands[0].len(), 50);
    assert_eq!(deck.to_string(), "Two of Hearts, Two of Diamonds");
    assert_eq!(format!("{deck:#}"), "2♥, 2♦");
    assert_eq!(deck.as_pile().to_string(), deck.to_string());
}

#[test]
fn deck_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Deck>();
    assert_send_sync::<Pile>();
}
