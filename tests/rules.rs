//! Card model, play validator and strategy tests.

use climbrs::{
    Card, DECK_SIZE, Deck, DeckError, Hand, HandError, MoveSource, PlayKind, Player, Rank,
    SelectionError, Suit, is_bomb, is_valid_play, select_play, shared_rank,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn bomb(rank: Rank) -> Vec<Card> {
    Suit::ALL.iter().map(|&suit| card(suit, rank)).collect()
}

#[test]
fn rank_order_climbs_from_three_to_two() {
    assert!(Rank::Three < Rank::Four);
    assert!(Rank::King < Rank::Ace);
    assert!(Rank::Ace < Rank::Two);
    assert_eq!(Rank::ALL.iter().max(), Some(&Rank::Two));
    assert!(Rank::ALL.windows(2).all(|pair| pair[0] < pair[1]));

    assert_eq!(Rank::Ten.successor(), Some(Rank::Jack));
    assert_eq!(Rank::Ace.successor(), Some(Rank::Two));
    assert_eq!(Rank::Two.successor(), None);
}

#[test]
fn cards_sort_by_rank_then_suit() {
    let mut cards = vec![
        card(Suit::Spades, Rank::Three),
        card(Suit::Clubs, Rank::Two),
        card(Suit::Clubs, Rank::Three),
        card(Suit::Hearts, Rank::Ace),
    ];
    cards.sort();

    assert_eq!(
        cards,
        vec![
            card(Suit::Clubs, Rank::Three),
            card(Suit::Spades, Rank::Three),
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Clubs, Rank::Two),
        ]
    );
}

#[test]
fn cards_display_with_symbols() {
    assert_eq!(card(Suit::Clubs, Rank::Three).to_string(), "♣3");
    assert_eq!(card(Suit::Hearts, Rank::Queen).to_string(), "♥Q");
    assert_eq!(card(Suit::Diamonds, Rank::Ten).to_string(), "♦10");
    assert_eq!(card(Suit::Spades, Rank::Two).to_string(), "♠2");
}

#[test]
fn deck_holds_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.remaining_count(), DECK_SIZE);

    let mut cards = deck.cards().to_vec();
    cards.sort();
    cards.dedup();
    assert_eq!(cards.len(), DECK_SIZE);
}

#[test]
fn deck_deals_from_the_front() {
    let mut deck = Deck::new();
    let expected: Vec<Card> = deck.cards()[..5].to_vec();

    let dealt = deck.deal(5).unwrap();
    assert_eq!(dealt, expected);
    assert_eq!(deck.remaining_count(), DECK_SIZE - 5);
    assert!(dealt.iter().all(|&card| !deck.contains(card)));
}

#[test]
fn deck_refuses_to_overdeal() {
    let mut deck = Deck::from_cards(vec![card(Suit::Hearts, Rank::Five)]);

    assert_eq!(
        deck.deal(2).unwrap_err(),
        DeckError::InsufficientCards {
            requested: 2,
            remaining: 1
        }
    );
    assert_eq!(deck.remaining_count(), 1);
    assert_eq!(deck.deal(1).unwrap().len(), 1);
    assert_eq!(deck.deal(0).unwrap(), Vec::new());
}

#[test]
fn deck_shuffle_is_seeded() {
    let mut first = Deck::new();
    let mut second = Deck::new();
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(9));
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(9));

    assert_eq!(first, second);
    assert_ne!(first, Deck::new());

    first.deal(10).unwrap();
    first.initialize();
    assert_eq!(first, Deck::new());
}

#[test]
fn hand_select_validates_indices() {
    let hand = Hand::from_cards(vec![
        card(Suit::Spades, Rank::Nine),
        card(Suit::Clubs, Rank::Three),
        card(Suit::Diamonds, Rank::Three),
    ]);

    assert_eq!(
        hand.select(&[1, 0]).unwrap(),
        vec![
            card(Suit::Diamonds, Rank::Three),
            card(Suit::Clubs, Rank::Three)
        ]
    );
    assert_eq!(
        hand.select(&[3]).unwrap_err(),
        SelectionError::CardIndexOutOfRange { index: 3, len: 3 }
    );
    assert_eq!(
        hand.select(&[2, 2]).unwrap_err(),
        SelectionError::DuplicateIndex(2)
    );
}

#[test]
fn hand_draw_then_sort() {
    let mut hand = Hand::from_cards(vec![card(Suit::Clubs, Rank::King)]);
    hand.draw(&[card(Suit::Hearts, Rank::Four)]);
    assert_eq!(hand.cards()[0], card(Suit::Clubs, Rank::King));

    hand.sort();
    assert_eq!(hand.cards()[0], card(Suit::Hearts, Rank::Four));
    assert_eq!(hand.len(), 2);
}

#[test]
fn player_discard_is_all_or_nothing() {
    let mut player = Player::new("Tester", MoveSource::HumanInput);
    player.take_hand(vec![
        card(Suit::Clubs, Rank::Three),
        card(Suit::Diamonds, Rank::Three),
    ]);

    let missing = card(Suit::Hearts, Rank::Ace);
    assert_eq!(
        player
            .discard(&[card(Suit::Clubs, Rank::Three), missing])
            .unwrap_err(),
        HandError::CardNotInHand(missing)
    );
    assert_eq!(player.hand().len(), 2);
    assert!(player.discard_pile().is_empty());

    player
        .discard(&[
            card(Suit::Diamonds, Rank::Three),
            card(Suit::Clubs, Rank::Three),
        ])
        .unwrap();
    assert!(player.hand().is_empty());
    assert_eq!(
        player.discard_pile(),
        &[
            card(Suit::Diamonds, Rank::Three),
            card(Suit::Clubs, Rank::Three)
        ]
    );
}

#[test]
fn anything_beats_an_empty_table() {
    assert!(is_valid_play(&[card(Suit::Clubs, Rank::Three)], &[]));
    assert!(is_valid_play(
        &[card(Suit::Clubs, Rank::Three), card(Suit::Hearts, Rank::King)],
        &[]
    ));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "a proposed play must hold cards")]
fn empty_proposal_is_a_precondition_violation() {
    let _ = is_valid_play(&[], &[card(Suit::Clubs, Rank::Three)]);
}

#[test]
fn singles_compare_by_rank() {
    let two = card(Suit::Clubs, Rank::Two);
    let ace = card(Suit::Spades, Rank::Ace);

    assert!(is_valid_play(&[two], &[ace]));
    assert!(!is_valid_play(&[ace], &[two]));
    assert!(!is_valid_play(
        &[card(Suit::Hearts, Rank::Ace)],
        &[card(Suit::Spades, Rank::Ace)]
    ));
}

#[test]
fn pairs_and_triples_compare_by_shared_rank() {
    let nines = [card(Suit::Clubs, Rank::Nine), card(Suit::Diamonds, Rank::Nine)];
    let eights = [card(Suit::Clubs, Rank::Eight), card(Suit::Spades, Rank::Eight)];
    assert!(is_valid_play(&nines, &eights));
    assert!(!is_valid_play(&eights, &nines));

    let jacks = [
        card(Suit::Clubs, Rank::Jack),
        card(Suit::Hearts, Rank::Jack),
        card(Suit::Spades, Rank::Jack),
    ];
    let fives = [
        card(Suit::Clubs, Rank::Five),
        card(Suit::Hearts, Rank::Five),
        card(Suit::Spades, Rank::Five),
    ];
    assert!(is_valid_play(&jacks, &fives));
    assert!(!is_valid_play(&fives, &jacks));
}

#[test]
fn mixed_pairs_are_never_runs() {
    let mixed = [card(Suit::Clubs, Rank::Nine), card(Suit::Diamonds, Rank::Ten)];
    let threes = [card(Suit::Clubs, Rank::Three), card(Suit::Diamonds, Rank::Three)];
    assert!(!is_valid_play(&mixed, &threes));

    let mixed_triple = [
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Diamonds, Rank::Ten),
        card(Suit::Hearts, Rank::Jack),
    ];
    let low_triple = [
        card(Suit::Clubs, Rank::Four),
        card(Suit::Diamonds, Rank::Four),
        card(Suit::Hearts, Rank::Four),
    ];
    assert!(!is_valid_play(&mixed_triple, &low_triple));
}

#[test]
fn card_count_must_match() {
    let nines = [card(Suit::Clubs, Rank::Nine), card(Suit::Diamonds, Rank::Nine)];
    assert!(!is_valid_play(&nines, &[card(Suit::Spades, Rank::Three)]));
    assert!(!is_valid_play(
        &[card(Suit::Spades, Rank::Two)],
        &[card(Suit::Clubs, Rank::Three), card(Suit::Hearts, Rank::Three)]
    ));
}

#[test]
fn bombs_beat_any_table() {
    let fours = bomb(Rank::Four);
    let run = [
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Clubs, Rank::Jack),
        card(Suit::Clubs, Rank::Queen),
        card(Suit::Clubs, Rank::King),
    ];

    assert!(is_valid_play(&fours, &[card(Suit::Spades, Rank::Two)]));
    assert!(is_valid_play(
        &fours,
        &[card(Suit::Clubs, Rank::Ace), card(Suit::Hearts, Rank::Ace)]
    ));
    assert!(is_valid_play(&fours, &run));
    assert!(is_valid_play(&fours, &bomb(Rank::Two)));
}

#[test]
fn runs_compare_by_lowest_rank() {
    let low = [
        card(Suit::Clubs, Rank::Three),
        card(Suit::Hearts, Rank::Four),
        card(Suit::Spades, Rank::Five),
        card(Suit::Clubs, Rank::Six),
    ];
    let high = [
        card(Suit::Diamonds, Rank::Eight),
        card(Suit::Clubs, Rank::Five),
        card(Suit::Hearts, Rank::Seven),
        card(Suit::Spades, Rank::Six),
    ];

    assert!(is_valid_play(&high, &low));
    assert!(!is_valid_play(&low, &high));
    assert!(!is_valid_play(&low, &low));
}

#[test]
fn runs_do_not_check_consecutive_ranks() {
    // Four unrelated ranks still count as a run of four.
    let scattered = [
        card(Suit::Clubs, Rank::Six),
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Spades, Rank::Jack),
        card(Suit::Diamonds, Rank::Two),
    ];
    let low = [
        card(Suit::Clubs, Rank::Three),
        card(Suit::Hearts, Rank::Four),
        card(Suit::Spades, Rank::Five),
        card(Suit::Clubs, Rank::Six),
    ];
    assert!(is_valid_play(&scattered, &low));

    let five_long = [
        card(Suit::Clubs, Rank::Seven),
        card(Suit::Hearts, Rank::Eight),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Clubs, Rank::Jack),
    ];
    assert!(!is_valid_play(&five_long, &low));
}

#[test]
fn play_kinds_classify_shapes() {
    assert_eq!(PlayKind::classify(&[]), None);
    assert_eq!(
        PlayKind::classify(&[card(Suit::Clubs, Rank::Three)]),
        Some(PlayKind::Single)
    );
    assert_eq!(
        PlayKind::classify(&[card(Suit::Clubs, Rank::Three), card(Suit::Spades, Rank::Three)]),
        Some(PlayKind::Pair)
    );
    assert_eq!(
        PlayKind::classify(&[card(Suit::Clubs, Rank::Three), card(Suit::Spades, Rank::Four)]),
        None
    );
    assert_eq!(PlayKind::classify(&bomb(Rank::Ace)), Some(PlayKind::Bomb));
    assert_eq!(
        PlayKind::classify(&[
            card(Suit::Clubs, Rank::Three),
            card(Suit::Clubs, Rank::Four),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Clubs, Rank::Six),
        ]),
        Some(PlayKind::Run)
    );

    assert!(is_bomb(&bomb(Rank::Seven)));
    assert!(!is_bomb(&bomb(Rank::Seven)[..3]));
    assert_eq!(shared_rank(&bomb(Rank::Seven)[..3]), Some(Rank::Seven));
}

#[test]
fn strategy_leads_lowest_card_on_empty_table() {
    let hand = [
        card(Suit::Spades, Rank::King),
        card(Suit::Hearts, Rank::Five),
        card(Suit::Clubs, Rank::Five),
    ];
    assert_eq!(
        select_play(&hand, &[]),
        Some(vec![card(Suit::Clubs, Rank::Five)])
    );
    assert_eq!(select_play(&[], &[]), None);
}

#[test]
fn strategy_prefers_bomb_over_higher_single() {
    let hand = [
        card(Suit::Clubs, Rank::Four),
        card(Suit::Diamonds, Rank::Four),
        card(Suit::Hearts, Rank::Four),
        card(Suit::Spades, Rank::Four),
        card(Suit::Spades, Rank::Seven),
    ];
    let table = [card(Suit::Clubs, Rank::Five)];

    assert_eq!(select_play(&hand, &table), Some(bomb(Rank::Four)));
}

#[test]
fn strategy_beats_with_matching_group() {
    let hand = [
        card(Suit::Clubs, Rank::Three),
        card(Suit::Diamonds, Rank::Five),
        card(Suit::Spades, Rank::Five),
        card(Suit::Hearts, Rank::Nine),
    ];
    let table = [card(Suit::Clubs, Rank::Four), card(Suit::Diamonds, Rank::Four)];
    assert_eq!(
        select_play(&hand, &table),
        Some(vec![
            card(Suit::Diamonds, Rank::Five),
            card(Suit::Spades, Rank::Five)
        ])
    );
}

#[test]
fn strategy_keeps_pairs_together_when_playing_singles() {
    let hand = [
        card(Suit::Clubs, Rank::Eight),
        card(Suit::Diamonds, Rank::Eight),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Jack),
    ];
    let table = [card(Suit::Clubs, Rank::Seven)];
    assert_eq!(
        select_play(&hand, &table),
        Some(vec![card(Suit::Spades, Rank::Ten)])
    );
}

#[test]
fn strategy_finds_earliest_consecutive_run() {
    let hand = [
        card(Suit::Clubs, Rank::Three),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Hearts, Rank::Eight),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Spades, Rank::Ten),
    ];
    let table = [
        card(Suit::Clubs, Rank::Four),
        card(Suit::Diamonds, Rank::Five),
        card(Suit::Hearts, Rank::Six),
        card(Suit::Spades, Rank::Seven),
    ];
    assert_eq!(
        select_play(&hand, &table),
        Some(vec![
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Spades, Rank::Seven),
            card(Suit::Hearts, Rank::Eight),
            card(Suit::Clubs, Rank::Nine),
        ])
    );
}

#[test]
fn strategy_passes_without_a_beating_play() {
    let hand = [card(Suit::Clubs, Rank::Three), card(Suit::Diamonds, Rank::Four)];
    assert_eq!(select_play(&hand, &[card(Suit::Spades, Rank::Two)]), None);

    let gapped = [
        card(Suit::Clubs, Rank::Six),
        card(Suit::Diamonds, Rank::Eight),
        card(Suit::Hearts, Rank::Ten),
    ];
    let table = [
        card(Suit::Clubs, Rank::Three),
        card(Suit::Diamonds, Rank::Four),
        card(Suit::Hearts, Rank::Five),
    ];
    assert_eq!(select_play(&gapped, &table), None);
}
