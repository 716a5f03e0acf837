//! Game integration tests.

use bigtwo::card::rank;
use bigtwo::game::{HAND_SIZE, standard_deck};
use bigtwo::{
    Card, CardSet, DECK_SIZE, DealError, Game, GameOptions, GameState, HandCategory,
    IllegalSelection, OPENING_CARD, PlayError, PlayOutcome, Seat, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Builds a full deal where each seat holds the given cards, topped up from
/// the rest of the deck in seat order.
fn partition(fixed: [&[Card]; 4]) -> [CardSet; 4] {
    let mut hands: [Vec<Card>; 4] = fixed.map(<[Card]>::to_vec);
    let assigned: Vec<Card> = hands.iter().flatten().copied().collect();
    let mut seat = 0;
    for card in standard_deck() {
        if assigned.contains(&card) {
            continue;
        }
        while hands[seat].len() == HAND_SIZE {
            seat += 1;
        }
        hands[seat].push(card);
    }
    hands.map(CardSet::from)
}

fn game_with(fixed: [&[Card]; 4]) -> (Game, Seat) {
    let game = Game::new(GameOptions::default(), 1);
    let opener = game.start_round(partition(fixed)).unwrap();
    (game, opener)
}

fn indices(game: &Game, seat: Seat, cards: &[Card]) -> Vec<usize> {
    let held = game.player_cards(seat).unwrap();
    cards
        .iter()
        .map(|card| held.iter().position(|c| c == card).unwrap())
        .collect()
}

fn play(game: &Game, seat: Seat, cards: &[Card]) -> Result<PlayOutcome, PlayError> {
    game.submit_play(seat, &indices(game, seat, cards))
}

fn pass(game: &Game, seat: Seat) -> Result<PlayOutcome, PlayError> {
    game.submit_play(seat, &[])
}

const fn illegal(reason: IllegalSelection) -> PlayError {
    PlayError::IllegalSelection(reason)
}

#[test]
fn deal_is_seeded_and_sorted() {
    let first = Game::new(GameOptions::default(), 99);
    let second = Game::new(GameOptions::default(), 99);
    let opener = first.deal().unwrap();
    assert_eq!(second.deal().unwrap(), opener);

    for seat in 0..4 {
        let cards = first.player_cards(seat).unwrap();
        assert_eq!(cards, second.player_cards(seat).unwrap());
        assert_eq!(cards.len(), HAND_SIZE);
        assert!(cards.as_slice().windows(2).all(|pair| pair[0] < pair[1]));
    }

    assert!(first.player_cards(opener).unwrap().contains(&OPENING_CARD));
    assert_eq!(first.player_cards(opener).unwrap().get(0), Some(&OPENING_CARD));
    assert_eq!(first.cards_in_play(), DECK_SIZE);
    assert_eq!(first.state(), GameState::AwaitingFirstPlay);
    assert!(first.table().is_empty());
}

#[test]
fn start_round_rejects_bad_deals() {
    let game = Game::new(GameOptions::default(), 1);

    let mut short = partition([&[], &[], &[], &[]]);
    short[1] = short[1].iter().copied().take(12).collect();
    assert_eq!(
        game.start_round(short).unwrap_err(),
        DealError::WrongHandSize { seat: 1, len: 12 }
    );

    let mut duplicated = partition([&[], &[], &[], &[]]);
    let repeated = *duplicated[0].get(0).unwrap();
    let mut cards: Vec<Card> = duplicated[3].iter().copied().take(12).collect();
    cards.push(repeated);
    duplicated[3] = CardSet::from(cards);
    assert_eq!(
        game.start_round(duplicated).unwrap_err(),
        DealError::DuplicateCard(repeated)
    );

    let mut invalid = partition([&[], &[], &[], &[]]);
    let mut cards: Vec<Card> = invalid[2].iter().copied().take(12).collect();
    cards.push(card(Suit::Spades, 13));
    invalid[2] = CardSet::from(cards);
    assert_eq!(
        game.start_round(invalid).unwrap_err(),
        DealError::InvalidCard(card(Suit::Spades, 13))
    );

    assert_eq!(game.state(), GameState::WaitingForDeal);
    assert_eq!(game.current_seat(), None);

    let options = GameOptions::default().with_opening_card(card(Suit::Spades, 20));
    let game = Game::new(options, 1);
    assert_eq!(game.deal().unwrap_err(), DealError::MissingOpeningCard);
}

#[test]
fn custom_opening_card_picks_the_opener() {
    let opening = card(Suit::Hearts, rank::NINE);
    let options = GameOptions::default().with_opening_card(opening);
    let game = Game::new(options, 1);
    let opener = game.start_round(partition([&[], &[], &[], &[opening]])).unwrap();
    assert_eq!(opener, 3);

    assert_eq!(
        play(&game, 3, &[card(Suit::Hearts, rank::NINE)]).unwrap(),
        PlayOutcome::Played {
            hand: game.table_top().unwrap(),
            next: 0,
        }
    );
}

#[test]
fn submit_before_deal_is_invalid_state() {
    let game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.submit_play(0, &[0]).unwrap_err(), PlayError::InvalidState);
}

#[test]
fn opening_play_must_contain_opening_card() {
    let three_of_diamonds = card(Suit::Diamonds, rank::THREE);
    let four_of_clubs = card(Suit::Clubs, rank::FOUR);
    let (game, opener) = game_with([&[], &[], &[three_of_diamonds, four_of_clubs], &[]]);
    assert_eq!(opener, 2);

    assert_eq!(
        play(&game, 2, &[four_of_clubs]).unwrap_err(),
        illegal(IllegalSelection::MissingOpeningCard)
    );
    assert_eq!(game.current_seat(), Some(2));
    assert_eq!(game.card_count(2), Some(HAND_SIZE));

    let outcome = play(&game, 2, &[three_of_diamonds]).unwrap();
    assert_eq!(outcome.next_seat(), Some(3));
    let top = game.table_top().unwrap();
    assert_eq!(top.category(), HandCategory::Single);
    assert_eq!(top.top_card(), Some(three_of_diamonds));
    assert_eq!(top.owner(), 2);
    assert_eq!(game.current_seat(), Some(3));
    assert_eq!(game.card_count(2), Some(HAND_SIZE - 1));
}

#[test]
fn opening_play_cannot_pass() {
    let (game, opener) = game_with([&[OPENING_CARD], &[], &[], &[]]);
    assert_eq!(
        pass(&game, opener).unwrap_err(),
        illegal(IllegalSelection::CannotPassOnLead)
    );
    assert_eq!(game.state(), GameState::AwaitingFirstPlay);
}

#[test]
fn out_of_turn_submission_is_rejected() {
    let (game, opener) = game_with([&[OPENING_CARD], &[], &[], &[]]);
    assert_eq!(opener, 0);

    assert_eq!(game.submit_play(1, &[0]).unwrap_err(), PlayError::OutOfTurn);
    assert_eq!(game.submit_play(1, &[]).unwrap_err(), PlayError::OutOfTurn);
    assert_eq!(game.submit_play(7, &[0]).unwrap_err(), PlayError::OutOfTurn);
    assert_eq!(game.current_seat(), Some(0));
    assert_eq!(game.card_count(1), Some(HAND_SIZE));
}

#[test]
fn bad_indices_are_illegal_selections() {
    let (game, opener) = game_with([&[OPENING_CARD], &[], &[], &[]]);

    assert_eq!(
        game.submit_play(opener, &[HAND_SIZE]).unwrap_err(),
        illegal(IllegalSelection::IndexOutOfRange)
    );
    assert_eq!(
        game.submit_play(opener, &[0, 0]).unwrap_err(),
        illegal(IllegalSelection::DuplicateIndex)
    );
    assert_eq!(
        game.submit_play(opener, &[0, 1, 2, 3]).unwrap_err(),
        illegal(IllegalSelection::NoCategory)
    );
    assert_eq!(game.card_count(opener), Some(HAND_SIZE));
}

#[test]
fn pair_trick_enforces_size_and_strength() {
    let seat0 = [card(Suit::Diamonds, rank::THREE), card(Suit::Clubs, rank::THREE)];
    let seat1 = [card(Suit::Diamonds, rank::SEVEN), card(Suit::Clubs, rank::SEVEN)];
    let seat2_pair = [card(Suit::Diamonds, rank::NINE), card(Suit::Clubs, rank::NINE)];
    let seat2_straight = [
        card(Suit::Spades, rank::FOUR),
        card(Suit::Spades, rank::FIVE),
        card(Suit::Hearts, rank::SIX),
        card(Suit::Hearts, rank::SEVEN),
        card(Suit::Diamonds, rank::EIGHT),
    ];
    let seat2: Vec<Card> = seat2_pair.iter().chain(&seat2_straight).copied().collect();
    let seat3 = [card(Suit::Diamonds, rank::FIVE), card(Suit::Clubs, rank::FIVE)];
    let (game, _) = game_with([&seat0, &seat1, &seat2, &seat3]);

    play(&game, 0, &seat0).unwrap();
    play(&game, 1, &seat1).unwrap();
    assert_eq!(game.state(), GameState::AwaitingChallenge);

    let before = game.snapshot();
    assert_eq!(
        play(&game, 2, &seat2_straight).unwrap_err(),
        illegal(IllegalSelection::SizeMismatch)
    );
    let after = game.snapshot();
    assert_eq!(before.players(), after.players());
    assert_eq!(before.table(), after.table());
    assert_eq!(game.current_seat(), Some(2));

    play(&game, 2, &seat2_pair).unwrap();
    assert_eq!(game.table_top().unwrap().top_card(), Some(seat2_pair[1]));

    assert_eq!(
        play(&game, 3, &seat3).unwrap_err(),
        illegal(IllegalSelection::DoesNotBeat)
    );
    assert_eq!(game.current_seat(), Some(3));
    assert_eq!(game.table().len(), 3);
    assert_eq!(game.cards_in_play(), DECK_SIZE);
}

#[test]
fn full_house_beats_flush_regardless_of_rank() {
    let flush = [
        card(Suit::Diamonds, rank::THREE),
        card(Suit::Diamonds, rank::FIVE),
        card(Suit::Diamonds, rank::SEVEN),
        card(Suit::Diamonds, rank::NINE),
        card(Suit::Diamonds, rank::TWO),
    ];
    let full_house = [
        card(Suit::Clubs, rank::FOUR),
        card(Suit::Hearts, rank::FOUR),
        card(Suit::Spades, rank::FOUR),
        card(Suit::Clubs, rank::SIX),
        card(Suit::Hearts, rank::SIX),
    ];
    let (game, _) = game_with([&flush, &full_house, &[], &[]]);

    play(&game, 0, &flush).unwrap();
    assert_eq!(game.table_top().unwrap().category(), HandCategory::Flush);

    let outcome = play(&game, 1, &full_house).unwrap();
    let PlayOutcome::Played { hand, next } = outcome else {
        panic!("expected an accepted play");
    };
    assert_eq!(hand.category(), HandCategory::FullHouse);
    assert_eq!(next, 2);
}

#[test]
fn owner_leads_again_after_everyone_passes() {
    let pair = [card(Suit::Hearts, rank::JACK), card(Suit::Spades, rank::JACK)];
    let seat0: Vec<Card> = core::iter::once(OPENING_CARD).chain(pair).collect();
    let (game, _) = game_with([&seat0, &[], &[], &[]]);

    play(&game, 0, &[OPENING_CARD]).unwrap();
    assert_eq!(pass(&game, 1).unwrap(), PlayOutcome::Passed { next: 2 });
    assert_eq!(pass(&game, 2).unwrap(), PlayOutcome::Passed { next: 3 });
    assert!(!game.is_leading());
    assert_eq!(pass(&game, 3).unwrap(), PlayOutcome::Passed { next: 0 });

    assert_eq!(game.state(), GameState::Leading);
    assert!(game.is_leading());
    assert_eq!(game.current_seat(), Some(0));
    assert_eq!(
        pass(&game, 0).unwrap_err(),
        illegal(IllegalSelection::CannotPassOnLead)
    );

    let outcome = play(&game, 0, &pair).unwrap();
    assert_eq!(outcome.next_seat(), Some(1));
    assert_eq!(game.table_top().unwrap().category(), HandCategory::Pair);
    assert_eq!(game.state(), GameState::AwaitingChallenge);
}

#[test]
fn leading_seat_still_needs_a_valid_hand() {
    let (game, _) = game_with([&[OPENING_CARD], &[], &[], &[]]);
    play(&game, 0, &[OPENING_CARD]).unwrap();
    for seat in 1..4 {
        pass(&game, seat).unwrap();
    }

    assert_eq!(
        game.submit_play(0, &[0, 1, 2, 3]).unwrap_err(),
        illegal(IllegalSelection::NoCategory)
    );
    assert_eq!(game.state(), GameState::Leading);
}

#[test]
fn emptying_a_hand_ends_the_round() {
    let low_run: Vec<Card> = (rank::THREE..=rank::SEVEN)
        .map(|rank| card(Suit::Diamonds, rank))
        .collect();
    let high_run: Vec<Card> = (rank::EIGHT..=rank::QUEEN)
        .map(|rank| card(Suit::Diamonds, rank))
        .collect();
    let kings = [
        card(Suit::Diamonds, rank::KING),
        card(Suit::Clubs, rank::KING),
        card(Suit::Hearts, rank::KING),
    ];
    let seat0: Vec<Card> = low_run.iter().chain(&high_run).chain(&kings).copied().collect();
    let (game, _) = game_with([&seat0, &[], &[], &[]]);

    play(&game, 0, &low_run).unwrap();
    assert_eq!(
        game.table_top().unwrap().category(),
        HandCategory::StraightFlush
    );
    for seat in 1..4 {
        pass(&game, seat).unwrap();
    }
    play(&game, 0, &high_run).unwrap();
    for seat in 1..4 {
        pass(&game, seat).unwrap();
    }

    let outcome = play(&game, 0, &kings).unwrap();
    let PlayOutcome::RoundEnded(result) = outcome else {
        panic!("expected the round to end");
    };
    assert_eq!(result.winner, 0);
    assert_eq!(result.remaining, [0, HAND_SIZE, HAND_SIZE, HAND_SIZE]);
    assert_eq!(result.winning_hand.category(), HandCategory::Triple);

    assert_eq!(game.state(), GameState::RoundEnded);
    assert_eq!(game.current_seat(), None);
    assert_eq!(game.result(), Some(result));
    assert_eq!(game.cards_in_play(), DECK_SIZE);
    assert_eq!(game.submit_play(1, &[0]).unwrap_err(), PlayError::InvalidState);

    game.deal().unwrap();
    assert_eq!(game.state(), GameState::AwaitingFirstPlay);
    assert!(game.table().is_empty());
    assert_eq!(game.result(), None);
}

#[test]
fn player_names_come_from_options() {
    let options = GameOptions::default().with_player_name(2, "Carol");
    let game = Game::new(options, 5);
    assert_eq!(game.player_name(0), Some("Player 0"));
    assert_eq!(game.player_name(2), Some("Carol"));
    assert_eq!(game.player_name(4), None);
    assert_eq!(game.snapshot().player(2).unwrap().name(), "Carol");
}

#[test]
fn concurrent_submissions_are_serialized() {
    use std::sync::Arc;

    let game = Arc::new(Game::new(GameOptions::default(), 11));
    let opener = game.deal().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let game = Arc::clone(&game);
            std::thread::spawn(move || game.submit_play(opener, &[0]))
        })
        .collect();
    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert!(
        results
            .iter()
            .filter_map(|result| result.as_ref().err())
            .all(|err| *err == PlayError::OutOfTurn)
    );
    assert_eq!(game.table().len(), 1);
    assert_eq!(game.card_count(opener), Some(HAND_SIZE - 1));
    assert_eq!(game.cards_in_play(), DECK_SIZE);
}
