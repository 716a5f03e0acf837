use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, RANK_COUNT, Suit};
use crate::card_set::CardSet;
use crate::error::DealError;
use crate::player::{PLAYER_COUNT, Seat};

use super::{GameState, Session};

/// Number of cards each seat is dealt.
pub const HAND_SIZE: usize = DECK_SIZE / PLAYER_COUNT;

/// Creates the 52-card deck, suit by suit.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| (0..RANK_COUNT).map(move |rank| Card::new(suit, rank)))
        .collect()
}

/// Creates a deck shuffled with `rng`.
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = standard_deck();
    deck.shuffle(rng);
    deck
}

/// Deals `deck` round-robin: card `i` goes to seat `i % 4`.
#[must_use]
pub fn deal_cards(deck: &[Card]) -> [CardSet; PLAYER_COUNT] {
    let mut hands: [CardSet; PLAYER_COUNT] = core::array::from_fn(|_| CardSet::new());
    for (index, card) in deck.iter().enumerate() {
        hands[index % PLAYER_COUNT].push(*card);
    }
    hands
}

const fn deck_index(card: &Card) -> usize {
    card.suit.index() as usize * RANK_COUNT as usize + card.rank as usize
}

impl Session {
    /// Starts a new round with the given holdings.
    ///
    /// Each seat must hold 13 cards and together they must form the whole
    /// deck. Every holding is sorted, the table is cleared and the turn goes
    /// to the seat holding the opening card, which is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if a seat holds the wrong number of cards, a card is
    /// invalid or repeated, or no seat holds the opening card. The session is
    /// left unchanged on error.
    pub fn start_round(&mut self, hands: [CardSet; PLAYER_COUNT]) -> Result<Seat, DealError> {
        let mut seen = [false; DECK_SIZE];
        for (seat, hand) in hands.iter().enumerate() {
            if hand.len() != HAND_SIZE {
                return Err(DealError::WrongHandSize {
                    seat,
                    len: hand.len(),
                });
            }
            for card in hand {
                if !card.is_valid() {
                    return Err(DealError::InvalidCard(*card));
                }
                let slot = &mut seen[deck_index(card)];
                if *slot {
                    return Err(DealError::DuplicateCard(*card));
                }
                *slot = true;
            }
        }

        let opener = hands
            .iter()
            .position(|hand| hand.contains(&self.opening_card))
            .ok_or(DealError::MissingOpeningCard)?;

        for (player, hand) in self.players.iter_mut().zip(hands) {
            player.set_cards(hand);
        }
        self.table.clear();
        self.result = None;
        self.cursor = opener;
        self.state = GameState::AwaitingFirstPlay;

        log::info!(
            "round started, {} holds {} and opens",
            self.players[opener].name(),
            self.opening_card
        );

        Ok(opener)
    }
}
