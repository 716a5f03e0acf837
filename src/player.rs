//! Seats and the cards they hold.

use alloc::string::String;

use crate::card_set::CardSet;

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 4;

/// A seat index in `0..PLAYER_COUNT`.
pub type Seat = usize;

/// Returns the seat that acts after `seat`.
#[must_use]
pub const fn next_seat(seat: Seat) -> Seat {
    (seat + 1) % PLAYER_COUNT
}

/// A player at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    seat: Seat,
    name: String,
    cards: CardSet,
}

impl Player {
    /// Creates a player with no cards.
    #[must_use]
    pub fn new(seat: Seat, name: String) -> Self {
        Self {
            seat,
            name,
            cards: CardSet::new(),
        }
    }

    /// Returns the seat index.
    #[must_use]
    pub const fn seat(&self) -> Seat {
        self.seat
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in hand.
    #[must_use]
    pub const fn cards(&self) -> &CardSet {
        &self.cards
    }

    /// Returns the number of cards in hand.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub(crate) fn set_cards(&mut self, mut cards: CardSet) {
        cards.sort();
        self.cards = cards;
    }

    pub(crate) const fn cards_mut(&mut self) -> &mut CardSet {
        &mut self.cards
    }
}
