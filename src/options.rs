//! Game configuration options.

use alloc::format;
use alloc::string::String;

use crate::card::{Card, OPENING_CARD};
use crate::player::{PLAYER_COUNT, Seat};

/// Configuration options for a Big Two game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bigtwo::GameOptions;
///
/// let options = GameOptions::default()
///     .with_player_name(0, "Alice")
///     .with_player_name(1, "Bob");
/// assert_eq!(options.player_names[1], "Bob");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Card that must be part of the first play; its holder opens the round.
    pub opening_card: Card,
    /// Display name per seat.
    pub player_names: [String; PLAYER_COUNT],
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            opening_card: OPENING_CARD,
            player_names: core::array::from_fn(|seat| format!("Player {seat}")),
        }
    }
}

impl GameOptions {
    /// Sets the opening card.
    ///
    /// # Example
    ///
    /// ```
    /// use bigtwo::{Card, GameOptions, Suit};
    ///
    /// let card = Card::new(Suit::Clubs, 2);
    /// let options = GameOptions::default().with_opening_card(card);
    /// assert_eq!(options.opening_card, card);
    /// ```
    #[must_use]
    pub fn with_opening_card(mut self, card: Card) -> Self {
        self.opening_card = card;
        self
    }

    /// Sets the display name of a seat. Seats outside the table are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use bigtwo::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_name(3, "Dana");
    /// assert_eq!(options.player_names[3], "Dana");
    /// ```
    #[must_use]
    pub fn with_player_name(mut self, seat: Seat, name: impl Into<String>) -> Self {
        if let Some(slot) = self.player_names.get_mut(seat) {
            *slot = name.into();
        }
        self
    }
}
