//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;
use crate::player::Seat;

/// Why a submitted selection was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IllegalSelection {
    /// A card index does not exist in the seat's hand.
    #[error("card index out of range")]
    IndexOutOfRange,
    /// The same card index was submitted twice.
    #[error("card index selected twice")]
    DuplicateIndex,
    /// The cards do not form any hand category.
    #[error("cards do not form a valid hand")]
    NoCategory,
    /// The opening play does not contain the opening card.
    #[error("opening play must contain the opening card")]
    MissingOpeningCard,
    /// The hand has a different number of cards than the table top.
    #[error("hand size does not match the table")]
    SizeMismatch,
    /// The hand does not beat the table top.
    #[error("hand does not beat the table")]
    DoesNotBeat,
    /// The seat must lead and cannot pass.
    #[error("cannot pass while leading")]
    CannotPassOnLead,
}

/// Errors that can occur when submitting a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayError {
    /// Invalid game state for playing (no round in progress).
    #[error("invalid game state for playing")]
    InvalidState,
    /// Not this seat's turn.
    #[error("not this seat's turn")]
    OutOfTurn,
    /// The selection is not a legal play.
    #[error("illegal selection: {0}")]
    IllegalSelection(#[from] IllegalSelection),
}

/// Errors that can occur when selecting cards by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// An index does not exist in the set.
    #[error("card index out of range")]
    IndexOutOfRange,
    /// An index appears twice.
    #[error("card index selected twice")]
    DuplicateIndex,
}

impl From<SelectionError> for IllegalSelection {
    fn from(err: SelectionError) -> Self {
        match err {
            SelectionError::IndexOutOfRange => Self::IndexOutOfRange,
            SelectionError::DuplicateIndex => Self::DuplicateIndex,
        }
    }
}

impl From<SelectionError> for PlayError {
    fn from(err: SelectionError) -> Self {
        Self::IllegalSelection(err.into())
    }
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DealError {
    /// A seat was dealt the wrong number of cards.
    #[error("seat {seat} was dealt {len} cards")]
    WrongHandSize {
        /// The seat.
        seat: Seat,
        /// The number of cards it received.
        len: usize,
    },
    /// A card has a rank outside the deck.
    #[error("invalid card {0}")]
    InvalidCard(Card),
    /// A card was dealt more than once.
    #[error("card {0} dealt more than once")]
    DuplicateCard(Card),
    /// No seat holds the opening card.
    #[error("no seat holds the opening card")]
    MissingOpeningCard,
}
