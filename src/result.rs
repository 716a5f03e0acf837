//! Outcomes of submitted plays.

use crate::hand::Hand;
use crate::player::{PLAYER_COUNT, Seat};

/// Result of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayOutcome {
    /// The hand was put on the table.
    Played {
        /// The accepted hand.
        hand: Hand,
        /// Seat that acts next.
        next: Seat,
    },
    /// The seat passed.
    Passed {
        /// Seat that acts next.
        next: Seat,
    },
    /// The hand emptied the seat's cards and ended the round.
    RoundEnded(RoundResult),
}

impl PlayOutcome {
    /// Returns the seat that acts next, or `None` if the round ended.
    #[must_use]
    pub const fn next_seat(&self) -> Option<Seat> {
        match self {
            Self::Played { next, .. } | Self::Passed { next } => Some(*next),
            Self::RoundEnded(_) => None,
        }
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// The seat that ran out of cards.
    pub winner: Seat,
    /// Cards left per seat (zero for the winner).
    pub remaining: [usize; PLAYER_COUNT],
    /// The hand that ended the round.
    pub winning_hand: Hand,
}
