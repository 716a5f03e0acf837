//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    /// No round has been dealt yet.
    WaitingForDeal,
    /// The table is empty; the first play must contain the opening card.
    AwaitingFirstPlay,
    /// Every other seat passed on the table top; its owner starts a new trick
    /// with any valid hand and may not pass.
    Leading,
    /// The seat to act must beat the table top or pass.
    AwaitingChallenge,
    /// A seat ran out of cards.
    RoundEnded,
}

impl GameState {
    /// Returns whether the state accepts submissions.
    #[must_use]
    pub const fn is_in_play(self) -> bool {
        matches!(
            self,
            Self::AwaitingFirstPlay | Self::Leading | Self::AwaitingChallenge
        )
    }
}
