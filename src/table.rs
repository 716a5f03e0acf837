//! Hands accepted during a round.

use alloc::vec::Vec;

use crate::hand::Hand;

/// The stack of hands played this round, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    hands: Vec<Hand>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { hands: Vec::new() }
    }

    /// Returns the hand every challenger must beat.
    #[must_use]
    pub fn top(&self) -> Option<&Hand> {
        self.hands.last()
    }

    /// Returns every hand played this round.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the number of hands played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hands.len()
    }

    /// Returns whether nothing has been played yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// Returns the number of cards across all played hands.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hands.iter().map(Hand::len).sum()
    }

    pub(crate) fn push(&mut self, hand: Hand) {
        self.hands.push(hand);
    }

    pub(crate) fn clear(&mut self) {
        self.hands.clear();
    }
}
