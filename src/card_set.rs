//! Ordered collections of cards.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::SelectionError;

/// An ordered collection of distinct cards.
///
/// Used both for a seat's holding and for the cards of a [`Hand`](crate::Hand).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardSet {
    cards: Vec<Card>,
}

impl CardSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the end of the set.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns whether the set holds the card.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Sorts the set in place, weakest card first.
    pub fn sort(&mut self) {
        self.cards.sort_unstable();
    }

    /// Returns the cards as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Copies the cards at the given positions into a new set, in the order given.
    ///
    /// # Errors
    ///
    /// Returns an error if an index is out of range or appears twice. The set
    /// itself is never modified.
    pub fn select(&self, indices: &[usize]) -> Result<Self, SelectionError> {
        let mut selected = Vec::with_capacity(indices.len());
        for (position, &index) in indices.iter().enumerate() {
            if indices[..position].contains(&index) {
                return Err(SelectionError::DuplicateIndex);
            }
            let card = self
                .cards
                .get(index)
                .ok_or(SelectionError::IndexOutOfRange)?;
            selected.push(*card);
        }
        Ok(Self { cards: selected })
    }

    /// Removes every card in `cards` from the set, returning how many were removed.
    pub fn remove_all(&mut self, cards: &[Card]) -> usize {
        let before = self.cards.len();
        self.cards.retain(|card| !cards.contains(card));
        before - self.cards.len()
    }
}

impl From<Vec<Card>> for CardSet {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CardSet {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "[{card}]")?;
        }
        Ok(())
    }
}
