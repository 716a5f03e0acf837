//! Hand categories and classification.

use core::fmt;

use crate::card::{Card, RANK_COUNT};
use crate::card_set::CardSet;
use crate::player::Seat;

/// The structural shape of a played hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandCategory {
    /// One card.
    Single,
    /// Two cards of the same rank.
    Pair,
    /// Three cards of the same rank.
    Triple,
    /// Five cards of consecutive rank.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three cards of one rank and two of another.
    FullHouse,
    /// Four cards of one rank and any fifth card.
    Quad,
    /// A straight whose cards share a suit.
    StraightFlush,
}

impl HandCategory {
    /// Five-card categories, weakest first.
    pub const FIVE_CARD: [Self; 5] = [
        Self::Straight,
        Self::Flush,
        Self::FullHouse,
        Self::Quad,
        Self::StraightFlush,
    ];

    /// Order in which five-card predicates are tried.
    const CLASSIFY_ORDER: [Self; 5] = [
        Self::StraightFlush,
        Self::Quad,
        Self::FullHouse,
        Self::Flush,
        Self::Straight,
    ];

    /// Returns the number of cards a hand of this category holds.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Pair => 2,
            Self::Triple => 3,
            Self::Straight | Self::Flush | Self::FullHouse | Self::Quad | Self::StraightFlush => 5,
        }
    }

    /// Returns the position of a five-card category in the strength order.
    ///
    /// Returns `None` for singles, pairs and triples, which never compare
    /// across categories.
    #[must_use]
    pub const fn strength(self) -> Option<u8> {
        match self {
            Self::Single | Self::Pair | Self::Triple => None,
            Self::Straight => Some(0),
            Self::Flush => Some(1),
            Self::FullHouse => Some(2),
            Self::Quad => Some(3),
            Self::StraightFlush => Some(4),
        }
    }

    /// Returns the display name of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Pair => "Pair",
            Self::Triple => "Triple",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "FullHouse",
            Self::Quad => "Quad",
            Self::StraightFlush => "StraightFlush",
        }
    }

    /// Returns whether `cards` form a hand of this category.
    #[must_use]
    pub fn matches(self, cards: &[Card]) -> bool {
        if cards.len() != self.size() || !cards.iter().all(Card::is_valid) {
            return false;
        }
        match self {
            Self::Single => true,
            Self::Pair | Self::Triple => all_same_rank(cards),
            Self::Straight => is_straight(cards),
            Self::Flush => is_flush(cards),
            Self::FullHouse => group_shape(cards) == (3, 2),
            Self::Quad => group_shape(cards) == (4, 2),
            Self::StraightFlush => is_straight(cards) && is_flush(cards),
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn all_same_rank(cards: &[Card]) -> bool {
    cards.windows(2).all(|pair| pair[0].rank == pair[1].rank)
}

fn is_flush(cards: &[Card]) -> bool {
    cards.windows(2).all(|pair| pair[0].suit == pair[1].suit)
}

/// Consecutive under game order, so a run may end on the two but never wrap
/// past it back to the three.
fn is_straight(cards: &[Card]) -> bool {
    let Ok(mut sorted) = <[Card; 5]>::try_from(cards) else {
        return false;
    };
    sorted.sort_unstable();
    sorted
        .windows(2)
        .all(|pair| pair[1].game_rank() == pair[0].game_rank() + 1)
}

fn rank_counts(cards: &[Card]) -> [u8; RANK_COUNT as usize] {
    let mut counts = [0; RANK_COUNT as usize];
    for card in cards.iter().filter(|card| card.is_valid()) {
        counts[card.rank as usize] += 1;
    }
    counts
}

/// Returns the size of the largest same-rank group and the number of distinct ranks.
fn group_shape(cards: &[Card]) -> (u8, usize) {
    let counts = rank_counts(cards);
    let largest = counts.iter().copied().max().unwrap_or(0);
    let distinct = counts.iter().filter(|&&count| count > 0).count();
    (largest, distinct)
}

/// Returns the rank of the largest same-rank group.
fn dominant_rank(cards: &[Card]) -> Option<u8> {
    let counts = rank_counts(cards);
    counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .max_by_key(|&(_, &count)| count)
        .map(|(rank, _)| rank as u8)
}

/// A set of cards played under a declared category.
///
/// Hands returned by [`classify`] are always valid. A hand built with
/// [`Hand::declare`] may not be; check [`Hand::is_valid`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    category: HandCategory,
    cards: CardSet,
    owner: Seat,
}

impl Hand {
    /// Creates a hand of the given category without checking it.
    ///
    /// The cards are sorted weakest first.
    #[must_use]
    pub fn declare(owner: Seat, category: HandCategory, mut cards: CardSet) -> Self {
        cards.sort();
        Self {
            category,
            cards,
            owner,
        }
    }

    /// Returns the declared category.
    #[must_use]
    pub const fn category(&self) -> HandCategory {
        self.category
    }

    /// Returns the seat that played the hand.
    #[must_use]
    pub const fn owner(&self) -> Seat {
        self.owner
    }

    /// Returns the cards, weakest first.
    #[must_use]
    pub const fn cards(&self) -> &CardSet {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand holds the card.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns whether the cards satisfy the declared category.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.category.matches(self.cards.as_slice())
    }

    /// Returns the card that decides comparisons within the category.
    ///
    /// For full houses and quads this is the strongest card of the
    /// three- or four-card group; otherwise the strongest card overall.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        let cards = self.cards.as_slice();
        match self.category {
            HandCategory::FullHouse | HandCategory::Quad => {
                let group = dominant_rank(cards)?;
                cards.iter().filter(|card| card.rank == group).max().copied()
            }
            _ => cards.iter().max().copied(),
        }
    }

    /// Returns whether this hand legally supersedes `other` on the table.
    #[must_use]
    pub fn beats(&self, other: &Self) -> bool {
        crate::compare::beats(self, other)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}} {}", self.category, self.cards)
    }
}

/// Determines the category a set of cards forms.
///
/// One, two and three cards may only form a single, pair and triple. Five
/// cards are tried as straight flush, quad, full house, flush and straight,
/// in that order. Any other size, or cards matching no category, yield `None`.
///
/// # Example
///
/// ```
/// use bigtwo::card::rank;
/// use bigtwo::{Card, HandCategory, Suit, classify};
///
/// let pair = [
///     Card::new(Suit::Clubs, rank::SEVEN),
///     Card::new(Suit::Spades, rank::SEVEN),
/// ];
/// let hand = classify(0, &pair).unwrap();
/// assert_eq!(hand.category(), HandCategory::Pair);
/// ```
#[must_use]
pub fn classify(owner: Seat, cards: &[Card]) -> Option<Hand> {
    let category = match cards.len() {
        1 => Some(HandCategory::Single).filter(|category| category.matches(cards)),
        2 => Some(HandCategory::Pair).filter(|category| category.matches(cards)),
        3 => Some(HandCategory::Triple).filter(|category| category.matches(cards)),
        5 => HandCategory::CLASSIFY_ORDER
            .into_iter()
            .find(|category| category.matches(cards)),
        _ => None,
    }?;

    Some(Hand::declare(
        owner,
        category,
        cards.iter().copied().collect(),
    ))
}
