//! Card types and game ordering.

use core::cmp::Ordering;
use core::fmt;

/// Card suit, declared from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Suit {
    /// Diamonds (lowest).
    Diamonds = 0,
    /// Clubs.
    Clubs = 1,
    /// Hearts.
    Hearts = 2,
    /// Spades (highest).
    Spades = 3,
}

impl Suit {
    /// All suits, lowest first.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Clubs, Self::Hearts, Self::Spades];

    /// Returns the suit for a `0..=3` index.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Diamonds),
            1 => Some(Self::Clubs),
            2 => Some(Self::Hearts),
            3 => Some(Self::Spades),
            _ => None,
        }
    }

    /// Returns the `0..=3` index of the suit.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    const fn symbol(self) -> char {
        match self {
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }
}

/// Numeric rank labels.
///
/// The numeric rank is the deck index of the card, not its strength: aces and
/// twos sit at `0` and `1` but are the two strongest ranks in play.
pub mod rank {
    /// Ace.
    pub const ACE: u8 = 0;
    /// Two (strongest rank).
    pub const TWO: u8 = 1;
    /// Three (weakest rank).
    pub const THREE: u8 = 2;
    /// Four.
    pub const FOUR: u8 = 3;
    /// Five.
    pub const FIVE: u8 = 4;
    /// Six.
    pub const SIX: u8 = 5;
    /// Seven.
    pub const SEVEN: u8 = 6;
    /// Eight.
    pub const EIGHT: u8 = 7;
    /// Nine.
    pub const NINE: u8 = 8;
    /// Ten.
    pub const TEN: u8 = 9;
    /// Jack.
    pub const JACK: u8 = 10;
    /// Queen.
    pub const QUEEN: u8 = 11;
    /// King.
    pub const KING: u8 = 12;
}

/// Number of distinct ranks.
pub const RANK_COUNT: u8 = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// The lowest card in play, three of diamonds.
pub const OPENING_CARD: Card = Card::new(Suit::Diamonds, rank::THREE);

/// A playing card.
///
/// Equality is on the `(suit, rank)` pair. Ordering follows the game:
/// `3 < 4 < ... < K < A < 2`, with suit breaking ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The numeric rank of the card (see [`rank`]).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Use [`Card::try_new`]
    /// for input from outside the engine.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Creates a new card, returning `None` if the rank is not in `0..=12`.
    #[must_use]
    pub const fn try_new(suit: Suit, rank: u8) -> Option<Self> {
        if rank < RANK_COUNT {
            Some(Self { suit, rank })
        } else {
            None
        }
    }

    /// Returns whether the rank is in `0..=12`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.rank < RANK_COUNT
    }

    /// Returns the rank adjusted for play strength.
    ///
    /// Aces map to 13 and twos to 14; every other rank keeps its numeric
    /// value, so the result increases from three (2) to two (14).
    #[must_use]
    pub const fn game_rank(&self) -> u8 {
        match self.rank {
            rank::ACE | rank::TWO => self.rank + RANK_COUNT,
            other => other,
        }
    }

    const fn rank_symbol(&self) -> char {
        match self.rank {
            rank::ACE => 'A',
            rank::TWO => '2',
            rank::THREE => '3',
            rank::FOUR => '4',
            rank::FIVE => '5',
            rank::SIX => '6',
            rank::SEVEN => '7',
            rank::EIGHT => '8',
            rank::NINE => '9',
            rank::TEN => 'T',
            rank::JACK => 'J',
            rank::QUEEN => 'Q',
            rank::KING => 'K',
            _ => '?',
        }
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.game_rank()
            .cmp(&other.game_rank())
            .then(self.suit.cmp(&other.suit))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_symbol(), self.suit.symbol())
    }
}
