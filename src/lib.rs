//! A Big Two rules engine with optional `no_std` support.
//!
//! The crate classifies card selections into hand categories, decides
//! whether one hand beats another, and runs the turn-by-turn state machine
//! of a four-seat round through the [`Game`] type.
//!
//! # Example
//!
//! ```
//! use bigtwo::{Game, GameOptions, PlayOutcome};
//!
//! let game = Game::new(GameOptions::default(), 7);
//! let opener = game.deal().unwrap();
//!
//! // The opener's weakest card is the three of diamonds.
//! let outcome = game.submit_play(opener, &[0]).unwrap();
//! assert!(matches!(outcome, PlayOutcome::Played { .. }));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod card_set;
pub mod compare;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
mod sync;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, OPENING_CARD, Suit};
pub use card_set::CardSet;
pub use compare::beats;
pub use error::{DealError, IllegalSelection, PlayError, SelectionError};
pub use game::{Game, GameState, Session};
pub use hand::{Hand, HandCategory, classify};
pub use options::GameOptions;
pub use player::{PLAYER_COUNT, Player, Seat};
pub use result::{PlayOutcome, RoundResult};
pub use table::Table;
