//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card_set::CardSet;
use crate::error::{DealError, PlayError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::player::{PLAYER_COUNT, Seat};
use crate::result::{PlayOutcome, RoundResult};

mod deal;
mod play;
mod session;
pub mod state;

pub use deal::{HAND_SIZE, deal_cards, shuffled_deck, standard_deck};
pub use session::Session;
pub use state::GameState;

/// A Big Two table that can be shared between the threads serving each seat.
///
/// The game owns one [`Session`] behind a lock. Every operation holds the
/// lock for its full duration, so submissions from different seats are
/// applied one at a time against a consistent table.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Seats, table and turn cursor.
    session: Mutex<Session>,
    /// Random number generator used for dealing.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bigtwo::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// let opener = game.deal().unwrap();
    /// assert_eq!(game.state(), GameState::AwaitingFirstPlay);
    /// assert_eq!(game.current_seat(), Some(opener));
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let session = Session::new(&options);

        Self {
            options,
            session: Mutex::new(session),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Shuffles a fresh deck, deals it round-robin and starts a round.
    ///
    /// Returns the seat holding the opening card.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured opening card is not part of the deck.
    pub fn deal(&self) -> Result<Seat, DealError> {
        let deck = self.rng.with(|rng| shuffled_deck(rng));
        self.start_round(deal_cards(&deck))
    }

    /// Starts a round with externally dealt holdings.
    ///
    /// Returns the seat holding the opening card.
    ///
    /// # Errors
    ///
    /// Returns an error if the holdings are not a 13-card partition of the
    /// deck or no seat holds the opening card.
    pub fn start_round(&self, hands: [CardSet; PLAYER_COUNT]) -> Result<Seat, DealError> {
        self.session.with(|session| session.start_round(hands))
    }

    /// Submits a play for `seat`; an empty selection passes.
    ///
    /// Indices refer to the seat's cards as returned by [`Game::player_cards`].
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, it is not the seat's turn,
    /// or the selection is not a legal play.
    pub fn submit_play(&self, seat: Seat, indices: &[usize]) -> Result<PlayOutcome, PlayError> {
        self.session
            .with(|session| session.submit_play(seat, indices))
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        self.session.with(|session| session.state())
    }

    /// Returns the seat that must act.
    ///
    /// Returns `None` before the first deal and after the round has ended.
    pub fn current_seat(&self) -> Option<Seat> {
        self.session.with(|session| session.current_seat())
    }

    /// Returns whether the seat to act leads a new trick.
    pub fn is_leading(&self) -> bool {
        self.state() == GameState::Leading
    }

    /// Returns a copy of the cards held by `seat`, weakest first.
    pub fn player_cards(&self, seat: Seat) -> Option<CardSet> {
        self.session
            .with(|session| session.player(seat).map(|player| player.cards().clone()))
    }

    /// Returns the number of cards held by `seat`.
    pub fn card_count(&self, seat: Seat) -> Option<usize> {
        self.session
            .with(|session| session.player(seat).map(crate::Player::card_count))
    }

    /// Returns the display name of `seat`.
    pub fn player_name(&self, seat: Seat) -> Option<&str> {
        self.options.player_names.get(seat).map(alloc::string::String::as_str)
    }

    /// Returns the hand every challenger must beat.
    pub fn table_top(&self) -> Option<Hand> {
        self.session.with(|session| session.table().top().cloned())
    }

    /// Returns every hand played this round, oldest first.
    pub fn table(&self) -> Vec<Hand> {
        self.session.with(|session| session.table().hands().to_vec())
    }

    /// Returns the result of the finished round.
    pub fn result(&self) -> Option<RoundResult> {
        self.session.with(|session| session.result().cloned())
    }

    /// Returns the number of cards across all seats and the table.
    pub fn cards_in_play(&self) -> usize {
        self.session.with(|session| session.cards_in_play())
    }

    /// Returns a copy of the whole session.
    pub fn snapshot(&self) -> Session {
        self.session.with(|session| session.clone())
    }
}
