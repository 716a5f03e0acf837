use crate::card::Card;
use crate::options::GameOptions;
use crate::player::{PLAYER_COUNT, Player, Seat};
use crate::result::RoundResult;
use crate::table::Table;

use super::GameState;

/// The authoritative state of one table: seats, played hands and turn cursor.
///
/// Every transition takes `&mut self` and either commits completely or
/// returns an error with the session untouched. [`Game`](super::Game) wraps a
/// session in a lock for shared use.
#[derive(Debug, Clone)]
pub struct Session {
    pub(super) players: [Player; PLAYER_COUNT],
    pub(super) table: Table,
    pub(super) cursor: Seat,
    pub(super) state: GameState,
    pub(super) opening_card: Card,
    pub(super) result: Option<RoundResult>,
}

impl Session {
    /// Creates a session with no cards dealt.
    #[must_use]
    pub fn new(options: &GameOptions) -> Self {
        let players =
            core::array::from_fn(|seat| Player::new(seat, options.player_names[seat].clone()));

        Self {
            players,
            table: Table::new(),
            cursor: 0,
            state: GameState::WaitingForDeal,
            opening_card: options.opening_card,
            result: None,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the seat that must act, or `None` outside of play.
    #[must_use]
    pub const fn current_seat(&self) -> Option<Seat> {
        if self.state.is_in_play() {
            Some(self.cursor)
        } else {
            None
        }
    }

    /// Returns the card required in the first play.
    #[must_use]
    pub const fn opening_card(&self) -> Card {
        self.opening_card
    }

    /// Returns the player at `seat`.
    #[must_use]
    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns all players in seat order.
    #[must_use]
    pub const fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    /// Returns the hands played this round.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Returns the result of the finished round, if any.
    #[must_use]
    pub const fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Returns the number of cards held by each seat.
    #[must_use]
    pub fn card_counts(&self) -> [usize; PLAYER_COUNT] {
        core::array::from_fn(|seat| self.players[seat].card_count())
    }

    /// Returns the number of cards across all seats and the table.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.card_counts().iter().sum::<usize>() + self.table.card_count()
    }

    /// Returns the state implied by the cursor and the table top.
    pub(super) fn turn_state(&self) -> GameState {
        match self.table.top() {
            None => GameState::AwaitingFirstPlay,
            Some(top) if top.owner() == self.cursor => GameState::Leading,
            Some(_) => GameState::AwaitingChallenge,
        }
    }
}
