use crate::compare::beats;
use crate::error::{IllegalSelection, PlayError};
use crate::hand::{Hand, classify};
use crate::player::{Seat, next_seat};
use crate::result::{PlayOutcome, RoundResult};

use super::{GameState, Session};

impl Session {
    /// Submits a play for `seat`. An empty selection is a pass.
    ///
    /// On success the played cards leave the seat's hand, the hand goes on
    /// the table and the turn moves to the next seat. If the seat has no
    /// cards left the round ends and [`PlayOutcome::RoundEnded`] is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, it is not the seat's
    /// turn, or the selection is not a legal play. A rejected submission
    /// leaves the session unchanged and the same seat keeps the turn.
    pub fn submit_play(&mut self, seat: Seat, indices: &[usize]) -> Result<PlayOutcome, PlayError> {
        let outcome = self.try_play(seat, indices);
        if let Err(err) = &outcome {
            log::debug!("seat {seat} rejected: {err}");
        }
        outcome
    }

    fn try_play(&mut self, seat: Seat, indices: &[usize]) -> Result<PlayOutcome, PlayError> {
        self.ensure_turn(seat)?;

        if indices.is_empty() {
            return self.pass(seat);
        }

        let selection = self.players[seat].cards().select(indices)?;
        let hand =
            classify(seat, selection.as_slice()).ok_or(IllegalSelection::NoCategory)?;
        self.check_against_table(&hand)?;

        Ok(self.commit(hand))
    }

    fn ensure_turn(&self, seat: Seat) -> Result<(), PlayError> {
        if !self.state.is_in_play() {
            return Err(PlayError::InvalidState);
        }

        if seat != self.cursor {
            return Err(PlayError::OutOfTurn);
        }

        Ok(())
    }

    fn pass(&mut self, seat: Seat) -> Result<PlayOutcome, PlayError> {
        if self.state != GameState::AwaitingChallenge {
            return Err(IllegalSelection::CannotPassOnLead.into());
        }

        self.cursor = next_seat(seat);
        self.state = self.turn_state();
        log::debug!("{} passes", self.players[seat].name());

        Ok(PlayOutcome::Passed { next: self.cursor })
    }

    fn check_against_table(&self, hand: &Hand) -> Result<(), IllegalSelection> {
        match (self.state, self.table.top()) {
            (GameState::AwaitingFirstPlay, _) => {
                if hand.contains(&self.opening_card) {
                    Ok(())
                } else {
                    Err(IllegalSelection::MissingOpeningCard)
                }
            }
            (GameState::AwaitingChallenge, Some(top)) => {
                if hand.len() != top.len() {
                    Err(IllegalSelection::SizeMismatch)
                } else if !beats(hand, top) {
                    Err(IllegalSelection::DoesNotBeat)
                } else {
                    Ok(())
                }
            }
            _ => Ok(()),
        }
    }

    fn commit(&mut self, hand: Hand) -> PlayOutcome {
        let seat = hand.owner();
        let player = &mut self.players[seat];
        player.cards_mut().remove_all(hand.cards().as_slice());
        log::debug!("{} plays {hand}", player.name());
        self.table.push(hand.clone());

        if self.players[seat].card_count() == 0 {
            let result = RoundResult {
                winner: seat,
                remaining: self.card_counts(),
                winning_hand: hand,
            };
            log::info!(
                "round ended, {} wins, remaining {:?}",
                self.players[seat].name(),
                result.remaining
            );
            self.state = GameState::RoundEnded;
            self.result = Some(result.clone());
            return PlayOutcome::RoundEnded(result);
        }

        self.cursor = next_seat(seat);
        self.state = self.turn_state();

        PlayOutcome::Played {
            hand,
            next: self.cursor,
        }
    }
}
