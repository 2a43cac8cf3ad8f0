use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::errors::GameError;
use crate::player::Mark;
use crate::record::{MoveRecord, RoundRecord};

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundResult {
    Win(Mark),
    Tie,
}

/// Where a round stands after the latest move.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RoundState {
    InProgress,
    Won(Mark),
    Tied,
}

/// Drives one game to completion. Accepts one validated move at a time
/// and reports the resulting state; the caller owns prompting and
/// rendering between moves.
///
/// The state machine: each move places the current mark, then checks for
/// a win through the just-played cell, then for a full board. A
/// non-winning 9th move always lands on `Tied` with no further input.
///
/// # Examples
///
/// ```
/// use noughts_engine::player::Mark;
/// use noughts_engine::round::{Round, RoundState};
///
/// let mut round = Round::new(Mark::O);
/// assert_eq!(round.current_mark(), Mark::O);
/// assert_eq!(round.play(4).unwrap(), RoundState::InProgress);
/// assert_eq!(round.current_mark(), Mark::X);
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    board: Board,
    current: Mark,
    state: RoundState,
    moves: Vec<MoveRecord>,
}

impl Round {
    /// Fresh round with an empty board; `opening` moves first.
    pub fn new(opening: Mark) -> Self {
        Self {
            board: Board::new(),
            current: opening,
            state: RoundState::InProgress,
            moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark whose turn it is. Once the round is over this stays at
    /// the mark that played last.
    pub fn current_mark(&self) -> Mark {
        self.current
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        !matches!(self.state, RoundState::InProgress)
    }

    /// Play the current mark onto `index` and advance the state machine.
    /// On a non-terminal move the turn passes to the other mark.
    ///
    /// # Errors
    ///
    /// - [`GameError::RoundOver`] - the round already ended
    /// - board placement errors for an illegal index, which leave the
    ///   turn and state untouched
    pub fn play(&mut self, index: usize) -> Result<RoundState, GameError> {
        if self.is_over() {
            return Err(GameError::RoundOver);
        }
        self.board.place(index, self.current)?;
        self.moves.push(MoveRecord {
            turn: self.moves.len() + 1,
            mark: self.current,
            index,
        });
        if self.board.check_win(index, self.current) {
            self.state = RoundState::Won(self.current);
        } else if self.board.is_full() {
            self.state = RoundState::Tied;
        } else {
            self.current = self.current.other();
        }
        Ok(self.state)
    }

    /// Outcome of the round, `None` while still in progress.
    pub fn result(&self) -> Option<RoundResult> {
        match self.state {
            RoundState::InProgress => None,
            RoundState::Won(mark) => Some(RoundResult::Win(mark)),
            RoundState::Tied => Some(RoundResult::Tie),
        }
    }

    /// Consume the round into a timestamped transcript.
    pub fn into_record(self) -> RoundRecord {
        let result = self.result();
        RoundRecord::stamped(self.moves, result)
    }
}
