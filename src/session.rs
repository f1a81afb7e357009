//! Game session controller: snapshot history, cursor, and the operations
//! that drive them.
//!
//! The session owns all mutable state. A rendering layer delivers input
//! events ([`GameSession::apply_move`], [`GameSession::jump_to`]) and reads
//! the resulting state back in full after each operation ([`GameSession::board`],
//! [`GameSession::status`], [`GameSession::move_list`]); there is no diffing
//! contract. All operations run to completion synchronously.

use crate::board::{Board, Coordinate, Player, Square};
use crate::error::SessionError;
use crate::history::{History, MoveRecord};
use crate::rules;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Status of the current snapshot, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Game is ongoing; this player moves next.
    NextPlayer(Player),
    /// This player has three in a row.
    Won(Player),
    /// Board is full with no winner.
    Draw,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::NextPlayer(player) => write!(f, "Next player: {player}"),
            Status::Won(player) => write!(f, "Winner: {player}"),
            Status::Draw => write!(f, "Draw"),
        }
    }
}

/// Display descriptor for one history entry.
///
/// Carries the step index needed to invoke [`GameSession::jump_to`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSummary {
    /// Step index into the history.
    pub step: usize,
    /// Button label: "Go to game start" or "Go to move #N".
    pub label: String,
    /// Where the mark for this step was placed. `None` for step 0.
    pub origin: Option<Coordinate>,
}

impl std::fmt::Display for MoveSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.origin {
            Some(origin) => write!(f, "{} {}", self.label, origin),
            None => write!(f, "{}", self.label),
        }
    }
}

/// A single game session with full move history and time travel.
///
/// The cursor selects which record is current; the player to move is
/// derived from cursor parity (X on even steps) and is never stored, so it
/// cannot desync from the history.
#[derive(Debug, Clone, Getters)]
pub struct GameSession {
    /// Snapshot list, rooted at the empty board.
    history: History,
    /// Index of the current record, always less than the history length.
    cursor: usize,
}

impl GameSession {
    /// Creates a session with an empty board and a single root record.
    #[instrument]
    pub fn new() -> Self {
        debug!("Creating new game session");
        Self {
            history: History::new(),
            cursor: 0,
        }
    }

    /// Discards the history and starts a fresh game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting session");
        *self = Self::new();
    }

    /// Returns the record the cursor points at.
    pub fn current(&self) -> &MoveRecord {
        self.history
            .get(self.cursor)
            .expect("cursor always points into history")
    }

    /// Returns the board at the cursor.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Returns the mark to place next: X on even steps, O on odd.
    pub fn next_player(&self) -> Player {
        if self.cursor % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Places the next player's mark at `cell` (0-8, row-major).
    ///
    /// Invalid moves are silently ignored rather than rejected: nothing
    /// happens if the current board already has a winner, the cell is
    /// occupied, or the index is out of range. On success any records
    /// after the cursor are discarded first, so a move made from a past
    /// step overwrites the abandoned future.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn apply_move(&mut self, cell: usize) {
        let board = self.current().board();
        if rules::check_winner(board).is_some() {
            debug!(cell, "Ignoring move: game already won");
            return;
        }
        let Some(origin) = Coordinate::from_index(cell) else {
            warn!(cell, "Ignoring move: cell index out of range");
            return;
        };
        if !board.is_empty(cell) {
            debug!(cell, "Ignoring move: square occupied");
            return;
        }

        // Build the new snapshot before touching the history, so every
        // exit path above leaves the session untouched.
        let mark = self.next_player();
        let mut next = self.current().board().clone();
        if next.set(cell, Square::Occupied(mark)).is_err() {
            return;
        }

        // Drop the abandoned future, then append the new record.
        self.history.truncate_after(self.cursor);
        self.history.push(MoveRecord::new(next, origin));
        self.cursor = self.history.len() - 1;
        debug!(cell, mark = %mark, cursor = self.cursor, "Applied move");
    }

    /// Moves the cursor to `step` without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::StepOutOfRange`] if `step` is past the end
    /// of the history.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), SessionError> {
        let len = self.history.len();
        if step >= len {
            warn!(step, len, "Rejecting jump to out-of-range step");
            return Err(SessionError::StepOutOfRange { step, len });
        }
        self.cursor = step;
        debug!(step, "Jumped to step");
        Ok(())
    }

    /// Returns the status of the current snapshot.
    pub fn status(&self) -> Status {
        let board = self.board();
        if let Some(winner) = rules::check_winner(board) {
            Status::Won(winner)
        } else if rules::is_full(board) {
            Status::Draw
        } else {
            Status::NextPlayer(self.next_player())
        }
    }

    /// Returns one display descriptor per history entry.
    ///
    /// Recomputed from the history on every call, never cached.
    pub fn move_list(&self) -> impl Iterator<Item = MoveSummary> + '_ {
        self.history
            .records()
            .iter()
            .enumerate()
            .map(|(step, record)| {
                let label = if step == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{step}")
                };
                MoveSummary {
                    step,
                    label,
                    origin: record.origin(),
                }
            })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
