//! Snapshot history for a game session.
//!
//! The history stores one full board snapshot per move rather than diffs,
//! so jumping to any step is an O(1) lookup. It always contains at least
//! the root record (empty board, no origin).

use crate::board::{Board, Coordinate};
use serde::{Deserialize, Serialize};

/// One entry in the history: the board after a move, plus where the mark
/// that produced it was placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    board: Board,
    origin: Option<Coordinate>,
}

impl MoveRecord {
    /// The pre-game record: empty board, no origin.
    pub(crate) fn root() -> Self {
        Self {
            board: Board::new(),
            origin: None,
        }
    }

    /// Creates a record for a placed mark.
    pub(crate) fn new(board: Board, origin: Coordinate) -> Self {
        Self {
            board,
            origin: Some(origin),
        }
    }

    /// Returns the board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns where the mark producing this snapshot was placed.
    /// `None` only for the root record.
    pub fn origin(&self) -> Option<Coordinate> {
        self.origin
    }
}

/// Ordered list of move records, rooted at the empty board.
///
/// Grows by one record per accepted move and is truncated when a new move
/// is made from a past step (the abandoned future is discarded, not kept
/// as a branch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    records: Vec<MoveRecord>,
}

impl History {
    /// Creates a history containing only the root record.
    pub fn new() -> Self {
        Self {
            records: vec![MoveRecord::root()],
        }
    }

    /// Number of records, including the root. Always at least 1.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: the root record is never removed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at the given step, if it exists.
    pub fn get(&self, step: usize) -> Option<&MoveRecord> {
        self.records.get(step)
    }

    /// Returns all records in order.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Returns the most recent record.
    pub fn last(&self) -> &MoveRecord {
        self.records.last().expect("history always has a root record")
    }

    /// Drops every record after `step`, keeping `step + 1` records.
    pub(crate) fn truncate_after(&mut self, step: usize) {
        self.records.truncate(step + 1);
    }

    /// Appends a record.
    pub(crate) fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
