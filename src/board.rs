//! Core domain types for the 3x3 board.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// A (row, column) cell address, both in range 0-2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// Row index (0 = top).
    pub row: usize,
    /// Column index (0 = left).
    pub col: usize,
}

impl Coordinate {
    /// Converts a flat board index (0-8, row-major) into a coordinate.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < 9 {
            Some(Self {
                row: index / 3,
                col: index % 3,
            })
        } else {
            None
        }
    }

    /// Converts the coordinate back to a flat board index (0-8).
    pub fn to_index(self) -> usize {
        self.row * 3 + self.col
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 board snapshot.
///
/// Indexed 0-8 in row-major order. Snapshots are cheap to clone and the
/// session history stores one full snapshot per move rather than diffs,
/// so any historical state is an O(1) lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: usize, square: Square) -> Result<(), &'static str> {
        if pos >= 9 {
            return Err("Position out of bounds");
        }
        self.squares[pos] = square;
        Ok(())
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => '.',
                    Square::Occupied(Player::X) => 'X',
                    Square::Occupied(Player::O) => 'O',
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
        assert_eq!(Player::X.opponent().opponent(), Player::X);
    }

    #[test]
    fn test_is_empty() {
        let mut board = Board::new();
        assert!(board.is_empty(4));
        board.set(4, Square::Occupied(Player::O)).expect("in range");
        assert!(!board.is_empty(4));
        // Out-of-range positions are never considered empty.
        assert!(!board.is_empty(9));
    }

    #[test]
    fn test_coordinate_from_index() {
        assert_eq!(Coordinate::from_index(0), Some(Coordinate { row: 0, col: 0 }));
        assert_eq!(Coordinate::from_index(4), Some(Coordinate { row: 1, col: 1 }));
        assert_eq!(Coordinate::from_index(8), Some(Coordinate { row: 2, col: 2 }));
        assert_eq!(Coordinate::from_index(9), None);
    }

    #[test]
    fn test_coordinate_round_trip() {
        for index in 0..9 {
            let coord = Coordinate::from_index(index).expect("index in range");
            assert_eq!(coord.to_index(), index);
        }
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::new();
        assert!(board.set(9, Square::Occupied(Player::X)).is_err());
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display_grid() {
        let mut board = Board::new();
        board.set(0, Square::Occupied(Player::X)).expect("in range");
        board.set(4, Square::Occupied(Player::O)).expect("in range");
        assert_eq!(board.display(), "X|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|.");
    }
}
