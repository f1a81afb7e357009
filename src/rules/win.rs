//! Win detection logic.

use crate::board::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. A `None` result does not distinguish a draw
/// from a game still in progress; use [`super::is_full`] for that.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Some(Square::Empty) && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Some(Square::Occupied(player)) => Some(player),
                _ => None,
            };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn board_with(positions: &[usize], player: Player) -> Board {
        let mut board = Board::new();
        for &pos in positions {
            board
                .set(pos, Square::Occupied(player))
                .expect("position in range");
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_each_player() {
        for player in Player::iter() {
            for line in LINES {
                let board = board_with(&line, player);
                assert_eq!(check_winner(&board), Some(player), "line {line:?}");
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[0, 1], Player::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_no_winner() {
        let mut board = board_with(&[0, 1], Player::X);
        board.set(2, Square::Occupied(Player::O)).expect("in range");
        assert_eq!(check_winner(&board), None);
    }
}
