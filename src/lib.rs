//! Tic-tac-toe session engine with full move history and time travel.
//!
//! The crate is the state-owning core of an interactive board game: a
//! rendering layer forwards input events and re-reads state after each
//! operation, but never mutates anything itself.
//!
//! # Architecture
//!
//! - **Board**: 9-square row-major snapshot types ([`Board`], [`Player`],
//!   [`Square`], [`Coordinate`])
//! - **Rules**: pure win/draw detection over a snapshot ([`rules`])
//! - **History**: one full snapshot per move, rooted at the empty board
//!   ([`History`], [`MoveRecord`])
//! - **Session**: the controller owning history and cursor ([`GameSession`])
//!
//! # Example
//!
//! ```
//! use tictactoe_replay::{GameSession, Status, Player};
//!
//! let mut session = GameSession::new();
//! session.apply_move(0); // X
//! session.apply_move(4); // O
//! assert_eq!(session.status(), Status::NextPlayer(Player::X));
//!
//! // Time travel: revisit the first move, then branch from it.
//! session.jump_to(1)?;
//! session.apply_move(8); // O, discarding the old move at 4
//! assert_eq!(session.history().len(), 3);
//! # Ok::<(), tictactoe_replay::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod history;
mod session;

// Public rules module
pub mod rules;

// Crate-level exports - Board types
pub use board::{Board, Coordinate, Player, Square};

// Crate-level exports - Error types
pub use error::SessionError;

// Crate-level exports - History types
pub use history::{History, MoveRecord};

// Crate-level exports - Session controller
pub use session::{GameSession, MoveSummary, Status};
