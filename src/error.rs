//! Error types for the session controller.

/// Error that can occur when navigating a session's history.
///
/// Applying a move has no error channel at all: invalid moves are
/// silently ignored by [`crate::GameSession::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The requested step does not exist in the history.
    #[display("Step {step} is out of range (history has {len} records)")]
    StepOutOfRange {
        /// The step that was requested.
        step: usize,
        /// Number of records in the history.
        len: usize,
    },
}

impl std::error::Error for SessionError {}
