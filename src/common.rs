//! Common types for Battleships: board errors and guess results.

use thiserror::Error;

use crate::ship::Point;

/// Result of resolving a guess against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessResult {
    /// Guess missed all ships.
    Miss,
    /// Guess hit a ship that still has undamaged cells.
    Hit,
    /// Guess hit the last undamaged cell of a ship.
    Sunk,
}

impl GuessResult {
    /// `true` for both plain hits and sinking hits.
    pub fn is_hit(self) -> bool {
        !matches!(self, GuessResult::Miss)
    }
}

/// Errors returned by board and match operations.
///
/// Every variant is recoverable: the operation that produced it left the board and
/// match state untouched, so the caller can simply ask for new input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Text could not be parsed as a position such as `C6`.
    #[error("\"{0}\" is not a valid position (expected a row letter and column number, e.g. C6)")]
    InvalidPosition(String),
    /// Text could not be parsed as an orientation.
    #[error("\"{0}\" is not a valid orientation (expected H or V)")]
    InvalidOrientation(String),
    /// Position lies outside the grid.
    #[error("position {0} is outside of the board")]
    OutOfBounds(Point),
    /// Guess was already made at this position.
    #[error("position {0} has already been guessed")]
    AlreadyGuessed(Point),
    /// Some of the ship would fall outside the grid.
    #[error("some of the ship would fall outside of the board")]
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    #[error("the ship collides with another ship")]
    ShipCollision,
    /// Ship to remove was never placed.
    #[error("no such ship has been placed")]
    NotFound,
    /// `confirm` was called without a tentative ship.
    #[error("there is no placed ship waiting to be confirmed")]
    NothingToConfirm,
    /// Operation does not belong to the current phase of the match.
    #[error("that action is not allowed in the current phase")]
    WrongPhase,
    /// The match has already been won.
    #[error("the game is already over")]
    GameOver,
    /// Random placement ran out of attempts.
    #[error("unable to find room for the ship")]
    UnableToPlaceShip,
    /// Game configuration was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
