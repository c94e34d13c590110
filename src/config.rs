use crate::common::BoardError;

/// Default width and height of each board.
pub const BOARD_SIZE: usize = 9;

/// Largest board whose rows can still be labelled `A`..`Z`.
pub const MAX_BOARD_SIZE: usize = 26;

/// Ship lengths every player places, in placement order.
pub const FLEET: [usize; 6] = [7, 5, 4, 4, 3, 2];

/// Validated settings for a new match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    size: usize,
    fleet: Vec<usize>,
}

impl GameConfig {
    /// Standard fleet on a `size`×`size` board.
    ///
    /// The board must hold the longest ship and stay within the lettered rows.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Self::with_fleet(size, FLEET.to_vec())
    }

    /// Custom fleet, used by tests that want short games.
    pub fn with_fleet(size: usize, fleet: Vec<usize>) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidConfig(format!(
                "board size must be between 1 and {}, got {}",
                MAX_BOARD_SIZE, size
            )));
        }
        if fleet.is_empty() {
            return Err(BoardError::InvalidConfig("fleet is empty".to_string()));
        }
        if let Some(&len) = fleet.iter().find(|&&len| len == 0 || len > size) {
            return Err(BoardError::InvalidConfig(format!(
                "ship of length {} does not fit on a {}x{} board",
                len, size, size
            )));
        }
        Ok(Self { size, fleet })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            fleet: FLEET.to_vec(),
        }
    }
}
