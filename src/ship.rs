//! Ship definitions and the grid coordinates they occupy.

use core::fmt;
use core::str::FromStr;

use crate::common::BoardError;

/// A cell on the grid, zero-indexed by `row` and `col`.
///
/// Positions are written as a row letter followed by a 1-indexed column, so
/// `Point::new(2, 5)` displays as `C6` and `"C6".parse()` gives it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match row_letter(self.row) {
            Some(letter) => write!(f, "{}{}", letter, self.col + 1),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

impl FromStr for Point {
    type Err = BoardError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let text = input.trim().to_ascii_uppercase();
        let invalid = || BoardError::InvalidPosition(input.trim().to_string());

        let mut chars = text.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        if !letter.is_ascii_uppercase() {
            return Err(invalid());
        }
        let row = (letter as u8 - b'A') as usize;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let col: usize = digits.parse().map_err(|_| invalid())?;
        // Column numbers are 1-indexed; `A0` names no cell at all.
        if col == 0 {
            return Err(invalid());
        }
        Ok(Point::new(row, col - 1))
    }
}

/// Convert position from `C6` notation to `Point { row: 2, col: 5 }`.
pub fn convert_position(input: &str) -> Result<Point, BoardError> {
    input.parse()
}

/// Letter used to label `row`, if the alphabet reaches that far.
pub fn row_letter(row: usize) -> Option<char> {
    u8::try_from(row)
        .ok()
        .filter(|&r| r < 26)
        .map(|r| (b'A' + r) as char)
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Extends along columns.
    Horizontal,
    /// Extends along rows.
    Vertical,
}

impl FromStr for Orientation {
    type Err = BoardError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_uppercase().as_str() {
            "H" => Ok(Orientation::Horizontal),
            "V" => Ok(Orientation::Vertical),
            _ => Err(BoardError::InvalidOrientation(input.trim().to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.pad("H"),
            Orientation::Vertical => f.pad("V"),
        }
    }
}

/// An immutable ship placement: `length` contiguous cells from `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ship {
    start: Point,
    length: usize,
    orientation: Orientation,
}

impl Ship {
    /// Describe a ship. `length` must be at least 1.
    pub fn new(start: Point, length: usize, orientation: Orientation) -> Self {
        debug_assert!(length > 0, "ships have at least one cell");
        Self {
            start,
            length,
            orientation,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Last cell covered by the ship, clamped to `usize::MAX` coordinates.
    pub fn end(&self) -> Point {
        let Point { row, col } = self.start;
        let last = self.length.saturating_sub(1);
        match self.orientation {
            Orientation::Horizontal => Point::new(row, col.saturating_add(last)),
            Orientation::Vertical => Point::new(row.saturating_add(last), col),
        }
    }

    /// Cells covered by the ship, from `start` outwards.
    ///
    /// Stops early if a coordinate would pass `usize::MAX`; such a ship can never fit
    /// on a board anyway.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.length).map_while(move |i| self.cell(i))
    }

    /// Whether the ship covers `point`, without expanding its cells.
    pub fn contains(&self, point: Point) -> bool {
        let Point { row, col } = self.start;
        match self.orientation {
            Orientation::Horizontal => {
                point.row == row && point.col >= col && point.col - col < self.length
            }
            Orientation::Vertical => {
                point.col == col && point.row >= row && point.row - row < self.length
            }
        }
    }

    fn cell(&self, offset: usize) -> Option<Point> {
        let Point { row, col } = self.start;
        match self.orientation {
            Orientation::Horizontal => col.checked_add(offset).map(|col| Point::new(row, col)),
            Orientation::Vertical => row.checked_add(offset).map(|row| Point::new(row, col)),
        }
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} ({})", self.start, self.orientation, self.length)
    }
}
