//! One player's board: placed ships, guesses received and derived hit/miss state.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use log::debug;
use rand::Rng;

use crate::common::{BoardError, GuessResult};
use crate::ship::{row_letter, Orientation, Point, Ship};

/// Stable identifier handed out by [`Board::place`]. Never reused within a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShipId(usize);

impl ShipId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a cell looks like to whoever is viewing the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Unguessed water, or a hidden ship.
    Empty,
    /// Unguessed ship cell on a revealed board.
    Ship,
    /// Guessed ship cell.
    Hit,
    /// Guessed water.
    Miss,
}

impl Marker {
    pub fn symbol(self) -> char {
        match self {
            Marker::Empty => '-',
            Marker::Ship => 'S',
            Marker::Hit => 'H',
            Marker::Miss => 'M',
        }
    }
}

/// A rendered cell: its marker and whether it was the latest guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub marker: Marker,
    pub recent: bool,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.recent {
            write!(f, "[{}]", self.marker.symbol())
        } else {
            write!(f, " {} ", self.marker.symbol())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PlacedShip {
    ship: Ship,
    health: usize,
}

/// Grid state for a single player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    ships: BTreeMap<ShipId, PlacedShip>,
    next_id: usize,
    guesses: Vec<Point>,
    guessed: BTreeSet<Point>,
    hits: usize,
}

impl Board {
    /// Create an empty `size`×`size` board (no ships placed).
    pub fn new(size: usize) -> Self {
        Board {
            size,
            ships: BTreeMap::new(),
            next_id: 0,
            guesses: Vec::new(),
            guessed: BTreeSet::new(),
            hits: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of guesses that landed on a ship, sinking guesses included.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Guesses received, oldest first.
    pub fn guesses(&self) -> &[Point] {
        &self.guesses
    }

    pub fn last_guess(&self) -> Option<Point> {
        self.guesses.last().copied()
    }

    /// Returns `true` if `point` lies on the grid.
    pub fn is_on_board(&self, point: Point) -> bool {
        point.row < self.size && point.col < self.size
    }

    /// Returns `true` if every cell of `ship` lies on the grid.
    pub fn fits_on_board(&self, ship: &Ship) -> bool {
        let Point { row, col } = ship.start();
        let (along, across) = match ship.orientation() {
            Orientation::Horizontal => (col, row),
            Orientation::Vertical => (row, col),
        };
        across < self.size && ship.length() <= self.size && along <= self.size - ship.length()
    }

    /// Expand a ship into the set of cells it covers.
    pub fn occupied_cells(ship: &Ship) -> BTreeSet<Point> {
        ship.cells().collect()
    }

    /// Returns `true` if `ship` would overlap a ship already on the board.
    pub fn collides(&self, ship: &Ship) -> bool {
        self.ships
            .values()
            .any(|placed| ship.cells().any(|cell| placed.ship.contains(cell)))
    }

    /// Checked form of [`fits_on_board`](Self::fits_on_board) and
    /// [`collides`](Self::collides).
    pub fn validate_placement(&self, ship: &Ship) -> Result<(), BoardError> {
        if !self.fits_on_board(ship) {
            return Err(BoardError::ShipOutOfBounds);
        }
        if self.collides(ship) {
            return Err(BoardError::ShipCollision);
        }
        Ok(())
    }

    /// Record `ship` with full health and return its id.
    ///
    /// # Contract
    ///
    /// The caller must have checked `fits_on_board(ship) && !collides(ship)` (or
    /// [`validate_placement`](Self::validate_placement)). Nothing is re-checked here:
    /// an overlapping or out-of-bounds ship is stored as given, after which guess
    /// resolution and [`all_sunk`](Self::all_sunk) no longer mean anything.
    pub fn place(&mut self, ship: Ship) -> ShipId {
        let id = ShipId(self.next_id);
        self.next_id += 1;
        self.ships.insert(
            id,
            PlacedShip {
                ship,
                health: ship.length(),
            },
        );
        debug!("placed ship {:?} at {}", id, ship);
        id
    }

    /// Remove a previously placed ship, returning it.
    pub fn remove(&mut self, id: ShipId) -> Result<Ship, BoardError> {
        let placed = self.ships.remove(&id).ok_or(BoardError::NotFound)?;
        debug!("removed ship {:?} at {}", id, placed.ship);
        Ok(placed.ship)
    }

    pub fn ship(&self, id: ShipId) -> Option<Ship> {
        self.ships.get(&id).map(|placed| placed.ship)
    }

    /// Placed ships with their remaining health, in placement order.
    pub fn ships(&self) -> impl Iterator<Item = (ShipId, Ship, usize)> + '_ {
        self.ships
            .iter()
            .map(|(&id, placed)| (id, placed.ship, placed.health))
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    pub fn is_sunk(&self, id: ShipId) -> bool {
        self.ships.get(&id).is_some_and(|placed| placed.health == 0)
    }

    pub fn sunk_count(&self) -> usize {
        self.ships.values().filter(|placed| placed.health == 0).count()
    }

    /// Returns `true` if `point` has already been guessed.
    pub fn has_been_guessed(&self, point: Point) -> bool {
        self.guessed.contains(&point)
    }

    /// Record a guess at `point` and report what it hit.
    ///
    /// # Contract
    ///
    /// `point` must be on the board and not guessed before. Callers check
    /// [`is_on_board`](Self::is_on_board) and
    /// [`has_been_guessed`](Self::has_been_guessed) first; a repeated guess would be
    /// recorded twice and damage the same ship again.
    pub fn resolve_guess(&mut self, point: Point) -> GuessResult {
        self.guesses.push(point);
        self.guessed.insert(point);

        let hit = self
            .ships
            .iter_mut()
            .find(|(_, placed)| placed.ship.contains(point));
        let result = match hit {
            Some((id, placed)) => {
                placed.health = placed.health.saturating_sub(1);
                self.hits += 1;
                if placed.health == 0 {
                    debug!("guess {} sank ship {:?}", point, id);
                    GuessResult::Sunk
                } else {
                    GuessResult::Hit
                }
            }
            None => GuessResult::Miss,
        };
        debug!("guess {} -> {:?}", point, result);
        result
    }

    /// Returns `true` when every placed ship is sunk.
    ///
    /// Vacuously `true` on a board without ships, so only ask once the fleet is placed.
    pub fn all_sunk(&self) -> bool {
        self.ships.values().all(|placed| placed.health == 0)
    }

    /// Semantic view of the grid, one iterator per row.
    ///
    /// Ships are only shown as [`Marker::Ship`] when `reveal_ships` is set; guessed
    /// cells are always visible.
    pub fn cells(
        &self,
        reveal_ships: bool,
    ) -> impl Iterator<Item = impl Iterator<Item = Cell> + '_> + '_ {
        let last = self.last_guess();
        (0..self.size).map(move |row| {
            (0..self.size).map(move |col| {
                let point = Point::new(row, col);
                let occupied = self.ships.values().any(|placed| placed.ship.contains(point));
                let guessed = self.has_been_guessed(point);
                let marker = match (occupied, guessed) {
                    (true, true) => Marker::Hit,
                    (true, false) if reveal_ships => Marker::Ship,
                    (false, true) => Marker::Miss,
                    _ => Marker::Empty,
                };
                Cell {
                    marker,
                    recent: last == Some(point),
                }
            })
        })
    }

    /// Text rows for the board: a column header, then one line per row.
    ///
    /// Recomputed on every call and never mutates the board.
    pub fn render_rows(&self, reveal_ships: bool) -> impl Iterator<Item = String> + '_ {
        let header = (1..=self.size).fold(String::from("  "), |mut line, col| {
            line.push_str(&format!("{:^3}", col));
            line
        });
        let rows = self.cells(reveal_ships).enumerate().map(|(row, cells)| {
            let mut line = String::new();
            line.push(row_letter(row).unwrap_or('?'));
            line.push(' ');
            for cell in cells {
                line.push_str(&cell.to_string());
            }
            line
        });
        std::iter::once(header).chain(rows)
    }

    /// Returns a random valid placement for a ship of `length`.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<Ship, BoardError> {
        if length == 0 || length > self.size {
            return Err(BoardError::UnableToPlaceShip);
        }
        let mut attempts = 0;
        while attempts < 100 {
            attempts += 1;
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orientation {
                Orientation::Horizontal => (self.size - 1, self.size - length),
                Orientation::Vertical => (self.size - length, self.size - 1),
            };
            let start = Point::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
            let ship = Ship::new(start, length, orientation);
            if self.validate_placement(&ship).is_ok() {
                return Ok(ship);
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_display_marks_recent() {
        let plain = Cell {
            marker: Marker::Miss,
            recent: false,
        };
        let recent = Cell {
            marker: Marker::Hit,
            recent: true,
        };
        assert_eq!(plain.to_string(), " M ");
        assert_eq!(recent.to_string(), "[H]");
    }

    #[test]
    fn ids_are_not_reused_after_remove() {
        let mut board = Board::new(5);
        let first = board.place(Ship::new(Point::new(0, 0), 2, Orientation::Horizontal));
        board.remove(first).unwrap();
        let second = board.place(Ship::new(Point::new(0, 0), 2, Orientation::Horizontal));
        assert_ne!(first, second);
        assert_eq!(board.remove(first), Err(BoardError::NotFound));
    }
}
