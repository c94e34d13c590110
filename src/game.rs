//! Turn engine for a two-player match: fleet setup, alternating rounds and the win check.

use core::fmt;

use log::{debug, info};
use rand::Rng;

use crate::{
    board::{Board, ShipId},
    common::{BoardError, GuessResult},
    config::GameConfig,
    ship::{Orientation, Point, Ship},
};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    /// The opponent of this player.
    pub fn other(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::A => f.pad("A"),
            Player::B => f.pad("B"),
        }
    }
}

/// Where the match currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The player is placing their fleet.
    Setup(Player),
    /// The player is guessing at the opponent's board.
    Round(Player),
    /// The player sank the whole opposing fleet.
    GameOver(Player),
}

/// Outcome of one accepted guess, for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessReport {
    /// Who fired.
    pub player: Player,
    pub point: Point,
    pub result: GuessResult,
    /// Phase after the guess was applied.
    pub phase: Phase,
}

impl GuessReport {
    /// Whether the guessing player keeps the turn.
    pub fn extra_turn(&self) -> bool {
        self.phase == Phase::Round(self.player)
    }
}

/// Two boards, the players' names and the turn cursor.
#[derive(Debug, Clone)]
pub struct Match {
    boards: [Board; 2],
    names: [String; 2],
    fleet: Vec<usize>,
    phase: Phase,
    fleet_cursor: usize,
    tentative: Option<ShipId>,
    last_report: Option<GuessReport>,
}

impl Match {
    /// Start a match in the setup phase, with player A placing first.
    pub fn new(config: &GameConfig, names: [String; 2]) -> Self {
        let boards = [Board::new(config.size()), Board::new(config.size())];
        debug!("new {}x{} match, fleet {:?}", config.size(), config.size(), config.fleet());
        Self {
            boards,
            names,
            fleet: config.fleet().to_vec(),
            phase: Phase::Setup(Player::A),
            fleet_cursor: 0,
            tentative: None,
            last_report: None,
        }
    }

    /// Start a match from boards whose ships are already placed, with A to guess.
    ///
    /// The caller guarantees both boards hold at least one ship; an empty board
    /// would count as already defeated.
    pub fn with_boards(names: [String; 2], boards: [Board; 2]) -> Self {
        let fleet = boards[0].ships().map(|(_, ship, _)| ship.length()).collect();
        Self {
            boards,
            names,
            fleet,
            phase: Phase::Round(Player::A),
            fleet_cursor: 0,
            tentative: None,
            last_report: None,
        }
    }

    /// Quick match for trying out turns: two length-4 ships per side at B2 and C2.
    pub fn demo() -> Self {
        let config = GameConfig::default();
        let boards = Player::ALL.map(|_| {
            let mut board = Board::new(config.size());
            board.place(Ship::new(Point::new(1, 1), 4, Orientation::Horizontal));
            board.place(Ship::new(Point::new(2, 1), 4, Orientation::Horizontal));
            board
        });
        Self::with_boards(["Marcus".to_string(), "Rose".to_string()], boards)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player whose input the match is waiting for; the winner once it is over.
    pub fn active_player(&self) -> Player {
        match self.phase {
            Phase::Setup(p) | Phase::Round(p) | Phase::GameOver(p) => p,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::GameOver(p) => Some(p),
            _ => None,
        }
    }

    pub fn name(&self, player: Player) -> &str {
        &self.names[player.index()]
    }

    pub fn set_name(&mut self, player: Player, name: impl Into<String>) {
        self.names[player.index()] = name.into();
    }

    /// The board owned by `player`, holding their ships and the opponent's guesses.
    pub fn board(&self, player: Player) -> &Board {
        &self.boards[player.index()]
    }

    /// Hits `player` has landed on the opponent's fleet.
    pub fn score(&self, player: Player) -> usize {
        self.board(player.other()).hits()
    }

    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }

    /// Index in the fleet of the ship currently being placed.
    pub fn fleet_cursor(&self) -> usize {
        self.fleet_cursor
    }

    pub fn last_report(&self) -> Option<GuessReport> {
        self.last_report
    }

    /// Length of the ship the setup player is placing, outside setup `None`.
    pub fn pending_length(&self) -> Option<usize> {
        match self.phase {
            Phase::Setup(_) => self.fleet.get(self.fleet_cursor).copied(),
            _ => None,
        }
    }

    /// Ship placed but not yet confirmed.
    pub fn tentative(&self) -> Option<Ship> {
        let player = self.setup_player().ok()?;
        self.tentative.and_then(|id| self.board(player).ship(id))
    }

    /// Place the pending ship tentatively, replacing any earlier unconfirmed ship.
    ///
    /// The new ship only has to avoid the confirmed ships. On error the earlier
    /// tentative ship stays where it was.
    pub fn place_ship(&mut self, start: Point, orientation: Orientation) -> Result<Ship, BoardError> {
        let player = self.setup_player()?;
        let length = self.pending_length().ok_or(BoardError::WrongPhase)?;
        let ship = Ship::new(start, length, orientation);
        self.replace_tentative(player, |board| board.validate_placement(&ship).map(|()| ship))
    }

    /// Place the pending ship tentatively at a random valid spot.
    pub fn place_random<R: Rng>(&mut self, rng: &mut R) -> Result<Ship, BoardError> {
        let player = self.setup_player()?;
        let length = self.pending_length().ok_or(BoardError::WrongPhase)?;
        self.replace_tentative(player, |board| board.random_placement(rng, length))
    }

    /// Take back the tentative ship.
    pub fn retract(&mut self) -> Result<Ship, BoardError> {
        let player = self.setup_player()?;
        let id = self.tentative.take().ok_or(BoardError::NotFound)?;
        self.boards[player.index()].remove(id)
    }

    /// Keep the tentative ship and move on to the next ship, player or phase.
    pub fn confirm(&mut self) -> Result<Phase, BoardError> {
        let player = self.setup_player()?;
        self.tentative.take().ok_or(BoardError::NothingToConfirm)?;
        self.fleet_cursor += 1;
        if self.fleet_cursor >= self.fleet.len() {
            self.fleet_cursor = 0;
            self.phase = match player {
                Player::A => Phase::Setup(Player::B),
                Player::B => Phase::Round(Player::A),
            };
            debug!("player {} finished setup, now {:?}", player, self.phase);
        }
        Ok(self.phase)
    }

    /// Fire at the opponent of the active player.
    ///
    /// Off-board and repeated guesses are rejected without touching any state.
    pub fn guess(&mut self, point: Point) -> Result<GuessReport, BoardError> {
        let player = match self.phase {
            Phase::Round(p) => p,
            Phase::GameOver(_) => return Err(BoardError::GameOver),
            Phase::Setup(_) => return Err(BoardError::WrongPhase),
        };
        let target = &mut self.boards[player.other().index()];
        if !target.is_on_board(point) {
            return Err(BoardError::OutOfBounds(point));
        }
        if target.has_been_guessed(point) {
            return Err(BoardError::AlreadyGuessed(point));
        }

        let result = target.resolve_guess(point);
        self.phase = match result {
            GuessResult::Miss => Phase::Round(player.other()),
            GuessResult::Hit => Phase::Round(player),
            GuessResult::Sunk if target.all_sunk() => {
                info!("{} sank the last ship, {} wins", point, self.names[player.index()]);
                Phase::GameOver(player)
            }
            GuessResult::Sunk => Phase::Round(player),
        };
        let report = GuessReport {
            player,
            point,
            result,
            phase: self.phase,
        };
        self.last_report = Some(report);
        Ok(report)
    }

    /// Parse a position such as `C6` and guess it.
    pub fn guess_str(&mut self, input: &str) -> Result<GuessReport, BoardError> {
        self.guess(input.parse()?)
    }

    fn setup_player(&self) -> Result<Player, BoardError> {
        match self.phase {
            Phase::Setup(p) => Ok(p),
            Phase::GameOver(_) => Err(BoardError::GameOver),
            Phase::Round(_) => Err(BoardError::WrongPhase),
        }
    }

    /// Swap the tentative ship for the one `pick` chooses on the board without it.
    fn replace_tentative<F>(&mut self, player: Player, pick: F) -> Result<Ship, BoardError>
    where
        F: FnOnce(&Board) -> Result<Ship, BoardError>,
    {
        let board = &mut self.boards[player.index()];
        let ship = match self.tentative {
            Some(id) => {
                let mut without = board.clone();
                without.remove(id)?;
                pick(&without)?
            }
            None => pick(&*board)?,
        };
        if let Some(id) = self.tentative {
            board.remove(id)?;
        }
        self.tentative = Some(board.place(ship));
        Ok(ship)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_alternates() {
        assert_eq!(Player::A.other(), Player::B);
        assert_eq!(Player::B.other().other(), Player::B);
    }

    #[test]
    fn demo_starts_in_round_a() {
        let game = Match::demo();
        assert_eq!(game.phase(), Phase::Round(Player::A));
        assert_eq!(game.name(Player::A), "Marcus");
        assert_eq!(game.name(Player::B), "Rose");
        assert_eq!(game.fleet(), &[4, 4]);
        for player in Player::ALL {
            assert_eq!(game.board(player).ship_count(), 2);
        }
    }
}
