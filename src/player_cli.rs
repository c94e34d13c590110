//! Hot-seat terminal front end: two players share one keyboard and pass it between turns.

use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::Context;
use log::debug;
use rand::rngs::SmallRng;
use thiserror::Error;

use crate::{
    common::GuessResult,
    game::{Match, Phase, Player},
    ship::{Orientation, Point},
    ui::{self, PROMPT},
};

/// Input ran out before the match finished.
#[derive(Debug, Error)]
#[error("input closed")]
struct InputClosed;

/// Drives a [`Match`] from line-based input, writing every screen to `out`.
pub struct HotSeat<R, W> {
    game: Match,
    input: R,
    out: W,
    rng: SmallRng,
    buf: String,
}

impl<R: BufRead, W: Write> HotSeat<R, W> {
    pub fn new(game: Match, input: R, out: W, rng: SmallRng) -> Self {
        Self {
            game,
            input,
            out,
            rng,
            buf: String::new(),
        }
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Play the match to the end. Returns the winner, or `None` if input ran out first.
    pub fn run(&mut self) -> anyhow::Result<Option<Player>> {
        match self.play() {
            Ok(winner) => Ok(Some(winner)),
            Err(err) if err.is::<InputClosed>() => {
                debug!("input closed during {:?}", self.game.phase());
                writeln!(self.out)?;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn play(&mut self) -> anyhow::Result<Player> {
        ui::clear_screen(&mut self.out)?;
        ui::print_welcome(&mut self.out)?;
        self.read_line()?;

        while let Phase::Setup(player) = self.game.phase() {
            self.set_up(player)?;
        }
        loop {
            match self.game.phase() {
                Phase::Round(player) => self.round(player)?,
                Phase::GameOver(winner) => {
                    ui::print_both_boards(&mut self.out, &self.game, winner)?;
                    writeln!(self.out, "{} is the WINNER!!!", self.game.name(winner))?;
                    return Ok(winner);
                }
                Phase::Setup(_) => anyhow::bail!("match went back to setup"),
            }
        }
    }

    fn set_up(&mut self, player: Player) -> anyhow::Result<()> {
        ui::clear_screen(&mut self.out)?;
        writeln!(
            self.out,
            "Pass the computer to player {}. Hit ENTER when ready.",
            player
        )?;
        self.read_line()?;

        writeln!(self.out, "What would you like to be called?")?;
        let name = self.read_line()?;
        if !name.is_empty() {
            self.game.set_name(player, name);
        }
        ui::clear_screen(&mut self.out)?;

        while self.game.phase() == Phase::Setup(player) {
            self.set_ship(player)?;
        }
        Ok(())
    }

    /// Place one ship, retrying until the player confirms a valid placement.
    fn set_ship(&mut self, player: Player) -> anyhow::Result<()> {
        let length = self
            .game
            .pending_length()
            .context("no ship left to place")?;
        let number = self.game.fleet_cursor() + 1;
        loop {
            ui::print_board(&mut self.out, &self.game, player)?;
            writeln!(
                self.out,
                "\nHere is your board!\nShip number {} is {} (length: {})\n\
                 Enter the start point of the ship (i.e., A1), or press ENTER for a random spot",
                number,
                "S".repeat(length),
                length
            )?;
            let start = self.read_line()?;

            let placed = if start.is_empty() {
                self.game.place_random(&mut self.rng)
            } else {
                writeln!(
                    self.out,
                    "Enter the orientation of the ship\n(H)orizontal or (V)ertical"
                )?;
                let orientation = self.read_line()?;
                start
                    .parse::<Point>()
                    .and_then(|point| Ok((point, orientation.parse::<Orientation>()?)))
                    .and_then(|(point, orientation)| self.game.place_ship(point, orientation))
            };
            if let Err(err) = placed {
                self.print_error(err)?;
                continue;
            }

            ui::print_board(&mut self.out, &self.game, player)?;
            writeln!(self.out, "Would you like to keep the ship? (C) for confirm.")?;
            if self.read_line()?.eq_ignore_ascii_case("c") {
                self.game.confirm()?;
                return Ok(());
            }
            self.game.retract()?;
        }
    }

    /// One player's turn: keep guessing until a miss or the game is won.
    fn round(&mut self, player: Player) -> anyhow::Result<()> {
        let name = self.game.name(player).to_string();
        ui::clear_screen(&mut self.out)?;
        writeln!(self.out, "Pass the computer to {}. Hit ENTER when ready.", name)?;
        self.read_line()?;

        ui::clear_screen(&mut self.out)?;
        writeln!(self.out, "Hello {}.", name)?;
        if let Some(last) = self.game.last_report().filter(|r| r.player != player) {
            writeln!(
                self.out,
                "{} last guessed {} and {}.",
                self.game.name(last.player),
                last.point,
                match last.result {
                    GuessResult::Miss => "missed",
                    GuessResult::Hit => "hit a ship",
                    GuessResult::Sunk => "sunk a ship",
                }
            )?;
        }

        loop {
            ui::print_both_boards(&mut self.out, &self.game, player)?;
            writeln!(self.out, "{}", ui::fleet_status(&self.game))?;
            writeln!(self.out, "Please enter your guess.")?;
            let guess = self.read_line()?;

            let report = match self.game.guess_str(&guess) {
                Ok(report) => report,
                Err(err) => {
                    self.print_error(err)?;
                    continue;
                }
            };
            match report.result {
                GuessResult::Hit => writeln!(self.out, "You hit a ship! :)")?,
                GuessResult::Sunk => writeln!(self.out, "You SUNK a ship! :)")?,
                GuessResult::Miss => writeln!(self.out, "You missed any ships... :'(")?,
            }
            if let Phase::GameOver(_) = report.phase {
                return Ok(());
            }
            if !report.extra_turn() {
                writeln!(self.out, "Hit ENTER to end your turn.")?;
                self.read_line()?;
                return Ok(());
            }
        }
    }

    fn print_error(&mut self, error: impl Display) -> anyhow::Result<()> {
        writeln!(self.out, "Error - {}. Please try again.", error)?;
        Ok(())
    }

    /// Prompt and read one trimmed line.
    fn read_line(&mut self) -> anyhow::Result<String> {
        write!(self.out, "{}", PROMPT)?;
        self.out.flush()?;
        self.buf.clear();
        if self.input.read_line(&mut self.buf)? == 0 {
            return Err(InputClosed.into());
        }
        Ok(self.buf.trim().to_string())
    }
}
