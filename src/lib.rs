//! Two-player hot-seat battleships: board model, guess resolution and turn engine,
//! plus the terminal front end that drives them.

mod board;
mod common;
mod config;
mod game;
mod logging;
mod player_cli;
mod ship;
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::{init_logging, LOG_ENV};
pub use player_cli::*;
pub use ship::*;
