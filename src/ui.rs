//! Text rendering helpers for the hot-seat front end.

use std::io::{self, Write};

use crate::game::{Match, Player};

/// Width of banners and separators.
pub const LINE_LENGTH: usize = 64;
/// Printed between the two boards in the side-by-side view.
pub const BOARD_SEPARATOR: &str = "   |   ";
/// Input prompt.
pub const PROMPT: &str = "> ";

/// Pad `text` with spaces so it sits in the middle of `width` columns.
pub fn center(text: &str, width: usize) -> String {
    let length = text.chars().count();
    if length >= width {
        return text.to_string();
    }
    let start = (width - length) / 2;
    let end = width - length - start;
    format!("{}{}{}", " ".repeat(start), text, " ".repeat(end))
}

/// Push earlier output off screen so the next player can't see it.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{}", "\n".repeat(100))
}

pub fn print_welcome<W: Write>(out: &mut W) -> io::Result<()> {
    let rule = "#".repeat(LINE_LENGTH);
    writeln!(out, "{}\n", rule)?;
    writeln!(out, "{}", center("Welcome to battleships!!!", LINE_LENGTH))?;
    writeln!(out)?;
    writeln!(out, "{}", center("A game of naval battles", LINE_LENGTH))?;
    writeln!(out, "{}", center("and sea adventures.", LINE_LENGTH))?;
    writeln!(out, "\n")?;
    writeln!(out, "{}", center("Hit ENTER to begin.", LINE_LENGTH))?;
    writeln!(out, "\n{}", rule)
}

/// Print `player`'s own board (ships shown) next to the opponent's (ships hidden),
/// each headed by a name and the score against it.
pub fn print_both_boards<W: Write>(out: &mut W, game: &Match, player: Player) -> io::Result<()> {
    let other = player.other();
    let own = game.board(player);
    let width = 2 + 3 * own.size();

    let own_header = format!("{}  | Score: {}", game.name(player), game.score(player));
    let other_header = format!("{}  | Score: {}", game.name(other), game.score(other));
    writeln!(
        out,
        "{}{}{}",
        center(&own_header, width),
        " ".repeat(BOARD_SEPARATOR.len()),
        center(&other_header, width)
    )?;

    let theirs = game.board(other).render_rows(false);
    for (mine, theirs) in own.render_rows(true).zip(theirs) {
        writeln!(out, "{:<width$}{}{}", mine, BOARD_SEPARATOR, theirs, width = width)?;
    }
    Ok(())
}

/// Print a single board with its ships visible, used during setup.
pub fn print_board<W: Write>(out: &mut W, game: &Match, player: Player) -> io::Result<()> {
    for row in game.board(player).render_rows(true) {
        writeln!(out, "{}", row)?;
    }
    Ok(())
}

/// One line summarizing how much of each fleet is left.
pub fn fleet_status(game: &Match) -> String {
    Player::ALL
        .iter()
        .map(|&p| {
            let board = game.board(p);
            format!(
                "{}: {}/{} ships sunk",
                game.name(p),
                board.sunk_count(),
                board.ship_count()
            )
        })
        .collect::<Vec<_>>()
        .join("   ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_pads_both_sides() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(center("too long", 3), "too long");
    }

    #[test]
    fn both_boards_line_up() {
        let game = Match::demo();
        let mut out = Vec::new();
        print_both_boards(&mut out, &game, Player::A).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        // header, column numbers, one line per row
        assert_eq!(lines.len(), 2 + game.board(Player::A).size());
        assert!(lines[0].contains("Marcus  | Score: 0"));
        assert!(lines[0].contains("Rose  | Score: 0"));
        // own ships visible on the left only
        let row_b = lines[3];
        let (left, right) = row_b.split_once(BOARD_SEPARATOR).unwrap();
        assert!(left.contains('S'));
        assert!(!right.contains('S'));
    }

    #[test]
    fn fleet_status_counts_ships() {
        let game = Match::demo();
        assert_eq!(
            fleet_status(&game),
            "Marcus: 0/2 ships sunk   Rose: 0/2 ships sunk"
        );
    }
}
