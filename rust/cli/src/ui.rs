//! Terminal rendering: the rules banner, the grid, the stats table, and
//! error output. Pure writers over an injected stream; nothing here
//! mutates game state.

use noughts_engine::board::Board;
use noughts_engine::player::Mark;
use noughts_engine::session::SessionStats;
use std::io::Write;

/// Rules banner shown once at startup, before the start/quit prompt.
pub const RULES: &str = "\
TIC-TAC-TOE

Two players take turns placing their marks on a 3x3 grid.
Cells are numbered 1 to 9, left to right, top to bottom:

+---+---+---+
| 1 | 2 | 3 |
+---+---+---+
| 4 | 5 | 6 |
+---+---+---+
| 7 | 8 | 9 |
+---+---+---+

Three marks in a row, column or diagonal win the round.
A full grid with no line is a tie.";

const GRID_RULE: &str = "+---+---+---+";
const STATS_RULE: &str = "+-----------------+";

fn cell_glyph(cell: Option<Mark>) -> String {
    match cell {
        Some(mark) => mark.to_string(),
        None => " ".to_string(),
    }
}

/// Draw the grid with horizontal rules between rows. Empty cells render
/// as spaces.
pub fn render_board(out: &mut dyn Write, board: &Board) -> std::io::Result<()> {
    writeln!(out, "{}", GRID_RULE)?;
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| cell_glyph(board.cell(row * 3 + col)))
            .collect();
        writeln!(out, "| {} |", cells.join(" | "))?;
        writeln!(out, "{}", GRID_RULE)?;
    }
    Ok(())
}

/// Draw the cumulative win/tie table.
pub fn render_stats(out: &mut dyn Write, stats: &SessionStats) -> std::io::Result<()> {
    writeln!(out, "{}", STATS_RULE)?;
    writeln!(out, "|  Wins and ties  |")?;
    writeln!(out, "{}", STATS_RULE)?;
    writeln!(out, "| {:<8} | {:<5}|", "player X", stats.wins(Mark::X))?;
    writeln!(out, "| {:<8} | {:<5}|", "player O", stats.wins(Mark::O))?;
    writeln!(out, "| {:<8} | {:<5}|", "tie", stats.ties())?;
    writeln!(out, "{}", STATS_RULE)?;
    Ok(())
}

/// Clear the viewport with ANSI escapes (erase display, cursor home).
pub fn clear_viewport(out: &mut dyn Write) -> std::io::Result<()> {
    write!(out, "\x1b[2J\x1b[H")
}

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}
