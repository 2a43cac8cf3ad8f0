//! # Interactive Session
//!
//! The hot-seat game driver: rules banner, start/quit prompt, then rounds
//! until the players quit. Two humans share one terminal and alternate on
//! the same prompt.
//!
//! All plumbing is injected (`&mut dyn Write` / `&mut dyn BufRead`) so
//! tests can run whole sessions from scripted input. End-of-input at any
//! prompt counts as the quit response: the session ends normally instead
//! of spinning on a closed reader.

use crate::error::CliError;
use crate::io_utils::read_input_line;
use crate::ui;
use crate::validation::{MoveParse, parse_choice, parse_move};
use noughts_engine::board::Board;
use noughts_engine::round::{Round, RoundResult, RoundState};
use noughts_engine::session::Session;
use std::io::{BufRead, Write};

// Menu allow-lists. The bracketed letters in the prompt strings are
// decoration; only these characters are accepted, case-sensitively.
const START: char = 'S';
const AGAIN: char = 'A';
const QUIT: char = 'Q';

const START_PROMPT: &str = "\n[S]tart or [Q]uit ?:";
const AGAIN_PROMPT: &str = "\nPlay [A]gain or [Q]uit ?:";

/// Run one full session: rules, start prompt, rounds, farewell.
///
/// The seed pins the starting-player draw; the binary passes a random
/// seed, tests pass a fixed one. Returns `Ok(())` on any normal ending
/// (startup quit, play-again quit, or input exhausted).
pub fn run_session(
    seed: u64,
    out: &mut dyn Write,
    input: &mut dyn BufRead,
) -> Result<(), CliError> {
    ui::clear_viewport(out)?;
    writeln!(out, "{}", ui::RULES)?;
    if prompt_choice(out, input, START_PROMPT, &[START, QUIT])? != Some(START) {
        return Ok(());
    }

    let mut session = Session::with_seed(seed);
    tracing::debug!(seed, opening = %session.opening_mark(), "session started");

    loop {
        let mut round = session.begin_round();
        let Some(result) = play_round(&mut round, out, input)? else {
            // input closed mid-round; nothing to tally
            return Ok(());
        };
        session.finish_round(result);

        if let Ok(json) = round.into_record().to_json() {
            tracing::debug!(round = %json, "round finished");
        }

        ui::render_stats(out, session.stats())?;
        match prompt_choice(out, input, AGAIN_PROMPT, &[AGAIN, QUIT])? {
            Some(AGAIN) => continue,
            _ => {
                writeln!(out, "Goodbye!")?;
                return Ok(());
            }
        }
    }
}

/// Drive one round to completion. Returns `Ok(None)` when the input
/// stream ends before the round does.
fn play_round(
    round: &mut Round,
    out: &mut dyn Write,
    input: &mut dyn BufRead,
) -> Result<Option<RoundResult>, CliError> {
    ui::clear_viewport(out)?;
    ui::render_board(out, round.board())?;

    loop {
        writeln!(out, "It's player {}'s turn.", round.current_mark())?;
        let Some(index) = read_move(round.board(), out, input)? else {
            return Ok(None);
        };
        // the validator only hands out free in-range cells, so this is
        // the defensive path
        let state = round.play(index)?;
        ui::clear_viewport(out)?;
        ui::render_board(out, round.board())?;
        match state {
            RoundState::Won(mark) => {
                writeln!(out, "  Player {} wins !", mark)?;
                return Ok(Some(RoundResult::Win(mark)));
            }
            RoundState::Tied => {
                writeln!(out, "This round ended in a tie.")?;
                return Ok(Some(RoundResult::Tie));
            }
            RoundState::InProgress => {}
        }
    }
}

/// Blocking move prompt: lists the free cells (1-based), reads until the
/// input names one of them. There is no retry limit.
fn read_move(
    board: &Board,
    out: &mut dyn Write,
    input: &mut dyn BufRead,
) -> Result<Option<usize>, CliError> {
    loop {
        let free: Vec<usize> = board.free_cells().iter().map(|&i| i + 1).collect();
        writeln!(out, "Valid moves: {:?}", free)?;
        write!(out, "Your move? :")?;
        out.flush()?;
        let Some(line) = read_input_line(input) else {
            return Ok(None);
        };
        match parse_move(&line, board) {
            MoveParse::Move(index) => return Ok(Some(index)),
            MoveParse::Occupied => writeln!(out, "This cell is not free!")?,
            MoveParse::OutOfRange => {
                writeln!(out, "You must enter a number between 1 and 9!")?
            }
        }
    }
}

/// Blocking menu prompt: repeats until the input matches the allow-list.
fn prompt_choice(
    out: &mut dyn Write,
    input: &mut dyn BufRead,
    prompt: &str,
    allowed: &[char],
) -> Result<Option<char>, CliError> {
    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;
        let Some(line) = read_input_line(input) else {
            return Ok(None);
        };
        if let Some(choice) = parse_choice(&line, allowed) {
            return Ok(Some(choice));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_scripted(script: &str) -> String {
        let mut out = Vec::new();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        run_session(42, &mut out, &mut input).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn quit_at_startup_skips_the_game() {
        let output = run_scripted("Q\n");
        assert!(output.contains("TIC-TAC-TOE"));
        assert!(!output.contains("It's player"));
        assert!(!output.contains("Goodbye!"));
    }

    #[test]
    fn startup_prompt_repeats_until_allowed() {
        let output = run_scripted("x\nstart\ns\nQ\n");
        assert_eq!(output.matches("[S]tart or [Q]uit ?:").count(), 4);
        assert!(!output.contains("It's player"));
    }

    #[test]
    fn opener_wins_the_top_row() {
        let output = run_scripted("S\n1\n4\n2\n5\n3\nQ\n");
        assert!(output.contains("wins !"));
        assert!(output.contains("|  Wins and ties  |"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn tie_round_is_announced_and_tallied() {
        // positional tie pattern, sound whichever mark opens
        let output = run_scripted("S\n1\n2\n3\n5\n4\n6\n8\n7\n9\nQ\n");
        assert!(output.contains("This round ended in a tie."));
        assert!(output.contains("| tie      | 1"));
    }

    #[test]
    fn bad_move_input_reprompts_with_reasons() {
        // center taken, then: garbage, the taken cell, a free cell
        let output = run_scripted("S\n5\nabc\n5\n1\n");
        assert!(output.contains("You must enter a number between 1 and 9!"));
        assert!(output.contains("This cell is not free!"));
    }

    #[test]
    fn free_cells_shrink_in_the_move_listing() {
        let output = run_scripted("S\n5\n");
        assert!(output.contains("Valid moves: [1, 2, 3, 4, 5, 6, 7, 8, 9]"));
        assert!(output.contains("Valid moves: [1, 2, 3, 4, 6, 7, 8, 9]"));
    }

    #[test]
    fn input_exhausted_mid_round_ends_cleanly() {
        let output = run_scripted("S\n5\n3\n");
        assert!(output.contains("It's player"));
        assert!(!output.contains("Goodbye!"));
    }

    #[test]
    fn two_rounds_accumulate_stats() {
        // same winning script twice: the rotation hands the win to the
        // other mark in round two, one win each
        let output = run_scripted("S\n1\n4\n2\n5\n3\nA\n1\n4\n2\n5\n3\nQ\n");
        assert!(output.contains("| player X | 1"));
        assert!(output.contains("| player O | 1"));
        assert!(output.contains("Goodbye!"));
    }
}
