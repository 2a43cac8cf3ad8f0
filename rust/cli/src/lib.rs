//! # Noughts CLI Library
//!
//! Terminal front end for the noughts-engine tic-tac-toe core. The binary
//! takes no arguments or flags: it prints the rules, offers a start/quit
//! prompt, then runs rounds until the players quit, keeping a running
//! win/tie tally.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which drives a whole
//! session over injected streams and returns the process exit code.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//!
//! let stdin = io::stdin();
//! let mut input = stdin.lock();
//! let code = noughts_cli::run(&mut io::stdout(), &mut io::stderr(), &mut input);
//! assert_eq!(code, 0);
//! ```
//!
//! ## Module Layout
//!
//! - [`play`] - the interactive session driver
//! - [`validation`] - move and menu-choice parsing
//! - [`io_utils`] - line input plumbing
//! - [`ui`] - rules banner, grid and stats rendering
//! - [`logging`] - tracing setup for the binary
//! - [`error`] / [`exit_code`] - error types and exit codes

use std::io::{BufRead, Write};

pub mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
pub mod play;
pub mod ui;
pub mod validation;

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Draws a fresh session seed, then delegates to [`run_seeded`]. The seed
/// only decides which mark opens the first round.
///
/// # Arguments
///
/// * `out` - Output stream for the game display (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
/// * `input` - Input stream for player responses (typically locked `stdin`)
///
/// # Returns
///
/// Exit code: `0` for every normal ending (including quit at either
/// prompt), `2` if the output streams fail.
pub fn run(out: &mut dyn Write, err: &mut dyn Write, input: &mut dyn BufRead) -> i32 {
    let seed: u64 = rand::random();
    run_seeded(seed, out, err, input)
}

/// [`run`] with a caller-chosen seed, so tests can pin the opening mark.
pub fn run_seeded(
    seed: u64,
    out: &mut dyn Write,
    err: &mut dyn Write,
    input: &mut dyn BufRead,
) -> i32 {
    match play::run_session(seed, out, input) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn quit_at_startup_exits_zero() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"Q\n".to_vec());

        let code = run(&mut out, &mut err, &mut input);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(err.is_empty());
    }

    #[test]
    fn empty_input_exits_zero() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"".to_vec());

        let code = run(&mut out, &mut err, &mut input);
        assert_eq!(code, exit_code::SUCCESS);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let script = b"S\n1\n4\n2\n5\n3\nQ\n";
        let mut first = Vec::new();
        let mut second = Vec::new();
        let mut err = Vec::new();

        run_seeded(7, &mut first, &mut err, &mut Cursor::new(script.to_vec()));
        run_seeded(7, &mut second, &mut err, &mut Cursor::new(script.to_vec()));
        assert_eq!(first, second);
    }
}
