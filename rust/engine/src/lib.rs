//! # noughts-engine: Tic-Tac-Toe Game Core
//!
//! Game logic for a two-player tic-tac-toe session on a fixed 3×3 grid.
//! Provides the board with last-move win detection, a round state machine,
//! and session bookkeeping with a reproducible RNG for the starting-player
//! draw. The crate performs no I/O; prompting and rendering belong to the
//! CLI front end.
//!
//! ## Core Modules
//!
//! - [`board`] - Cell storage, occupancy queries, and win detection
//! - [`player`] - The `X`/`O` mark and turn alternation
//! - [`round`] - Round state machine (in progress, won, tied)
//! - [`session`] - Cumulative win/tie counts and starting-player rotation
//! - [`record`] - Serializable transcripts of completed rounds
//! - [`errors`] - Error types for board and round operations
//!
//! ## Quick Start
//!
//! ```rust
//! use noughts_engine::player::Mark;
//! use noughts_engine::round::{Round, RoundState};
//!
//! let mut round = Round::new(Mark::X);
//! round.play(0).unwrap(); // X takes the top-left corner
//! round.play(3).unwrap(); // O answers
//! round.play(1).unwrap();
//! round.play(4).unwrap();
//!
//! // X completes the top row
//! assert_eq!(round.play(2).unwrap(), RoundState::Won(Mark::X));
//! ```
//!
//! ## Deterministic Sessions
//!
//! The only random decision is the first round's opening mark. It is drawn
//! from a seeded RNG so tests can pin the outcome:
//!
//! ```rust
//! use noughts_engine::session::Session;
//!
//! let a = Session::with_seed(42);
//! let b = Session::with_seed(42);
//! assert_eq!(a.opening_mark(), b.opening_mark());
//! ```

pub mod board;
pub mod errors;
pub mod player;
pub mod record;
pub mod round;
pub mod session;
