//! Exit code constants for the CLI application.
//!
//! This module centralizes the exit codes used by the CLI, making them
//! easier to maintain and ensuring consistency.

/// Success exit code (standard Unix convention). Also used for an
/// explicit quit at either interactive decision point.
pub const SUCCESS: i32 = 0;

/// General error exit code.
pub const ERROR: i32 = 2;
