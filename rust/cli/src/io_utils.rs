//! Line-oriented input plumbing for the interactive prompts.
//!
//! All prompt loops read through [`read_input_line`] so tests can feed a
//! scripted `Cursor` where the binary passes a locked stdin.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Trims surrounding whitespace and returns `None` on EOF or read errors.
/// The prompt loops treat `None` as the quit response, so an exhausted
/// scripted input ends the session the way an interactive quit would.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// use noughts_cli::io_utils::read_input_line;
///
/// let mut input = Cursor::new(b"  5  \n");
/// assert_eq!(read_input_line(&mut input), Some("5".to_string()));
/// assert_eq!(read_input_line(&mut input), None);
/// ```
pub fn read_input_line(input: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None, // Read error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_and_trims_a_line() {
        let mut input = Cursor::new(b"hello world\n");
        assert_eq!(read_input_line(&mut input), Some("hello world".to_string()));
    }

    #[test]
    fn surrounding_whitespace_is_stripped() {
        let mut input = Cursor::new(b"  5  \n");
        assert_eq!(read_input_line(&mut input), Some("5".to_string()));
    }

    #[test]
    fn blank_line_comes_back_empty_not_none() {
        let mut input = Cursor::new(b"   \n");
        assert_eq!(read_input_line(&mut input), Some("".to_string()));
    }

    #[test]
    fn eof_yields_none() {
        let mut input = Cursor::new(b"");
        assert_eq!(read_input_line(&mut input), None);
    }

    #[test]
    fn missing_trailing_newline_still_reads() {
        let mut input = Cursor::new(b"Q");
        assert_eq!(read_input_line(&mut input), Some("Q".to_string()));
    }
}
