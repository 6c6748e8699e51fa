//! Line input for the main prompt and its sub-prompts.
//!
//! Reads one line at a time from any [`BufRead`]. Lines come back trimmed;
//! end of input is `None`, which callers treat like `q`. Bytes that are not
//! UTF-8 are replaced with U+FFFD, so a garbled line fails validation like
//! any other typo instead of ending the session.

use std::io::{self, BufRead};

/// A blocking line reader.
pub struct Prompt<R: BufRead> {
    input: R,
    line: Vec<u8>,
}

impl<R: BufRead> Prompt<R> {
    /// Read lines from `input`.
    pub const fn new(input: R) -> Self {
        Self {
            input,
            line: Vec::new(),
        }
    }

    /// Read the next line, trimmed. `None` at end of input.
    ///
    /// # Errors
    ///
    /// Propagates read failures from the underlying reader.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.line.clear();
        if self.input.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&self.line).trim().to_string()))
    }
}

/// Strip any leading `#` from a user-typed hex code.
#[must_use]
pub fn strip_hash(s: &str) -> &str {
    s.trim_start_matches('#')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_trimmed_lines_then_none() {
        let mut p = Prompt::new(Cursor::new("  n \r\nFF0000\n\nlast"));
        assert_eq!(p.read_line().unwrap().as_deref(), Some("n"));
        assert_eq!(p.read_line().unwrap().as_deref(), Some("FF0000"));
        assert_eq!(p.read_line().unwrap().as_deref(), Some(""));
        assert_eq!(p.read_line().unwrap().as_deref(), Some("last"));
        assert_eq!(p.read_line().unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_an_error() {
        let mut p = Prompt::new(Cursor::new(&b"\xff\xfe0000\nq\n"[..]));
        assert_eq!(p.read_line().unwrap().as_deref(), Some("\u{fffd}\u{fffd}0000"));
        assert_eq!(p.read_line().unwrap().as_deref(), Some("q"));
        assert_eq!(p.read_line().unwrap(), None);
    }

    #[test]
    fn strip_hash_removes_prefix() {
        assert_eq!(strip_hash("#FF0000"), "FF0000");
        assert_eq!(strip_hash("##abc"), "abc");
        assert_eq!(strip_hash("FF0000"), "FF0000");
    }
}
