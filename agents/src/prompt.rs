// ═══════════════════════════════════════════════════════════════════════
// Prompter — line-based question/answer over any reader and writer.
// Malformed answers are re-asked here so callers only see parsed values.
// ═══════════════════════════════════════════════════════════════════════

use crate::error::Result;
use std::fmt::Display;
use std::io::{BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print a line of narration.
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print `text` without a newline and read one trimmed line.
    /// Returns None at end of input.
    pub fn ask(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Keep asking until `parse` accepts an answer. `retry` replaces `text`
    /// after the first rejected answer.
    pub fn ask_until<T>(
        &mut self,
        text: &str,
        retry: &str,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> Result<Option<T>> {
        let mut question = text;
        loop {
            let Some(line) = self.ask(question)? else {
                return Ok(None);
            };
            if let Some(value) = parse(&line) {
                return Ok(Some(value));
            }
            tracing::debug!(input = %line, "input rejected");
            question = retry;
        }
    }
}

/// A non-negative whole number.
pub fn parse_number(text: &str) -> Option<usize> {
    text.parse().ok()
}

pub fn parse_positive(text: &str) -> Option<u32> {
    text.parse().ok().filter(|&n: &u32| n > 0)
}

/// `y` or `n`, either case.
pub fn parse_yes_no(text: &str) -> Option<bool> {
    match text {
        "y" | "Y" => Some(true),
        "n" | "N" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_trims_and_detects_eof() {
        let mut p = prompter("  hello \n");
        assert_eq!(p.ask("> ").unwrap(), Some("hello".to_string()));
        assert_eq!(p.ask("> ").unwrap(), None);
    }

    #[test]
    fn test_ask_until_retries() {
        let mut p = prompter("abc\n-3\n7\n");
        let n = p.ask_until("Number: ", "Again: ", parse_number).unwrap();
        assert_eq!(n, Some(7));
        let (_, out) = p.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "Number: Again: Again: ");
    }

    #[test]
    fn test_parsers() {
        assert_eq!(parse_number("0"), Some(0));
        assert_eq!(parse_number("-1"), None);
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("12"), Some(12));
        assert_eq!(parse_yes_no("y"), Some(true));
        assert_eq!(parse_yes_no("N"), Some(false));
        assert_eq!(parse_yes_no("yes"), None);
    }
}
