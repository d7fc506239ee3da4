//! Prompt-and-read console over any buffered reader and writer.

use std::io::{self, BufRead, Write};

use super::{INVALID_NUMBER_PROMPT, parse_number};

/// Line-oriented console.
///
/// Generic over the streams so the menu runs the same against stdin/stdout
/// and against in-memory buffers in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
    buf: Vec<u8>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: Vec::new(),
        }
    }

    /// Writer for rendered output.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Next input line without its line terminator, or `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD, so a garbled line is
    /// just another line that fails to parse.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.input.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        let text = String::from_utf8_lossy(&self.buf);
        Ok(Some(text.trim_end_matches(['\r', '\n']).to_owned()))
    }

    /// Show `prompt` and read one line.
    pub fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Show `prompt` and read a number, re-prompting until one parses.
    pub fn prompt_number(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        let mut line = self.prompt_line(prompt)?;
        loop {
            let Some(text) = line else {
                return Ok(None);
            };
            if let Some(number) = parse_number(&text) {
                return Ok(Some(number));
            }
            tracing::debug!(input = %text, "rejected non-numeric input");
            line = self.prompt_line(INVALID_NUMBER_PROMPT)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    fn written(console: Console<&[u8], Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn strips_line_endings() {
        let mut console = console("Arthas\r\nGandalf\n");
        assert_eq!(console.read_line().unwrap().as_deref(), Some("Arthas"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("Gandalf"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let mut console = console("7");
        assert_eq!(console.prompt_number("> ").unwrap(), Some(7));
    }

    #[test]
    fn malformed_numbers_reprompt() {
        let mut console = console("abc\n\n12\n");

        assert_eq!(console.prompt_number("Level: ").unwrap(), Some(12));

        let out = written(console);
        assert_eq!(
            out,
            format!("Level: {INVALID_NUMBER_PROMPT}{INVALID_NUMBER_PROMPT}")
        );
    }

    #[test]
    fn end_of_input_while_reprompting_is_none() {
        let mut console = console("nope\n");
        assert_eq!(console.prompt_number("Choice: ").unwrap(), None);
    }

    #[test]
    fn invalid_utf8_reprompts_instead_of_failing() {
        let mut console = Console::new(&b"\xff\xfe\n7\n"[..], Vec::new());

        assert_eq!(console.prompt_number("Choice: ").unwrap(), Some(7));

        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, format!("Choice: {INVALID_NUMBER_PROMPT}"));
    }

    #[test]
    fn invalid_utf8_text_is_replaced() {
        let mut console = Console::new(&b"Ar\xffthas\n"[..], Vec::new());
        assert_eq!(
            console.read_line().unwrap().as_deref(),
            Some("Ar\u{FFFD}thas")
        );
    }

    #[test]
    fn empty_line_is_some_empty_string() {
        let mut console = console("\n");
        assert_eq!(console.prompt_line("Name: ").unwrap().as_deref(), Some(""));
    }
}
