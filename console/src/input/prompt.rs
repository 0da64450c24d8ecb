use crate::input::parse;
use matcore::prelude::Slot;
use matcore::Row;
use std::io::{self, BufRead, Write};

/// Owns the read/re-prompt loops over a line-based reader and writer.
///
/// Generic over `BufRead`/`Write` so tests can drive it with an
/// in-memory cursor instead of stdin/stdout. All retry policy lives
/// here; the engine never retries anything.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Reads one line, trimmed. `None` means end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Asks for a dimension until a valid one arrives or input ends.
    pub fn ask_dimension(
        &mut self,
        label: &str,
        max_dimension: usize,
    ) -> io::Result<Option<usize>> {
        loop {
            write!(self.writer, "{}: ", label)?;
            self.writer.flush()?;
            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(None),
            };
            match parse::parse_dimension(&line, max_dimension) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.writer, "{}", err)?,
            }
        }
    }

    /// Asks for one row of `width` integers; re-prompts this row only.
    pub fn ask_row(&mut self, index: usize, width: usize) -> io::Result<Option<Row>> {
        loop {
            write!(self.writer, "Row {}: ", index + 1)?;
            self.writer.flush()?;
            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(None),
            };
            match parse::parse_row(&line, width) {
                Ok(row) => return Ok(Some(row)),
                Err(err) => writeln!(self.writer, "{}", err)?,
            }
        }
    }

    /// Asks which slot (A or B) until the answer is valid.
    pub fn ask_slot(&mut self, question: &str) -> io::Result<Option<Slot>> {
        loop {
            writeln!(self.writer, "{}", question)?;
            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(None),
            };
            match parse::parse_slot(&line) {
                Some(slot) => return Ok(Some(slot)),
                None => writeln!(self.writer, "Please enter a valid input.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<String>, Vec<u8>> {
        Prompter::new(Cursor::new(script.to_string()), Vec::new())
    }

    #[test]
    fn dimension_prompt_retries_until_valid() {
        let mut p = prompter("0\nabc\n4\n");
        assert_eq!(p.ask_dimension("Height", 32).unwrap(), Some(4));
        let output = String::from_utf8(p.writer).unwrap();
        assert_eq!(output.matches("invalid dimension").count(), 2);
    }

    #[test]
    fn row_prompt_retries_that_row_only() {
        let mut p = prompter("1 2 a\n1 2 3\n");
        assert_eq!(p.ask_row(0, 3).unwrap(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn slot_prompt_accepts_lowercase() {
        let mut p = prompter("x\nb\n");
        assert_eq!(p.ask_slot("A or B?").unwrap(), Some(Slot::B));
    }

    #[test]
    fn exhausted_input_ends_prompting() {
        let mut p = prompter("0\n");
        assert_eq!(p.ask_dimension("Height", 32).unwrap(), None);
    }
}
