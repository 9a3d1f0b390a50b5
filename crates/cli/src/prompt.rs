//! Line-oriented prompting over any reader/writer pair.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{CliError, CliResult};

/// Prints a label, then reads one line of answer.
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

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Read one raw line, without its line terminator.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing the
    /// read. Returns `EndOfInput` once the reader is exhausted.
    pub fn read_line(&mut self) -> CliResult<String> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(CliError::EndOfInput);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Print `label` and read the whole answer line, trimmed.
    pub fn ask(&mut self, label: &str) -> CliResult<String> {
        write!(self.writer, "{label}")?;
        self.writer.flush()?;
        Ok(self.read_line()?.trim().to_string())
    }

    /// Print `label` and keep only the first whitespace-separated word.
    ///
    /// Blank lines are skipped until a word arrives.
    pub fn ask_word(&mut self, label: &str) -> CliResult<String> {
        let mut line = self.ask(label)?;
        loop {
            if let Some(word) = line.split_whitespace().next() {
                return Ok(word.to_string());
            }
            line = self.read_line()?;
        }
    }

    /// Print `label` and parse the answer as a number.
    pub fn ask_number<T: FromStr>(&mut self, label: &str) -> CliResult<T> {
        let line = self.ask(label)?;
        line.parse()
            .map_err(|_| CliError::InvalidNumber { input: line })
    }
}
