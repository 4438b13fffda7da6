use crate::utils::error::{LottoError, Result};
use crate::utils::validation::parse_count;
use std::io::{BufRead, Write};

/// Line-oriented console prompts.
pub struct Prompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Prints `question` and parses the answer line as a count for `field`.
    pub fn ask(&mut self, question: &str, field: &str) -> Result<u32> {
        self.writer.write_all(question.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(LottoError::MissingInputError {
                field: field.to_string(),
            });
        }

        let value = parse_count(field, &line)?;
        tracing::debug!("{} = {}", field, value);
        Ok(value)
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
