use crate::core::{GameRequest, NumberSet, ResultSink};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

const RULE: &str = "******************************";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Console rendering: banner, one `Game <n> - ...` line per game, closing rule.
pub struct TextSink<W: Write> {
    writer: W,
    sort: bool,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W, sort: bool) -> Self {
        Self { writer, sort }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for TextSink<W> {
    fn begin(&mut self, _request: &GameRequest) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", RULE)?;
        writeln!(self.writer, "** Results **")?;
        Ok(())
    }

    fn game(&mut self, game_number: u32, numbers: &NumberSet) -> Result<()> {
        if self.sort {
            writeln!(self.writer, "Game {} - {}", game_number, numbers.sorted())?;
        } else {
            writeln!(self.writer, "Game {} - {}", game_number, numbers)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "{}", RULE)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Title banner shown before prompting, with the crate version.
pub fn write_banner<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", RULE)?;
    writeln!(writer, "** Lottery number generator **")?;
    writeln!(writer, "**{:^26}**", format!("v{}", env!("CARGO_PKG_VERSION")))?;
    writeln!(writer, "{}", RULE)?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct JsonGame {
    game: u32,
    numbers: NumberSet,
}

#[derive(Debug, Serialize)]
struct JsonDocument {
    generated_at: DateTime<Utc>,
    version: &'static str,
    seed: Option<u64>,
    request: Option<GameRequest>,
    games: Vec<JsonGame>,
}

/// Buffers the run and writes a single pretty-printed JSON document on `finish`.
pub struct JsonSink<W: Write> {
    writer: W,
    sort: bool,
    document: JsonDocument,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W, seed: Option<u64>, sort: bool) -> Self {
        Self {
            writer,
            sort,
            document: JsonDocument {
                generated_at: Utc::now(),
                version: env!("CARGO_PKG_VERSION"),
                seed,
                request: None,
                games: Vec::new(),
            },
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for JsonSink<W> {
    fn begin(&mut self, request: &GameRequest) -> Result<()> {
        self.document.generated_at = Utc::now();
        self.document.request = Some(*request);
        self.document.games = Vec::with_capacity(request.games as usize);
        Ok(())
    }

    fn game(&mut self, game_number: u32, numbers: &NumberSet) -> Result<()> {
        let numbers = if self.sort {
            numbers.sorted()
        } else {
            numbers.clone()
        };
        self.document.games.push(JsonGame {
            game: game_number,
            numbers,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.document)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Picks the sink for `format`, boxed so callers can drive either through one engine call.
pub fn sink_for<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    seed: Option<u64>,
    sort: bool,
) -> Box<dyn ResultSink + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextSink::new(writer, sort)),
        OutputFormat::Json => Box::new(JsonSink::new(writer, seed, sort)),
    }
}
