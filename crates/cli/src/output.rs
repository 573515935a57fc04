//! Writing emitted tags to a stream

use clap::ValueEnum;
use lextags_core::{TagKind, TagSink};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `D|R symbol line file image`, one tag per line
    Ctags,
    /// One JSON object per line
    Json,
}

#[derive(Serialize)]
struct TagRecord<'a> {
    kind: TagKind,
    symbol: &'a str,
    line: usize,
    file: &'a str,
    image: &'a str,
}

/// Counts reported once the stream is finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputSummary {
    pub emitted: usize,
    pub warnings: usize,
}

/// Sink that writes each tag as soon as it arrives
///
/// `put` cannot fail, so the first write error is kept and returned by
/// [`StreamSink::finish`]; later tags are dropped.
pub struct StreamSink<W: Write> {
    out: W,
    format: OutputFormat,
    summary: OutputSummary,
    error: Option<io::Error>,
}

impl<W: Write> StreamSink<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            summary: OutputSummary::default(),
            error: None,
        }
    }

    fn write_tag(&mut self, record: &TagRecord<'_>) -> io::Result<()> {
        match self.format {
            OutputFormat::Ctags => {
                let marker = match record.kind {
                    TagKind::Definition => 'D',
                    TagKind::Reference => 'R',
                };
                let line = format!(
                    "{marker} {} {} {} {}",
                    record.symbol, record.line, record.file, record.image
                );
                writeln!(self.out, "{}", line.trim_end())
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, record)?;
                writeln!(self.out)
            }
        }
    }

    /// Flush the stream and return the counts, or the first write error
    pub fn finish(mut self) -> io::Result<OutputSummary> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.summary)
    }
}

impl<W: Write> TagSink for StreamSink<W> {
    fn put(&mut self, kind: TagKind, symbol: &str, line: usize, file: &str, image: &str) {
        if self.error.is_some() {
            return;
        }

        let record = TagRecord {
            kind,
            symbol,
            line,
            file,
            image,
        };
        match self.write_tag(&record) {
            Ok(()) => self.summary.emitted += 1,
            Err(e) => self.error = Some(e),
        }
    }

    fn warning(&mut self, _message: &str) {
        // The extractor already logs the message
        self.summary.warnings += 1;
    }
}
