use std::io::Write;

use crate::error::HistError;
use crate::formatter::Emitter;
use crate::record::Record;

/// Newline-delimited JSON: one record object per line, no outer framing.
pub struct NdjsonEmitter<W: Write> {
    writer: W,
}

impl<W: Write> NdjsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer; only meaningful after `finish`.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Emitter for NdjsonEmitter<W> {
    fn emit(&mut self, record: &Record) -> Result<(), HistError> {
        let line = serde_json::to_string(record)?;
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), HistError> {
        self.writer.flush()?;
        Ok(())
    }
}
