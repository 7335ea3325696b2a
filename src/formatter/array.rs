use std::io::Write;

use crate::error::HistError;
use crate::formatter::Emitter;
use crate::record::Record;

/// Emits one JSON array: `[` on the first record, `,` separators, `]` at
/// finish. An empty run still produces a well-formed `[]`.
pub struct ArrayEmitter<W: Write> {
    writer: W,
    count: u64,
}

impl<W: Write> ArrayEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, count: 0 }
    }

    /// Recover the underlying writer; only meaningful after `finish`.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Emitter for ArrayEmitter<W> {
    fn emit(&mut self, record: &Record) -> Result<(), HistError> {
        if self.count == 0 {
            self.writer.write_all(b"[")?;
        } else {
            self.writer.write_all(b",\n")?;
        }
        serde_json::to_writer(&mut self.writer, record)?;
        self.count += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), HistError> {
        if self.count == 0 {
            self.writer.write_all(b"[]")?;
        } else {
            self.writer.write_all(b"]")?;
        }
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: &str, value: &str) -> Record {
        let mut rec = Record::new();
        rec.insert(key, value);
        rec
    }

    #[test]
    fn test_array_framing() {
        let mut emitter = ArrayEmitter::new(Vec::new());
        emitter.emit(&record("a", "1")).unwrap();
        emitter.emit(&record("b", "2")).unwrap();
        emitter.finish().unwrap();
        let out = String::from_utf8(emitter.into_inner()).unwrap();
        assert_eq!(out, "[{\"a\":\"1\"},\n{\"b\":\"2\"}]\n");
        serde_json::from_str::<serde_json::Value>(&out).unwrap();
    }

    #[test]
    fn test_empty_run_is_empty_array() {
        let mut emitter = ArrayEmitter::new(Vec::new());
        emitter.finish().unwrap();
        let out = String::from_utf8(emitter.into_inner()).unwrap();
        assert_eq!(out, "[]\n");
    }

    #[test]
    fn test_single_record_no_separator() {
        let mut emitter = ArrayEmitter::new(Vec::new());
        emitter.emit(&record("a", "1")).unwrap();
        emitter.finish().unwrap();
        let out = String::from_utf8(emitter.into_inner()).unwrap();
        assert_eq!(out, "[{\"a\":\"1\"}]\n");
    }
}
