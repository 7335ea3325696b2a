pub mod array;
pub mod ndjson;

use std::io::Write;

use crate::error::HistError;
use crate::record::Record;

/// Streaming record sink. One emitter instance handles one output.
pub trait Emitter {
    fn emit(&mut self, record: &Record) -> Result<(), HistError>;

    /// Close any framing and flush. Called exactly once, at end-of-stream.
    fn finish(&mut self) -> Result<(), HistError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One JSON array of records.
    Array,
    /// One JSON object per line, for document-store bulk loading.
    Ndjson,
}

impl OutputFormat {
    pub fn emitter(&self, writer: Box<dyn Write>) -> Box<dyn Emitter> {
        match self {
            OutputFormat::Array => Box::new(array::ArrayEmitter::new(writer)),
            OutputFormat::Ndjson => Box::new(ndjson::NdjsonEmitter::new(writer)),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "array" | "json" => Ok(OutputFormat::Array),
            "ndjson" | "jsonl" => Ok(OutputFormat::Ndjson),
            _ => Err(format!("Unknown format: {s}. Valid: array, ndjson")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Array => write!(f, "array"),
            OutputFormat::Ndjson => write!(f, "ndjson"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("array".parse::<OutputFormat>().unwrap(), OutputFormat::Array);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Ndjson);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_display_roundtrip() {
        for fmt in [OutputFormat::Array, OutputFormat::Ndjson] {
            assert_eq!(fmt.to_string().parse::<OutputFormat>().unwrap(), fmt);
        }
    }
}
