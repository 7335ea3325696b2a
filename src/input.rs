//! Input byte handling.
//!
//! History logs are declared ISO-8859-1 and routinely contain bytes that are
//! not valid UTF-8, so nothing in the crate goes through `String::from_utf8`.
//! Every byte maps to the Unicode code point of the same value, which is
//! lossless for Latin-1 and never fails.
//!
//! [`LineSource`] opens a log file and yields its lines, transparently
//! unwrapping gzip (detected by magic bytes, so a misnamed file still
//! works). `compress(1)` output (`.Z`, magic `1f 9d`) is not
//! gzip-compatible and is rejected up front with an actionable error.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::error::HistError;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const COMPRESS_MAGIC: [u8; 2] = [0x1f, 0x9d];

/// Decode raw bytes as ISO-8859-1.
pub fn latin1_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// A line iterator over a (possibly gzipped) history log.
pub struct LineSource {
    reader: Box<dyn BufRead>,
}

impl std::fmt::Debug for LineSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineSource").finish_non_exhaustive()
    }
}

impl LineSource {
    /// Open `path`, sniffing the first two bytes for compression.
    pub fn open(path: &Path) -> Result<Self, HistError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let head = reader.fill_buf()?;
        let magic: Option<[u8; 2]> = head.get(..2).map(|m| [m[0], m[1]]);
        let reader: Box<dyn BufRead> = match magic {
            Some(m) if m == COMPRESS_MAGIC => {
                return Err(HistError::UnsupportedCompression {
                    path: PathBuf::from(path),
                });
            }
            Some(m) if m == GZIP_MAGIC => Box::new(BufReader::new(GzDecoder::new(reader))),
            _ => Box::new(reader),
        };
        Ok(Self { reader })
    }

    /// Wrap an already-open reader; used by tests and stdin mode.
    pub fn from_reader(reader: impl Read + 'static) -> Self {
        Self {
            reader: Box::new(BufReader::new(reader)),
        }
    }
}

impl Iterator for LineSource {
    type Item = io::Result<String>;

    /// Yield the next line with the terminator removed.
    ///
    /// Only `\n` and a preceding `\r` are stripped; interior and trailing
    /// spaces are significant (the 21-char header ends in one).
    fn next(&mut self) -> Option<io::Result<String>> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                    if buf.last() == Some(&b'\r') {
                        buf.pop();
                    }
                }
                Some(Ok(latin1_string(&buf)))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
