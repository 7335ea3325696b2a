//! The log-line decoder.
//!
//! # Architecture overview
//!
//! A history line is a 21-char header, a command envelope, and a stream of
//! tagged payload fields:
//!
//! ```text
//! E202310100510083031R ^S01EVFFADMIN^FEEPLRIV^FcNONE^NQ31221112079020^^O00049
//! └──────── header ───┘ └ envelope ┘ └─────────── payload ─────────────────┘
//! ```
//!
//! The decoder turns one line into an insertion-ordered [`Record`]:
//!
//! 1. The header becomes `timestamp`; a header that does not normalise is a
//!    line error and nothing is emitted.
//! 2. The envelope (`S` + two station digits + two-char command tag + glued
//!    first data field) becomes `command_code`; the glued remainder is
//!    pushed back onto the payload stream as a synthetic token so every
//!    data field decodes through one path.
//! 3. Each payload field is translated through the data-code table, with a
//!    handful of contextual rules: client-type lookup, PIN redaction,
//!    date-value normalisation, `EPL` branch-prefix stripping, and
//!    catalog/call/copy accumulation for item-index enrichment.
//! 4. Unknown tags still produce a field (`data_code_<tag>`) and are
//!    reported per line so a run can summarise them.
//!
//! Command-specific behaviour lives in a small dispatch table at the bottom
//! of the module, keeping the field loop free of per-command knowledge.

use crate::dates::normalize_date;
use crate::record::Record;
use crate::tables::{split_tag, CodeTables, ItemIndex, Which};

/// Data tags whose values are always timestamps, independent of their name.
const DATE_TAGS: &[&str] = &["UK", "HB", "UD", "UZ", "CO"];

/// Name suffixes that mark a translated field as date-valued.
const DATE_SUFFIXES: &[&str] = &["_activity", "_expires", "_granted", "_date"];

/// Branch codes are stored internally with this prefix; it never appears in
/// output.
const LIBRARY_PREFIX: &str = "EPL";

const CLIENT_TAG: &str = "dC";
const PIN_TAG: &str = "Uf";
const CATALOG_KEY_TAG: &str = "tJ";
const CALL_SEQ_TAG: &str = "tL";
const COPY_NUM_TAG: &str = "IS";

/// Why a line was rejected without producing a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineError {
    Empty,
    BadHeader,
    TruncatedEnvelope,
}

impl std::fmt::Display for LineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineError::Empty => write!(f, "empty line"),
            LineError::BadHeader => write!(f, "unparseable header"),
            LineError::TruncatedEnvelope => write!(f, "missing command envelope"),
        }
    }
}

/// One decoded line plus its diagnostics.
#[derive(Debug)]
pub struct Decoded {
    pub record: Record,
    /// Unknown data-code tags, in source order.
    pub missing: Vec<String>,
}

impl Decoded {
    /// Per-line error code: the number of unknown data codes, zero when
    /// every tag translated.
    pub fn error_code(&self) -> usize {
        self.missing.len()
    }
}

/// Accumulates the three parts of the composite item key.
#[derive(Debug, Default)]
struct ItemKey {
    catalog: Option<String>,
    call_seq: Option<String>,
    copy: Option<String>,
}

impl ItemKey {
    fn set(&mut self, tag: &str, value: &str) {
        match tag {
            CATALOG_KEY_TAG => self.catalog = Some(value.to_string()),
            CALL_SEQ_TAG => self.call_seq = Some(value.to_string()),
            COPY_NUM_TAG => self.copy = Some(value.to_string()),
            _ => {}
        }
    }

    /// Composite lookup key once all three parts have been seen.
    fn key(&self) -> Option<String> {
        match (&self.catalog, &self.call_seq, &self.copy) {
            (Some(cat), Some(seq), Some(copy)) => Some(format!("{cat}|{seq}|{copy}|")),
            _ => None,
        }
    }
}

pub struct Decoder<'a> {
    tables: &'a CodeTables,
    items: Option<&'a ItemIndex>,
}

impl<'a> Decoder<'a> {
    pub fn new(tables: &'a CodeTables, items: Option<&'a ItemIndex>) -> Self {
        Self { tables, items }
    }

    /// Decode one raw line into a record.
    pub fn decode_line(&self, line: &str) -> Result<Decoded, LineError> {
        if line.trim().is_empty() {
            return Err(LineError::Empty);
        }

        let mut tokens = line.split('^');
        let header = tokens.next().unwrap_or_default();
        let timestamp = normalize_date(header);
        if timestamp.is_empty() {
            return Err(LineError::BadHeader);
        }

        let Some(envelope) = tokens.next() else {
            return Err(LineError::TruncatedEnvelope);
        };
        let command = self
            .tables
            .translate(envelope, Which::Command, false)
            .to_string();

        let mut record = Record::new();
        record.insert("timestamp", timestamp.as_str());
        record.insert("command_code", command.as_str());

        let mut missing = Vec::new();
        let mut item_key = ItemKey::default();

        // the envelope's glued first data field rejoins the payload stream
        let synthetic = envelope_remainder(envelope);
        for token in synthetic.into_iter().chain(tokens) {
            if token.is_empty() || is_noise(token) {
                continue;
            }
            self.decode_field(token, &mut record, &mut missing, &mut item_key);
        }

        if let Some(post) = post_processor(&command) {
            post(&timestamp, &mut record);
        }

        Ok(Decoded { record, missing })
    }

    fn decode_field(
        &self,
        token: &str,
        record: &mut Record,
        missing: &mut Vec<String>,
        item_key: &mut ItemKey,
    ) {
        let (tag, value) = split_tag(token);

        if tag == CLIENT_TAG {
            let name = self.tables.data_name(tag).unwrap_or("client_type");
            let client = self.tables.translate(value, Which::Client, false);
            record.insert(name, client);
            return;
        }

        if tag == PIN_TAG {
            let name = self.tables.data_name(tag).unwrap_or("user_pin");
            record.insert(name, "xxxxx");
            return;
        }

        match self.tables.data_name(tag) {
            Some(name) => {
                if is_date_field(tag, name) {
                    record.insert(name, normalize_date(value));
                } else if is_library_field(name) {
                    record.insert(name, value.strip_prefix(LIBRARY_PREFIX).unwrap_or(value));
                } else {
                    record.insert(name, value);
                }

                if matches!(tag, CATALOG_KEY_TAG | CALL_SEQ_TAG | COPY_NUM_TAG) {
                    item_key.set(tag, value);
                    if let (Some(items), Some(key)) = (self.items, item_key.key()) {
                        if let Some(barcode) = items.lookup(&key) {
                            record.insert("item_id", barcode);
                        }
                    }
                }
            }
            None => {
                record.insert(format!("data_code_{tag}"), value);
                missing.push(tag.to_string());
            }
        }
    }
}

/// The glued data field after `S<dd><tag>` in the command envelope.
fn envelope_remainder(envelope: &str) -> Option<&str> {
    if envelope.len() >= 5 && envelope.starts_with('S') {
        envelope.get(5..).filter(|rest| !rest.is_empty())
    } else {
        None
    }
}

/// Structural noise: the `O`/`O<digits>` end-of-entry sentinel.
///
/// Matched anywhere in the payload, not just in final position: glued
/// entries put it mid-line, and no data code is `O` followed by a digit.
fn is_noise(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next() == Some('O') && chars.all(|c| c.is_ascii_digit())
}

fn is_date_field(tag: &str, name: &str) -> bool {
    DATE_TAGS.contains(&tag)
        || name.starts_with("date_")
        || DATE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

fn is_library_field(name: &str) -> bool {
    name.contains("library")
}

// ---------------------------------------------------------------------------
// Command-specific post-processing
// ---------------------------------------------------------------------------

type PostProcess = fn(timestamp: &str, record: &mut Record);

/// Dispatch table from command name to its post-processor.
const POST_PROCESSORS: &[(&str, PostProcess)] = &[
    ("Discharge Item", backfill_discharge_date),
    ("Discharge Item Bookdrop", backfill_discharge_date),
];

fn post_processor(command: &str) -> Option<PostProcess> {
    POST_PROCESSORS
        .iter()
        .find(|(name, _)| *name == command)
        .map(|(_, f)| *f)
}

/// Older clients discharge without a `CO` field; the date portion of the
/// line timestamp stands in.
fn backfill_discharge_date(timestamp: &str, record: &mut Record) {
    if !record.contains_key("date_of_discharge") {
        let date = timestamp.get(..10).unwrap_or(timestamp);
        record.insert("date_of_discharge", date);
    }
}
