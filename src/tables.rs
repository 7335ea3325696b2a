//! Code tables and the translation layer.
//!
//! Three mappings govern decoding: command codes (two-char tag → transaction
//! name), data codes (two-char tag → record key), and client types (numeric
//! string → client name). All three start from the built-in defaults in
//! [`crate::codes`] and can be extended by merging site table files in the
//! Symphony pipe format (`TAG|Human Name|`).
//!
//! Translation never fails: an unknown code is returned unchanged, and the
//! caller treats the identity return as the miss signal.
//!
//! The optional item index maps `catalog_key|call_seq|copy_num|` composite
//! keys to item barcodes. Production indexes run past a million entries, so
//! entries are stored as boxed strings to keep the map lean.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::clean::clean_string;
use crate::codes;
use crate::error::HistError;
use crate::input::latin1_string;

/// Which mapping a token is translated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Which {
    Command,
    Data,
    Client,
}

/// The three immutable code mappings, built once per run.
#[derive(Debug, Default)]
pub struct CodeTables {
    commands: HashMap<String, String>,
    data: HashMap<String, String>,
    clients: HashMap<String, String>,
}

impl CodeTables {
    /// Tables seeded with the built-in defaults.
    pub fn builtin() -> Self {
        let mut tables = Self::default();
        for (tag, name) in codes::COMMAND_CODES {
            tables.merge_command(tag, name);
        }
        for (tag, name) in codes::DATA_CODES {
            tables.merge_data(tag, name);
        }
        for (id, name) in codes::CLIENT_TYPES {
            tables.merge_client(id, name);
        }
        tables
    }

    /// Merge one command entry. Normalisation is re-applied, so merging the
    /// same entry twice leaves the table unchanged.
    pub fn merge_command(&mut self, tag: &str, name: &str) {
        self.commands
            .insert(tag.to_string(), clean_string(name, false));
    }

    /// Merge one data entry; the value is folded to record-key form.
    pub fn merge_data(&mut self, tag: &str, name: &str) {
        self.data.insert(tag.to_string(), clean_string(name, true));
    }

    /// Merge one client-type entry.
    pub fn merge_client(&mut self, id: &str, name: &str) {
        self.clients
            .insert(id.to_string(), name.trim().to_string());
    }

    /// Merge a pipe-delimited table file into the given mapping.
    ///
    /// Returns the number of entries merged. Blank lines and lines without
    /// a value field are ignored.
    pub fn merge_file(&mut self, path: &Path, which: Which) -> Result<usize, HistError> {
        let bytes = fs::read(path).map_err(|e| HistError::Table {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        let mut merged = 0;
        for raw in bytes.split(|&b| b == b'\n') {
            let line = latin1_string(raw);
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            let mut parts = line.splitn(3, '|');
            let (Some(tag), Some(name)) = (parts.next(), parts.next()) else {
                continue;
            };
            if tag.is_empty() {
                continue;
            }
            match which {
                Which::Command => self.merge_command(tag, name),
                Which::Data => self.merge_data(tag, name),
                Which::Client => self.merge_client(tag, name),
            }
            merged += 1;
        }
        Ok(merged)
    }

    /// Translate `token` against the chosen mapping.
    ///
    /// Misses return the tag (or token) unchanged; callers detect unknown
    /// codes by identity, never by an error.
    pub fn translate<'a>(&'a self, token: &'a str, which: Which, as_value: bool) -> &'a str {
        match which {
            Which::Data => {
                let (tag, rest) = split_tag(token);
                match self.data.get(tag) {
                    Some(_) if as_value => rest,
                    Some(name) => name.as_str(),
                    None => tag,
                }
            }
            Which::Command => {
                let tag = if token.len() >= 5 && token.starts_with('S') {
                    token.get(3..5).unwrap_or(token)
                } else {
                    token
                };
                self.commands.get(tag).map(String::as_str).unwrap_or(tag)
            }
            Which::Client => self.clients.get(token).map(String::as_str).unwrap_or(token),
        }
    }

    /// Record key for a data tag, or `None` when the tag is unknown.
    pub fn data_name(&self, tag: &str) -> Option<&str> {
        self.data.get(tag).map(String::as_str)
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    pub fn data_count(&self) -> usize {
        self.data.len()
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }
}

/// Split a payload token into its two-character tag and the value part.
///
/// Tag boundaries are character boundaries: a short token comes back whole
/// with an empty value, and high-byte values never split a code point.
pub fn split_tag(token: &str) -> (&str, &str) {
    match token.char_indices().nth(2) {
        Some((idx, _)) => (&token[..idx], &token[idx..]),
        None => (token, ""),
    }
}

/// Composite-key → barcode lookup for item enrichment.
///
/// Optional at runtime; when absent, records simply never gain an
/// `item_id` from the index.
#[derive(Debug, Default)]
pub struct ItemIndex {
    entries: HashMap<Box<str>, Box<str>>,
}

impl ItemIndex {
    /// Load a pipe-delimited `catalog_key|call_seq|copy_num|barcode` file.
    ///
    /// The lookup key is the first three fields re-joined with a trailing
    /// pipe; trailing whitespace on the barcode is trimmed.
    pub fn load(path: &Path) -> Result<Self, HistError> {
        let bytes = fs::read(path).map_err(|e| HistError::Table {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        let mut entries = HashMap::new();
        for raw in bytes.split(|&b| b == b'\n') {
            let line = latin1_string(raw);
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            let mut parts = line.splitn(4, '|');
            let (Some(cat), Some(seq), Some(copy), Some(barcode)) =
                (parts.next(), parts.next(), parts.next(), parts.next())
            else {
                continue;
            };
            let key = format!("{cat}|{seq}|{copy}|");
            entries.insert(key.into_boxed_str(), barcode.trim_end().into());
        }
        Ok(Self { entries })
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|b| &**b)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_builtin_data_translation() {
        let tables = CodeTables::builtin();
        assert_eq!(tables.translate("NQ31221112079020", Which::Data, false), "item_id");
        assert_eq!(
            tables.translate("NQ31221112079020", Which::Data, true),
            "31221112079020"
        );
    }

    #[test]
    fn test_unknown_data_tag_is_identity() {
        let tables = CodeTables::builtin();
        assert_eq!(tables.translate("zZProblem", Which::Data, false), "zZ");
        assert_eq!(tables.translate("zZProblem", Which::Data, true), "zZ");
    }

    #[test]
    fn test_command_envelope_extraction() {
        let tables = CodeTables::builtin();
        assert_eq!(
            tables.translate("S01EVFFADMIN", Which::Command, false),
            "Discharge Item"
        );
        assert_eq!(tables.translate("EV", Which::Command, false), "Discharge Item");
    }

    #[test]
    fn test_unknown_command_is_identity() {
        let tables = CodeTables::builtin();
        assert_eq!(tables.translate("S01qqFF", Which::Command, false), "qq");
        assert_eq!(tables.translate("qq", Which::Command, false), "qq");
    }

    #[test]
    fn test_short_command_token_is_whole_tag() {
        let tables = CodeTables::builtin();
        // under five chars, the whole token is the tag even with the S prefix
        assert_eq!(tables.translate("S1EV", Which::Command, false), "S1EV");
    }

    #[test]
    fn test_client_translation() {
        let tables = CodeTables::builtin();
        assert_eq!(tables.translate("5", Which::Client, false), "CLIENT_ONLINE_CATALOG");
        assert_eq!(tables.translate("6", Which::Client, false), "CLIENT_SIP2");
        assert_eq!(tables.translate("99", Which::Client, false), "99");
    }

    #[test]
    fn test_merge_applies_normalisation() {
        let mut tables = CodeTables::default();
        tables.merge_data("NQ", "Item (ID)");
        assert_eq!(tables.data_name("NQ"), Some("item_id"));
        tables.merge_command("EV", "Discharge [Item]");
        assert_eq!(tables.translate("EV", Which::Command, false), "Discharge Item");
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut tables = CodeTables::builtin();
        let before = tables.data_count();
        tables.merge_data("NQ", "Item ID");
        tables.merge_data("NQ", "Item ID");
        assert_eq!(tables.data_count(), before);
        assert_eq!(tables.data_name("NQ"), Some("item_id"));
    }

    #[test]
    fn test_merge_file_overrides_builtin() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "NQ|Item Barcode|").unwrap();
        writeln!(tmp, "q9|Brand New Field|").unwrap();
        tmp.flush().unwrap();

        let mut tables = CodeTables::builtin();
        let merged = tables.merge_file(tmp.path(), Which::Data).unwrap();
        assert_eq!(merged, 2);
        assert_eq!(tables.data_name("NQ"), Some("item_barcode"));
        assert_eq!(tables.data_name("q9"), Some("brand_new_field"));
    }

    #[test]
    fn test_merge_file_missing_is_error() {
        let mut tables = CodeTables::builtin();
        let err = tables
            .merge_file(Path::new("/nonexistent/table"), Which::Data)
            .unwrap_err();
        assert!(matches!(err, HistError::Table { .. }));
    }

    #[test]
    fn test_split_tag() {
        assert_eq!(split_tag("NQ31221"), ("NQ", "31221"));
        assert_eq!(split_tag("NQ"), ("NQ", ""));
        assert_eq!(split_tag("N"), ("N", ""));
        assert_eq!(split_tag(""), ("", ""));
    }

    #[test]
    fn test_split_tag_high_bytes() {
        // latin-1 decoded values may contain multibyte chars; the split
        // must not panic on a char boundary
        let token = "aa\u{e9}value";
        assert_eq!(split_tag(token), ("aa", "\u{e9}value"));
    }

    #[test]
    fn test_item_index_load_and_lookup() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "2161659|47|2|31221023069607  ").unwrap();
        writeln!(tmp, "1000066|1|1|31221000123456").unwrap();
        tmp.flush().unwrap();

        let index = ItemIndex::load(tmp.path()).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup("2161659|47|2|"), Some("31221023069607"));
        assert_eq!(index.lookup("1|2|3|"), None);
    }
}
