//! Configuration loading for symhist.
//!
//! Configuration lives in `~/.config/symhist/config.toml` and is purely
//! optional: every option falls back to a default, so the tool works out
//! of the box. CLI flags always override config values; the merge happens
//! in `main.rs` after loading, so this module never sees the CLI.
//!
//! A typical config points at the site's table files once instead of
//! repeating them on every invocation:
//!
//! ```toml
//! clients = "~/symphony/custom/holdclients"
//! items = "~/symphony/custom/itemkeys.lst"
//! format = "ndjson"
//! ```

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level config deserialized from `~/.config/symhist/config.toml`.
///
/// All fields are optional. A missing file, and equally an unparseable
/// one, yields `Config::default()` rather than an error so normal usage
/// never breaks on a stale config.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default output file (single input) or directory (batch mode).
    pub output: Option<String>,
    /// Default emission format: `"array"` or `"ndjson"`.
    pub format: Option<String>,
    /// Command-code table merged over the built-ins.
    pub commands: Option<String>,
    /// Data-code table merged over the built-ins.
    pub datacodes: Option<String>,
    /// Hold-client table merged over the built-in client types.
    pub clients: Option<String>,
    /// Item-key → barcode index file.
    pub items: Option<String>,
}

impl Config {
    pub fn load() -> Config {
        let Some(home) = dirs::home_dir() else {
            return Config::default();
        };
        let path = home.join(".config/symhist/config.toml");
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Config::default();
        };
        toml::from_str(&content).unwrap_or_default()
    }

    pub fn output_path(&self) -> Option<PathBuf> {
        self.output.as_deref().map(expand_tilde)
    }

    pub fn commands_path(&self) -> Option<PathBuf> {
        self.commands.as_deref().map(expand_tilde)
    }

    pub fn datacodes_path(&self) -> Option<PathBuf> {
        self.datacodes.as_deref().map(expand_tilde)
    }

    pub fn clients_path(&self) -> Option<PathBuf> {
        self.clients.as_deref().map(expand_tilde)
    }

    pub fn items_path(&self) -> Option<PathBuf> {
        self.items.as_deref().map(expand_tilde)
    }
}

/// Expand a leading `~/` to the home directory.
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_all_none() {
        let config = Config::default();
        assert!(config.output.is_none());
        assert!(config.format.is_none());
        assert!(config.items_path().is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("format = \"ndjson\"").unwrap();
        assert_eq!(config.format.as_deref(), Some("ndjson"));
        assert!(config.clients.is_none());
    }

    #[test]
    fn test_expand_tilde_absolute_path_unchanged() {
        assert_eq!(expand_tilde("/var/log/hist"), PathBuf::from("/var/log/hist"));
    }

    #[test]
    fn test_expand_tilde_home_relative() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/tables"), home.join("tables"));
        }
    }
}
