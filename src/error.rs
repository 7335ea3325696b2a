use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unreadable table {path}: {detail}")]
    Table { path: PathBuf, detail: String },

    #[error("{} is compressed with compress(1); decompress it first (only gzip is read directly)", path.display())]
    UnsupportedCompression { path: PathBuf },

    #[error("{0}")]
    Other(String),
}
