//! symhist: Symphony history logs to JSON.
//!
//! Library entry point exposing the decode pipeline. The `symhist` binary
//! (`main.rs`) is a thin CLI wrapper around this library.
//!
//! ```text
//! Input (.hist / .hist.gz) → LineSource → RangeGate → Decoder → Record → Emitter (.json / .ndjson)
//! ```

pub mod clean;
mod codes;
pub mod config;
pub mod dates;
pub mod decoder;
pub mod driver;
pub mod error;
pub mod formatter;
pub mod gate;
pub mod input;
pub mod record;
pub mod tables;
