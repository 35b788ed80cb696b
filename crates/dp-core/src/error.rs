//! Base error type.
//!
//! `dp-core` only fails while loading configuration or parsing external
//! text; file I/O belongs to `dp-store`.  The engine and store crates
//! define their own enums, and routing failures never pass through
//! `DpError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DpError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `dp-core`.
pub type DpResult<T> = Result<T, DpError>;
