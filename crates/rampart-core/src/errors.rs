//! Error types shared across the Rampart crates.
//!
//! Persistence is best-effort: [`StoreError`] exists to be logged at the
//! call site, never to cross the engine boundary.

use thiserror::Error;

/// A knowledge-store backend failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the durable record failed.
    #[error("knowledge record I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The durable record exists but is not valid JSON.
    #[error("knowledge record is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}
