//! Error types for the demo driver.

use thiserror::Error;

/// Result type for driver operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or running the demo.
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected tap configuration
    #[error(transparent)]
    Config(#[from] mfsr_core::Error),

    /// Seed doesn't fit in the register
    #[error("seed {seed:#x} does not fit in a {width}-bit register")]
    InvalidSeed { seed: u64, width: u32 },

    /// Width without a backing word type
    #[error("unsupported register width {0} (expected 8, 16, 32 or 64)")]
    UnsupportedWidth(u32),

    /// Malformed command line value
    #[error("parse error: {0}")]
    Parse(String),

    /// Config file is not valid JSON
    #[error("config file error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
