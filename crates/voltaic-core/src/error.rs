//! Error types for voltaic-core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid operating point: {0}")]
    InvalidOperatingPoint(String),

    #[error("invalid array config: {0}")]
    InvalidArrayConfig(String),

    #[error("numeric overflow: {0}")]
    NumericOverflow(String),
}

pub type Result<T> = std::result::Result<T, Error>;
