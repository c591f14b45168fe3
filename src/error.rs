//! Error types for the fallible edges of the reader

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("Settings parse error: {0}")]
    Settings(#[from] serde_json::Error),
    #[error("Invalid scroll height {0}%, expected 0-100")]
    InvalidScrollHeight(u8),
}

pub type Result<T> = std::result::Result<T, ReaderError>;
