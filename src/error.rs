//! Error types for the tictoc crate

use thiserror::Error;

/// Main error type for the tictoc crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board text must contain exactly 9 symbols, got {got}")]
    InvalidLength { got: usize },

    #[error("illegal symbol '{symbol}' at position {position}")]
    IllegalSymbol { symbol: char, position: usize },

    #[error("corrupt data: bad magic {found:#018x}")]
    CorruptData { found: u64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
