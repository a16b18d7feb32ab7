use thiserror::Error;

/// Errors from driving a real terminal. The dropdown's own operations
/// never fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("terminal too small: {width}x{height}")]
    TooSmall { width: u16, height: u16 },
}

pub type Result<T> = std::result::Result<T, Error>;
