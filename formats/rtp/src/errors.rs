use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RtpError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("rtp header size insufficient: {actual} < {required}")]
    InsufficientHeader { required: usize, actual: usize },
    #[error("rtp header insufficient size for extension: {actual} < {required}")]
    InsufficientExtension { required: usize, actual: usize },
    #[error("buffer too small: {actual} < {required}")]
    BufferTooSmall { required: usize, actual: usize },
    #[error("extension payload must be in 32-bit words, got {0} bytes")]
    UnalignedPayload(usize),
    #[error("padding size {padding_size} exceeds the {available} bytes after the header")]
    MalformedPadding { padding_size: usize, available: usize },
    #[error("invalid header extension: {0}")]
    InvalidExtension(String),
    #[error("header field out of range: {0}")]
    InvalidHeaderField(String),
    #[error("too many csrc: {0}")]
    TooManyCsrc(usize),
}

pub type RtpResult<T> = Result<T, RtpError>;
