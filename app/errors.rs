use std::{io, path::PathBuf};

use config::ConfigError;
use rtp_formats::errors::RtpError;
use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("logger error: {0}")]
    LoggerError(#[from] SetGlobalDefaultError),
    #[error("read {0:?} failed: {1}")]
    ReadInput(PathBuf, io::Error),
    #[error("invalid hex input: {0}")]
    InvalidHex(String),
    #[error("rtp error: {0}")]
    RtpError(#[from] RtpError),
}

pub(crate) type AppResult<T> = Result<T, AppError>;
