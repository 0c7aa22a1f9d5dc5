//! Render errors.

use std::{fmt, io};

use thiserror::Error;

/// Render result.
pub type Result<T> = std::result::Result<T, Error>;

/// Render error.
///
/// Rendering itself never fails; errors only come from the destination writer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Backend formatter error.
    #[error("Backend formatter error: {0}")]
    Format(#[from] fmt::Error),
    /// Backend I/O error.
    #[error("Backend I/O error: {0}")]
    Io(#[from] io::Error),
}
