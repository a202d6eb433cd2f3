/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
 * If a copy of the MPL was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::path::PathBuf;

/// Everything that can stop a conversion. All of them are terminal.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Wrong number of arguments; the caller prints the usage text instead of this message.
    #[error("wrong number of arguments")]
    Usage,
    #[error("File '{}' not found", .path.display())]
    NotFound { path: PathBuf },
    #[error("Not a valid bitmap file")]
    InvalidFormat,
    #[error("Only 1-bit images supported, got {bpp}-bit")]
    UnsupportedFormat { bpp: u16 },
    /// Anything else, reported with the underlying message.
    #[error("{0}")]
    Unexpected(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Maps a failure to open the input file, keeping "not found" distinct from other I/O errors.
    pub fn from_open(path: PathBuf, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Error::NotFound { path },
            _ => Error::Unexpected(err.into()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Unexpected(err.into())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
