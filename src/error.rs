//! Crate-level error type and `Result` alias.
//! One variant per failure class of the strip pipeline: missing input,
//! undecodable data, degenerate geometry, resampling and write failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input not found or unreadable: {}: {source}", .path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid geometry: {0}")]
    Geometry(String),

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl Error {
    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }

    pub fn geometry(msg: impl Into<String>) -> Self {
        Error::Geometry(msg.into())
    }
}
