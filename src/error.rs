use std::io;
use thiserror::Error;

use crate::unpack::ContainerFormat;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures while turning container bytes into an [`Extension`](crate::models::Extension).
///
/// Every variant is fatal for the conversion; nothing is retried and no
/// partial result is returned.
#[derive(Debug, Error)]
pub enum Error {
    #[error("file too small to be a CRX file")]
    TooSmall,

    #[error("not a CRX or ZIP file (unrecognized magic bytes)")]
    UnrecognizedFormat,

    #[error("unsupported CRX version: {0}")]
    UnsupportedVersion(u32),

    #[error("{format} header exceeds file size (payload offset {offset}, file length {len})")]
    HeaderExceedsFile {
        format: ContainerFormat,
        offset: u64,
        len: usize,
    },

    #[error("failed to open ZIP archive: {0}")]
    MalformedArchive(#[source] zip::result::ZipError),

    #[error("failed to read {path}: {source}")]
    EntryRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse manifest.json: {0}")]
    InvalidManifest(#[source] serde_json::Error),
}
