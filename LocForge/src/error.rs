//! Error types for `LocForge`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `LocForge` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== locres Format Errors ====================
    /// The file is not a valid locres container (missing magic GUID).
    #[error("invalid locres magic: expected locres GUID, found {0:02X?}")]
    InvalidLocresMagic([u8; 16]),

    /// The locres version is not supported.
    #[error("unsupported locres version: {0} (supported: 1-3)")]
    UnsupportedLocresVersion(u8),

    /// An entry references a slot outside the localized string array.
    #[error("invalid localized string index: {0}")]
    InvalidStringIndex(i32),

    /// A length or count field is inconsistent with the data that follows it.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Unexpected end of file.
    #[error("unexpected end of file")]
    UnexpectedEof,

    // ==================== Strings Table Errors ====================
    /// The strings table is missing required header columns.
    #[error("strings table missing required columns: {0}")]
    MissingColumns(String),

    // ==================== File System Errors ====================
    /// Invalid file path.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),

    // ==================== External Packer Errors ====================
    /// The external packer executable could not be found or started.
    #[error("packer not found: {0}")]
    PackerNotFound(PathBuf),

    /// The external packer exited with a failure status.
    #[error("packer failed ({status}): {stderr}")]
    PackerFailed {
        /// Exit status reported by the packer process.
        status: String,
        /// Captured stderr of the packer process.
        stderr: String,
    },
}

// Add conversion from walkdir::Error
impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for `LocForge` operations.
pub type Result<T> = std::result::Result<T, Error>;
