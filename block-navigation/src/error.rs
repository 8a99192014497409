use std::path::PathBuf;

use thiserror::Error;

use crate::store::MoveDirection;

/// Errors from editing the block tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Block not found: {0}")]
    BlockNotFound(String),

    /// The block is already first (or last) among its siblings.
    #[error("Block {client_id} cannot move {direction}")]
    AtEdge {
        client_id: String,
        direction: MoveDirection,
    },

    #[error("Invalid parent block: {0}")]
    InvalidParent(String),

    #[error("Duplicate block id: {0}")]
    DuplicateId(String),
}

/// Errors setting up file logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}
