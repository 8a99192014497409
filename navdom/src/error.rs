use thiserror::Error;

/// Errors from document operations that target an element by ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("element '{0}' not found")]
    NotFound(String),

    #[error("element '{0}' is not focusable")]
    NotFocusable(String),

    #[error("element '{0}' is disabled")]
    Disabled(String),
}
