use quranshare_common::{ReaderId, SectionId};
use thiserror::Error;

/// Errors that can occur while assigning pages or driving a session
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A caller passed a value the operation cannot work with
    #[error("ERROR: Invalid argument: {message}")]
    InvalidArgument { message: String },
    /// No reader carries an assignment for the section
    #[error("ERROR: Section not found: {section}")]
    SectionNotFound { section: SectionId },
    /// No reader has the given id
    #[error("ERROR: Reader not found: {id}")]
    ReaderNotFound { id: ReaderId },
    /// Loading or saving session state failed
    #[error("ERROR: {0}")]
    State(#[from] quranshare_common::Error),
}

impl RuntimeError {
    pub fn invalid_argument<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        RuntimeError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RuntimeError::SectionNotFound { .. } | RuntimeError::ReaderNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
