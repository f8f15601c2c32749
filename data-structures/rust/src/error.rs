use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl HeapError {
    pub(crate) fn invalid(detail: impl Into<String>) -> Self {
        let err = HeapError::InvalidArgument(detail.into());
        log::debug!("rejected input: {err}");
        err
    }
}

pub type Result<T> = std::result::Result<T, HeapError>;
