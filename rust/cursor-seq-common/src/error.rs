use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// Returns `true` if the error reports a failed backing-store allocation.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self.kind(), ErrorKind::AllocationFailed { .. })
    }

    /// Returns `true` if the error reports an operation that required a current item.
    pub fn is_no_current_item(&self) -> bool {
        matches!(self.kind(), ErrorKind::NoCurrentItem { .. })
    }

    pub fn allocation_failed(requested: usize, source: TryReserveError) -> Error {
        Error(ErrorKind::AllocationFailed { requested, source }.into())
    }

    pub fn no_current_item(operation: impl Into<String>) -> Error {
        Error(
            ErrorKind::NoCurrentItem {
                operation: operation.into(),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("failed to allocate backing store of {requested} slots")]
    AllocationFailed {
        requested: usize,
        source: TryReserveError,
    },

    #[error("{operation} requires a current item")]
    NoCurrentItem { operation: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<TryReserveError> for Error {
    fn from(e: TryReserveError) -> Self {
        Error::allocation_failed(0, e)
    }
}
