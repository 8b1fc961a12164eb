use crate::error::{CodedError, InternalError};
use crate::kinds::ErrorCode;

/// An error that can be sent to a client as-is.
///
/// The encoder only ever looks at [`code`](WireError::code) and
/// [`message`](WireError::message). Internal errors do not implement this
/// trait, so there is no way to read a code off them.
pub trait WireError: std::error::Error + Send + Sync + 'static {
    fn code(&self) -> ErrorCode;
    fn message(&self) -> &str;
}

impl WireError for CodedError {
    fn code(&self) -> ErrorCode {
        CodedError::code(self)
    }
    fn message(&self) -> &str {
        CodedError::message(self)
    }
}

/// Explicit translation of internal errors into client-visible ones.
///
/// Used by the layer that knows which code a failure deserves, e.g. turning a
/// missing keyspace into [`ErrorCode::Invalid`].
pub trait ResultExt<T> {
    /// Keeps the internal message verbatim.
    fn or_code(self, code: ErrorCode) -> Result<T, CodedError>;

    fn or_code_with<F>(self, code: ErrorCode, f: F) -> Result<T, CodedError>
    where
        F: FnOnce(&InternalError) -> String;
}

impl<T> ResultExt<T> for Result<T, InternalError> {
    fn or_code(self, code: ErrorCode) -> Result<T, CodedError> {
        self.map_err(|e| CodedError::new(code, e.message()))
    }

    fn or_code_with<F>(self, code: ErrorCode, f: F) -> Result<T, CodedError>
    where
        F: FnOnce(&InternalError) -> String,
    {
        self.map_err(|e| CodedError::new(code, f(&e)))
    }
}
