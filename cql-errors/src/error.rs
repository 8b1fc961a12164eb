use crate::kinds::{Category, ErrorCode};

/// A failure that is not meant to reach a client as a structured error.
///
/// These carry a message only. If one escapes to the connection the encoder
/// has to pick a generic code for it; this crate never does that on its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error)]
pub enum InternalError {
    /// The request could not be satisfied.
    #[display("{message}")]
    InvalidRequest { message: String },
    /// The request refers to a keyspace that does not exist.
    ///
    /// This is a special case of [`InternalError::InvalidRequest`], and like
    /// it carries no code.
    #[display("{message}")]
    KeyspaceNotDefined { message: String },
    /// A value could not be serialized or deserialized.
    #[display("{message}")]
    Marshal { message: String },
}

/// A client-visible error: a wire [`ErrorCode`] and a message.
///
/// `Display` writes the message exactly as it was given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error)]
#[display("{message}")]
pub struct CodedError {
    code: ErrorCode,
    message: String,
}

/// Any error raised by validation or execution.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum Error {
    Internal(#[error(not(source))] InternalError),
    Coded(#[error(not(source))] CodedError),
}

fn checked(message: impl Into<String>) -> String {
    let message = message.into();
    debug_assert!(!message.is_empty(), "error message must not be empty");
    message
}

impl InternalError {
    pub fn message(&self) -> &str {
        match self {
            InternalError::InvalidRequest { message }
            | InternalError::KeyspaceNotDefined { message }
            | InternalError::Marshal { message } => message,
        }
    }

    /// True for [`InternalError::InvalidRequest`] and its specializations.
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            InternalError::InvalidRequest { .. } | InternalError::KeyspaceNotDefined { .. }
        )
    }

    pub fn is_keyspace_not_defined(&self) -> bool {
        matches!(self, InternalError::KeyspaceNotDefined { .. })
    }

    pub fn is_marshal(&self) -> bool {
        matches!(self, InternalError::Marshal { .. })
    }

    /// Short name of the variant, suitable for logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            InternalError::InvalidRequest { .. } => "invalid_request",
            InternalError::KeyspaceNotDefined { .. } => "keyspace_not_defined",
            InternalError::Marshal { .. } => "marshal",
        }
    }
}

impl CodedError {
    /// Creates an error with an explicit code.
    ///
    /// The message must not be empty; this is checked in debug builds only.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> CodedError {
        CodedError {
            code,
            message: checked(message),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn category(&self) -> Category {
        self.code.category()
    }

    /// Whether the code lies in the request-validation band (`0x2xxx`).
    pub fn is_request_validation(&self) -> bool {
        self.category() == Category::Validation
    }

    /// Splits the error into its code and message.
    pub fn into_parts(self) -> (ErrorCode, String) {
        (self.code, self.message)
    }
}

impl Error {
    /// Message of either kind of error.
    pub fn message(&self) -> &str {
        match self {
            Error::Internal(e) => e.message(),
            Error::Coded(e) => e.message(),
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Error::Internal(_))
    }

    pub fn as_coded(&self) -> Option<&CodedError> {
        match self {
            Error::Coded(e) => Some(e),
            Error::Internal(_) => None,
        }
    }

    pub fn as_internal(&self) -> Option<&InternalError> {
        match self {
            Error::Internal(e) => Some(e),
            Error::Coded(_) => None,
        }
    }
}

/// The request could not be satisfied.
pub fn invalid_request(message: impl Into<String>) -> InternalError {
    InternalError::InvalidRequest {
        message: checked(message),
    }
}

pub fn keyspace_not_defined(message: impl Into<String>) -> InternalError {
    InternalError::KeyspaceNotDefined {
        message: checked(message),
    }
}

/// A value could not be serialized or deserialized.
pub fn marshal_error(message: impl Into<String>) -> InternalError {
    InternalError::Marshal {
        message: checked(message),
    }
}

pub fn coded_error(code: ErrorCode, message: impl Into<String>) -> CodedError {
    CodedError::new(code, message)
}

/// Same as `coded_error(ErrorCode::SyntaxError, message)`.
pub fn syntax_error(message: impl Into<String>) -> CodedError {
    CodedError::syntax_error(message)
}
