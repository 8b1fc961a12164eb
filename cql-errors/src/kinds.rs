//! Wire error codes.
//!
//! Every code, its numeric value and its wire name are declared once in the
//! table at the bottom of this module. The values are fixed by the protocol:
//! the leading hex digit selects the [`Category`] and the gaps between values
//! are reserved.

use std::convert::TryFrom;

use crate::error::CodedError;

/// Band of the code space a code belongs to, selected by its leading hex digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `0x0xxx`: server, protocol and authentication faults.
    General,
    /// `0x1xxx`: problems during request execution.
    Execution,
    /// `0x2xxx`: problems validating the request.
    Validation,
}

/// A numeric value received from the wire that is not a known [`ErrorCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown error code 0x{_0:04x}")]
pub struct UnknownErrorCode(#[error(not(source))] pub u32);

macro_rules! error_codes {
    ($(
        $(#[$meta:meta])*
        $variant:ident = $value:literal, $name:literal, $ctor:ident;
    )*) => {
        /// Error code carried by every client-visible error.
        ///
        /// Serialized as a 4-byte big-endian integer at the start of an
        /// `ERROR` response body.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum ErrorCode {
            $(
                $(#[$meta])*
                $variant = $value,
            )*
        }

        impl ErrorCode {
            /// All codes, in ascending numeric order.
            pub const ALL: &'static [ErrorCode] = &[$(ErrorCode::$variant),*];

            /// Symbolic name used by the protocol documentation, e.g. `SYNTAX_ERROR`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(ErrorCode::$variant => $name,)*
                }
            }

            pub const fn from_u16(value: u16) -> Option<ErrorCode> {
                match value {
                    $($value => Some(ErrorCode::$variant),)*
                    _ => None,
                }
            }
        }

        impl CodedError {
            $(
                #[doc = concat!("Creates a `", $name, "` error carrying `message` verbatim.")]
                pub fn $ctor(message: impl Into<String>) -> CodedError {
                    CodedError::new(ErrorCode::$variant, message)
                }
            )*
        }
    };
}

impl ErrorCode {
    /// Numeric value as defined by the protocol.
    pub const fn value(self) -> u16 {
        self as u16
    }

    pub const fn category(self) -> Category {
        match self.value() >> 12 {
            0x0 => Category::General,
            0x1 => Category::Execution,
            _ => Category::Validation,
        }
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = UnknownErrorCode;

    fn try_from(value: u16) -> Result<ErrorCode, UnknownErrorCode> {
        ErrorCode::from_u16(value).ok_or(UnknownErrorCode(value.into()))
    }
}

impl TryFrom<u32> for ErrorCode {
    type Error = UnknownErrorCode;

    fn try_from(value: u32) -> Result<ErrorCode, UnknownErrorCode> {
        u16::try_from(value)
            .ok()
            .and_then(ErrorCode::from_u16)
            .ok_or(UnknownErrorCode(value))
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.value()
    }
}

impl From<ErrorCode> for u32 {
    fn from(code: ErrorCode) -> u32 {
        code.value().into()
    }
}

error_codes! {
    /// Something unexpected happened on the server. Also used for internal
    /// errors that escape to the connection.
    ServerError = 0x0000, "SERVER_ERROR", server_error;
    /// The client message triggered a protocol violation.
    ProtocolError = 0x000A, "PROTOCOL_ERROR", protocol_error;
    BadCredentials = 0x0100, "BAD_CREDENTIALS", bad_credentials;

    Unavailable = 0x1000, "UNAVAILABLE", unavailable;
    Overloaded = 0x1001, "OVERLOADED", overloaded;
    IsBootstrapping = 0x1002, "IS_BOOTSTRAPPING", bootstrapping;
    TruncateError = 0x1003, "TRUNCATE_ERROR", truncate_error;
    WriteTimeout = 0x1100, "WRITE_TIMEOUT", write_timeout;
    ReadTimeout = 0x1200, "READ_TIMEOUT", read_timeout;

    SyntaxError = 0x2000, "SYNTAX_ERROR", syntax_error;
    Unauthorized = 0x2100, "UNAUTHORIZED", unauthorized;
    /// The query is syntactically correct but invalid.
    Invalid = 0x2200, "INVALID", invalid;
    ConfigError = 0x2300, "CONFIG_ERROR", config_error;
    AlreadyExists = 0x2400, "ALREADY_EXISTS", already_exists;
    /// A prepared statement id is not known by the node.
    Unprepared = 0x2500, "UNPREPARED", unprepared;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_is_sorted_and_unique() {
        let values: Vec<u16> = ErrorCode::ALL.iter().map(|c| c.value()).collect();
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(values, sorted);
        assert_eq!(values.iter().collect::<HashSet<_>>().len(), values.len());
        assert_eq!(ErrorCode::ALL.len(), 15);
    }

    #[test]
    fn only_server_error_is_zero() {
        for code in ErrorCode::ALL {
            assert_eq!(code.value() == 0, *code == ErrorCode::ServerError, "{code}");
        }
    }

    #[test]
    fn from_u16_inverts_value() {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::from_u16(code.value()), Some(*code));
        }
    }

    #[test]
    fn reserved_gaps_stay_unmapped() {
        for value in [0x0001, 0x0009, 0x0101, 0x1004, 0x1101, 0x2001, 0x2600, 0xFFFF] {
            assert_eq!(ErrorCode::from_u16(value), None);
            assert_eq!(
                ErrorCode::try_from(value),
                Err(UnknownErrorCode(value.into()))
            );
        }
        assert_eq!(
            ErrorCode::try_from(0x1_2000_u32),
            Err(UnknownErrorCode(0x1_2000))
        );
        assert_eq!(ErrorCode::try_from(0x2000_u32), Ok(ErrorCode::SyntaxError));
    }

    #[test]
    fn bands() {
        assert_eq!(ErrorCode::ProtocolError.category(), Category::General);
        assert_eq!(ErrorCode::BadCredentials.category(), Category::General);
        assert_eq!(ErrorCode::TruncateError.category(), Category::Execution);
        assert_eq!(ErrorCode::ReadTimeout.category(), Category::Execution);
        assert_eq!(ErrorCode::Unprepared.category(), Category::Validation);
    }

    #[test]
    fn unknown_code_message() {
        assert_eq!(
            UnknownErrorCode(0x2600).to_string(),
            "unknown error code 0x2600"
        );
    }
}
