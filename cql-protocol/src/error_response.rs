use std::convert::TryFrom;

use bytes::{Buf, BufMut, Bytes, BytesMut};
use snafu::{ensure, ResultExt};

use cql_errors::{CodedError, ErrorCode, UnknownErrorCode, WireError};

use crate::encoding::{get_string, put_string};
use crate::errors::{self, DecodeError, EncodeError};

/// Body of an `ERROR` frame.
///
/// ```text
/// [int] code | [string] message | code-specific fields
/// ```
///
/// Code-specific fields are kept undecoded in `extra`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: u32,
    pub message: String,
    pub extra: Bytes,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> ErrorResponse {
        ErrorResponse {
            code: code.into(),
            message: message.into(),
            extra: Bytes::new(),
        }
    }

    pub fn error_code(&self) -> Result<ErrorCode, UnknownErrorCode> {
        ErrorCode::try_from(self.code)
    }

    /// Appends the body to `buf`. On error nothing is written.
    pub fn encode(&self, buf: &mut BytesMut) -> Result<(), EncodeError> {
        let length = self.message.len();
        ensure!(
            u16::try_from(length).is_ok(),
            errors::MessageTooLong { length }
        );
        buf.reserve(4);
        buf.put_u32(self.code);
        put_string(buf, &self.message)?;
        buf.extend_from_slice(&self.extra);
        Ok(())
    }

    /// Consumes the rest of `buf`.
    pub fn decode(buf: &mut Bytes) -> Result<ErrorResponse, DecodeError> {
        ensure!(buf.remaining() >= 4, errors::Underflow);
        let code = buf.get_u32();
        let message = get_string(buf)?;
        let extra = buf.split_to(buf.remaining());
        Ok(ErrorResponse {
            code,
            message,
            extra,
        })
    }
}

impl<E: WireError + ?Sized> From<&E> for ErrorResponse {
    fn from(err: &E) -> ErrorResponse {
        ErrorResponse::new(err.code(), err.message())
    }
}

impl TryFrom<ErrorResponse> for CodedError {
    type Error = DecodeError;

    fn try_from(response: ErrorResponse) -> Result<CodedError, DecodeError> {
        let code = response.error_code().context(errors::UnknownCode)?;
        ensure!(!response.message.is_empty(), errors::EmptyMessage);
        Ok(CodedError::new(code, response.message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cql_errors::syntax_error;

    #[test]
    fn syntax_error_body() {
        let mut buf = BytesMut::new();
        ErrorResponse::from(&syntax_error("bad token"))
            .encode(&mut buf)
            .unwrap();
        assert_eq!(&buf[..], b"\x00\x00\x20\x00\x00\x09bad token");
    }

    #[test]
    fn overlong_message_leaves_buffer_untouched() {
        let mut buf = BytesMut::from(&b"HDR"[..]);
        let err = ErrorResponse::new(ErrorCode::Invalid, "x".repeat(70_000))
            .encode(&mut buf)
            .unwrap_err();
        assert!(matches!(err, EncodeError::MessageTooLong { length: 70_000, .. }));
        assert_eq!(&buf[..], b"HDR");
    }

    #[test]
    fn longest_message_fits() {
        let mut buf = BytesMut::new();
        ErrorResponse::new(ErrorCode::Invalid, "x".repeat(usize::from(u16::MAX)))
            .encode(&mut buf)
            .unwrap();
        assert_eq!(buf.len(), 4 + 2 + usize::from(u16::MAX));
    }

    #[test]
    fn decode_keeps_extra_fields() {
        // UNAVAILABLE: consistency [short], required [int], alive [int]
        let mut buf = Bytes::from_static(
            b"\x00\x00\x10\x00\x00\x04down\x00\x04\x00\x00\x00\x02\x00\x00\x00\x01",
        );
        let response = ErrorResponse::decode(&mut buf).unwrap();
        assert_eq!(response.error_code(), Ok(ErrorCode::Unavailable));
        assert_eq!(response.message, "down");
        assert_eq!(&response.extra[..], b"\x00\x04\x00\x00\x00\x02\x00\x00\x00\x01");
        assert!(buf.is_empty());
    }

    #[test]
    fn empty_message_is_not_a_coded_error() {
        let response = ErrorResponse {
            code: 0x2200,
            message: String::new(),
            extra: Bytes::new(),
        };
        assert!(matches!(
            CodedError::try_from(response),
            Err(DecodeError::EmptyMessage { .. })
        ));
    }
}
