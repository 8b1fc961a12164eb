use bytes::BytesMut;
use tracing::{debug, warn};

use cql_errors::{Error, ErrorCode, InternalError};

use crate::error_response::ErrorResponse;
use crate::errors::EncodeError;
use crate::features::ProtocolVersion;
use crate::frame::ErrorFrame;

/// Message sent instead of the original one when internal errors are redacted.
pub const REDACTED_MESSAGE: &str = "Internal server error";

#[derive(Debug, Clone, Default)]
pub struct EncoderConfig {
    /// Version written into produced frames.
    pub version: ProtocolVersion,
    /// Replace messages of internal errors that reach the connection by
    /// [`REDACTED_MESSAGE`]. Coded errors are never altered.
    pub redact_internal: bool,
}

impl EncoderConfig {
    pub fn with_version(mut self, version: ProtocolVersion) -> EncoderConfig {
        self.version = version;
        self
    }

    pub fn with_redact_internal(mut self, redact_internal: bool) -> EncoderConfig {
        self.redact_internal = redact_internal;
        self
    }
}

/// Turns errors that reach the connection into `ERROR` responses.
///
/// Coded errors are sent with their own code and message. Internal errors
/// never carry a code, so one is picked here: [`ErrorCode::ProtocolError`] for
/// marshaling faults and [`ErrorCode::ServerError`] for everything else.
#[derive(Debug, Clone, Default)]
pub struct ErrorEncoder {
    config: EncoderConfig,
}

impl ErrorEncoder {
    pub fn new(config: EncoderConfig) -> ErrorEncoder {
        ErrorEncoder { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn response_for(&self, err: &Error) -> ErrorResponse {
        match err {
            Error::Coded(err) => {
                debug!(code = %err.code(), "sending error response: {err}");
                ErrorResponse::from(err)
            }
            Error::Internal(err) => self.escaped(err),
        }
    }

    fn escaped(&self, err: &InternalError) -> ErrorResponse {
        let code = if err.is_marshal() {
            ErrorCode::ProtocolError
        } else {
            ErrorCode::ServerError
        };
        warn!(
            kind = err.kind_name(),
            code = %code,
            "internal error reached the connection: {err}"
        );
        if self.config.redact_internal {
            ErrorResponse::new(code, REDACTED_MESSAGE)
        } else {
            ErrorResponse::new(code, err.message())
        }
    }

    pub fn frame_for(&self, stream: i16, err: &Error) -> ErrorFrame {
        ErrorFrame::new(self.config.version, stream, self.response_for(err))
    }

    /// Appends a complete `ERROR` frame for `err` to `buf`.
    ///
    /// Messages are never truncated: one that does not fit into a `[string]`
    /// fails with [`EncodeError::MessageTooLong`] and leaves `buf` untouched.
    pub fn encode_frame(
        &self,
        stream: i16,
        err: &Error,
        buf: &mut BytesMut,
    ) -> Result<(), EncodeError> {
        self.frame_for(stream, err).encode(buf)
    }
}
