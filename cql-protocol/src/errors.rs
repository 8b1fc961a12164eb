use snafu::{Backtrace, Snafu};

use cql_errors::UnknownErrorCode;

use crate::frame::{FrameFlags, Opcode};

#[derive(Snafu, Debug)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
#[non_exhaustive]
pub enum DecodeError {
    #[snafu(display("unexpected end of frame"))]
    Underflow { backtrace: Backtrace },
    #[snafu(display("unsupported protocol version byte 0x{byte:02x}"))]
    UnsupportedVersion { byte: u8, backtrace: Backtrace },
    #[snafu(display("expected a response frame, got a request"))]
    NotAResponse { backtrace: Backtrace },
    #[snafu(display("expected an ERROR frame, got opcode {opcode:?}"))]
    UnexpectedOpcode { opcode: Opcode, backtrace: Backtrace },
    #[snafu(display("unsupported frame flags: {flags:?}"))]
    UnsupportedFlags {
        flags: FrameFlags,
        backtrace: Backtrace,
    },
    #[snafu(display("declared body length {length} exceeds the limit"))]
    LengthTooLong { length: u32, backtrace: Backtrace },
    #[snafu(display("invalid utf8 in string"))]
    InvalidUtf8 {
        source: std::str::Utf8Error,
        backtrace: Backtrace,
    },
    #[snafu(display("{source}"))]
    UnknownCode {
        source: UnknownErrorCode,
        backtrace: Backtrace,
    },
    #[snafu(display("error response has an empty message"))]
    EmptyMessage { backtrace: Backtrace },
}

#[derive(Snafu, Debug)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
#[non_exhaustive]
pub enum EncodeError {
    #[snafu(display("message of {length} bytes does not fit into a string"))]
    MessageTooLong { length: usize, backtrace: Backtrace },
    #[snafu(display("too many warnings: {count}"))]
    TooManyWarnings { count: usize, backtrace: Backtrace },
    #[snafu(display("frame body of {length} bytes exceeds the limit"))]
    BodyTooLong { length: usize, backtrace: Backtrace },
}
