/*!
Frame header and the [ErrorFrame].

Every frame starts with a 9-byte header:

```text
 0         8        16                24         32
 +---------+---------+-----------------+----------+
 | version |  flags  |     stream      |  opcode  |
 +---------+---------+-----------------+----------+
 |                   length                       |
 +------------------------------------------------+
```

Versions 3 to 5 share this layout.
*/

use bytes::{Buf, BufMut, Bytes, BytesMut};
use snafu::{ensure, OptionExt};
use uuid::Uuid;

use crate::encoding::{get_string_list, put_string_list};
use crate::error_response::ErrorResponse;
use crate::errors::{self, DecodeError, EncodeError};
use crate::features::ProtocolVersion;

pub const HEADER_LEN: usize = 9;
/// Largest body a frame may declare.
pub const MAX_BODY_LEN: usize = 256 * 1024 * 1024;

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct FrameFlags: u8 {
        const COMPRESSION =     0b00000001;
        const TRACING =         0b00000010;
        const CUSTOM_PAYLOAD =  0b00000100;
        const WARNING =         0b00001000;
        const USE_BETA =        0b00010000;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Error,
    Startup,
    Ready,
    Authenticate,
    Options,
    Supported,
    Query,
    Result,
    Prepare,
    Execute,
    Register,
    Event,
    Batch,
    AuthChallenge,
    AuthResponse,
    AuthSuccess,
    Unknown(u8),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameHeader {
    pub version: ProtocolVersion,
    pub response: bool,
    pub flags: FrameFlags,
    pub stream: i16,
    pub opcode: Opcode,
    pub length: u32,
}

/// A complete `ERROR` response frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFrame {
    pub version: ProtocolVersion,
    pub stream: i16,
    pub tracing_id: Option<Uuid>,
    pub warnings: Vec<String>,
    pub body: ErrorResponse,
}

impl Opcode {
    pub fn from_u8(code: u8) -> Opcode {
        use Opcode::*;
        match code {
            0x00 => Error,
            0x01 => Startup,
            0x02 => Ready,
            0x03 => Authenticate,
            0x05 => Options,
            0x06 => Supported,
            0x07 => Query,
            0x08 => Result,
            0x09 => Prepare,
            0x0A => Execute,
            0x0B => Register,
            0x0C => Event,
            0x0D => Batch,
            0x0E => AuthChallenge,
            0x0F => AuthResponse,
            0x10 => AuthSuccess,
            _ => Unknown(code),
        }
    }

    pub fn to_u8(self) -> u8 {
        use Opcode::*;
        match self {
            Error => 0x00,
            Startup => 0x01,
            Ready => 0x02,
            Authenticate => 0x03,
            Options => 0x05,
            Supported => 0x06,
            Query => 0x07,
            Result => 0x08,
            Prepare => 0x09,
            Execute => 0x0A,
            Register => 0x0B,
            Event => 0x0C,
            Batch => 0x0D,
            AuthChallenge => 0x0E,
            AuthResponse => 0x0F,
            AuthSuccess => 0x10,
            Unknown(code) => code,
        }
    }
}

impl FrameHeader {
    pub fn encode(&self, buf: &mut BytesMut) {
        buf.reserve(HEADER_LEN);
        buf.put_u8(if self.response {
            self.version.response_byte()
        } else {
            self.version.request_byte()
        });
        buf.put_u8(self.flags.bits());
        buf.put_i16(self.stream);
        buf.put_u8(self.opcode.to_u8());
        buf.put_u32(self.length);
    }

    /// Decodes a header. The body is left in `buf`.
    pub fn decode(buf: &mut Bytes) -> Result<FrameHeader, DecodeError> {
        ensure!(buf.remaining() >= HEADER_LEN, errors::Underflow);
        let (version, response) = ProtocolVersion::try_from_byte(buf.get_u8())?;
        let flags = FrameFlags::from_bits_retain(buf.get_u8());
        let stream = buf.get_i16();
        let opcode = Opcode::from_u8(buf.get_u8());
        let length = buf.get_u32();
        ensure!(
            usize::try_from(length).is_ok_and(|len| len <= MAX_BODY_LEN),
            errors::LengthTooLong { length }
        );
        Ok(FrameHeader {
            version,
            response,
            flags,
            stream,
            opcode,
            length,
        })
    }
}

impl ErrorFrame {
    pub fn new(version: ProtocolVersion, stream: i16, body: ErrorResponse) -> ErrorFrame {
        ErrorFrame {
            version,
            stream,
            tracing_id: None,
            warnings: Vec::new(),
            body,
        }
    }

    pub fn with_tracing_id(mut self, tracing_id: Uuid) -> ErrorFrame {
        self.tracing_id = Some(tracing_id);
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> ErrorFrame {
        self.warnings = warnings;
        self
    }

    pub fn flags(&self) -> FrameFlags {
        let mut flags = FrameFlags::empty();
        if self.tracing_id.is_some() {
            flags |= FrameFlags::TRACING;
        }
        if !self.warnings.is_empty() {
            flags |= FrameFlags::WARNING;
        }
        flags
    }

    pub fn encode(&self, buf: &mut BytesMut) -> Result<(), EncodeError> {
        let mut body = BytesMut::new();
        if let Some(tracing_id) = &self.tracing_id {
            body.put_slice(tracing_id.as_bytes());
        }
        if !self.warnings.is_empty() {
            put_string_list(&mut body, &self.warnings)?;
        }
        self.body.encode(&mut body)?;
        ensure!(
            body.len() <= MAX_BODY_LEN,
            errors::BodyTooLong { length: body.len() }
        );
        let length = u32::try_from(body.len())
            .ok()
            .context(errors::BodyTooLong { length: body.len() })?;

        let header = FrameHeader {
            version: self.version,
            response: true,
            flags: self.flags(),
            stream: self.stream,
            opcode: Opcode::Error,
            length,
        };
        header.encode(buf);
        buf.put(body);
        Ok(())
    }

    /// Decode exactly one frame from the buffer.
    ///
    /// Bytes after the frame are left in `buf`.
    pub fn decode(buf: &mut Bytes) -> Result<ErrorFrame, DecodeError> {
        let header = FrameHeader::decode(buf)?;
        ensure!(header.response, errors::NotAResponse);
        ensure!(
            header.opcode == Opcode::Error,
            errors::UnexpectedOpcode {
                opcode: header.opcode
            }
        );
        let unsupported = header.flags & (FrameFlags::COMPRESSION | FrameFlags::CUSTOM_PAYLOAD);
        ensure!(
            unsupported.is_empty(),
            errors::UnsupportedFlags { flags: unsupported }
        );
        let length = header.length as usize;
        ensure!(buf.remaining() >= length, errors::Underflow);
        let body = &mut buf.split_to(length);

        let tracing_id = if header.flags.contains(FrameFlags::TRACING) {
            ensure!(body.remaining() >= 16, errors::Underflow);
            let mut id = [0u8; 16];
            body.copy_to_slice(&mut id);
            Some(Uuid::from_bytes(id))
        } else {
            None
        };
        let warnings = if header.flags.contains(FrameFlags::WARNING) {
            get_string_list(body)?
        } else {
            Vec::new()
        };
        let body = ErrorResponse::decode(body)?;

        Ok(ErrorFrame {
            version: header.version,
            stream: header.stream,
            tracing_id,
            warnings,
            body,
        })
    }
}
