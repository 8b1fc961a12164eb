/*!
`ERROR` responses of the CQL native protocol.

This crate is the connection side of [`cql_errors`]: it reads the code and
message of an error and writes them into a frame.

```rust
use bytes::BytesMut;
use cql_errors::{syntax_error, Error};
use cql_protocol::ErrorEncoder;

let encoder = ErrorEncoder::default();
let mut buf = BytesMut::new();
encoder.encode_frame(1, &Error::from(syntax_error("bad token")), &mut buf)?;
assert_eq!(&buf[..9], b"\x84\x00\x00\x01\x00\x00\x00\x00\x0f");
assert_eq!(&buf[9..], b"\x00\x00\x20\x00\x00\x09bad token");
# Ok::<(), cql_protocol::errors::EncodeError>(())
```
*/

mod encoder;
mod encoding;
mod error_response;

pub mod errors;
pub mod features;
pub mod frame;

pub use encoder::{EncoderConfig, ErrorEncoder, REDACTED_MESSAGE};
pub use error_response::ErrorResponse;
pub use frame::{ErrorFrame, FrameFlags, FrameHeader, Opcode};
