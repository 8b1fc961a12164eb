//! Primitive notations used inside frame bodies: `[string]` and
//! `[string list]`.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use snafu::{ensure, OptionExt, ResultExt};

use crate::errors::{self, DecodeError, EncodeError};

/// Writes a `[string]`: a big-endian `u16` length followed by UTF-8 bytes.
pub fn put_string(buf: &mut BytesMut, value: &str) -> Result<(), EncodeError> {
    let len = u16::try_from(value.len())
        .ok()
        .context(errors::MessageTooLong {
            length: value.len(),
        })?;
    buf.reserve(2 + value.len());
    buf.put_u16(len);
    buf.put_slice(value.as_bytes());
    Ok(())
}

pub fn get_string(buf: &mut Bytes) -> Result<String, DecodeError> {
    ensure!(buf.remaining() >= 2, errors::Underflow);
    let len = usize::from(buf.get_u16());
    ensure!(buf.remaining() >= len, errors::Underflow);
    let data = buf.split_to(len);
    let value = std::str::from_utf8(&data).context(errors::InvalidUtf8)?;
    Ok(value.to_owned())
}

pub fn put_string_list(buf: &mut BytesMut, values: &[String]) -> Result<(), EncodeError> {
    let count = u16::try_from(values.len())
        .ok()
        .context(errors::TooManyWarnings {
            count: values.len(),
        })?;
    buf.reserve(2);
    buf.put_u16(count);
    for value in values {
        put_string(buf, value)?;
    }
    Ok(())
}

pub fn get_string_list(buf: &mut Bytes) -> Result<Vec<String>, DecodeError> {
    ensure!(buf.remaining() >= 2, errors::Underflow);
    let count = buf.get_u16();
    (0..count).map(|_| get_string(buf)).collect()
}
