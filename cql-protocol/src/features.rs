use snafu::ensure;

use crate::errors::{self, DecodeError};

const RESPONSE_BIT: u8 = 0x80;

/// Native protocol version, as carried in the first byte of every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProtocolVersion {
    pub(crate) version: u8,
}

impl ProtocolVersion {
    pub const MIN: u8 = 3;
    pub const MAX: u8 = 5;

    pub fn current() -> ProtocolVersion {
        ProtocolVersion { version: 4 }
    }

    pub fn new(version: u8) -> ProtocolVersion {
        debug_assert!(
            (Self::MIN..=Self::MAX).contains(&version),
            "Attempted to create an unsupported protocol version {version}"
        );
        ProtocolVersion { version }
    }

    /// Parses the version byte of a frame, returning the version and whether
    /// the frame is a response.
    pub fn try_from_byte(byte: u8) -> Result<(ProtocolVersion, bool), DecodeError> {
        let version = byte & !RESPONSE_BIT;
        ensure!(
            (Self::MIN..=Self::MAX).contains(&version),
            errors::UnsupportedVersion { byte }
        );
        Ok((ProtocolVersion { version }, byte & RESPONSE_BIT != 0))
    }

    pub fn number(&self) -> u8 {
        self.version
    }

    pub fn request_byte(&self) -> u8 {
        self.version
    }

    pub fn response_byte(&self) -> u8 {
        self.version | RESPONSE_BIT
    }

    pub fn is_at_least(&self, version: u8) -> bool {
        self.version >= version
    }
}

impl Default for ProtocolVersion {
    fn default() -> ProtocolVersion {
        ProtocolVersion::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_bytes() {
        let v4 = ProtocolVersion::current();
        assert_eq!(v4.request_byte(), 0x04);
        assert_eq!(v4.response_byte(), 0x84);
        assert!(v4.is_at_least(3));
        assert!(!v4.is_at_least(5));
    }

    #[test]
    fn try_from_byte() {
        assert_eq!(
            ProtocolVersion::try_from_byte(0x85).unwrap(),
            (ProtocolVersion::new(5), true)
        );
        assert_eq!(
            ProtocolVersion::try_from_byte(0x03).unwrap(),
            (ProtocolVersion::new(3), false)
        );
        assert!(matches!(
            ProtocolVersion::try_from_byte(0x82),
            Err(DecodeError::UnsupportedVersion { byte: 0x82, .. })
        ));
        assert!(ProtocolVersion::try_from_byte(0x06).is_err());
    }
}
