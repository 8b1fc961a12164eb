//! Formatting of codes and errors for logs.
//!
//! The `Display` of an error is only its message, since that is what reaches
//! the client. Use [`display_verbose`] when the code should be visible too.

use std::fmt;

use crate::kinds::ErrorCode;
use crate::traits::WireError;

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::LowerHex for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value(), f)
    }
}

impl fmt::UpperHex for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::UpperHex::fmt(&self.value(), f)
    }
}

/// Renders `NAME [0xCODE]: message`.
pub struct Verbose<'a, E: ?Sized>(&'a E);

pub fn display_verbose<E: WireError + ?Sized>(err: &E) -> Verbose<'_, E> {
    Verbose(err)
}

impl<E: WireError + ?Sized> fmt::Display for Verbose<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let code = self.0.code();
        write!(f, "{} [0x{:04X}]: {}", code, code, self.0.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{coded_error, syntax_error};

    #[test]
    fn code_formats() {
        assert_eq!(ErrorCode::WriteTimeout.to_string(), "WRITE_TIMEOUT");
        assert_eq!(format!("{:#06x}", ErrorCode::ProtocolError), "0x000a");
        assert_eq!(format!("{:04X}", ErrorCode::Unprepared), "2500");
    }

    #[test]
    fn verbose() {
        let err = syntax_error("bad token");
        assert_eq!(
            display_verbose(&err).to_string(),
            "SYNTAX_ERROR [0x2000]: bad token"
        );
        let err: Box<dyn WireError> = Box::new(coded_error(ErrorCode::ProtocolError, "bad frame"));
        assert_eq!(
            display_verbose(&*err).to_string(),
            "PROTOCOL_ERROR [0x000A]: bad frame"
        );
    }
}
