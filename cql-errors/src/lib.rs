/*!
# Errors of the CQL query-execution layer

Every failure raised while validating or executing a request is one of two
kinds:

* [`InternalError`] carries a message only. It describes a logic or
  marshaling fault and is not meant to reach a client verbatim.
* [`CodedError`] carries an [`ErrorCode`] and a message. It is sent to the
  client exactly as constructed.

[`Error`] holds either of them, for code that only propagates.

```rust
use cql_errors::{syntax_error, ErrorCode};

let err = syntax_error("bad token");
assert_eq!(err.code(), ErrorCode::SyntaxError);
assert_eq!(err.code().value(), 0x2000);
assert_eq!(err.message(), "bad token");
```

Anything that implements [`WireError`] can be handed to the encoder, which
reads nothing but the code and the message:

```rust
# use cql_errors::*;
fn reply(err: &dyn WireError) -> (u16, String) {
    (err.code().value(), err.message().to_owned())
}
assert_eq!(reply(&CodedError::invalid("no such table")).0, 0x2200);
```

Internal errors have no code. A layer that knows what the client should see
translates them explicitly:

```rust
# use cql_errors::*;
fn lookup(name: &str) -> Result<(), InternalError> {
    Err(keyspace_not_defined(format!("Undefined keyspace '{name}'")))
}

let err = lookup("foo")
    .or_code_with(ErrorCode::Invalid, |_| "Keyspace foo does not exist".into())
    .unwrap_err();
assert_eq!(err.code(), ErrorCode::Invalid);
```

Error values are immutable once built and can be moved between threads
freely.
*/
mod error;
mod traits;

pub mod display;
pub mod kinds;

#[cfg(feature = "miette")]
pub mod miette;

pub use error::{
    coded_error, invalid_request, keyspace_not_defined, marshal_error, syntax_error, CodedError,
    Error, InternalError,
};
pub use kinds::{Category, ErrorCode, UnknownErrorCode};
pub use traits::{ResultExt, WireError};
