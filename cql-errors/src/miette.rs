//! Reporting through [`miette`].

use std::fmt::Display;

use crate::error::{CodedError, InternalError};
use crate::kinds::ErrorCode;

impl miette::Diagnostic for CodedError {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(format!(
            "cql::{}",
            self.code().name().to_ascii_lowercase()
        )))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        let hint = match self.code() {
            ErrorCode::Unprepared => "re-prepare the statement and retry",
            ErrorCode::Overloaded | ErrorCode::IsBootstrapping => {
                "the node cannot serve requests right now, try another one"
            }
            _ => return None,
        };
        Some(Box::new(hint))
    }
}

impl miette::Diagnostic for InternalError {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(format!("cql::internal::{}", self.kind_name())))
    }
}

#[cfg(test)]
mod tests {
    use miette::Diagnostic;

    use crate::{keyspace_not_defined, marshal_error, syntax_error, CodedError};

    fn render(value: Option<Box<dyn std::fmt::Display + '_>>) -> Option<String> {
        value.map(|v| v.to_string())
    }

    #[test]
    fn codes() {
        assert_eq!(
            render(Diagnostic::code(&syntax_error("bad token"))).as_deref(),
            Some("cql::syntax_error")
        );
        assert_eq!(
            render(Diagnostic::code(&marshal_error("short date"))).as_deref(),
            Some("cql::internal::marshal")
        );
        assert_eq!(
            render(Diagnostic::code(&keyspace_not_defined("Undefined keyspace 'foo'"))).as_deref(),
            Some("cql::internal::keyspace_not_defined")
        );
    }

    #[test]
    fn help() {
        assert_eq!(
            render(Diagnostic::help(&CodedError::unprepared("Prepared query 0x01 not found"))).as_deref(),
            Some("re-prepare the statement and retry")
        );
        assert_eq!(
            render(Diagnostic::help(&CodedError::bootstrapping("starting"))).as_deref(),
            Some("the node cannot serve requests right now, try another one")
        );
        assert!(Diagnostic::help(&syntax_error("bad token")).is_none());
    }
}
