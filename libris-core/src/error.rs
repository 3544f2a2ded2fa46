//! Library error types
//!
//! Every error maps onto one of three kinds so callers can tell an absent
//! argument apart from a present-but-invalid one without matching on every
//! variant.

use thiserror::Error;

use crate::commands::CommandType;

/// Broad classification of a [`LibraryError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required input was absent
    NullReference,
    /// An input was present but semantically invalid
    InvalidArgument,
    /// Writing to the output sink failed
    Io,
}

/// Errors raised by the catalogue, its commands and the record loader
#[derive(Error, Debug)]
pub enum LibraryError {
    /// A required argument was not supplied at all
    #[error("Given {what} must not be absent.")]
    MissingArgument { what: &'static str },

    /// A command rejected its argument during construction
    #[error("Invalid argument for {command} command: {argument:?}")]
    InvalidCommandArgument {
        command: CommandType,
        argument: String,
    },

    /// No command variant matches the given name
    #[error("Unknown command: {0:?}\n\nAvailable commands: ADD, LIST, SEARCH, REMOVE, GROUP")]
    UnknownCommand(String),

    /// A record field violated its invariant
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// A data line could not be turned into a record
    #[error("Malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// A remove directive passed validation but carries no target after the mode word
    #[error("Remove directive {0:?} has no target after the mode word")]
    MissingRemoveTarget(String),

    /// Writing command output failed
    #[error("Failed to write command output")]
    Output(#[from] std::io::Error),
}

impl LibraryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LibraryError::MissingArgument { .. } => ErrorKind::NullReference,
            LibraryError::InvalidCommandArgument { .. }
            | LibraryError::UnknownCommand(_)
            | LibraryError::InvalidRecord(_)
            | LibraryError::MalformedLine { .. }
            | LibraryError::MissingRemoveTarget(_) => ErrorKind::InvalidArgument,
            LibraryError::Output(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let missing = LibraryError::MissingArgument { what: "argument" };
        assert_eq!(missing.kind(), ErrorKind::NullReference);

        let unknown = LibraryError::UnknownCommand("FETCH".to_string());
        assert_eq!(unknown.kind(), ErrorKind::InvalidArgument);

        let rejected = LibraryError::InvalidCommandArgument {
            command: CommandType::List,
            argument: "wide".to_string(),
        };
        assert_eq!(rejected.kind(), ErrorKind::InvalidArgument);

        let io = LibraryError::from(std::io::Error::other("closed"));
        assert_eq!(io.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_messages_name_the_offending_value() {
        let rejected = LibraryError::InvalidCommandArgument {
            command: CommandType::Add,
            argument: "data.txt".to_string(),
        };
        assert_eq!(
            rejected.to_string(),
            "Invalid argument for ADD command: \"data.txt\""
        );

        let line = LibraryError::MalformedLine {
            line: 3,
            reason: "expected 5 fields, found 4".to_string(),
        };
        assert_eq!(line.to_string(), "Malformed line 3: expected 5 fields, found 4");
    }
}
