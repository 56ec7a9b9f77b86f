//! Reader errors and their taxonomy
use thiserror::Error;

use crate::{
    field::FieldError,
    navigation::{parser::State, NodeKind},
};

/// Position in the input stream, used to prefix diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// File name (or any name given to an in-memory source)
    pub name: String,
    /// 1-based row number
    pub row: usize,
}

impl Location {
    pub fn new(name: &str, row: usize) -> Self {
        Self {
            name: name.to_string(),
            row,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.row)
    }
}

/// Closed classification of every [Error]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum ErrorKind {
    /// Input file could not be opened
    IoOpenFailed,
    /// Read failure while buffering
    IoReadFailed,
    /// Input ended where more data was required
    Eof,
    /// Physical line exceeded the maximal line length
    LineOverflow,
    /// Fixed-column field is not a valid number (or is blank)
    FieldSyntax,
    /// Fixed-column field overflowed the target numeric type
    FieldRange,
    /// Node of unknown type was requested
    UnknownNodeType,
    /// Allocation failure
    OutOfMemory,
    /// Orbit lines do not form complete consecutive blocks
    NodeSequence,
}

/// Errors that may rise while reading a navigation file.
/// Located errors are rendered as `"<name>:<row>: <message>"`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{name}: failed to open: {source}")]
    IoOpen {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{location}: read failure: {source}")]
    IoRead {
        location: Location,
        #[source]
        source: std::io::Error,
    },
    #[error("{location}: line too long ({length} chars, while {max} expected at most)")]
    LineOverflow {
        location: Location,
        length: usize,
        max: usize,
    },
    #[error("{location}: {record}: {field}: {source}")]
    Field {
        location: Location,
        record: NodeKind,
        field: &'static str,
        #[source]
        source: FieldError,
    },
    #[error("{location}: unexpected end of file while in state {state}")]
    UnexpectedEof { location: Location, state: State },
    #[error("unknown node type")]
    UnknownNodeType,
    #[error("out of memory")]
    OutOfMemory,
    #[error("{found} found while expecting {expected}")]
    OrbitSequence {
        expected: NodeKind,
        found: NodeKind,
    },
    #[error("incomplete navigation message: {expected} is missing")]
    IncompleteMessage { expected: NodeKind },
}

impl Error {
    /// Returns the [ErrorKind] of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IoOpen { .. } => ErrorKind::IoOpenFailed,
            Self::IoRead { .. } => ErrorKind::IoReadFailed,
            Self::LineOverflow { .. } => ErrorKind::LineOverflow,
            Self::Field { source, .. } => match source {
                FieldError::Range(_) => ErrorKind::FieldRange,
                FieldError::Blank | FieldError::Syntax(_) | FieldError::Unsupported(_) => {
                    ErrorKind::FieldSyntax
                },
            },
            Self::UnexpectedEof { .. } => ErrorKind::Eof,
            Self::UnknownNodeType => ErrorKind::UnknownNodeType,
            Self::OutOfMemory => ErrorKind::OutOfMemory,
            Self::OrbitSequence { .. } | Self::IncompleteMessage { .. } => {
                ErrorKind::NodeSequence
            },
        }
    }

    /// Returns the [Location] attached to this error, if any
    pub fn location(&self) -> Option<&Location> {
        match self {
            Self::IoRead { location, .. }
            | Self::LineOverflow { location, .. }
            | Self::Field { location, .. }
            | Self::UnexpectedEof { location, .. } => Some(location),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn located_messages() {
        let err = Error::Field {
            location: Location::new("brdc0010.21n", 12),
            record: NodeKind::BroadcastOrbit2,
            field: "e",
            source: FieldError::Syntax("1.2.3".to_string()),
        };
        assert_eq!(err.kind(), ErrorKind::FieldSyntax);
        assert_eq!(
            err.to_string(),
            "brdc0010.21n:12: BROADCAST ORBIT - 2: e: invalid numeric literal \"1.2.3\""
        );
        assert_eq!(err.location().map(|l| l.row), Some(12));

        let err = Error::UnexpectedEof {
            location: Location::new("nav.21n", 9),
            state: State::BroadcastOrbit7,
        };
        assert_eq!(err.kind(), ErrorKind::Eof);
        assert!(err.to_string().starts_with("nav.21n:9: "));
    }

    #[test]
    fn unlocated_messages() {
        assert_eq!(Error::OutOfMemory.to_string(), "out of memory");
        assert!(Error::OutOfMemory.location().is_none());
        assert_eq!(Error::UnknownNodeType.kind(), ErrorKind::UnknownNodeType);
    }
}
