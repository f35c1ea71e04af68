use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CreateGraphError {
    #[error("graph must have at least one vertex")]
    InvalidSize,
    #[error("graph has too many vertices to fit in memory")]
    TooLarge,
}

#[derive(Debug, Error, PartialEq)]
#[error("adding arc failed: {kind}")]
pub struct AddArcError<W> {
    pub attr: W,
    pub kind: AddArcErrorKind,
}

impl<W> AddArcError<W> {
    pub fn new(attr: W, kind: AddArcErrorKind) -> Self {
        Self { attr, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddArcErrorKind {
    SourceOutOfRange,
    DestinationOutOfRange,
}

impl fmt::Display for AddArcErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddArcErrorKind::SourceOutOfRange => "source is out of range",
            AddArcErrorKind::DestinationOutOfRange => "destination is out of range",
        };
        f.write_str(reason)
    }
}
