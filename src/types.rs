use crate::location::Location;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The scanner hit a character that no token rule accepts.
    #[error("unexpected character {character:?} at {location}")]
    Lex { character: char, location: Location },

    /// The grammar driver expected a different token than the lookahead.
    #[error("expected {expected}, found {found:?} at {location}")]
    Parse {
        expected: String,
        found: String,
        location: Location,
    },
}

impl Error {
    pub fn location(&self) -> Location {
        match self {
            Error::Lex { location, .. } => *location,
            Error::Parse { location, .. } => *location,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
