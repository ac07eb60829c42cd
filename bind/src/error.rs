use memory::ListError;
use std::error::Error as StdError;
use thiserror::Error;

/// A value could not be read as the requested native type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected} but got \"{got}\"")]
pub struct CastError {
    pub expected: String,
    pub got: String,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("no matching overload")]
    NoMatchingOverload,
    #[error("no matching method overload")]
    NoMatchingMethod,
    #[error("no constructor")]
    NoConstructor,
    #[error(transparent)]
    Cast(#[from] CastError),
    /// Error returned by a native function body.
    #[error("{0}")]
    Native(Box<dyn StdError + Send + Sync>),
    /// Panic caught at the dispatch boundary.
    #[error("{0}")]
    Panic(String),
    #[error("invalid command name \"{0}\"")]
    UnknownCommand(String),
    #[error("Invalid input for enum: {0}")]
    InvalidEnum(String),
    /// Error raised by script code, known only by its message.
    #[error("{0}")]
    Script(String),
    #[error("{source}")]
    Registration {
        package: String,
        source: Box<dyn StdError + Send + Sync>,
    },
    #[error(transparent)]
    List(#[from] ListError),
}

impl Error {
    /// Wrap an arbitrary native error. A boxed `Error` is unwrapped instead
    /// of being nested.
    pub fn native(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        match err.into().downcast::<Error>() {
            Ok(inner) => *inner,
            Err(other) => Error::Native(other),
        }
    }

    /// Failures of overload resolution, as opposed to errors from a native
    /// function body.
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            Error::NoMatchingOverload | Error::NoMatchingMethod | Error::NoConstructor
        )
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Script(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Script(s)
    }
}
