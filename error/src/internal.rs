use crate::AnyError;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display};
use thiserror::Error;

/// An error with only a string as the reason.
#[derive(Error, Debug, Clone)]
#[error("{0}")]
pub struct OtherError(String);

/// An error which carries no reason, used when the kind says it all.
#[derive(Error, Debug, Clone, Copy)]
#[error("no reason is provided")]
pub struct SilentError;

impl OtherError {
    /// Creates an error with only a string as the reason.
    pub fn new<T>(reason: T) -> Self
    where
        T: Display + Debug + Send + Sync + 'static,
    {
        Self(reason.to_string())
    }
}

/// An error raised by a nested field, with the dotted path of that field.
#[derive(Debug, Clone)]
pub struct FieldPathError {
    pub(crate) path: String,
    pub(crate) source: AnyError,
}

impl FieldPathError {
    /// The dotted path, e.g. `inputs[0].previous_output.index`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn join_under(&self, segment: &str) -> String {
        if self.path.starts_with('[') {
            format!("{}{}", segment, self.path)
        } else {
            format!("{}.{}", segment, self.path)
        }
    }
}

impl Display for FieldPathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.source)
    }
}

impl StdError for FieldPathError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        let inner: &(dyn StdError + Send + Sync + 'static) = &***self.source;
        Some(inner)
    }
}
