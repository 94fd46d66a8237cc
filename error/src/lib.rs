//! Underlying error types used over ckb-txcodec crates.

use std::{error::Error as StdError, fmt, ops::Deref, sync::Arc};

mod internal;
pub mod prelude;
pub mod util;

use derive_more::Display;
pub use internal::{FieldPathError, OtherError, SilentError};
use prelude::*;

/// A wrapper around a dynamic error type.
#[derive(Debug, Clone)]
pub struct AnyError(Arc<anyhow::Error>);

/// A list specifying categories of codec error.
///
/// It is used with [`Error`].
///
/// [`Error`]: ./struct.Error.html
#[derive(Debug, Clone, Copy, Eq, PartialEq, Display)]
pub enum ErrorKind {
    /// The textual input is malformed: missing `0x` prefix, invalid hex digits or a wrong
    /// decoded length.
    Format,
    /// An enumeration value is not one of the recognized members.
    Domain,
    /// An integer literal does not fit in the target width.
    Range,
    /// A container size, offset or item count does not fit in a molecule `u32` header.
    Composition,
    /// The configuration file is unreadable or invalid.
    Config,
    /// Reading input or writing output failed.
    Io,
}

def_error_base_on_kind!(Error, ErrorKind, "Top-level codec error type.");

impl Error {
    /// Prepends a field path segment to the error, keeping its kind.
    ///
    /// Segments are added from the innermost field outwards, so a failing lock script hash
    /// inside the second output ends up as `outputs[1].lock.code_hash`.
    pub fn at<S: fmt::Display>(self, segment: S) -> Self {
        let segment = segment.to_string();
        let (path, source) = match self.inner.downcast_ref::<FieldPathError>() {
            Some(nested) => (nested.join_under(&segment), nested.source.clone()),
            None => (segment, self.inner),
        };
        self.kind.because(FieldPathError { path, source })
    }

    /// The path of the field which caused the error, if it was raised inside an entity.
    pub fn path(&self) -> Option<&str> {
        self.inner
            .downcast_ref::<FieldPathError>()
            .map(|err| err.path.as_str())
    }
}

impl<E> From<E> for AnyError
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self(Arc::new(error.into()))
    }
}

impl Deref for AnyError {
    type Target = Arc<anyhow::Error>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for AnyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests;
