use ckb_txcodec_error::{impl_error_conversion_with_adaptor, prelude::*, ErrorKind};

/// Errors raised while converting a textual scalar into bytes.
///
/// Every variant carries the name of the scalar type and the rejected input.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ScalarError {
    /// The input does not start with `0x`.
    #[error("Invalid {name} {value:?}: without `0x` prefix")]
    MissingPrefix {
        /// The scalar type name.
        name: &'static str,
        /// The rejected input.
        value: String,
    },

    /// The input contains a character which is not a hex digit.
    #[error("Invalid {name} {value:?}: invalid character {chr:?} at {idx}")]
    InvalidCharacter {
        /// The scalar type name.
        name: &'static str,
        /// The rejected input.
        value: String,
        /// The offending character.
        chr: char,
        /// Byte index of the character in the input, prefix included.
        idx: usize,
    },

    /// A byte string has an odd number of hex digits.
    #[error("Invalid {name} {value:?}: odd number of hex digits")]
    OddLength {
        /// The scalar type name.
        name: &'static str,
        /// The rejected input.
        value: String,
    },

    /// The hex decoder rejected the input.
    #[error("Invalid {name} {value:?}: {reason}")]
    InvalidHex {
        /// The scalar type name.
        name: &'static str,
        /// The rejected input.
        value: String,
        /// The decoder message.
        reason: String,
    },

    /// The decoded byte string has the wrong length.
    #[error("Invalid {name} {value:?}: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// The scalar type name.
        name: &'static str,
        /// The rejected input.
        value: String,
        /// The required number of bytes.
        expected: usize,
        /// The decoded number of bytes.
        actual: usize,
    },

    /// A number has no digits after the prefix.
    #[error("Invalid {name} {value:?}: cannot parse integer from empty string")]
    EmptyNumber {
        /// The scalar type name.
        name: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A number does not fit in the target width.
    #[error("Invalid {name} {value:?}: number too large to fit in target type")]
    Overflow {
        /// The scalar type name.
        name: &'static str,
        /// The rejected input.
        value: String,
    },

    /// An enumeration value is not a recognized member.
    #[error("Invalid {name} {value:?}: expected one of {expected}")]
    UnknownVariant {
        /// The enumeration name.
        name: &'static str,
        /// The rejected input.
        value: String,
        /// The recognized members.
        expected: &'static str,
    },
}

impl ScalarError {
    /// The error category of this scalar failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScalarError::Overflow { .. } => ErrorKind::Range,
            ScalarError::UnknownVariant { .. } => ErrorKind::Domain,
            ScalarError::MissingPrefix { .. }
            | ScalarError::InvalidCharacter { .. }
            | ScalarError::OddLength { .. }
            | ScalarError::InvalidHex { .. }
            | ScalarError::InvalidLength { .. }
            | ScalarError::EmptyNumber { .. } => ErrorKind::Format,
        }
    }
}

impl_error_conversion_with_adaptor!(ScalarError, ckb_txcodec_error::Error, |err| err.kind());
