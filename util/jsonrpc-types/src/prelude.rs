//! The prelude which brings the serialization trait into scope.

use ckb_txcodec_error::Error;

/// Converts a value in its textual form into molecule bytes.
///
/// Serialization is a pure function of the value: it never mutates it and calling it twice
/// returns the same bytes or the same error.
pub trait Serialize {
    /// Validates the value and returns its molecule encoding.
    fn serialize(&self) -> Result<Vec<u8>, Error>;
}

impl<T: Serialize> Serialize for Box<T> {
    fn serialize(&self) -> Result<Vec<u8>, Error> {
        self.as_ref().serialize()
    }
}
