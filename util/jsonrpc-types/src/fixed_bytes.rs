use crate::{hex, prelude::Serialize, ScalarError};
use ckb_txcodec_error::Error;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Fixed-length 32 bytes binary encoded as a 0x-prefixed hex string, used for hashes.
///
/// The text is kept as given and checked when the value is serialized. The bytes are emitted in
/// the order the digits are written, no reordering happens.
///
/// ## Example
///
/// ```text
/// 0xd495a106684401001e47c0ae1d5930009449d26e32380000000721efd0030000
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct Byte32(String);

impl Byte32 {
    const NAME: &'static str = "Byte32";
    const SIZE: usize = 32;

    /// Wraps a textual hash without checking it.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Byte32(text.into())
    }

    /// The hash text as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the hash into its 32 bytes.
    pub fn to_bytes(&self) -> Result<[u8; 32], ScalarError> {
        let decoded = hex::decode(Self::NAME, &self.0)?;
        if decoded.len() != Self::SIZE {
            return Err(ScalarError::InvalidLength {
                name: Self::NAME,
                value: self.0.clone(),
                expected: Self::SIZE,
                actual: decoded.len(),
            });
        }
        let mut inner = [0u8; 32];
        inner.copy_from_slice(&decoded);
        Ok(inner)
    }
}

impl Serialize for Byte32 {
    fn serialize(&self) -> Result<Vec<u8>, Error> {
        Ok(self.to_bytes()?.to_vec())
    }
}

impl From<[u8; 32]> for Byte32 {
    fn from(inner: [u8; 32]) -> Self {
        Byte32(hex::encode(&inner))
    }
}

impl From<&str> for Byte32 {
    fn from(text: &str) -> Self {
        Byte32::new(text)
    }
}

impl fmt::Display for Byte32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Byte32 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Byte32)
    }
}
