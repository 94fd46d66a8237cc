use crate::{hex, prelude::Serialize, ScalarError};
use ckb_txcodec_error::Error;
use ckb_txcodec_molecule::{serialize_bytes, serialize_uint32};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Variable-length binary encoded as a 0x-prefixed hex string.
///
/// `"0x"` is the empty byte string.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct JsonBytes(String);

impl Default for JsonBytes {
    fn default() -> Self {
        JsonBytes::new(hex::PREFIX)
    }
}

impl JsonBytes {
    const NAME: &'static str = "Bytes";

    /// Wraps textual bytes without checking them.
    pub fn new<S: Into<String>>(text: S) -> Self {
        JsonBytes(text.into())
    }

    /// Encodes raw bytes into their textual form.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        JsonBytes(hex::encode(&bytes))
    }

    /// The bytes text as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the payload.
    pub fn decode(&self) -> Result<Vec<u8>, ScalarError> {
        hex::decode(Self::NAME, &self.0)
    }

    /// Returns the payload as a molecule `fixvec<byte>`: a `u32` length followed by the bytes.
    ///
    /// This is the form a byte string takes inside scripts and output data.
    pub fn serialize_fixvec(&self) -> Result<Vec<u8>, Error> {
        serialize_bytes(&self.decode()?)
    }
}

impl Serialize for JsonBytes {
    /// Returns the raw payload, without a length header.
    ///
    /// The empty payload is the exception: it is returned as the four zero bytes of an empty
    /// fixvec, so `"0x"` and `"0x00000000"` serialize to the same bytes. Containers which need
    /// an unambiguous byte vector use [`JsonBytes::serialize_fixvec`] instead.
    fn serialize(&self) -> Result<Vec<u8>, Error> {
        let payload = self.decode()?;
        if payload.is_empty() {
            return Ok(serialize_uint32(0).to_vec());
        }
        Ok(payload)
    }
}

impl From<&str> for JsonBytes {
    fn from(text: &str) -> Self {
        JsonBytes::new(text)
    }
}

impl fmt::Display for JsonBytes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for JsonBytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(JsonBytes)
    }
}
