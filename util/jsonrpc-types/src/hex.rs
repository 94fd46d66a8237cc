//! Helpers for the `0x`-prefixed hex text used by every scalar.

use crate::error::ScalarError;
use faster_hex::hex_decode;

pub(crate) const PREFIX: &str = "0x";

/// Returns the digits after `0x`.
pub(crate) fn strip_prefix<'a>(name: &'static str, value: &'a str) -> Result<&'a str, ScalarError> {
    value
        .strip_prefix(PREFIX)
        .ok_or_else(|| ScalarError::MissingPrefix {
            name,
            value: value.to_owned(),
        })
}

/// Checks that `digits`, the part of `value` after the prefix, are all hex digits.
pub(crate) fn check_digits(name: &'static str, value: &str, digits: &str) -> Result<(), ScalarError> {
    match digits.char_indices().find(|(_, chr)| !chr.is_ascii_hexdigit()) {
        Some((idx, chr)) => Err(ScalarError::InvalidCharacter {
            name,
            value: value.to_owned(),
            chr,
            idx: idx + PREFIX.len(),
        }),
        None => Ok(()),
    }
}

/// Decodes a `0x`-prefixed hex string into bytes.
pub(crate) fn decode(name: &'static str, value: &str) -> Result<Vec<u8>, ScalarError> {
    let digits = strip_prefix(name, value)?;
    check_digits(name, value, digits)?;
    if digits.len() & 1 != 0 {
        return Err(ScalarError::OddLength {
            name,
            value: value.to_owned(),
        });
    }
    let mut buffer = vec![0u8; digits.len() / 2];
    if !buffer.is_empty() {
        hex_decode(digits.as_bytes(), &mut buffer).map_err(|err| ScalarError::InvalidHex {
            name,
            value: value.to_owned(),
            reason: format!("{:?}", err),
        })?;
    }
    Ok(buffer)
}

/// Encodes bytes as a `0x`-prefixed lowercase hex string.
pub(crate) fn encode(bytes: &[u8]) -> String {
    format!("{}{}", PREFIX, faster_hex::hex_string(bytes))
}
