//! Molecule container assembly.
//!
//! The functions here take already serialized items and wrap them into one of the three
//! molecule containers:
//!
//! - **fixvec**: `[count][item_0]...[item_n-1]`, for items of one static size.
//! - **dynvec**: `[total_size][offset_0]...[offset_n-1][item_0]...[item_n-1]`, for items of
//!   variable size.
//! - **table**: the same layout as dynvec, but the slots are a fixed number of heterogeneous
//!   fields.
//!
//! All headers are little-endian `u32`, offsets are counted from the first byte of the
//! container itself. The items are never inspected.

mod error;
#[cfg(test)]
mod tests;

pub use crate::error::ContainerError;
pub use molecule::{Number, NUMBER_SIZE};

use ckb_txcodec_error::Error;
use std::convert::TryFrom;

/// Encodes a header number: a count, a size or an offset.
pub fn serialize_uint32(number: Number) -> [u8; NUMBER_SIZE] {
    molecule::pack_number(number)
}

/// Builds a fixvec from items which all have the same length.
///
/// An empty input yields the 4-byte zero count.
pub fn serialize_fixvec<T: AsRef<[u8]>>(items: &[T]) -> Result<Vec<u8>, Error> {
    let count = Number::try_from(items.len())
        .map_err(|_| ContainerError::ItemCountOverflow { count: items.len() })?;
    debug_assert!(
        items
            .windows(2)
            .all(|pair| pair[0].as_ref().len() == pair[1].as_ref().len()),
        "fixvec items must share one size"
    );
    let body_size = body_size(items)?;
    let mut buffer = Vec::with_capacity(NUMBER_SIZE + body_size);
    buffer.extend_from_slice(&serialize_uint32(count));
    for item in items {
        buffer.extend_from_slice(item.as_ref());
    }
    Ok(buffer)
}

/// Builds a `fixvec<byte>`: the byte count followed by the bytes.
pub fn serialize_bytes(bytes: &[u8]) -> Result<Vec<u8>, Error> {
    let count = Number::try_from(bytes.len())
        .map_err(|_| ContainerError::ItemCountOverflow { count: bytes.len() })?;
    let mut buffer = Vec::with_capacity(NUMBER_SIZE + bytes.len());
    buffer.extend_from_slice(&serialize_uint32(count));
    buffer.extend_from_slice(bytes);
    Ok(buffer)
}

/// Builds a dynvec from items of any length.
pub fn serialize_dynvec<T: AsRef<[u8]>>(items: &[T]) -> Result<Vec<u8>, Error> {
    serialize_with_offsets(items)
}

/// Builds a table from a schema-fixed list of fields.
///
/// An empty field, such as an absent option, takes no bytes and its offset equals the offset
/// of the field after it, or the total size when it is the last one.
pub fn serialize_table<const N: usize>(fields: [&[u8]; N]) -> Result<Vec<u8>, Error> {
    serialize_with_offsets(&fields)
}

/// The header size of a dynvec or table which has `count` slots.
pub fn header_size(count: usize) -> Option<usize> {
    count.checked_add(1)?.checked_mul(NUMBER_SIZE)
}

fn body_size<T: AsRef<[u8]>>(items: &[T]) -> Result<usize, ContainerError> {
    items
        .iter()
        .try_fold(0usize, |sum, item| sum.checked_add(item.as_ref().len()))
        .ok_or(ContainerError::TotalSizeOverflow)
}

// Shared by dynvec and table: `[total_size][offsets...][bodies...]`.
fn serialize_with_offsets<T: AsRef<[u8]>>(parts: &[T]) -> Result<Vec<u8>, Error> {
    let header_size = header_size(parts.len()).ok_or(ContainerError::TotalSizeOverflow)?;
    if Number::try_from(header_size).is_err() {
        return Err(ContainerError::SizeExceedsHeader { size: header_size }.into());
    }
    let total_size = body_size(parts)?
        .checked_add(header_size)
        .ok_or(ContainerError::TotalSizeOverflow)?;
    let total_size_number = Number::try_from(total_size)
        .map_err(|_| ContainerError::SizeExceedsHeader { size: total_size })?;

    let mut buffer = Vec::with_capacity(total_size);
    buffer.extend_from_slice(&serialize_uint32(total_size_number));
    // every offset is below total_size, which fits in a Number
    let mut offset = header_size;
    for part in parts {
        buffer.extend_from_slice(&serialize_uint32(offset as Number));
        offset += part.as_ref().len();
    }
    for part in parts {
        buffer.extend_from_slice(part.as_ref());
    }
    debug_assert_eq!(buffer.len(), total_size);
    Ok(buffer)
}
