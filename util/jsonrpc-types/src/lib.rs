//! CKB transaction types in their 0x-hex textual form, with the molecule serialization of each.
//!
//! Values are constructed from text, usually by deserializing the JSON used by the CKB RPC, and
//! checked only when [`Serialize::serialize`] is called. A failing field is reported with its
//! path inside the entity.
//!
//! ```
//! use ckb_txcodec_types::{prelude::*, OutPoint};
//!
//! let out_point = OutPoint {
//!     tx_hash: "0x365698b50ca0da75dca2c87f9e7b563811d3b5813736b8cc62cc3b106faceb17".into(),
//!     index: "0x1".into(),
//! };
//! let bytes = out_point.serialize().unwrap();
//! assert_eq!(bytes.len(), OutPoint::SERIALIZED_SIZE);
//! assert_eq!(&bytes[32..], &[1, 0, 0, 0]);
//! ```
//!
//! [`Serialize::serialize`]: prelude/trait.Serialize.html#tymethod.serialize

mod blockchain;
mod bytes;
mod error;
mod fixed_bytes;
mod hex;
pub mod prelude;
mod primitive;
mod uints;

#[cfg(test)]
mod tests;

pub use self::blockchain::{
    CellDep, CellInput, CellOutput, DepType, OutPoint, Script, ScriptHashType, Transaction,
};
pub use self::bytes::JsonBytes;
pub use self::error::ScalarError;
pub use self::fixed_bytes::Byte32;
pub use self::primitive::{Capacity, Since, Version};
pub use self::uints::{JsonUint, Uint, Uint32, Uint64};
