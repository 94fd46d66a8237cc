use ckb_txcodec_error::{impl_error_conversion_with_kind, prelude::*, ErrorKind};

/// Errors raised while assembling a container header.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ContainerError {
    /// A fixvec has more items than a `u32` count can hold.
    #[error("ItemCountOverflow: {count} items do not fit in a u32 count")]
    ItemCountOverflow {
        /// The number of items.
        count: usize,
    },

    /// Summing the item sizes overflows `usize`.
    #[error("TotalSizeOverflow")]
    TotalSizeOverflow,

    /// The container is larger than a `u32` total size can hold.
    #[error("SizeExceedsHeader: {size} bytes do not fit in a u32 header")]
    SizeExceedsHeader {
        /// The computed container size.
        size: usize,
    },
}

impl_error_conversion_with_kind!(
    ContainerError,
    ErrorKind::Composition,
    ckb_txcodec_error::Error
);
