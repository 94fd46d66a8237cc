use crate::{Uint32, Uint64};

/// The capacity of a cell, in Shannons.
pub type Capacity = Uint64;
/// The transaction version.
pub type Version = Uint32;
/// The `since` restriction of a cell input.
pub type Since = Uint64;
