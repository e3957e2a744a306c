//! Error kinds shared across the crate.

use crate::models::{Addr, Class};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Text that is not four dot-separated decimal octets.
    #[error("invalid address '{0}': expected four dot-separated octets")]
    AddrFormat(String),

    /// An octet outside 0-255.
    #[error("octet '{0}' is out of range 0-255")]
    OctetRange(String),

    /// A mask prefix length beyond 32 bits.
    #[error("prefix length {0} is longer than 32 bits")]
    PrefixLength(u8),

    /// Supernet aggregation over fewer than two addresses.
    #[error("supernet needs at least 2 addresses, got {0}")]
    TooFewAddresses(usize),

    /// A subnet mask that is not a contiguous refinement of the class
    /// default mask.
    #[error("mask {mask} is not a contiguous refinement of the class {class} default mask {default}")]
    MaskNotRefinement {
        mask: Addr,
        class: Class,
        default: Addr,
    },

    /// Classes D and E have no network/host split to derive a mask from.
    #[error("class {0} has no default network/host split")]
    NoDefaultMask(Class),
}
