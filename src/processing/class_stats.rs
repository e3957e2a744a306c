//! Classful statistics: capacities and range bounds per legacy class.

use crate::models::{Addr, Class};

/// Classful figures for one address, ready for formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassStats {
    /// The legacy class of the address.
    pub class: Class,
    /// Number of networks in the class, `None` for D and E.
    pub networks: Option<u64>,
    /// Number of hosts per network, `None` for D and E.
    pub hosts: Option<u64>,
    /// First address of the class range.
    pub first: Addr,
    /// Last address of the class range.
    pub last: Addr,
}

/// Compute the classful statistics for `addr`.
pub fn class_stats(addr: Addr) -> ClassStats {
    let class = Class::of(addr);
    let row = class.row();

    ClassStats {
        class,
        networks: row.netbits.map(|bits| 1u64 << bits),
        hosts: row.hostbits.map(|bits| 1u64 << bits),
        // class rows are real 32-bit addresses, only the sentinel is not
        first: Addr::new(row.first as u32),
        last: Addr::new((class.next_row().first - 1) as u32),
    }
}
