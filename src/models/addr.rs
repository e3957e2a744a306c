//! IPv4 address values and CIDR pairs.
//!
//! Provides the [`Addr`] value type with parsing from and rendering to
//! dotted-decimal text, the [`Cidr`] address/mask pair, and the mask
//! bit-twiddling helpers built on top of them.

use crate::error::CalcError;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::net::Ipv4Addr;
use std::ops::{Add, BitAnd, Sub};
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Build a mask with the top `len` bits set and the rest zero.
///
/// # Examples
/// ```
/// use ipv4_subnet_summary::models::prefix_mask;
/// assert_eq!(prefix_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn prefix_mask(len: u8) -> Result<u32, CalcError> {
    if len > MAX_LENGTH {
        Err(CalcError::PrefixLength(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Bitwise XNOR over a set of values: a bit is set exactly where every
/// input agrees on that bit.
pub fn xnor_all(values: &[u32]) -> u32 {
    let first = values.first().copied().unwrap_or(0);
    let disagreement = values.iter().fold(0, |acc, v| acc | (first ^ v));
    !disagreement
}

/// A 32-bit IPv4 address value.
///
/// Immutable once constructed; ordering compares the underlying integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Addr(u32);

impl Addr {
    pub const fn new(bits: u32) -> Addr {
        Addr(bits)
    }

    /// The raw 32-bit value, most significant octet first.
    pub const fn bits(self) -> u32 {
        self.0
    }
}

lazy_static! {
    static ref RE_ADDR: Regex =
        Regex::new(r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$").expect("Invalid Regex?");
}

impl FromStr for Addr {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Addr, CalcError> {
        let s = s.trim();
        let caps = RE_ADDR
            .captures(s)
            .ok_or_else(|| CalcError::AddrFormat(s.to_string()))?;

        let mut bits = 0u32;
        for i in 1..=4 {
            let octet = &caps[i];
            let value: u8 = octet
                .parse()
                .map_err(|_| CalcError::OctetRange(octet.to_string()))?;
            bits = (bits << 8) | u32::from(value);
        }
        Ok(Addr(bits))
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", Ipv4Addr::from(self.0))
    }
}

impl BitAnd for Addr {
    type Output = Addr;

    fn bitand(self, rhs: Addr) -> Addr {
        Addr(self.0 & rhs.0)
    }
}

// Plain integer offsets; keeping the result inside 32 bits is the caller's
// contract.
impl Add<u32> for Addr {
    type Output = Addr;

    fn add(self, rhs: u32) -> Addr {
        Addr(self.0 + rhs)
    }
}

impl Sub<u32> for Addr {
    type Output = Addr;

    fn sub(self, rhs: u32) -> Addr {
        Addr(self.0 - rhs)
    }
}

/// An address paired with a dotted subnet mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cidr {
    /// The IPv4 address.
    pub addr: Addr,
    /// The subnet mask, as an address-shaped bit pattern.
    pub mask: Addr,
}

impl Cidr {
    pub fn new(addr: Addr, mask: Addr) -> Cidr {
        Cidr { addr, mask }
    }

    /// The network address: `addr AND mask`.
    pub fn network(&self) -> Addr {
        self.addr & self.mask
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
