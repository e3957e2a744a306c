//! Smallest common aggregate of a set of addresses.

use crate::error::CalcError;
use crate::models::{prefix_mask, xnor_all, Addr, Cidr};

/// Compute the smallest CIDR block containing every address in `addrs`.
///
/// XNOR marks the bit positions where all addresses agree; the run of
/// agreeing bits from the top is the longest common network prefix.
pub fn supernet(addrs: &[Addr]) -> Result<Cidr, CalcError> {
    if addrs.len() < 2 {
        return Err(CalcError::TooFewAddresses(addrs.len()));
    }

    let bits: Vec<u32> = addrs.iter().map(|a| a.bits()).collect();
    let common = xnor_all(&bits);
    let prefix_len = common.leading_ones() as u8;
    let mask = Addr::new(prefix_mask(prefix_len)?);

    Ok(Cidr::new(addrs[0] & mask, mask))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addrs(strs: &[&str]) -> Vec<Addr> {
        strs.iter().map(|s| s.parse().expect("parse failed")).collect()
    }

    #[test]
    fn test_adjacent_networks() {
        let result = supernet(&addrs(&["10.0.0.0", "10.0.1.0"])).unwrap();
        assert_eq!(result.addr.to_string(), "10.0.0.0");
        assert_eq!(result.mask.to_string(), "255.255.254.0");
    }

    #[test]
    fn test_three_addresses() {
        let result = supernet(&addrs(&["10.0.0.0", "10.0.1.0", "10.0.0.128"])).unwrap();
        assert_eq!(result.addr.to_string(), "10.0.0.0");
        assert_eq!(result.mask.to_string(), "255.255.254.0");
    }

    #[test]
    fn test_identical_addresses_give_host_mask() {
        let result = supernet(&addrs(&["192.168.1.1", "192.168.1.1"])).unwrap();
        assert_eq!(result.addr.to_string(), "192.168.1.1");
        assert_eq!(result.mask.to_string(), "255.255.255.255");
    }

    #[test]
    fn test_disagreement_at_top_bit_gives_empty_mask() {
        let result = supernet(&addrs(&["10.0.0.0", "192.168.0.0"])).unwrap();
        assert_eq!(result.addr.to_string(), "0.0.0.0");
        assert_eq!(result.mask.to_string(), "0.0.0.0");
    }

    #[test]
    fn test_too_few_addresses() {
        assert_eq!(
            supernet(&addrs(&["10.0.0.0"])).unwrap_err(),
            CalcError::TooFewAddresses(1)
        );
        assert_eq!(supernet(&[]).unwrap_err(), CalcError::TooFewAddresses(0));
    }
}
