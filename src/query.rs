//! Input line classification.
//!
//! Each input line is either a comma-separated list of three or more
//! addresses (a supernet query) or an address with an optional mask (a
//! class/subnet query). The shape is decided up front and every token is
//! parsed here, so a malformed line fails once as a whole.

use crate::error::CalcError;
use crate::models::Addr;

/// One classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// A single address: classful statistics only.
    Class(Addr),
    /// An address and an explicit subnet mask.
    Subnet(Addr, Addr),
    /// Three or more addresses: common-aggregate lookup.
    Supernet(Vec<Addr>),
}

/// Split a trimmed input line on commas and parse it into a [`Query`].
pub fn classify_line(line: &str) -> Result<Query, CalcError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();

    match fields.as_slice() {
        [addr] => Ok(Query::Class(addr.parse()?)),
        [addr, mask] => Ok(Query::Subnet(addr.parse()?, mask.parse()?)),
        list => {
            let addrs = list
                .iter()
                .map(|s| s.parse())
                .collect::<Result<Vec<Addr>, CalcError>>()?;
            Ok(Query::Supernet(addrs))
        }
    }
}
