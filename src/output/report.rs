//! Fixed-field text blocks for the three report shapes.

use crate::models::{Addr, Cidr};
use crate::processing::{ClassStats, SubnetStats};
use itertools::Itertools;

// Classes D and E have no network/host capacity.
fn capacity(value: Option<u64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

fn join_addrs(addrs: impl Iterator<Item = Addr>) -> String {
    addrs.map(|a| a.to_string()).join(", ")
}

/// The classful report for a single address.
pub fn class_report(stats: &ClassStats) -> String {
    format!(
        "Class: {class}\n\
         Network: {network}\n\
         Host: {host}\n\
         First address: {first}\n\
         Last address: {last}",
        class = stats.class,
        network = capacity(stats.networks),
        host = capacity(stats.hosts),
        first = stats.first,
        last = stats.last,
    )
}

/// The subnet report for an address with an explicit mask.
pub fn subnet_report(stats: &SubnetStats) -> String {
    format!(
        "Address: {cidr}\n\
         Subnets: {subnets}\n\
         Addressable hosts per subnet: {hosts}\n\
         Valid subnets: {bases}\n\
         Broadcast addresses: {broadcasts}\n\
         First addresses: {firsts}\n\
         Last addresses: {lasts}",
        cidr = stats.cidr,
        subnets = stats.subnet_count,
        hosts = stats.addressable_hosts,
        bases = join_addrs(stats.bases()),
        broadcasts = join_addrs(stats.broadcast_addresses()),
        firsts = join_addrs(stats.first_addresses()),
        lasts = join_addrs(stats.last_addresses()),
    )
}

/// The supernet report: aggregate address and mask, both dotted decimal.
pub fn supernet_report(supernet: &Cidr) -> String {
    format!(
        "Address: {addr}\nNetwork Mask: {mask}",
        addr = supernet.addr,
        mask = supernet.mask,
    )
}
