mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod query;

pub use error::CalcError;

use colored::Colorize;
use models::Cidr;
use query::Query;
use std::error::Error;
use std::io::{BufRead, Write};

/// Compute the report text for one input line (without the echoed line or
/// the trailing blank line).
///
/// A line with an address and a mask yields the class report immediately
/// followed by the subnet report.
pub fn process_line(line: &str) -> Result<String, CalcError> {
    let query = query::classify_line(line)?;
    log::debug!("classified line {:?} as {:?}", line, query);

    let report = match &query {
        Query::Class(addr) => output::class_report(&processing::class_stats(*addr)),
        Query::Subnet(addr, mask) => {
            let class = output::class_report(&processing::class_stats(*addr));
            let stats = processing::SubnetStats::compute(Cidr::new(*addr, *mask))?;
            format!("{class}\n{subnet}", subnet = output::subnet_report(&stats))
        }
        Query::Supernet(addrs) => output::supernet_report(&processing::supernet(addrs)?),
    };
    Ok(report)
}

/// Process newline-delimited queries from `input`, writing one report block
/// per line to `out`.
///
/// Each non-blank line is echoed back, followed by its report (or a single
/// `Error:` line) and a blank line. A failing line never aborts the run.
pub fn run<R: BufRead, W: Write>(input: R, mut out: W) -> Result<(), Box<dyn Error>> {
    log::info!("#Start run()");

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            log::trace!("skipping blank line");
            continue;
        }
        writeln!(out, "{line}")?;
        match process_line(line) {
            Ok(report) => writeln!(out, "{report}")?,
            Err(e) => {
                log::warn!(
                    "{failed} to process line {line}",
                    failed = "failed".on_red(),
                    line = line.on_blue()
                );
                writeln!(out, "Error: {e}")?;
            }
        }
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_line_class_only() {
        let report = process_line("10.0.0.1").expect("class query failed");
        assert!(report.starts_with("Class: A\n"));
        assert!(report.ends_with("Last address: 127.255.255.255"));
    }

    #[test]
    fn test_process_line_with_mask_has_both_reports() {
        let report = process_line("192.168.1.10,255.255.255.0").expect("subnet query failed");
        assert!(report.contains("Class: C\n"));
        assert!(report.contains("Address: 192.168.1.10/255.255.255.0\n"));
        assert!(report.contains("Subnets: 1\n"));
    }

    #[test]
    fn test_process_line_supernet() {
        let report = process_line("10.0.0.0, 10.0.1.0, 10.0.0.128").expect("supernet query failed");
        assert_eq!(report, "Address: 10.0.0.0\nNetwork Mask: 255.255.254.0");
    }

    #[test]
    fn test_process_line_bad_octet() {
        let err = process_line("10.0.0.300").unwrap_err();
        assert_eq!(err, CalcError::OctetRange("300".to_string()));
    }
}
