//! Statistics computed from the address models.
//!
//! This module contains the arithmetic behind the three query shapes:
//! - [`class_stats`] - classful capacities and range bounds
//! - [`SubnetStats`] - classless subnet enumeration under an explicit mask
//! - [`supernet`] - smallest common aggregate of a set of addresses

mod class_stats;
mod subnet_stats;
mod supernet;

// Re-export public functions
pub use class_stats::{class_stats, ClassStats};
pub use subnet_stats::{SubnetIter, SubnetStats};
pub use supernet::supernet;
