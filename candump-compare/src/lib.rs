//! candump comparison library
//!
//! Measures the transmission fidelity of a frame-relay link (for example a
//! SocketCAN tunnel between `vcan0` and `vcan1`) from a candump log that holds
//! the captures of both ends.
//!
//! # Architecture
//!
//! - Decodes frame tokens (`7B#DEADBEEF`, `7B##0ADEADBEEF`) and log lines
//! - Groups arrivals by frame identifier, keeping capture order
//! - Classifies each group as loss, duplicate, corruption or correct round-trip
//! - Accumulates round-trip delay statistics
//!
//! The library does NOT:
//! - Capture traffic
//! - Synchronize clocks (both captures must share one clock)
//! - Format reports
//!
//! Frame identifiers must be unique within one run, e.g. frames generated
//! with `cangen -I i`.
//!
//! # Example Usage
//!
//! ```
//! use candump_compare::{Comparator, CompareConfig};
//!
//! let log = [
//!     "(0.100) vcan0 2#DEADBEEF",
//!     "(0.150) vcan1 2#DEADBEEF",
//!     "(0.200) vcan0 3#0011",
//! ];
//!
//! let stats = Comparator::new(CompareConfig::new()).compare_lines(log).unwrap();
//! assert_eq!(stats.correct, 1);
//! assert_eq!(stats.loss, 1);
//! ```

// Public modules
pub mod aggregator;
pub mod classifier;
pub mod compare;
pub mod config;
pub mod types;

// Re-export main types for convenience
pub use aggregator::{ArrivalGroup, ArrivalGroups};
pub use classifier::{classify, Outcome, Statistics};
pub use compare::Comparator;
pub use config::CompareConfig;
pub use types::{Arrival, CompareError, Frame, Result, Timestamp};

// Parsers are exposed through inherent methods on Frame and Arrival
mod frame;
mod record;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
