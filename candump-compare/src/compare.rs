//! Main comparison API
//!
//! The [`Comparator`] is the entry point of the library: it reads a candump
//! log containing the captures of both ends of a link, groups the arrivals
//! and returns the aggregate [`Statistics`].

use crate::aggregator::ArrivalGroups;
use crate::classifier::Statistics;
use crate::config::CompareConfig;
use crate::types::{CompareError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Runs comparisons with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    config: CompareConfig,
}

impl Comparator {
    /// Create a new comparator
    pub fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    /// Compare a candump log file
    ///
    /// The file is opened, consumed in a single pass and closed before this
    /// returns, whether the run succeeds or fails.
    ///
    /// # Example
    /// ```no_run
    /// use candump_compare::{Comparator, CompareConfig};
    /// use std::path::Path;
    ///
    /// let comparator = Comparator::new(CompareConfig::new());
    /// let stats = comparator.compare_file(Path::new("candump.log")).unwrap();
    /// println!("lost {} of {} frames", stats.loss, stats.frames());
    /// ```
    pub fn compare_file(&self, path: &Path) -> Result<Statistics> {
        log::info!("Comparing log file: {:?}", path);

        let file = File::open(path).map_err(|source| CompareError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        self.compare_reader(BufReader::new(file))
    }

    /// Compare a log read from any buffered reader
    pub fn compare_reader<R: BufRead>(&self, reader: R) -> Result<Statistics> {
        let groups = ArrivalGroups::from_reader(reader, &self.config)?;
        Ok(self.classify(&groups))
    }

    /// Compare an in-memory sequence of log lines
    pub fn compare_lines<I, S>(&self, lines: I) -> Result<Statistics>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let groups = ArrivalGroups::from_lines(lines, &self.config)?;
        Ok(self.classify(&groups))
    }

    fn classify(&self, groups: &ArrivalGroups) -> Statistics {
        log::info!(
            "Read {} arrivals of {} distinct frames",
            groups.arrival_count(),
            groups.len()
        );
        if groups.is_empty() {
            log::warn!("No frames to compare");
        }
        Statistics::from_groups(groups)
    }
}
