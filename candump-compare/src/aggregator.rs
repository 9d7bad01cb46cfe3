//! Arrival aggregation
//!
//! Groups parsed arrivals by frame identifier while keeping capture order
//! inside each group.

use crate::config::CompareConfig;
use crate::types::{Arrival, CompareError, Result};
use std::collections::btree_map::{self, BTreeMap};
use std::io::BufRead;

/// All arrivals sharing one frame identifier, in capture order
pub type ArrivalGroup = Vec<Arrival>;

/// Arrival groups of one comparison run, keyed by frame identifier
#[derive(Debug, Default, Clone)]
pub struct ArrivalGroups {
    groups: BTreeMap<u32, ArrivalGroup>,
}

impl ArrivalGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build groups from an ordered sequence of log lines
    ///
    /// The first line that fails to parse, blank lines included, aborts the
    /// whole run and is reported with its 1-based line number.
    pub fn from_lines<I, S>(lines: I, config: &CompareConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut groups = Self::new();
        for (index, line) in lines.into_iter().enumerate() {
            groups.push_line(index + 1, line.as_ref(), config)?;
        }
        Ok(groups)
    }

    /// Build groups by reading lines from a buffered reader
    pub fn from_reader<R: BufRead>(reader: R, config: &CompareConfig) -> Result<Self> {
        let mut groups = Self::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| at_line(index + 1, e.into()))?;
            groups.push_line(index + 1, &line, config)?;
        }
        Ok(groups)
    }

    fn push_line(&mut self, line_no: usize, line: &str, config: &CompareConfig) -> Result<()> {
        let line = line.trim_end_matches(&['\r', '\n'][..]);
        let arrival = Arrival::parse_line(line).map_err(|e| at_line(line_no, e))?;
        if !config.should_process(&arrival.source, arrival.frame.id) {
            log::trace!(
                "Line {}: skipping {} ID 0x{:X} (filtered)",
                line_no,
                arrival.source,
                arrival.frame.id
            );
            return Ok(());
        }
        self.push(arrival);
        Ok(())
    }

    /// Append an arrival to the group of its frame identifier
    pub fn push(&mut self, arrival: Arrival) {
        self.groups.entry(arrival.frame.id).or_default().push(arrival);
    }

    /// Number of distinct frame identifiers
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of arrivals across all groups
    pub fn arrival_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn get(&self, id: u32) -> Option<&[Arrival]> {
        self.groups.get(&id).map(Vec::as_slice)
    }

    /// Iterate over groups in ascending identifier order
    pub fn iter(&self) -> btree_map::Iter<'_, u32, ArrivalGroup> {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a ArrivalGroups {
    type Item = (&'a u32, &'a ArrivalGroup);
    type IntoIter = btree_map::Iter<'a, u32, ArrivalGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Arrival> for ArrivalGroups {
    fn from_iter<T: IntoIterator<Item = Arrival>>(iter: T) -> Self {
        let mut groups = Self::new();
        for arrival in iter {
            groups.push(arrival);
        }
        groups
    }
}

fn at_line(line: usize, source: CompareError) -> CompareError {
    CompareError::Line {
        line,
        source: Box::new(source),
    }
}
