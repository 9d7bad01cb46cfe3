//! Outcome classification and delay statistics
//!
//! Each arrival group is classified on its own:
//! - one arrival: the frame was lost on the way to the other side
//! - more than two arrivals: the frame was duplicated
//! - two arrivals with different payloads: the frame was corrupted
//! - two arrivals with equal payloads: a correct round-trip, with a delay

use crate::aggregator::ArrivalGroups;
use crate::types::{seconds_to_timestamp, Arrival, Timestamp};
use serde::Serialize;

/// Classification of a single arrival group
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Outcome {
    Loss,
    Duplicate,
    Corrupt,
    /// Delay in seconds between the earlier and the later arrival
    Correct { delay: f64 },
}

/// Classify one arrival group
///
/// Returns `None` for an empty group, which the aggregator never produces.
pub fn classify(group: &[Arrival]) -> Option<Outcome> {
    match group {
        [] => None,
        [_] => Some(Outcome::Loss),
        [first, second] => {
            if first.frame.payload != second.frame.payload {
                return Some(Outcome::Corrupt);
            }
            // Capture order may disagree with timestamps; the earlier one is the sender side
            let (earlier, later) = if first.timestamp > second.timestamp {
                (second, first)
            } else {
                (first, second)
            };
            Some(Outcome::Correct {
                delay: later.timestamp - earlier.timestamp,
            })
        }
        _ => Some(Outcome::Duplicate),
    }
}

/// Aggregate counters of one comparison run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub loss: usize,
    pub duplicate: usize,
    pub corrupt: usize,
    pub correct: usize,
    /// Sum of all correct round-trip delays in seconds
    pub delay_total: f64,
    pub delay_min: Option<f64>,
    pub delay_max: Option<f64>,
    /// Number of arrivals seen across all groups
    pub arrivals: usize,
    /// Earliest capture timestamp in seconds
    pub first_timestamp: Option<f64>,
    /// Latest capture timestamp in seconds
    pub last_timestamp: Option<f64>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify every group and accumulate the results
    pub fn from_groups(groups: &ArrivalGroups) -> Self {
        let mut stats = Self::new();
        for (id, group) in groups {
            stats.observe(group);
            if let Some(outcome) = classify(group) {
                log::trace!("ID 0x{:X}: {} arrival(s) -> {:?}", id, group.len(), outcome);
                stats.record(outcome);
            }
        }
        log::debug!(
            "Classified {} groups: {} loss, {} dup, {} corrupt, {} correct",
            stats.frames(),
            stats.loss,
            stats.duplicate,
            stats.corrupt,
            stats.correct
        );
        stats
    }

    /// Account for one classified group
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Loss => self.loss += 1,
            Outcome::Duplicate => self.duplicate += 1,
            Outcome::Corrupt => self.corrupt += 1,
            Outcome::Correct { delay } => {
                self.correct += 1;
                self.delay_total += delay;
                self.delay_min = Some(self.delay_min.map_or(delay, |min| min.min(delay)));
                self.delay_max = Some(self.delay_max.map_or(delay, |max| max.max(delay)));
            }
        }
    }

    /// Widen the capture window with the arrivals of a group
    fn observe(&mut self, group: &[Arrival]) {
        for arrival in group {
            let ts = arrival.timestamp;
            self.arrivals += 1;
            self.first_timestamp = Some(self.first_timestamp.map_or(ts, |t| t.min(ts)));
            self.last_timestamp = Some(self.last_timestamp.map_or(ts, |t| t.max(ts)));
        }
    }

    /// Number of classified groups (distinct identifiers)
    pub fn frames(&self) -> usize {
        self.loss + self.duplicate + self.corrupt + self.correct
    }

    /// Mean delay of correct round-trips, `NaN` if there were none
    pub fn average_delay(&self) -> f64 {
        if self.correct == 0 {
            f64::NAN
        } else {
            self.delay_total / self.correct as f64
        }
    }

    /// Start of the capture window
    pub fn capture_start(&self) -> Option<Timestamp> {
        self.first_timestamp.and_then(seconds_to_timestamp)
    }

    /// End of the capture window
    pub fn capture_end(&self) -> Option<Timestamp> {
        self.last_timestamp.and_then(seconds_to_timestamp)
    }
}
