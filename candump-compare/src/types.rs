//! Core types for the candump comparison library
//!
//! This module defines the structured records produced while reading a candump
//! log (`Frame`, `Arrival`) and the error type shared by every parsing step.

use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Timestamp type used for displaying capture times
pub type Timestamp = DateTime<Utc>;

/// Result type for comparison operations
pub type Result<T> = std::result::Result<T, CompareError>;

/// One decoded frame token from a candump log line
///
/// Classic frames look like `7B#DEADBEEF`, extended (CAN-FD) frames like
/// `7B##0ADEADBEEF` where the two characters after `##` are the flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Frame identifier, the grouping key of a comparison run
    pub id: u32,
    /// Identifier digits as written in the log (`07B` keeps its padding)
    pub id_text: String,
    /// Flags byte, only present for extended frames
    pub flags: Option<u8>,
    /// Payload hex text, kept verbatim for equality checks
    pub payload: String,
}

impl Frame {
    /// Build a frame whose identifier text is the unpadded uppercase hex of `id`
    pub fn new(id: u32, flags: Option<u8>, payload: impl Into<String>) -> Self {
        Self {
            id,
            id_text: format!("{:X}", id),
            flags,
            payload: payload.into(),
        }
    }

    /// True if the token used the extended `##` layout
    pub fn is_extended(&self) -> bool {
        self.flags.is_some()
    }
}

/// One timestamped observation of a frame on a capture source
#[derive(Debug, Clone, PartialEq)]
pub struct Arrival {
    /// Capture time in seconds (shared clock for both sources)
    pub timestamp: f64,
    /// Capture source label, e.g. `vcan0`
    pub source: String,
    /// The observed frame
    pub frame: Frame,
}

impl Arrival {
    /// Convert the float seconds into a UTC timestamp
    ///
    /// Returns `None` when the value is outside the range chrono can represent.
    pub fn captured_at(&self) -> Option<Timestamp> {
        seconds_to_timestamp(self.timestamp)
    }
}

pub(crate) fn seconds_to_timestamp(seconds: f64) -> Option<Timestamp> {
    if !seconds.is_finite() {
        return None;
    }
    let secs = seconds.floor();
    let nsecs = ((seconds - secs) * 1_000_000_000.0).round() as u32;
    // Rounding can carry into the next second
    let (secs, nsecs) = if nsecs >= 1_000_000_000 {
        (secs as i64 + 1, 0)
    } else {
        (secs as i64, nsecs)
    };
    DateTime::from_timestamp(secs, nsecs)
}

/// Errors that can occur while reading and comparing a log
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    #[error("Malformed frame: {0}")]
    MalformedFrame(String),

    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),

    #[error("Truncated record: {0}")]
    TruncatedRecord(String),

    #[error("Cannot access log file {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<CompareError>,
    },
}

impl CompareError {
    /// Strip any `Line` wrappers and return the underlying error
    pub fn root(&self) -> &CompareError {
        match self {
            CompareError::Line { source, .. } => source.root(),
            other => other,
        }
    }

    /// Line number attached by the aggregator, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            CompareError::Line { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_is_extended() {
        let classic = Frame::new(0x7B, None, "DEADBEEF");
        assert!(!classic.is_extended());

        let extended = Frame {
            flags: Some(0x0A),
            ..classic
        };
        assert!(extended.is_extended());
    }

    #[test]
    fn test_captured_at() {
        let arrival = Arrival {
            timestamp: 1610000000.5,
            source: "vcan0".to_string(),
            frame: Frame::new(1, None, ""),
        };
        let ts = arrival.captured_at().unwrap();
        assert_eq!(ts.timestamp(), 1610000000);
        assert_eq!(ts.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn test_error_root_and_line() {
        let err = CompareError::Line {
            line: 7,
            source: Box::new(CompareError::TruncatedRecord("x".to_string())),
        };
        assert_eq!(err.line(), Some(7));
        assert!(matches!(err.root(), CompareError::TruncatedRecord(_)));
        assert_eq!(err.to_string(), "Line 7: Truncated record: x");
    }
}
