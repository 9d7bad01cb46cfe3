//! candump log line parser
//!
//! A line written by `candump -l` has the layout
//! `(<seconds>) <source> <frame>`, fields separated by single spaces.

use crate::types::{Arrival, CompareError, Frame, Result};
use std::str::FromStr;

impl Arrival {
    /// Parse one log line into an arrival
    ///
    /// Fields past the frame token are ignored.
    pub fn parse_line(line: &str) -> Result<Arrival> {
        let mut fields = line.split(' ');
        let (Some(timestamp), Some(source), Some(token)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(CompareError::TruncatedRecord(format!(
                "{:?}: expected at least 3 fields",
                line
            )));
        };

        let arrival = Arrival {
            timestamp: parse_timestamp(timestamp)?,
            source: source.to_string(),
            frame: Frame::parse(token)?,
        };
        log::trace!(
            "Parsed arrival: {:.6} {} ID 0x{:X}",
            arrival.timestamp,
            arrival.source,
            arrival.frame.id
        );
        Ok(arrival)
    }
}

impl FromStr for Arrival {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self> {
        Arrival::parse_line(s)
    }
}

/// Parse a bracketed `(1610000000.123456)` timestamp field
fn parse_timestamp(field: &str) -> Result<f64> {
    let inner = field
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| CompareError::MalformedTimestamp(format!("{:?}: not bracketed", field)))?;

    match inner.parse::<f64>() {
        Ok(seconds) if seconds.is_finite() => Ok(seconds),
        Ok(_) => Err(CompareError::MalformedTimestamp(format!(
            "{:?}: not a finite number",
            field
        ))),
        Err(e) => Err(CompareError::MalformedTimestamp(format!("{:?}: {}", field, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classic_line() {
        let arrival = Arrival::parse_line("(1610000000.123456) vcan0 7B#DEADBEEF").unwrap();
        assert_eq!(arrival.timestamp, 1610000000.123456);
        assert_eq!(arrival.source, "vcan0");
        assert_eq!(arrival.frame.id, 0x7B);
        assert_eq!(arrival.frame.payload, "DEADBEEF");
        assert!(!arrival.frame.is_extended());
    }

    #[test]
    fn test_parse_extended_line() {
        let arrival = Arrival::parse_line("(1610000000.234567) vcan1 7B##0ADEADBEEF").unwrap();
        assert_eq!(arrival.source, "vcan1");
        assert_eq!(arrival.frame.flags, Some(0x0A));
        assert_eq!(arrival.frame.payload, "DEADBEEF");
    }

    #[test]
    fn test_trailing_fields_ignored() {
        let arrival = Arrival::parse_line("(1661789611.150752) can1 18EC1C2A#10900015FF00EF01 T").unwrap();
        assert_eq!(arrival.frame.id, 0x18EC1C2A);
    }

    #[test]
    fn test_truncated_record() {
        for line in ["", "(1.0)", "(1.0) vcan0"] {
            assert!(matches!(
                Arrival::parse_line(line),
                Err(CompareError::TruncatedRecord(_))
            ), "{:?}", line);
        }
    }

    #[test]
    fn test_malformed_timestamp() {
        for line in [
            "1.0 vcan0 7B#00",
            "(1.0 vcan0 7B#00",
            "(abc) vcan0 7B#00",
            "() vcan0 7B#00",
            "(inf) vcan0 7B#00",
        ] {
            assert!(matches!(
                Arrival::parse_line(line),
                Err(CompareError::MalformedTimestamp(_))
            ), "{:?}", line);
        }
    }

    #[test]
    fn test_frame_error_propagates() {
        assert!(matches!(
            Arrival::parse_line("(1.0) vcan0 7BDEADBEEF"),
            Err(CompareError::MalformedFrame(_))
        ));
    }

    #[test]
    fn test_double_space_shifts_fields() {
        // An empty field from a double space lands in the source slot
        let err = Arrival::parse_line("(1.0)  vcan0 7B#00").unwrap_err();
        assert!(matches!(err, CompareError::MalformedFrame(_)));
    }
}
