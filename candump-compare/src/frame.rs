//! Frame token decoder
//!
//! Turns the third field of a candump line (`7B#DEADBEEF` or `7B##0ADEADBEEF`)
//! into a [`Frame`]. The layout is detected from the number of `#` separators.

use crate::types::{CompareError, Frame, Result};
use std::fmt;
use std::str::FromStr;

const SEPARATOR: char = '#';

impl Frame {
    /// Decode a raw frame token
    ///
    /// # Errors
    /// Returns [`CompareError::MalformedFrame`] when the separator count is not
    /// one or two, the identifier is not hex, or the flags are not two hex digits.
    pub fn parse(token: &str) -> Result<Frame> {
        match token.matches(SEPARATOR).count() {
            1 => {
                let (id, payload) = token
                    .split_once(SEPARATOR)
                    .ok_or_else(|| malformed(token, "missing separator"))?;
                Ok(Frame {
                    id: parse_id(token, id)?,
                    id_text: id.to_string(),
                    flags: None,
                    payload: payload.to_string(),
                })
            }
            2 => {
                let (id, rest) = token
                    .split_once("##")
                    .ok_or_else(|| malformed(token, "separators of an extended frame must be adjacent"))?;
                let flags = rest
                    .get(..2)
                    .ok_or_else(|| malformed(token, "flags must be two hex digits"))?;
                Ok(Frame {
                    id: parse_id(token, id)?,
                    id_text: id.to_string(),
                    flags: Some(parse_flags(token, flags)?),
                    payload: rest[2..].to_string(),
                })
            }
            n => Err(malformed(token, &format!("expected 1 or 2 separators, found {}", n))),
        }
    }
}

impl FromStr for Frame {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self> {
        Frame::parse(s)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.flags {
            Some(flags) => write!(f, "{}##{:02X}{}", self.id_text, flags, self.payload),
            None => write!(f, "{}#{}", self.id_text, self.payload),
        }
    }
}

fn parse_id(token: &str, id: &str) -> Result<u32> {
    if !is_hex(id) {
        return Err(malformed(token, "identifier is not hex"));
    }
    u32::from_str_radix(id, 16).map_err(|e| malformed(token, &format!("identifier: {}", e)))
}

fn parse_flags(token: &str, flags: &str) -> Result<u8> {
    if !is_hex(flags) {
        return Err(malformed(token, "flags are not hex"));
    }
    u8::from_str_radix(flags, 16).map_err(|e| malformed(token, &format!("flags: {}", e)))
}

// from_str_radix also accepts a leading sign, so check the digits ourselves
fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}

fn malformed(token: &str, reason: &str) -> CompareError {
    CompareError::MalformedFrame(format!("{:?}: {}", token, reason))
}
