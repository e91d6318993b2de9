//! Core types for the Hinge frame decoder library
//!
//! This module defines the fundamental types the decoder consumes and emits.
//! The decoder is stateless and returns a complete outcome per call - it never
//! keeps or reuses results across frames.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Timestamp type used throughout the decoder
pub type Timestamp = DateTime<Utc>;

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, DecoderError>;

/// Character span of the message type byte in the frame header
const TYPE_BYTE_SPAN: (usize, usize) = (6, 8);
/// Character span of the self-declared byte length in the frame header
const DECLARED_LEN_SPAN: (usize, usize) = (8, 10);

/// Supported device families
///
/// Each family owns its own variant rules and field-offset tables.
/// Frames from different families are never decoded with mixed tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceFamily {
    /// Hinge555 level sensor (4G)
    Hinge555,
    /// Hinge572 liquid-level sensor (4G)
    Hinge572,
}

impl fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceFamily::Hinge555 => write!(f, "Hinge555"),
            DeviceFamily::Hinge572 => write!(f, "Hinge572"),
        }
    }
}

/// One complete hex-encoded telemetry message, as delivered by the
/// stream-framing collaborator
///
/// The frame borrows the caller's string for the duration of one decode call;
/// nothing is retained afterwards. Construction checks that the frame is
/// ASCII (so character offsets are byte offsets) and that the character
/// count is even (a whole number of bytes). Real ConfigReport frames embed
/// ASCII runs (server addresses, IMSI digits) that are not hex, so
/// full-frame hex validation happens per numeric field instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFrame<'a> {
    hex: &'a str,
}

impl<'a> RawFrame<'a> {
    /// Wrap a hex message, rejecting non-ASCII input and an odd character
    /// count
    pub fn parse(hex: &'a str) -> Result<Self> {
        if !hex.is_ascii() {
            return Err(DecoderError::MalformedHex(
                "non-ASCII character in frame".to_string(),
            ));
        }
        if hex.len() % 2 != 0 {
            return Err(DecoderError::MalformedHex(format!(
                "odd character count: {}",
                hex.len()
            )));
        }
        Ok(Self { hex })
    }

    /// Full frame as characters
    pub fn as_str(&self) -> &'a str {
        self.hex
    }

    /// Number of characters in the frame
    pub fn char_len(&self) -> usize {
        self.hex.len()
    }

    /// Actual byte length of the frame (character count / 2)
    pub fn byte_len(&self) -> usize {
        self.hex.len() / 2
    }

    /// Message type byte from the header (characters 6..8)
    pub fn type_byte(&self) -> Result<&'a str> {
        self.slice("typeByte", TYPE_BYTE_SPAN.0, TYPE_BYTE_SPAN.1)
    }

    /// Self-declared byte length from the header (characters 8..10)
    pub fn declared_len(&self) -> Result<usize> {
        let span = self.slice("declaredLength", DECLARED_LEN_SPAN.0, DECLARED_LEN_SPAN.1)?;
        usize::from_str_radix(span, 16).map_err(|_| {
            DecoderError::MalformedHex(format!("declared length is not hex: {:?}", span))
        })
    }

    /// Take the character range `start..end`, failing with `TruncatedFrame`
    /// if it falls outside the frame
    pub fn slice(&self, field: &'static str, start: usize, end: usize) -> Result<&'a str> {
        if start > end || end > self.hex.len() {
            return Err(DecoderError::TruncatedFrame {
                field,
                start,
                end,
                frame_chars: self.hex.len(),
            });
        }
        Ok(&self.hex[start..end])
    }
}

/// Errors that can occur during decoding
#[derive(Debug, thiserror::Error)]
pub enum DecoderError {
    #[error("malformed hex frame: {0}")]
    MalformedHex(String),

    #[error("declared length {declared} bytes does not match actual length {actual} bytes")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("field '{field}' at characters {start}..{end} exceeds frame of {frame_chars} characters")]
    TruncatedFrame {
        field: &'static str,
        start: usize,
        end: usize,
        frame_chars: usize,
    },

    #[error("token range {start}..{end} is invalid for frame of {frame_chars} characters")]
    MissingToken {
        start: usize,
        end: usize,
        frame_chars: usize,
    },
}

/// A single decoded attribute value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Plain unsigned/truncated integer value
    Integer(i64),
    /// Scaled value (e.g. battery voltage after divide-by-100)
    Float(f64),
    /// String value (coordinates, firmware version, IMSI)
    Text(String),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Integer(v) => write!(f, "{}", v),
            AttributeValue::Float(v) => write!(f, "{}", v),
            AttributeValue::Text(v) => write!(f, "{}", v),
        }
    }
}

impl AttributeValue {
    /// Convert to i64 if the value is numeric
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AttributeValue::Integer(v) => Some(*v),
            AttributeValue::Float(v) => Some(*v as i64),
            AttributeValue::Text(_) => None,
        }
    }
}

/// Decoded attribute record - the normalized output forwarded to the
/// telemetry platform
///
/// Attribute order is irrelevant for consumers; a BTreeMap keeps iteration
/// and serialization deterministic, so decoding the same frame twice
/// produces byte-identical JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AttributeRecord {
    attributes: BTreeMap<String, AttributeValue>,
}

impl AttributeRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute
    pub fn insert(&mut self, name: impl Into<String>, value: AttributeValue) {
        self.attributes.insert(name.into(), value);
    }

    /// Look up an attribute by name
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// Number of attributes in the record
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// True if the record carries no attributes
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterate attributes in deterministic (name) order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Convert an embedded `timeStamp` attribute (epoch seconds) to a
    /// DateTime, if the frame carried one
    pub fn timestamp(&self) -> Option<Timestamp> {
        match self.get("timeStamp") {
            Some(AttributeValue::Integer(secs)) => DateTime::from_timestamp(*secs, 0),
            _ => None,
        }
    }
}

/// Device identity token (IMEI substring) used for telemetry routing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenCode(String);

impl TokenCode {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of one decode call
///
/// Every call yields exactly one of: a complete (record, token) pair, the
/// explicit empty-variant result, or a typed error. There is no partially
/// initialized or stale result.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeOutcome {
    /// A recognized variant decoded to a record and identity token
    Decoded {
        /// Name of the matched variant (e.g. "Heartbeat")
        variant: &'static str,
        /// The decoded attributes
        record: AttributeRecord,
        /// The device identity token
        token: TokenCode,
    },
    /// The frame passed length validation but matched no variant rule;
    /// this is a defined result, not an error
    Empty,
}

impl DecodeOutcome {
    /// True if the frame matched no variant
    pub fn is_empty(&self) -> bool {
        matches!(self, DecodeOutcome::Empty)
    }

    /// The decoded record, if any
    pub fn record(&self) -> Option<&AttributeRecord> {
        match self {
            DecodeOutcome::Decoded { record, .. } => Some(record),
            DecodeOutcome::Empty => None,
        }
    }

    /// The identity token, if any
    pub fn token(&self) -> Option<&TokenCode> {
        match self {
            DecodeOutcome::Decoded { token, .. } => Some(token),
            DecodeOutcome::Empty => None,
        }
    }

    /// Name of the matched variant, if any
    pub fn variant(&self) -> Option<&'static str> {
        match self {
            DecodeOutcome::Decoded { variant, .. } => Some(variant),
            DecodeOutcome::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_frame_rejects_odd_length() {
        let err = RawFrame::parse("ABC").unwrap_err();
        assert!(matches!(err, DecoderError::MalformedHex(_)));
    }

    #[test]
    fn test_raw_frame_rejects_non_ascii() {
        // A multi-byte character straddling a field span must classify as
        // malformed, not panic on char-boundary indexing
        let err = RawFrame::parse("8000160\u{e9}2").unwrap_err();
        assert!(matches!(err, DecoderError::MalformedHex(_)));
    }

    #[test]
    fn test_raw_frame_header_fields() {
        let frame = RawFrame::parse("800016022200").unwrap();
        assert_eq!(frame.byte_len(), 6);
        assert_eq!(frame.type_byte().unwrap(), "02");
        assert_eq!(frame.declared_len().unwrap(), 0x22);
    }

    #[test]
    fn test_raw_frame_slice_out_of_bounds() {
        let frame = RawFrame::parse("8000").unwrap();
        let err = frame.slice("height", 2, 8).unwrap_err();
        match err {
            DecoderError::TruncatedFrame { field, end, frame_chars, .. } => {
                assert_eq!(field, "height");
                assert_eq!(end, 8);
                assert_eq!(frame_chars, 4);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_attribute_record_deterministic_order() {
        let mut record = AttributeRecord::new();
        record.insert("volt", AttributeValue::Float(3.6));
        record.insert("height", AttributeValue::Integer(613));
        let names: Vec<&str> = record.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["height", "volt"]);
    }

    #[test]
    fn test_attribute_record_timestamp() {
        let mut record = AttributeRecord::new();
        record.insert("timeStamp", AttributeValue::Integer(1_700_000_000));
        let ts = record.timestamp().unwrap();
        assert_eq!(ts.timestamp(), 1_700_000_000);

        let empty = AttributeRecord::new();
        assert!(empty.timestamp().is_none());
    }

    #[test]
    fn test_attribute_value_serialization() {
        let mut record = AttributeRecord::new();
        record.insert("height", AttributeValue::Integer(613));
        record.insert("volt", AttributeValue::Float(3.6));
        record.insert("longitude", AttributeValue::Text("113.250000".to_string()));
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"height":613,"longitude":"113.250000","volt":3.6}"#);
    }
}
