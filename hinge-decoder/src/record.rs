//! Attribute record builder
//!
//! Runs the active variant's field table over a validated frame, converting
//! each character span per its decode rule. Any span outside the frame fails
//! the whole decode; a record is never partially emitted.

use crate::float32::decode_binary32;
use crate::layouts::{DecodeRule, FieldLayout, FieldSpec};
use crate::types::{AttributeRecord, AttributeValue, DecoderError, RawFrame, Result};

/// Record builder - extracts attributes from frames
pub struct RecordBuilder;

impl RecordBuilder {
    /// Decode every field of `layout` against `frame`, in declared order
    pub fn build(frame: &RawFrame<'_>, layout: &FieldLayout) -> Result<AttributeRecord> {
        let mut record = AttributeRecord::new();
        for field in layout.fields {
            let value = Self::decode_field(frame, field)?;
            record.insert(field.name, value);
        }
        Ok(record)
    }

    /// Decode a single field per its rule
    fn decode_field(frame: &RawFrame<'_>, spec: &FieldSpec) -> Result<AttributeValue> {
        let span = frame.slice(spec.name, spec.start, spec.end)?;

        let value = match spec.rule {
            DecodeRule::UInt | DecodeRule::Flag => {
                AttributeValue::Integer(Self::parse_uint(spec.name, span)? as i64)
            }
            DecodeRule::FixedPoint { divisor } => {
                let raw = Self::parse_uint(spec.name, span)?;
                AttributeValue::Float(raw as f64 / divisor as f64)
            }
            DecodeRule::Float32Truncated => {
                // Truncation toward zero, matching the device's integer RSRP
                AttributeValue::Integer(decode_binary32(span)? as i64)
            }
            DecodeRule::Float32Fixed6 => {
                AttributeValue::Text(format!("{:.6}", decode_binary32(span)?))
            }
            DecodeRule::Ascii => AttributeValue::Text(span.to_string()),
            DecodeRule::FirmwareVersion => {
                let major = Self::parse_uint(spec.name, &span[0..2])?;
                let minor = Self::parse_uint(spec.name, &span[2..4])?;
                AttributeValue::Text(format!("{}.{}", major, minor))
            }
        };

        Ok(value)
    }

    /// Parse a hex character span as an unsigned integer
    fn parse_uint(field: &'static str, span: &str) -> Result<u64> {
        u64::from_str_radix(span, 16).map_err(|_| {
            DecoderError::MalformedHex(format!("field '{}' is not hex: {:?}", field, span))
        })
    }
}
