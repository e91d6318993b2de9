//! Main decoder API
//!
//! This module provides the primary interface for the decoder library.
//! A FrameDecoder is bound to one device family and decodes one complete hex
//! message per call into an attribute record plus identity token.

use crate::layouts::{self, FieldLayout};
use crate::record::RecordBuilder;
use crate::token;
use crate::types::{
    AttributeRecord, DecodeOutcome, DecoderError, DeviceFamily, RawFrame, Result, TokenCode,
};

/// Stateless frame decoder for one device family
///
/// Decoding is a pure function of (family, frame): no shared mutable state,
/// no I/O, no result reuse across calls. Concurrent use needs no
/// coordination.
#[derive(Debug, Clone, Copy)]
pub struct FrameDecoder {
    family: DeviceFamily,
}

impl FrameDecoder {
    /// Create a decoder for the given device family
    pub fn new(family: DeviceFamily) -> Self {
        Self { family }
    }

    /// The device family this decoder is bound to
    pub fn family(&self) -> DeviceFamily {
        self.family
    }

    /// Decode one complete hex message
    ///
    /// # Returns
    /// * `Ok(DecodeOutcome::Decoded { .. })` - record and token for a
    ///   recognized variant
    /// * `Ok(DecodeOutcome::Empty)` - the frame is valid but matches no
    ///   variant rule
    /// * `Err(DecoderError)` - malformed, length-mismatched or truncated
    ///   frame; no record or token is produced
    ///
    /// # Example
    /// ```
    /// use hinge_decoder::{DeviceFamily, FrameDecoder};
    ///
    /// let decoder = FrameDecoder::new(DeviceFamily::Hinge572);
    /// let frame = "80007101211D7501CB000000190A0000\
    ///              0166000039C40002186325107428288581";
    /// let outcome = decoder.decode(frame).unwrap();
    /// assert_eq!(outcome.token().unwrap().as_str(), "863251074282885");
    /// ```
    pub fn decode(&self, hex: &str) -> Result<DecodeOutcome> {
        let frame = RawFrame::parse(hex)?;
        let declared_len = self.validate_length(&frame)?;
        let type_byte = frame.type_byte()?;

        let Some(layout) = layouts::select_variant(self.family, type_byte, declared_len) else {
            log::trace!(
                "{}: no variant for type {:?} with declared length {}",
                self.family,
                type_byte,
                declared_len
            );
            return Ok(DecodeOutcome::Empty);
        };

        log::debug!(
            "{}: decoding {} frame ({} bytes)",
            self.family,
            layout.name,
            declared_len
        );

        let (record, token) = self.run_layout(&frame, layout, declared_len)?;

        Ok(DecodeOutcome::Decoded {
            variant: layout.name,
            record,
            token,
        })
    }

    /// Check the frame's self-declared byte length against its actual length
    fn validate_length(&self, frame: &RawFrame<'_>) -> Result<usize> {
        let declared = frame.declared_len()?;
        let actual = frame.byte_len();
        if declared != actual {
            return Err(DecoderError::LengthMismatch { declared, actual });
        }
        Ok(declared)
    }

    /// Build the record and extract the token from the same validated frame
    fn run_layout(
        &self,
        frame: &RawFrame<'_>,
        layout: &FieldLayout,
        declared_len: usize,
    ) -> Result<(AttributeRecord, TokenCode)> {
        let record = RecordBuilder::build(frame, layout)?;
        let token = token::extract(frame, &layout.token, declared_len)?;
        Ok((record, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_length_is_malformed() {
        let decoder = FrameDecoder::new(DeviceFamily::Hinge555);
        let err = decoder.decode("80001").unwrap_err();
        assert!(matches!(err, DecoderError::MalformedHex(_)));
    }

    #[test]
    fn test_length_mismatch_is_an_error_not_empty() {
        let decoder = FrameDecoder::new(DeviceFamily::Hinge555);
        // Declares 0x22 = 34 bytes but carries only 6
        let err = decoder.decode("800016022200").unwrap_err();
        match err {
            DecoderError::LengthMismatch { declared, actual } => {
                assert_eq!(declared, 34);
                assert_eq!(actual, 6);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_variant_is_empty() {
        let decoder = FrameDecoder::new(DeviceFamily::Hinge555);
        // Type 09, declared length 6 bytes (< ConfigReport minimum)
        let outcome = decoder.decode("800016090600").unwrap();
        assert!(outcome.is_empty());
        assert!(outcome.record().is_none());
        assert!(outcome.token().is_none());
    }

    #[test]
    fn test_event_type_with_unknown_length_is_empty() {
        let decoder = FrameDecoder::new(DeviceFamily::Hinge572);
        // Type 01 with declared length 6: not a heartbeat, not a GPS event,
        // and event types never fall through to ConfigReport
        let outcome = decoder.decode("800071010600").unwrap();
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_non_hex_declared_length() {
        let decoder = FrameDecoder::new(DeviceFamily::Hinge572);
        let err = decoder.decode("80007101ZZ00").unwrap_err();
        assert!(matches!(err, DecoderError::MalformedHex(_)));
    }

    #[test]
    fn test_frame_shorter_than_header() {
        let decoder = FrameDecoder::new(DeviceFamily::Hinge555);
        let err = decoder.decode("8000").unwrap_err();
        assert!(matches!(err, DecoderError::TruncatedFrame { .. }));
    }
}
