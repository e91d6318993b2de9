//! Hinge Telemetry Frame Decoder Library
//!
//! A stateless, reusable library for decoding the fixed-format hex telemetry
//! frames sent by Hinge555 and Hinge572 cellular level sensors into a
//! normalized attribute record plus a device identity token.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on decoding:
//! - Validates the frame's self-declared byte length
//! - Selects the field layout by message type and declared length from a
//!   declarative per-family variant table
//! - Extracts and converts fields (integers, fixed-point values, IEEE-754
//!   floats, ASCII substrings, composed firmware strings)
//! - Locates the identity token at a fixed or length-relative offset
//!
//! The library does NOT:
//! - Listen on TCP or reassemble message streams
//! - Forward records to the telemetry platform
//! - Encode commands back to devices
//! - Persist anything between calls
//!
//! Stream framing and uplink forwarding are external collaborators; the CLI
//! crate (hinge-cli) shows one such consumer.
//!
//! # Example Usage
//!
//! ```
//! use hinge_decoder::{DecodeOutcome, DeviceFamily, FrameDecoder};
//!
//! let decoder = FrameDecoder::new(DeviceFamily::Hinge572);
//! let frame = "80007101211D7501CB000000190A0000\
//!              0166000039C40002186325107428288581";
//!
//! match decoder.decode(frame).unwrap() {
//!     DecodeOutcome::Decoded { variant, record, token } => {
//!         assert_eq!(variant, "Heartbeat");
//!         assert_eq!(token.as_str(), "863251074282885");
//!         assert_eq!(record.get("liquidLevel").unwrap().as_i64(), Some(7541));
//!     }
//!     DecodeOutcome::Empty => panic!("frame should decode"),
//! }
//! ```

// Public modules
pub mod decoder;
pub mod layouts;
pub mod types;

// Re-export main types for convenience
pub use decoder::FrameDecoder;
pub use types::{
    AttributeRecord, AttributeValue, DecodeOutcome, DecoderError, DeviceFamily, RawFrame,
    Result, TokenCode,
};

// Internal modules (not exposed in public API)
mod float32;
mod record;
mod token;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
