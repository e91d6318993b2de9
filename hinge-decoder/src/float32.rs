//! IEEE-754 binary32 codec
//!
//! The payloads carry signal strength and GPS coordinates as big-endian
//! binary32 bit patterns in hex. Decoding is a bit-exact reinterpretation of
//! the 4 bytes, never a textual approximation.

use byteorder::{BigEndian, ByteOrder};

use crate::types::{DecoderError, Result};

/// Number of hex characters in one binary32 value
pub const BINARY32_CHARS: usize = 8;

/// Reinterpret 8 hex characters (4 bytes, most-significant byte first) as an
/// IEEE-754 binary32 value
pub fn decode_binary32(hex: &str) -> Result<f32> {
    if hex.len() != BINARY32_CHARS {
        return Err(DecoderError::MalformedHex(format!(
            "binary32 field needs {} hex characters, got {}",
            BINARY32_CHARS,
            hex.len()
        )));
    }

    let mut bytes = [0u8; 4];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| {
            DecoderError::MalformedHex(format!("binary32 field is not hex: {:?}", hex))
        })?;
    }

    Ok(BigEndian::read_f32(&bytes))
}
