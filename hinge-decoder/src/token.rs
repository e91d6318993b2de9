//! Identity token extraction
//!
//! Heartbeat and GPS layouts carry the IMEI at a fixed character range.
//! ConfigReport frames carry it at the tail: the TOKEN_CHARS characters
//! immediately preceding the 1-byte trailer, located relative to the
//! declared length.

use crate::layouts::{TokenRule, TOKEN_CHARS, TOKEN_TAIL_OFFSET};
use crate::types::{DecoderError, RawFrame, Result, TokenCode};

/// Extract the device identity token per the active variant's rule
pub fn extract(frame: &RawFrame<'_>, rule: &TokenRule, declared_len: usize) -> Result<TokenCode> {
    let (start, end) = match rule {
        TokenRule::Fixed { start, end } => (*start, *end),
        TokenRule::TailRelative => {
            let Some(start) = (declared_len * 2).checked_sub(TOKEN_TAIL_OFFSET) else {
                return Err(DecoderError::MissingToken {
                    start: 0,
                    end: declared_len * 2,
                    frame_chars: frame.char_len(),
                });
            };
            // start + TOKEN_CHARS lands exactly at the trailer for a
            // length-validated frame
            (start, start + TOKEN_CHARS)
        }
    };

    if start >= end || end > frame.char_len() {
        return Err(DecoderError::MissingToken {
            start,
            end,
            frame_chars: frame.char_len(),
        });
    }

    Ok(TokenCode::new(&frame.as_str()[start..end]))
}
