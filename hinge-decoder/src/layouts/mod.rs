//! Declarative variant registry
//!
//! Each device family owns an ordered table of variant rules. A rule matches
//! on the header type byte and declared length and names the field layout to
//! run. Selection walks the table in order and takes the first match; a frame
//! matching no rule decodes to the explicit Empty outcome. Adding a firmware
//! revision is a table edit in the family module, not new branching logic.

use crate::types::DeviceFamily;

pub mod hinge555;
pub mod hinge572;

/// Characters counted back from the declared frame end to the start of the
/// ConfigReport identity token
pub const TOKEN_TAIL_OFFSET: usize = 17;
/// Characters of trailer following the ConfigReport token
pub const TRAILER_CHARS: usize = 2;
/// Length of the identity token in characters
pub const TOKEN_CHARS: usize = TOKEN_TAIL_OFFSET - TRAILER_CHARS;

/// How a field's character span is converted to an attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeRule {
    /// Unsigned integer from hex characters
    UInt,
    /// Single hex digit alarm/status flag
    Flag,
    /// Unsigned integer scaled down by a divisor (e.g. centivolts)
    FixedPoint { divisor: u32 },
    /// IEEE-754 binary32, truncated toward zero to an integer
    Float32Truncated,
    /// IEEE-754 binary32, formatted to six decimal places
    Float32Fixed6,
    /// Raw ASCII substring, taken verbatim
    Ascii,
    /// Two consecutive bytes rendered as "major.minor"
    FirmwareVersion,
}

/// One field of a variant layout: attribute name, character span, decode rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub start: usize,
    pub end: usize,
    pub rule: DecodeRule,
}

/// Where the identity token lives in a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRule {
    /// Fixed character span (Heartbeat / GpsEvent layouts)
    Fixed { start: usize, end: usize },
    /// The TOKEN_CHARS characters immediately preceding the trailer,
    /// located relative to the declared length (ConfigReport layouts)
    TailRelative,
}

/// A named field layout for one message variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
    pub token: TokenRule,
}

/// Type-byte predicate of a variant rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeMatch {
    /// Type byte must be one of these values
    OneOf(&'static [&'static str]),
    /// Type byte must not be any of these values
    NotOneOf(&'static [&'static str]),
}

impl TypeMatch {
    pub fn matches(&self, type_byte: &str) -> bool {
        match self {
            TypeMatch::OneOf(set) => set.contains(&type_byte),
            TypeMatch::NotOneOf(set) => !set.contains(&type_byte),
        }
    }
}

/// Declared-length predicate of a variant rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthMatch {
    /// Declared byte length must equal this value
    Exact(usize),
    /// Declared byte length must be at least this value
    AtLeast(usize),
}

impl LengthMatch {
    pub fn matches(&self, declared_len: usize) -> bool {
        match self {
            LengthMatch::Exact(len) => declared_len == *len,
            LengthMatch::AtLeast(min) => declared_len >= *min,
        }
    }
}

/// One entry of a family's ordered variant table
#[derive(Debug, Clone, Copy)]
pub struct VariantRule {
    pub types: TypeMatch,
    pub length: LengthMatch,
    pub layout: &'static FieldLayout,
}

/// The ordered variant table for a device family
pub fn variants_for(family: DeviceFamily) -> &'static [VariantRule] {
    match family {
        DeviceFamily::Hinge555 => hinge555::VARIANTS,
        DeviceFamily::Hinge572 => hinge572::VARIANTS,
    }
}

/// Select the layout for (type byte, declared length), walking the family
/// table in order
///
/// Selection is total: `None` means the explicit Empty outcome, never an
/// undecided state.
pub fn select_variant(
    family: DeviceFamily,
    type_byte: &str,
    declared_len: usize,
) -> Option<&'static FieldLayout> {
    variants_for(family)
        .iter()
        .find(|rule| rule.types.matches(type_byte) && rule.length.matches(declared_len))
        .map(|rule| rule.layout)
}
