//! Hinge555 variant tables
//!
//! Field offsets are character positions in the hex frame, transcribed from
//! the vendor field maps. They have no independent protocol document; the
//! golden-sample integration tests anchor them.

use super::{
    DecodeRule, FieldLayout, FieldSpec, LengthMatch, TokenRule, TypeMatch, VariantRule,
};

/// Type bytes that carry heartbeat/event payloads
const EVENT_TYPES: &[&str] = &["01", "02"];

/// Heartbeat / alarm without GPS, declared length 34 bytes
pub static HEARTBEAT: FieldLayout = FieldLayout {
    name: "Heartbeat",
    fields: &[
        FieldSpec { name: "height", start: 10, end: 14, rule: DecodeRule::UInt },
        FieldSpec { name: "gpsEnabled", start: 14, end: 16, rule: DecodeRule::UInt },
        FieldSpec { name: "emptyAlarm", start: 22, end: 23, rule: DecodeRule::Flag },
        FieldSpec { name: "batteryAlarm", start: 25, end: 26, rule: DecodeRule::Flag },
        FieldSpec { name: "volt", start: 26, end: 30, rule: DecodeRule::FixedPoint { divisor: 100 } },
        FieldSpec { name: "rsrp", start: 30, end: 38, rule: DecodeRule::Float32Truncated },
        FieldSpec { name: "frameCounter", start: 38, end: 42, rule: DecodeRule::UInt },
        FieldSpec { name: "timeStamp", start: 42, end: 50, rule: DecodeRule::UInt },
    ],
    token: TokenRule::Fixed { start: 51, end: 66 },
};

/// Event packet with GPS fix, declared length 42 bytes
pub static GPS_EVENT: FieldLayout = FieldLayout {
    name: "GpsEvent",
    fields: &[
        FieldSpec { name: "height", start: 10, end: 14, rule: DecodeRule::UInt },
        FieldSpec { name: "gpsEnabled", start: 14, end: 16, rule: DecodeRule::UInt },
        FieldSpec { name: "longitude", start: 16, end: 24, rule: DecodeRule::Float32Fixed6 },
        FieldSpec { name: "latitude", start: 24, end: 32, rule: DecodeRule::Float32Fixed6 },
        FieldSpec { name: "temperature", start: 32, end: 34, rule: DecodeRule::UInt },
        FieldSpec { name: "heightAlarm", start: 38, end: 39, rule: DecodeRule::Flag },
        FieldSpec { name: "batteryAlarm", start: 41, end: 42, rule: DecodeRule::Flag },
        FieldSpec { name: "volt", start: 42, end: 46, rule: DecodeRule::FixedPoint { divisor: 100 } },
        FieldSpec { name: "rsrp", start: 46, end: 54, rule: DecodeRule::Float32Truncated },
        FieldSpec { name: "frameCounter", start: 54, end: 58, rule: DecodeRule::UInt },
        FieldSpec { name: "timeStamp", start: 58, end: 66, rule: DecodeRule::UInt },
    ],
    token: TokenRule::Fixed { start: 67, end: 82 },
};

/// Configuration report, any non-event type of at least 32 bytes
pub static CONFIG_REPORT: FieldLayout = FieldLayout {
    name: "ConfigReport",
    fields: &[
        FieldSpec { name: "firmwareVersion", start: 10, end: 14, rule: DecodeRule::FirmwareVersion },
        FieldSpec { name: "uploadInterval", start: 14, end: 16, rule: DecodeRule::UInt },
        FieldSpec { name: "detectInterval", start: 16, end: 18, rule: DecodeRule::UInt },
        FieldSpec { name: "heightThreshold", start: 18, end: 20, rule: DecodeRule::UInt },
        FieldSpec { name: "temperatureThreshold", start: 20, end: 22, rule: DecodeRule::UInt },
        FieldSpec { name: "imsi", start: 25, end: 40, rule: DecodeRule::Ascii },
        FieldSpec { name: "workMode", start: 44, end: 46, rule: DecodeRule::UInt },
    ],
    token: TokenRule::TailRelative,
};

/// Ordered variant table, first match wins
pub static VARIANTS: &[VariantRule] = &[
    VariantRule {
        types: TypeMatch::OneOf(EVENT_TYPES),
        length: LengthMatch::Exact(34),
        layout: &HEARTBEAT,
    },
    VariantRule {
        types: TypeMatch::OneOf(EVENT_TYPES),
        length: LengthMatch::Exact(42),
        layout: &GPS_EVENT,
    },
    VariantRule {
        types: TypeMatch::NotOneOf(EVENT_TYPES),
        length: LengthMatch::AtLeast(32),
        layout: &CONFIG_REPORT,
    },
];
