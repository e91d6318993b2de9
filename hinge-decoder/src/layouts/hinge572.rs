//! Hinge572 variant tables
//!
//! Same conventions as the Hinge555 tables; the 572 adds air-height,
//! humidity and sudden-drop fields and drops the timestamp.

use super::{
    DecodeRule, FieldLayout, FieldSpec, LengthMatch, TokenRule, TypeMatch, VariantRule,
};

/// Type bytes that carry heartbeat/event payloads
const EVENT_TYPES: &[&str] = &["01", "02"];

/// Heartbeat / alarm without GPS, declared length 33 bytes
pub static HEARTBEAT: FieldLayout = FieldLayout {
    name: "Heartbeat",
    fields: &[
        FieldSpec { name: "liquidLevel", start: 10, end: 14, rule: DecodeRule::UInt },
        FieldSpec { name: "airHeight", start: 14, end: 18, rule: DecodeRule::UInt },
        FieldSpec { name: "gpsEnabled", start: 18, end: 20, rule: DecodeRule::UInt },
        FieldSpec { name: "temperature", start: 24, end: 26, rule: DecodeRule::UInt },
        FieldSpec { name: "humidity", start: 26, end: 28, rule: DecodeRule::UInt },
        FieldSpec { name: "levelAlarm", start: 28, end: 29, rule: DecodeRule::Flag },
        FieldSpec { name: "temperatureAlarm", start: 29, end: 30, rule: DecodeRule::Flag },
        FieldSpec { name: "batteryAlarm", start: 31, end: 32, rule: DecodeRule::Flag },
        FieldSpec { name: "volt", start: 32, end: 36, rule: DecodeRule::FixedPoint { divisor: 100 } },
        FieldSpec { name: "rsrp", start: 36, end: 44, rule: DecodeRule::Float32Truncated },
        FieldSpec { name: "frameCounter", start: 44, end: 48, rule: DecodeRule::UInt },
    ],
    token: TokenRule::Fixed { start: 49, end: 64 },
};

/// Event packet with GPS fix, declared length 41 bytes
pub static GPS_EVENT: FieldLayout = FieldLayout {
    name: "GpsEvent",
    fields: &[
        FieldSpec { name: "liquidLevel", start: 10, end: 14, rule: DecodeRule::UInt },
        FieldSpec { name: "airHeight", start: 14, end: 18, rule: DecodeRule::UInt },
        FieldSpec { name: "gpsEnabled", start: 18, end: 20, rule: DecodeRule::UInt },
        FieldSpec { name: "longitude", start: 20, end: 28, rule: DecodeRule::Float32Fixed6 },
        FieldSpec { name: "latitude", start: 28, end: 36, rule: DecodeRule::Float32Fixed6 },
        FieldSpec { name: "temperature", start: 40, end: 42, rule: DecodeRule::UInt },
        FieldSpec { name: "humidity", start: 42, end: 44, rule: DecodeRule::UInt },
        FieldSpec { name: "levelAlarm", start: 44, end: 45, rule: DecodeRule::Flag },
        FieldSpec { name: "temperatureAlarm", start: 45, end: 46, rule: DecodeRule::Flag },
        FieldSpec { name: "batteryAlarm", start: 47, end: 48, rule: DecodeRule::Flag },
        FieldSpec { name: "volt", start: 48, end: 52, rule: DecodeRule::FixedPoint { divisor: 100 } },
        FieldSpec { name: "rsrp", start: 52, end: 60, rule: DecodeRule::Float32Truncated },
        FieldSpec { name: "frameCounter", start: 60, end: 64, rule: DecodeRule::UInt },
    ],
    token: TokenRule::Fixed { start: 65, end: 80 },
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
        FieldSpec { name: "batteryThreshold", start: 24, end: 26, rule: DecodeRule::UInt },
        FieldSpec { name: "suddenDropAlarmSwitch", start: 44, end: 46, rule: DecodeRule::UInt },
        FieldSpec { name: "suddenDropAlarmThreshold", start: 46, end: 50, rule: DecodeRule::UInt },
        FieldSpec { name: "workMode", start: 50, end: 52, rule: DecodeRule::UInt },
    ],
    token: TokenRule::TailRelative,
};

/// Ordered variant table, first match wins
pub static VARIANTS: &[VariantRule] = &[
    VariantRule {
        types: TypeMatch::OneOf(EVENT_TYPES),
        length: LengthMatch::Exact(33),
        layout: &HEARTBEAT,
    },
    VariantRule {
        types: TypeMatch::OneOf(EVENT_TYPES),
        length: LengthMatch::Exact(41),
        layout: &GPS_EVENT,
    },
    VariantRule {
        types: TypeMatch::NotOneOf(EVENT_TYPES),
        length: LengthMatch::AtLeast(32),
        layout: &CONFIG_REPORT,
    },
];
