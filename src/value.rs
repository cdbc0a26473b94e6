use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

/// A single decoded result value.
///
/// Arrays nest arbitrarily, mirroring the bracket structure of the wire
/// literal they were parsed from.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Numeric(BigDecimal),
    Bytes(Vec<u8>),
    Date(NaiveDate),
    Time(NaiveTime),
    TimeTz(NaiveTime, FixedOffset),
    Timestamp(NaiveDateTime),
    TimestampTz(DateTime<FixedOffset>),
    Interval(PgInterval),
    Array(Vec<Value>),
}

impl Value {
    /// Returns the contained text, if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the contained elements, if this is an `Array` value.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(elements) => Some(elements),
            _ => None,
        }
    }
}

/// PostgreSQL INTERVAL, normalized to whole days, whole seconds and
/// microseconds.
///
/// Years and months are folded into days at 365 and 30 days respectively.
/// This is an approximation carried over from the wire format's historical
/// handling, not a calendar-accurate conversion.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PgInterval {
    pub days: i64,
    pub seconds: i64,
    pub microseconds: i64,
}
