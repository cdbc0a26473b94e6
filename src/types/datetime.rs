//! Date, time and timestamp text grammars.
//!
//! Date is `YYYY-MM-DD`. Time is `HH:MM:SS[.ffffff][{+|-}TZ[:TZ[:TZ]]]`.
//! Timestamp is the two joined by a single space.
//!
//! An offset present in the wire text is always parsed, to isolate the time
//! portion correctly, but it only ends up on the result when the context
//! carries a timezone factory. That asymmetry is deliberate and load-bearing:
//! zone-awareness is a property of the configuration, not of the text.

use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone};
use memchr::memchr;

use crate::context::CastContext;
use crate::error::{Error, Result};
use crate::types::utf8;
use crate::value::Value;

pub(crate) fn cast_date(raw: &[u8], _len: usize, _cx: &CastContext<'_>) -> Result<Value> {
    Ok(Value::Date(parse_date(utf8(raw, "DATE")?)?))
}

pub(crate) fn cast_time(raw: &[u8], _len: usize, cx: &CastContext<'_>) -> Result<Value> {
    let (time, offset) = parse_time(utf8(raw, "TIME")?, cx)?;

    Ok(match offset {
        Some(offset) => Value::TimeTz(time, offset),
        None => Value::Time(time),
    })
}

pub(crate) fn cast_datetime(raw: &[u8], _len: usize, cx: &CastContext<'_>) -> Result<Value> {
    let s = utf8(raw, "DATETIME")?;

    let space = memchr(b' ', s.as_bytes())
        .ok_or_else(|| Error::invalid_literal("DATETIME", "expected `<date> <time>`"))?;
    let (date, time) = (&s[..space], &s[space + 1..]);
    if time.contains(' ') {
        return Err(Error::invalid_literal("DATETIME", "expected a single space"));
    }

    let date = parse_date(date)?;
    let (time, offset) = parse_time(time, cx)?;
    let naive = date.and_time(time);

    Ok(match offset {
        Some(offset) => {
            let aware = offset.from_local_datetime(&naive).single().ok_or_else(|| {
                Error::invalid_literal("DATETIME", "timestamp out of range for offset")
            })?;
            Value::TimestampTz(aware)
        }
        None => Value::Timestamp(naive),
    })
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    let mut fields = s.split('-');
    let (year, month, day) = match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(y), Some(m), Some(d), None) => (
            int_field(y, "DATE")?,
            int_field(m, "DATE")?,
            int_field(d, "DATE")?,
        ),
        _ => {
            return Err(Error::invalid_literal(
                "DATE",
                format_args!("expected YYYY-MM-DD, got {s:?}"),
            ))
        }
    };

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .ok_or_else(|| Error::invalid_literal("DATE", format_args!("no such date: {s:?}")))
}

/// Parses the time portion. The offset, if any, is returned only when the
/// context has a timezone factory configured.
fn parse_time(s: &str, cx: &CastContext<'_>) -> Result<(NaiveTime, Option<FixedOffset>)> {
    let mut fields = s.splitn(3, ':');
    let (hour, minute, mut rest) = match (fields.next(), fields.next(), fields.next()) {
        (Some(h), Some(m), Some(rest)) => (h, m, rest),
        _ => {
            return Err(Error::invalid_literal(
                "TIME",
                format_args!("expected HH:MM:SS, got {s:?}"),
            ))
        }
    };

    // Split the offset off the seconds field. The sign byte decides the
    // offset's direction; the fraction, if any, stays with the seconds.
    let mut sign = 0i32;
    let mut zone = None;
    if let Some(at) = rest.find('-') {
        sign = -1;
        zone = Some(&rest[at + 1..]);
        rest = &rest[..at];
    } else if let Some(at) = rest.find('+') {
        sign = 1;
        zone = Some(&rest[at + 1..]);
        rest = &rest[..at];
    }

    let mut offset = None;
    if let (Some(factory), Some(zone), true) = (cx.tzinfo_factory(), zone, sign != 0) {
        // Hours carry the sign; minute and second components are added as
        // given, and seconds contribute truncated to whole minutes.
        let mut tz_min = 0i32;
        for (i, part) in zone.split(':').enumerate().take(3) {
            let n = int_field(part, "TIME")?;
            tz_min += match i {
                0 => sign * 60 * n,
                1 => n,
                _ => n / 60,
            };
        }

        offset = Some(factory(tz_min).ok_or_else(|| {
            Error::invalid_literal(
                "TIME",
                format_args!("timezone offset out of range: {tz_min} minutes"),
            )
        })?);
    }

    let (second, microsecond) = match rest.split_once('.') {
        Some((second, frac)) => (second, parse_fraction(frac)?),
        None => (rest, 0),
    };

    let time = NaiveTime::from_hms_micro_opt(
        int_field(hour, "TIME")? as u32,
        int_field(minute, "TIME")? as u32,
        int_field(second, "TIME")? as u32,
        microsecond,
    )
    .ok_or_else(|| Error::invalid_literal("TIME", format_args!("no such time: {s:?}")))?;

    Ok((time, offset))
}

/// A fraction with k digits contributes `frac * 10^(6-k)` microseconds.
/// More than six digits is not produced by this wire format.
fn parse_fraction(frac: &str) -> Result<u32> {
    if frac.is_empty() || frac.len() > 6 {
        return Err(Error::invalid_literal(
            "TIME",
            format_args!("unsupported fractional seconds: .{frac}"),
        ));
    }

    let value = frac
        .parse::<u32>()
        .map_err(|e| Error::invalid_literal("TIME", e))?;

    Ok(value * 10u32.pow((6 - frac.len()) as u32))
}

fn int_field(s: &str, type_name: &'static str) -> Result<i32> {
    s.parse::<i32>()
        .map_err(|_| Error::invalid_literal(type_name, format_args!("expected a number, got {s:?}")))
}
