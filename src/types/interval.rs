//! Interval text grammar.
//!
//! The wire format is a human-readable duration like
//! `1 year 2 mons 3 days 04:05:06.7`, with components optionally signed and
//! optionally omitted. Parsing is a single left-to-right scan; characters
//! that match no recognized unit are skipped silently, which is historical
//! leniency to keep, not tighten.

use crate::context::CastContext;
use crate::error::Result;
use crate::types::utf8;
use crate::value::{PgInterval, Value};

// Field currently being accumulated. Years through days are closed out by
// their unit letter; colons advance hours -> minutes -> seconds and a dot
// begins fractional seconds.
const YEARS: u8 = 0;
const MONTHS: u8 = 1;
const DAYS: u8 = 2;
const HOURS: u8 = 3;
const MINUTES: u8 = 4;
const SECONDS: u8 = 5;
const FRACTION: u8 = 6;

pub(crate) fn cast_interval(raw: &[u8], _len: usize, _cx: &CastContext<'_>) -> Result<Value> {
    let s = utf8(raw, "INTERVAL")?;

    let mut years = 0i64;
    let mut months = 0i64;
    let mut days = 0i64;
    let mut hours = 0f64;
    let mut minutes = 0f64;
    let mut seconds = 0f64;
    let mut fraction = 0f64;

    let mut v = 0f64;
    let mut sign = 1i64;
    let mut denominator = 1f64;
    let mut part = YEARS;
    let mut skip_to_space = false;

    for c in s.chars() {
        if skip_to_space {
            // Discard the rest of a unit token, e.g. the `ears` of `years`.
            if c == ' ' {
                skip_to_space = false;
            }
            continue;
        }

        match c {
            '-' => sign = -1,
            '0'..='9' => {
                v = v * 10.0 + f64::from(c as u32 - '0' as u32);
                if part == FRACTION {
                    denominator *= 10.0;
                }
            }
            'y' if part == YEARS => {
                years = (v * sign as f64) as i64;
                v = 0.0;
                sign = 1;
                part = MONTHS;
                skip_to_space = true;
            }
            'm' if part <= MONTHS => {
                months = (v * sign as f64) as i64;
                v = 0.0;
                sign = 1;
                part = DAYS;
                skip_to_space = true;
            }
            'd' if part <= DAYS => {
                days = (v * sign as f64) as i64;
                v = 0.0;
                sign = 1;
                part = HOURS;
                skip_to_space = true;
            }
            ':' if part <= HOURS => {
                hours = v;
                v = 0.0;
                part = MINUTES;
            }
            ':' if part == MINUTES => {
                minutes = v;
                v = 0.0;
                part = SECONDS;
            }
            '.' if part == SECONDS => {
                seconds = v;
                v = 0.0;
                part = FRACTION;
            }
            _ => {}
        }
    }

    match part {
        MINUTES => minutes = v,
        SECONDS => seconds = v,
        FRACTION => fraction = v / denominator,
        _ => {}
    }

    // A leading minus on the clock portion negates the whole of it.
    let total = if sign < 0 {
        -(fraction + seconds + minutes * 60.0 + hours * 3600.0)
    } else {
        seconds + fraction + minutes * 60.0 + hours * 3600.0
    };

    let days = days + years * 365 + months * 30;
    let micro = (total - total.floor()) * 1_000_000.0;
    let seconds = total.floor() as i64;

    Ok(Value::Interval(PgInterval {
        days,
        seconds,
        microseconds: micro.round() as i64,
    }))
}

#[cfg(test)]
mod tests {
    use super::cast_interval;
    use crate::context::CastContext;
    use crate::value::{PgInterval, Value};

    fn interval(s: &str) -> PgInterval {
        let cx = CastContext::new("UTF8");
        match cast_interval(s.as_bytes(), s.len(), &cx).unwrap() {
            Value::Interval(interval) => interval,
            other => panic!("expected Interval, got {other:?}"),
        }
    }

    #[test]
    fn full_form() {
        assert_eq!(
            interval("1 year 2 mons 3 days 04:05:06.7"),
            PgInterval {
                days: 365 + 60 + 3,
                seconds: 4 * 3600 + 5 * 60 + 6,
                microseconds: 700_000,
            }
        );
    }

    #[test]
    fn clock_only() {
        assert_eq!(
            interval("04:05:06"),
            PgInterval {
                days: 0,
                seconds: 4 * 3600 + 5 * 60 + 6,
                microseconds: 0,
            }
        );
    }

    #[test]
    fn hours_minutes_only() {
        assert_eq!(
            interval("01:30"),
            PgInterval {
                days: 0,
                seconds: 3600 + 30 * 60,
                microseconds: 0,
            }
        );
    }

    #[test]
    fn negative_components() {
        assert_eq!(
            interval("-1 days -02:03:04"),
            PgInterval {
                days: -1,
                seconds: -(2 * 3600 + 3 * 60 + 4),
                microseconds: 0,
            }
        );
    }

    #[test]
    fn negative_fraction_floors() {
        // -0.5s is one whole second down plus half a second back up.
        assert_eq!(
            interval("-00:00:00.5"),
            PgInterval {
                days: 0,
                seconds: -1,
                microseconds: 500_000,
            }
        );
    }

    #[test]
    fn plural_and_singular_units() {
        assert_eq!(interval("2 years"), interval("2 year"));
        assert_eq!(interval("1 mon").days, 30);
        assert_eq!(interval("2 mons").days, 60);
    }

    #[test]
    fn unrecognized_text_is_skipped() {
        // Leniency preserved from the wire format's historical handling.
        assert_eq!(
            interval("@ 3 days"),
            PgInterval {
                days: 3,
                seconds: 0,
                microseconds: 0,
            }
        );
    }
}
