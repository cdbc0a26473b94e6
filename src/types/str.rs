use crate::context::CastContext;
use crate::encoding;
use crate::error::{Error, Result};
use crate::value::Value;

/// Pass-through caster: returns the wire text unchanged. Doubles as the
/// sentinel behavior for OIDs no scope has claimed, so it never fails;
/// bytes that are not valid UTF-8 are replaced rather than rejected.
pub(crate) fn cast_string(raw: &[u8], _len: usize, _cx: &CastContext<'_>) -> Result<Value> {
    Ok(Value::Text(String::from_utf8_lossy(raw).into_owned()))
}

/// Decodes through the connection's declared server encoding.
pub(crate) fn cast_unicode(raw: &[u8], _len: usize, cx: &CastContext<'_>) -> Result<Value> {
    let encoding = encoding::for_server_encoding(cx.encoding())?;
    let (decoded, _, had_errors) = encoding.decode(raw);

    if had_errors {
        return Err(Error::invalid_literal(
            "UNICODE",
            format_args!("malformed {} bytes", cx.encoding()),
        ));
    }

    Ok(Value::Text(decoded.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::{cast_string, cast_unicode};
    use crate::context::CastContext;
    use crate::error::Error;
    use crate::value::Value;

    #[test]
    fn string_passes_through() {
        let cx = CastContext::new("UTF8");
        let value = cast_string(b"hello", 5, &cx).unwrap();
        assert_eq!(value, Value::Text("hello".into()));
    }

    #[test]
    fn unicode_decodes_latin1() {
        let cx = CastContext::new("LATIN1");
        let value = cast_unicode(b"caf\xe9", 4, &cx).unwrap();
        assert_eq!(value, Value::Text("café".into()));
    }

    #[test]
    fn unicode_rejects_malformed_utf8() {
        let cx = CastContext::new("UTF8");
        assert!(cast_unicode(b"\xff\xfe", 2, &cx).is_err());
    }

    #[test]
    fn unicode_rejects_unknown_encoding() {
        let cx = CastContext::new("KLINGON");
        assert!(matches!(
            cast_unicode(b"x", 1, &cx),
            Err(Error::UnknownEncoding(_))
        ));
    }
}
