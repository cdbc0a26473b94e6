use crate::context::CastContext;
use crate::error::{Error, Result};
use crate::types::utf8;
use crate::value::Value;

pub(crate) fn cast_integer(raw: &[u8], _len: usize, _cx: &CastContext<'_>) -> Result<Value> {
    utf8(raw, "INTEGER")?
        .parse::<i64>()
        .map(Value::Int)
        .map_err(|e| Error::invalid_literal("INTEGER", e))
}

#[cfg(test)]
mod tests {
    use super::cast_integer;
    use crate::context::CastContext;
    use crate::value::Value;

    #[test]
    fn parses_signed_integers() {
        let cx = CastContext::new("UTF8");

        assert_eq!(cast_integer(b"42", 2, &cx).unwrap(), Value::Int(42));
        assert_eq!(cast_integer(b"-7", 2, &cx).unwrap(), Value::Int(-7));
        assert_eq!(
            cast_integer(b"9223372036854775807", 19, &cx).unwrap(),
            Value::Int(i64::MAX)
        );
    }

    #[test]
    fn rejects_non_numeric_text() {
        let cx = CastContext::new("UTF8");
        assert!(cast_integer(b"forty-two", 9, &cx).is_err());
        assert!(cast_integer(b"", 0, &cx).is_err());
    }
}
