use crate::context::CastContext;
use crate::error::Result;
use crate::value::Value;

/// The wire format is a one-character flag: `t` is true, anything else is
/// false.
pub(crate) fn cast_boolean(raw: &[u8], _len: usize, _cx: &CastContext<'_>) -> Result<Value> {
    Ok(Value::Bool(raw.first() == Some(&b't')))
}
