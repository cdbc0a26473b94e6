use crate::context::CastContext;
use crate::error::{Error, Result};
use crate::types::utf8;
use crate::value::Value;

pub(crate) fn cast_float(raw: &[u8], _len: usize, _cx: &CastContext<'_>) -> Result<Value> {
    utf8(raw, "FLOAT")?
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|e| Error::invalid_literal("FLOAT", e))
}
