use bigdecimal::BigDecimal;

use crate::context::CastContext;
use crate::error::{Error, Result};
use crate::types::utf8;
use crate::value::Value;

pub(crate) fn cast_decimal(raw: &[u8], _len: usize, _cx: &CastContext<'_>) -> Result<Value> {
    utf8(raw, "DECIMAL")?
        .parse::<BigDecimal>()
        .map(Value::Numeric)
        .map_err(|e| Error::invalid_literal("DECIMAL", e))
}
