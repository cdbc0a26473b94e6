use crate::context::CastContext;
use crate::error::Result;
use crate::value::Value;

/// Unescapes the bytea text representation through the context's unescape
/// collaborator. The bytes are copied into an owned buffer before the
/// collaborator's scratch buffer is released; the guard's drop releases it
/// on the error paths too.
pub(crate) fn cast_binary(raw: &[u8], _len: usize, cx: &CastContext<'_>) -> Result<Value> {
    let scratch = cx.unescape().unescape(raw)?;
    let bytes = scratch.as_bytes().to_vec();
    drop(scratch);

    Ok(Value::Bytes(bytes))
}
