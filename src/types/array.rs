//! Array literal parser.
//!
//! A recursive-descent scan over the braced literal. Leaf elements are cast
//! with the element type passed in by the caller, so nested casts never go
//! through shared mutable state.

use std::sync::Arc;

use crate::context::CastContext;
use crate::error::{Error, Result};
use crate::type_info::PgType;
use crate::value::Value;

pub(crate) fn cast_array(raw: &[u8], element: &Arc<PgType>, cx: &CastContext<'_>) -> Result<Value> {
    let s = raw;
    if s.len() < 2 || s[0] != b'{' || s[s.len() - 1] != b'}' {
        return Err(Error::invalid_literal(
            "ARRAY",
            "expected a literal wrapped in braces",
        ));
    }

    // Stack of open sequences; index 0 is the outermost array. The scan
    // covers everything between the outer braces.
    let mut stack: Vec<Vec<Value>> = vec![Vec::new()];
    let end = s.len() - 1;
    let mut i = 1;

    while i < end {
        match s[i] {
            b'{' => {
                stack.push(Vec::new());
                i += 1;
            }
            b'}' => {
                if stack.len() > 1 {
                    let sub = stack.pop().unwrap_or_default();
                    if let Some(parent) = stack.last_mut() {
                        parent.push(Value::Array(sub));
                    }
                }
                i += 1;
            }
            b',' => i += 1,
            _ => {
                let start = i;

                // Find the element's terminator: an unquoted, unescaped `,`
                // or `}`. Quoting is tracked by parity; `b` is set while the
                // previous character was an escaping backslash.
                let mut q = 0usize;
                let mut b = false;
                while i < end {
                    match s[i] {
                        b'"' => {
                            if !b {
                                q += 1;
                            }
                            b = false;
                        }
                        b'\\' => b = !b,
                        b'}' | b',' => {
                            if !b && q % 2 == 0 {
                                break;
                            }
                            b = false;
                        }
                        _ => b = false,
                    }
                    i += 1;
                }

                // Quoted elements lose their surrounding quotes; backslash
                // escapes collapse either way.
                let (start, elem_end) = if q > 0 { (start + 1, i - 1) } else { (start, i) };

                let mut literal = Vec::with_capacity(elem_end.saturating_sub(start));
                for j in start..elem_end {
                    if s[j] != b'\\' || s[j - 1] == b'\\' {
                        literal.push(s[j]);
                    }
                }

                let value = element.cast(&literal, literal.len(), cx)?;
                if let Some(current) = stack.last_mut() {
                    current.push(value);
                }
            }
        }
    }

    // Fold unclosed sub-sequences back into their parents; the bottom of
    // the stack is the result.
    let mut bottom = stack.pop().unwrap_or_default();
    while let Some(mut parent) = stack.pop() {
        parent.push(Value::Array(bottom));
        bottom = parent;
    }

    Ok(Value::Array(bottom))
}
