//! Boundary with the native client library's bytea unescape primitive.
//!
//! The binary caster consumes one collaborator: something that turns the
//! server's escaped bytea text into raw octets. Modeled after the libpq
//! `PQunescapeBytea`/`PQfreemem` pairing, where the unescaped bytes live in
//! a scratch buffer that must be released exactly once after the caller has
//! copied what it needs out of it. Here the release is tied to [`ScratchBuf`]
//! dropping, so it happens on every exit path.

use crate::error::{Error, Result};

/// Unescapes the database's escaped bytea text representation.
pub trait ByteaUnescape: Send + Sync {
    fn unescape(&self, escaped: &[u8]) -> Result<ScratchBuf>;
}

/// Scratch buffer returned by [`ByteaUnescape::unescape`].
///
/// If a release hook is attached, it runs exactly once, when the buffer is
/// dropped. Callers must copy the bytes they need before letting go.
pub struct ScratchBuf {
    bytes: Vec<u8>,
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl ScratchBuf {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            release: None,
        }
    }

    /// Attaches a release hook, invoked exactly once on drop.
    pub fn with_release(bytes: Vec<u8>, release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            bytes,
            release: Some(Box::new(release)),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Drop for ScratchBuf {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Default collaborator: pure-Rust unescape of both bytea text forms.
///
/// Accepts the hex form (`\x` followed by hex digits) and the escape form
/// (`\\` for a backslash, `\nnn` octal for everything else non-printable).
#[derive(Debug, Clone, Copy, Default)]
pub struct TextUnescape;

impl ByteaUnescape for TextUnescape {
    fn unescape(&self, escaped: &[u8]) -> Result<ScratchBuf> {
        if let Some(digits) = escaped.strip_prefix(b"\\x") {
            let bytes = hex::decode(digits).map_err(|e| Error::invalid_literal("BINARY", e))?;
            return Ok(ScratchBuf::new(bytes));
        }

        let mut out = Vec::with_capacity(escaped.len());
        let mut i = 0;

        while i < escaped.len() {
            if escaped[i] != b'\\' {
                out.push(escaped[i]);
                i += 1;
            } else if escaped.get(i + 1) == Some(&b'\\') {
                out.push(b'\\');
                i += 2;
            } else if i + 3 < escaped.len() && escaped[i + 1..i + 4].iter().all(u8::is_ascii_digit)
            {
                let octal = &escaped[i + 1..i + 4];
                let mut value = 0u32;
                for &digit in octal {
                    if digit > b'7' {
                        return Err(Error::invalid_literal("BINARY", "invalid octal escape"));
                    }
                    value = value * 8 + u32::from(digit - b'0');
                }
                if value > 0xFF {
                    return Err(Error::invalid_literal("BINARY", "octal escape out of range"));
                }
                out.push(value as u8);
                i += 4;
            } else {
                return Err(Error::invalid_literal("BINARY", "truncated escape sequence"));
            }
        }

        Ok(ScratchBuf::new(out))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::{ByteaUnescape, ScratchBuf, TextUnescape};

    #[test]
    fn hex_form() {
        let buf = TextUnescape.unescape(b"\\x00ff41").unwrap();
        assert_eq!(buf.as_bytes(), &[0x00, 0xFF, 0x41]);
    }

    #[test]
    fn escape_form() {
        let buf = TextUnescape.unescape(b"a\\\\b\\001").unwrap();
        assert_eq!(buf.as_bytes(), b"a\\b\x01");
    }

    #[test]
    fn hex_and_octal_forms_agree() {
        let hex = TextUnescape.unescape(b"\\x6162ff").unwrap();
        let octal = TextUnescape.unescape(b"ab\\377").unwrap();
        assert_eq!(hex.as_bytes(), octal.as_bytes());
    }

    #[test]
    fn truncated_escape_is_an_error() {
        assert!(TextUnescape.unescape(b"abc\\0").is_err());
    }

    #[test]
    fn release_runs_exactly_once() {
        let released = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&released);
        let buf = ScratchBuf::with_release(vec![1, 2, 3], move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(released.load(Ordering::SeqCst), 0);
        drop(buf);
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }
}
