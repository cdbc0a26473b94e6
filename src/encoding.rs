//! Mapping from server-reported encoding names to text encodings.

use encoding_rs::Encoding;

use crate::error::{Error, Result};

/// Resolves a server encoding name (as reported by `client_encoding`) to a
/// text encoding.
///
/// Only the encodings with a stable, well-known mapping are recognized;
/// anything else fails with [`Error::UnknownEncoding`].
pub fn for_server_encoding(name: &str) -> Result<&'static Encoding> {
    let label = match name {
        "UNICODE" | "UTF8" => "utf-8",
        "LATIN1" => "ISO-8859-1",
        "LATIN2" => "ISO-8859-2",
        "LATIN3" => "ISO-8859-3",
        "LATIN4" => "ISO-8859-4",
        "LATIN5" => "ISO-8859-9",
        "LATIN6" => "ISO-8859-10",
        "LATIN7" => "ISO-8859-13",
        "LATIN8" => "ISO-8859-14",
        "LATIN9" => "ISO-8859-15",
        "LATIN10" => "ISO-8859-16",
        _ => return Err(Error::UnknownEncoding(name.to_owned())),
    };

    Encoding::for_label(label.as_bytes()).ok_or_else(|| Error::UnknownEncoding(name.to_owned()))
}
