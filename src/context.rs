use chrono::FixedOffset;

use crate::bytea::{ByteaUnescape, TextUnescape};

/// Builds a fixed timezone from a signed offset in minutes east of UTC.
///
/// Returns `None` if the offset is out of range for a valid timezone.
pub type TzFactory = fn(i32) -> Option<FixedOffset>;

/// The default timezone factory: a plain [`FixedOffset`] east of UTC.
pub fn fixed_offset(minutes: i32) -> Option<FixedOffset> {
    FixedOffset::east_opt(minutes * 60)
}

static DEFAULT_UNESCAPE: TextUnescape = TextUnescape;

/// Per-statement context handed to every caster.
///
/// Carries the connection's server encoding name, the optional timezone
/// factory, and the bytea unescape collaborator. Whether temporal results
/// carry a timezone is controlled solely by the factory being present, not
/// by the wire text containing an offset.
#[derive(Clone, Copy)]
pub struct CastContext<'a> {
    encoding: &'a str,
    tzinfo_factory: Option<TzFactory>,
    unescape: &'a dyn ByteaUnescape,
}

impl<'a> CastContext<'a> {
    /// Creates a context for a statement whose connection reports `encoding`.
    ///
    /// No timezone factory is configured; temporal values parse any offset
    /// present in the wire text but discard it.
    pub fn new(encoding: &'a str) -> Self {
        Self {
            encoding,
            tzinfo_factory: None,
            unescape: &DEFAULT_UNESCAPE,
        }
    }

    pub fn with_tzinfo_factory(mut self, factory: TzFactory) -> Self {
        self.tzinfo_factory = Some(factory);
        self
    }

    pub fn with_unescape(mut self, unescape: &'a dyn ByteaUnescape) -> Self {
        self.unescape = unescape;
        self
    }

    /// The server-reported encoding name, e.g. `UTF8`.
    pub fn encoding(&self) -> &str {
        self.encoding
    }

    pub fn tzinfo_factory(&self) -> Option<TzFactory> {
        self.tzinfo_factory
    }

    pub fn unescape(&self) -> &dyn ByteaUnescape {
        self.unescape
    }
}

impl std::fmt::Debug for CastContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CastContext")
            .field("encoding", &self.encoding)
            .field("tzinfo_factory", &self.tzinfo_factory.is_some())
            .finish_non_exhaustive()
    }
}
