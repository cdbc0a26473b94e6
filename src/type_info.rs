use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::context::CastContext;
use crate::error::Result;
use crate::types::array;
use crate::value::Value;

/// Signature of a built-in caster: raw bytes, declared length, context.
pub type SimpleCaster = fn(&[u8], usize, &CastContext<'_>) -> Result<Value>;

/// Signature of an adapter caster registered by configuration code.
///
/// Receives the raw bytes and the context; the declared length is not
/// passed, matching the "value caster" form.
pub(crate) type AdapterCaster = Arc<dyn Fn(&[u8], &CastContext<'_>) -> Result<Value> + Send + Sync>;

/// How a [`PgType`] turns wire text into a [`Value`].
pub(crate) enum Caster {
    Simple(SimpleCaster),
    Adapter(AdapterCaster),
    /// Array literal parser. The element type is carried here and threaded
    /// down the recursive decode, so there is no ambient "currently active
    /// caster" state to corrupt on nested casts.
    Array { element: Arc<PgType> },
}

/// A named binding from a set of wire type OIDs to a casting function.
///
/// Immutable once constructed; shared between registry scopes via `Arc`.
pub struct PgType {
    name: Cow<'static, str>,
    oids: Vec<u32>,
    caster: Caster,
}

impl PgType {
    /// Builds a custom type from an adapter function.
    ///
    /// This is the configuration-boundary constructor: `oids` is the set of
    /// wire identifiers the type claims when registered.
    pub fn new(
        oids: impl Into<Vec<u32>>,
        name: impl Into<Cow<'static, str>>,
        adapter: impl Fn(&[u8], &CastContext<'_>) -> Result<Value> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            oids: oids.into(),
            caster: Caster::Adapter(Arc::new(adapter)),
        })
    }

    /// Builds an array type whose leaf elements are cast with `element`.
    pub fn new_array(
        oids: impl Into<Vec<u32>>,
        name: impl Into<Cow<'static, str>>,
        element: Arc<PgType>,
    ) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            oids: oids.into(),
            caster: Caster::Array { element },
        })
    }

    pub(crate) fn simple(
        oids: Vec<u32>,
        name: &'static str,
        caster: SimpleCaster,
    ) -> Arc<Self> {
        Arc::new(Self {
            name: Cow::Borrowed(name),
            oids,
            caster: Caster::Simple(caster),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The wire identifiers this type claims on registration.
    pub fn oids(&self) -> &[u32] {
        &self.oids
    }

    /// Casts one raw column value.
    pub fn cast(&self, raw: &[u8], len: usize, cx: &CastContext<'_>) -> Result<Value> {
        match &self.caster {
            Caster::Simple(f) => f(raw, len, cx),
            Caster::Adapter(f) => f(raw, cx),
            Caster::Array { element } => array::cast_array(raw, element, cx),
        }
    }
}

/// A type matches a raw identifier iff the identifier is in its OID set.
impl PartialEq<u32> for PgType {
    fn eq(&self, oid: &u32) -> bool {
        self.oids.contains(oid)
    }
}

impl fmt::Debug for PgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgType")
            .field("name", &self.name)
            .field("oids", &self.oids)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::PgType;
    use crate::context::CastContext;
    use crate::value::Value;

    #[test]
    fn equality_is_oid_membership() {
        let ty = PgType::new(vec![2950], "UUID", |raw, _cx| {
            Ok(Value::Text(String::from_utf8_lossy(raw).into_owned()))
        });

        assert_eq!(*ty, 2950);
        assert_ne!(*ty, 16);
    }

    #[test]
    fn adapter_ignores_length() {
        let ty = PgType::new(vec![99], "UPPER", |raw, _cx| {
            Ok(Value::Text(
                String::from_utf8_lossy(raw).to_uppercase(),
            ))
        });

        let cx = CastContext::new("UTF8");
        let value = ty.cast(b"abc", 0, &cx).unwrap();
        assert_eq!(value, Value::Text("ABC".into()));
    }
}
