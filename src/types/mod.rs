//! Built-in casters and the default type table.
//!
//! Each caster is a pure function from one textual wire value to one
//! [`Value`](crate::Value). The table assembled here populates the global
//! tier of [`TypeRegistry::new`](crate::TypeRegistry::new); the same
//! `PgType` handles can be re-registered at narrower scopes.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::{Error, Result};
use crate::type_info::PgType;

pub(crate) mod array;
mod bool;
mod bytes;
mod datetime;
mod float;
mod int;
mod interval;
mod numeric;
mod str;

/// Decodes caster input as UTF-8, failing with an `InvalidLiteral` for the
/// named type. The numeric and temporal wire grammars are all ASCII.
pub(crate) fn utf8<'a>(raw: &'a [u8], type_name: &'static str) -> Result<&'a str> {
    std::str::from_utf8(raw).map_err(|e| Error::invalid_literal(type_name, e))
}

static BUILTINS: Lazy<Vec<Arc<PgType>>> = Lazy::new(|| {
    use crate::type_id::*;

    let boolean = PgType::simple(vec![BOOL], "BOOLEAN", self::bool::cast_boolean);
    let integer = PgType::simple(vec![INT2, INT4], "INTEGER", int::cast_integer);
    let longinteger = PgType::simple(vec![INT8, OID], "LONGINTEGER", int::cast_integer);
    let float = PgType::simple(vec![FLOAT4, FLOAT8], "FLOAT", float::cast_float);
    let decimal = PgType::simple(vec![NUMERIC], "DECIMAL", numeric::cast_decimal);
    let string = PgType::simple(
        vec![TEXT, NAME, BPCHAR, VARCHAR, UNKNOWN],
        "STRING",
        self::str::cast_string,
    );
    let binary = PgType::simple(vec![BYTEA], "BINARY", bytes::cast_binary);
    let date = PgType::simple(vec![DATE], "DATE", datetime::cast_date);
    let time = PgType::simple(vec![TIME, TIMETZ], "TIME", datetime::cast_time);
    let dt = PgType::simple(vec![TIMESTAMP, TIMESTAMPTZ], "DATETIME", datetime::cast_datetime);
    let interval = PgType::simple(vec![INTERVAL], "INTERVAL", interval::cast_interval);

    vec![
        PgType::new_array(vec![ARRAY_BOOL], "BOOLEANARRAY", Arc::clone(&boolean)),
        PgType::new_array(
            vec![ARRAY_INT2, ARRAY_INT4],
            "INTEGERARRAY",
            Arc::clone(&integer),
        ),
        PgType::new_array(vec![ARRAY_INT8], "LONGINTEGERARRAY", Arc::clone(&longinteger)),
        PgType::new_array(
            vec![ARRAY_FLOAT4, ARRAY_FLOAT8],
            "FLOATARRAY",
            Arc::clone(&float),
        ),
        PgType::new_array(vec![ARRAY_NUMERIC], "DECIMALARRAY", Arc::clone(&decimal)),
        PgType::new_array(
            vec![ARRAY_TEXT, ARRAY_NAME, ARRAY_BPCHAR, ARRAY_VARCHAR],
            "STRINGARRAY",
            Arc::clone(&string),
        ),
        PgType::new_array(vec![ARRAY_BYTEA], "BINARYARRAY", Arc::clone(&binary)),
        PgType::new_array(vec![ARRAY_DATE], "DATEARRAY", Arc::clone(&date)),
        PgType::new_array(vec![ARRAY_TIME, ARRAY_TIMETZ], "TIMEARRAY", Arc::clone(&time)),
        PgType::new_array(
            vec![ARRAY_TIMESTAMP, ARRAY_TIMESTAMPTZ],
            "DATETIMEARRAY",
            Arc::clone(&dt),
        ),
        PgType::new_array(vec![ARRAY_INTERVAL], "INTERVALARRAY", Arc::clone(&interval)),
        boolean,
        integer,
        longinteger,
        float,
        decimal,
        string,
        binary,
        date,
        time,
        dt,
        interval,
    ]
});

static TEXT_PASSTHROUGH: Lazy<Arc<PgType>> =
    Lazy::new(|| PgType::simple(Vec::new(), "STRING", self::str::cast_string));

static UNICODE: Lazy<Arc<PgType>> = Lazy::new(|| {
    use crate::type_id::*;
    PgType::simple(
        vec![TEXT, NAME, BPCHAR, VARCHAR, UNKNOWN],
        "UNICODE",
        self::str::cast_unicode,
    )
});

/// The default type table registered into a fresh registry's global tier.
pub fn builtins() -> &'static [Arc<PgType>] {
    &BUILTINS
}

/// Sentinel used when no scope claims an OID: returns the raw text as-is.
pub fn text_passthrough() -> Arc<PgType> {
    Arc::clone(&TEXT_PASSTHROUGH)
}

/// String type that decodes through the connection's server encoding
/// instead of passing bytes through. Register it explicitly to opt in.
pub fn unicode() -> Arc<PgType> {
    Arc::clone(&UNICODE)
}

#[cfg(test)]
mod tests {
    use super::builtins;
    use crate::type_id;

    #[test]
    fn builtin_table_covers_wellknown_oids() {
        let claimed: Vec<u32> = builtins()
            .iter()
            .flat_map(|ty| ty.oids().iter().copied())
            .collect();

        for oid in [
            type_id::BOOL,
            type_id::BYTEA,
            type_id::INT2,
            type_id::INT4,
            type_id::INT8,
            type_id::OID,
            type_id::FLOAT4,
            type_id::FLOAT8,
            type_id::NUMERIC,
            type_id::TEXT,
            type_id::NAME,
            type_id::BPCHAR,
            type_id::VARCHAR,
            type_id::UNKNOWN,
            type_id::DATE,
            type_id::TIME,
            type_id::TIMETZ,
            type_id::TIMESTAMP,
            type_id::TIMESTAMPTZ,
            type_id::INTERVAL,
            type_id::ARRAY_BOOL,
            type_id::ARRAY_INT4,
            type_id::ARRAY_INT8,
            type_id::ARRAY_TEXT,
            type_id::ARRAY_TIMESTAMP,
            type_id::ARRAY_INTERVAL,
            type_id::ARRAY_NUMERIC,
        ] {
            assert!(claimed.contains(&oid), "OID {oid} unclaimed by builtins");
        }
    }
}
