//! Well-known PostgreSQL type OIDs.
//!
//! The numeric tags the server reports per result column.
//!
//! <https://www.postgresql.org/docs/current/datatype.html>

// Boolean
pub const BOOL: u32 = 16;

// Binary
pub const BYTEA: u32 = 17;

// Integers
pub const INT8: u32 = 20;
pub const INT2: u32 = 21;
pub const INT4: u32 = 23;
pub const OID: u32 = 26;

// Character types
pub const NAME: u32 = 19;
pub const TEXT: u32 = 25;
pub const UNKNOWN: u32 = 705;
pub const BPCHAR: u32 = 1042;
pub const VARCHAR: u32 = 1043;

// Floating-point
pub const FLOAT4: u32 = 700;
pub const FLOAT8: u32 = 701;

// Arbitrary precision
pub const NUMERIC: u32 = 1700;

// Date/time
pub const DATE: u32 = 1082;
pub const TIME: u32 = 1083;
pub const TIMESTAMP: u32 = 1114;
pub const TIMESTAMPTZ: u32 = 1184;
pub const INTERVAL: u32 = 1186;
pub const TIMETZ: u32 = 1266;

// Arrays
pub const ARRAY_BOOL: u32 = 1000;
pub const ARRAY_BYTEA: u32 = 1001;
pub const ARRAY_NAME: u32 = 1003;
pub const ARRAY_INT2: u32 = 1005;
pub const ARRAY_INT4: u32 = 1007;
pub const ARRAY_TEXT: u32 = 1009;
pub const ARRAY_BPCHAR: u32 = 1014;
pub const ARRAY_VARCHAR: u32 = 1015;
pub const ARRAY_INT8: u32 = 1016;
pub const ARRAY_FLOAT4: u32 = 1021;
pub const ARRAY_FLOAT8: u32 = 1022;
pub const ARRAY_TIMESTAMP: u32 = 1115;
pub const ARRAY_DATE: u32 = 1182;
pub const ARRAY_TIME: u32 = 1183;
pub const ARRAY_TIMESTAMPTZ: u32 = 1185;
pub const ARRAY_INTERVAL: u32 = 1187;
pub const ARRAY_NUMERIC: u32 = 1231;
pub const ARRAY_TIMETZ: u32 = 1270;
