//! Typecasting engine for PostgreSQL's text result format.
//!
//! Converts the textual column values coming off the wire protocol into
//! typed [`Value`]s, driven by a scoped [`TypeRegistry`] that decides, per
//! result column OID, which casting function applies.
//!
//! The network client, SQL execution and row lifecycle all live elsewhere;
//! this crate owns only the text-to-value decoding pipeline and its
//! registry. The one hook back out is [`bytea::ByteaUnescape`], the
//! unescape primitive the binary caster borrows from the client library.
//!
//! ```
//! use pgcast::{type_id, CastContext, TypeRegistry, Value};
//!
//! let registry = TypeRegistry::new();
//! let cx = CastContext::new("UTF8");
//!
//! let value = registry
//!     .resolve_and_cast(type_id::INT4, b"42", 2, None, &cx)
//!     .unwrap();
//! assert_eq!(value, Value::Int(42));
//! ```
//!
//! Custom types are built with [`PgType::new`] and registered at global,
//! connection or statement scope; a statement-scope binding shadows the
//! connection's, which shadows the global one.

mod context;
mod encoding;
mod error;
mod registry;
mod type_info;
mod value;

pub mod bytea;
pub mod type_id;
pub mod types;

pub use context::{fixed_offset, CastContext, TzFactory};
pub use error::{BoxDynError, Error, Result};
pub use registry::{ConnectionId, Scope, StatementId, TypeRegistry};
pub use type_info::{PgType, SimpleCaster};
pub use value::{PgInterval, Value};
