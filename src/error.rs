use std::error::Error as StdError;
use std::fmt::Display;
use std::result::Result as StdResult;

use crate::registry::Scope;

/// A specialized `Result` type for pgcast.
pub type Result<T> = StdResult<T, Error>;

/// Convenience type alias for boxed collaborator errors.
pub type BoxDynError = Box<dyn StdError + 'static + Send + Sync>;

/// Represents all the ways a cast or registration can fail.
///
/// Casting failures are non-transient: malformed wire text means either a
/// protocol mismatch or a misconfigured custom caster, so no variant is
/// ever retried. A failed cast aborts decoding of the current value only.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Wire text did not match the expected grammar for the target type.
    #[error("invalid {type_name} literal: {message}")]
    InvalidLiteral {
        type_name: &'static str,
        message: String,
    },

    /// The server-reported encoding name has no known mapping.
    #[error("unknown server encoding: {0:?}")]
    UnknownEncoding(String),

    /// Registration targeted a connection or statement scope that is not open.
    #[error("invalid registration scope: {0}")]
    InvalidScope(Scope),

    /// Error raised by a collaborator-registered caster.
    #[error("error raised by registered caster: {0}")]
    Custom(#[source] BoxDynError),
}

impl Error {
    pub(crate) fn invalid_literal(type_name: &'static str, message: impl Display) -> Self {
        Error::InvalidLiteral {
            type_name,
            message: message.to_string(),
        }
    }

    /// Wraps an error raised by a custom registered caster.
    pub fn custom(err: impl Into<BoxDynError>) -> Self {
        Error::Custom(err.into())
    }
}
