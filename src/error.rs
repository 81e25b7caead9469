//! error.rs — Helios Core error taxonomy
//!
//! Every variant corresponds 1:1 to a stable `CANON_ERR_*` identifier from
//! the spec's error taxonomy. The `#[error(...)]` message text is the exact
//! lowercase phrase the spec names, so the stable identifier and the
//! human-readable message never drift apart.

use thiserror::Error;

/// Top-level error type for the Helios Core canonicalization + hashing
/// pipeline.
#[derive(Error, Debug)]
pub enum HeliosError {
    #[error("null prohibited")]
    NullProhibited,

    #[error("float prohibited")]
    FloatProhibited,

    #[error("integer out of range")]
    IntegerOutOfRange,

    #[error("schema version missing")]
    SchemaVersionMissing,

    #[error("schema version invalid")]
    SchemaVersionInvalid,

    #[error("timestamp non-UTC")]
    TimestampNonUtc,

    #[error("invalid precision")]
    TimestampInvalidPrecision,

    /// A value of a kind the serializer does not know how to emit reached
    /// it. This is an internal invariant violation, not a user input error.
    #[error("unsupported value type: {0}")]
    UnsupportedValue(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl HeliosError {
    /// The stable `CANON_ERR_*` identifier for this error, for machine
    /// consumers (structured verifier output, future language bindings).
    pub fn code(&self) -> &'static str {
        match self {
            HeliosError::NullProhibited => "CANON_ERR_NULL_PROHIBITED",
            HeliosError::FloatProhibited => "CANON_ERR_FLOAT_PROHIBITED",
            HeliosError::IntegerOutOfRange => "CANON_ERR_INTEGER_OUT_OF_RANGE",
            HeliosError::SchemaVersionMissing => "CANON_ERR_SCHEMA_VERSION_MISSING",
            HeliosError::SchemaVersionInvalid => "CANON_ERR_SCHEMA_VERSION_INVALID",
            HeliosError::TimestampNonUtc => "CANON_ERR_TIMESTAMP_NON_UTC",
            HeliosError::TimestampInvalidPrecision => "CANON_ERR_TIMESTAMP_INVALID_PRECISION",
            HeliosError::UnsupportedValue(_) => "CANON_ERR_UNSUPPORTED_VALUE",
            HeliosError::Json(_) => "CANON_ERR_JSON",
            HeliosError::Io(_) => "CANON_ERR_IO",
        }
    }
}

pub type Result<T> = std::result::Result<T, HeliosError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_matches_message_family() {
        assert_eq!(HeliosError::NullProhibited.code(), "CANON_ERR_NULL_PROHIBITED");
        assert_eq!(HeliosError::NullProhibited.to_string(), "null prohibited");
    }

    #[test]
    fn timestamp_errors_have_distinct_codes() {
        assert_ne!(
            HeliosError::TimestampNonUtc.code(),
            HeliosError::TimestampInvalidPrecision.code()
        );
    }
}
