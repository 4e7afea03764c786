//! Error types for the vsort CLI.
//!
//! Uses thiserror for derive macros. Underlying regex/io/serde errors are
//! flattened into formatted message strings at the point of failure.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for vsort operations.
///
/// Construction-time kinds (`InvalidOrder`, `InvalidLevel`,
/// `InvalidPattern`) are fatal to sorter creation. Comparison-time kinds
/// (`PrefixMismatch`, `SuffixMismatch`, `NotNumeric`) are returned to the
/// caller of `compare`; sorting degrades them to equality instead of
/// surfacing them. The remaining kinds belong to the I/O plumbing.
#[derive(Error, Debug)]
pub enum VsortError {
    /// An order name other than `asc` or `desc` was given.
    #[error("order must be one of asc or desc (got {0:?})")]
    InvalidOrder(String),

    /// A level of exactly zero was configured.
    #[error("level must not be zero")]
    InvalidLevel,

    /// A prefix or suffix pattern failed to compile.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// One of the compared strings did not match the configured prefix.
    #[error("prefix does not match (v1: {v1:?}, v2: {v2:?}, prefix: {pattern:?})")]
    PrefixMismatch {
        v1: String,
        v2: String,
        pattern: String,
    },

    /// One of the compared strings did not match the configured suffix.
    #[error("suffix does not match (v1: {v1:?}, v2: {v2:?}, suffix: {pattern:?})")]
    SuffixMismatch {
        v1: String,
        v2: String,
        pattern: String,
    },

    /// A version component did not parse as a base-10 integer.
    #[error("component {component:?} is not numeric (v1: {v1:?}, v2: {v2:?})")]
    NotNumeric {
        component: String,
        v1: String,
        v2: String,
    },

    /// An input source could not be read or decoded.
    #[error("cannot read from {source_name}: {reason}")]
    InputError { source_name: String, reason: String },

    /// Sorted output could not be written.
    #[error("cannot write output: {0}")]
    OutputError(String),

    /// Strict mode encountered an invalid entry.
    #[error("invalid version is contained: {0}")]
    StrictViolation(String),
}

impl VsortError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            VsortError::InvalidOrder(_)
            | VsortError::InvalidLevel
            | VsortError::InvalidPattern { .. }
            | VsortError::PrefixMismatch { .. }
            | VsortError::SuffixMismatch { .. }
            | VsortError::NotNumeric { .. } => exit_codes::USER_ERROR,
            VsortError::InputError { .. } | VsortError::OutputError(_) => exit_codes::IO_FAILURE,
            VsortError::StrictViolation(_) => exit_codes::STRICT_FAILURE,
        }
    }
}

/// Result type alias for vsort operations.
pub type Result<T> = std::result::Result<T, VsortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_errors_map_to_user_error() {
        assert_eq!(
            VsortError::InvalidOrder("up".to_string()).exit_code(),
            exit_codes::USER_ERROR
        );
        assert_eq!(VsortError::InvalidLevel.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(
            VsortError::InvalidPattern {
                pattern: "(".to_string(),
                reason: "unclosed group".to_string(),
            }
            .exit_code(),
            exit_codes::USER_ERROR
        );
    }

    #[test]
    fn comparison_errors_map_to_user_error() {
        let err = VsortError::NotNumeric {
            component: "a".to_string(),
            v1: "0.a".to_string(),
            v2: "0.1".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn io_errors_map_to_io_failure() {
        let err = VsortError::InputError {
            source_name: "versions.txt".to_string(),
            reason: "No such file or directory".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
        assert_eq!(
            VsortError::OutputError("broken pipe".to_string()).exit_code(),
            exit_codes::IO_FAILURE
        );
    }

    #[test]
    fn strict_violation_maps_to_strict_failure() {
        let err = VsortError::StrictViolation("v0.3.0".to_string());
        assert_eq!(err.exit_code(), exit_codes::STRICT_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = VsortError::StrictViolation("v0.3.0".to_string());
        assert_eq!(err.to_string(), "invalid version is contained: v0.3.0");

        let err = VsortError::PrefixMismatch {
            v1: "v0.2.0".to_string(),
            v2: "0.2.0".to_string(),
            pattern: "^v".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "prefix does not match (v1: \"v0.2.0\", v2: \"0.2.0\", prefix: \"^v\")"
        );

        let err = VsortError::InputError {
            source_name: "<stdin>".to_string(),
            reason: "bad JSON".to_string(),
        };
        assert_eq!(err.to_string(), "cannot read from <stdin>: bad JSON");
    }
}
