//! Structured failure taxonomy for claim violations.
//!
//! Each failure carries the offending parameter's name, an optional
//! caller-supplied message, and (for range failures) a rendering of the
//! offending value. The message is opaque to this crate: validators never
//! generate or translate text on the caller's behalf.
//!
//! Caller-input violations are `CheckError` values and propagate with `?`.
//! Misuse of the library itself (for example a flag check against an
//! enumeration that declares no flag semantics) is a programmer error, not
//! a validation outcome, and panics via [`invalid_operation`].

use serde::{Deserialize, Serialize};

/// A violated claim, raised by the first failing predicate in a chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    /// The argument was absent where a value was required.
    #[error("argument `{name}` must not be null{}", detail(.message))]
    NullArgument { name: String, message: Option<String> },

    /// A generic contract violation on a supplied value.
    #[error("argument `{name}` violates its contract{}", detail(.message))]
    InvalidArgument { name: String, message: Option<String> },

    /// An ordering violation; carries the offending value.
    #[error("argument `{name}` is out of range (value: {value}){}", detail(.message))]
    OutOfRange {
        name: String,
        value: String,
        message: Option<String>,
    },

    /// The value is not a declared member of its enumeration.
    #[error("argument `{name}` is not a defined enumeration member (value: {value}){}", detail(.message))]
    InvalidEnumValue {
        name: String,
        value: String,
        message: Option<String>,
    },

    /// A state invariant failed before the predicate could run, e.g. an
    /// absent value where a comparison needs one. Never negation-sensitive.
    #[error("argument `{name}` is in an invalid state: value is null{}", detail(.message))]
    InvalidState { name: String, message: Option<String> },
}

fn detail(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {m}"),
        None => String::new(),
    }
}

impl CheckError {
    /// The name of the parameter this failure was raised for.
    pub fn parameter(&self) -> &str {
        match self {
            CheckError::NullArgument { name, .. }
            | CheckError::InvalidArgument { name, .. }
            | CheckError::OutOfRange { name, .. }
            | CheckError::InvalidEnumValue { name, .. }
            | CheckError::InvalidState { name, .. } => name,
        }
    }

    /// The caller-supplied message, if one was attached to the failing call.
    pub fn message(&self) -> Option<&str> {
        match self {
            CheckError::NullArgument { message, .. }
            | CheckError::InvalidArgument { message, .. }
            | CheckError::OutOfRange { message, .. }
            | CheckError::InvalidEnumValue { message, .. }
            | CheckError::InvalidState { message, .. } => message.as_deref(),
        }
    }

    /// The taxonomy tag for this failure.
    pub fn kind(&self) -> FailureKind {
        match self {
            CheckError::NullArgument { .. } => FailureKind::NullArgument,
            CheckError::InvalidArgument { .. } => FailureKind::InvalidArgument,
            CheckError::OutOfRange { .. } => FailureKind::OutOfRange,
            CheckError::InvalidEnumValue { .. } => FailureKind::InvalidEnumValue,
            CheckError::InvalidState { .. } => FailureKind::InvalidState,
        }
    }

    /// Export this failure as a machine-readable record.
    pub fn report(&self) -> FailureReport {
        let value = match self {
            CheckError::OutOfRange { value, .. } | CheckError::InvalidEnumValue { value, .. } => {
                Some(value.clone())
            }
            _ => None,
        };
        FailureReport {
            kind: self.kind(),
            parameter: self.parameter().to_string(),
            message: self.message().map(String::from),
            value,
        }
    }
}

/// Failure classification tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    NullArgument,
    InvalidArgument,
    OutOfRange,
    InvalidEnumValue,
    InvalidState,
}

/// Serializable record of a raised failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureReport {
    /// Failure classification.
    pub kind: FailureKind,

    /// Name of the offending parameter.
    pub parameter: String,

    /// Caller-supplied explanation, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Rendering of the offending value, for range and enumeration failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Raise a programmer-misuse error.
///
/// Misuse of the checking API is a defect in the calling code, not a
/// validation outcome, so it deliberately does not surface as a
/// [`CheckError`].
#[track_caller]
pub(crate) fn invalid_operation(what: impl AsRef<str>) -> ! {
    panic!("invalid operation: {}", what.as_ref())
}
