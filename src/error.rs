//! Error types shared across the engine.
//!
//! Constructors and public mutators validate eagerly and return one of these
//! variants. Per-frame object failures are caught and logged by the scene
//! loop; everything else propagates to the caller.

use thiserror::Error;

/// Errors produced by the scene runtime.
#[derive(Error, Debug)]
pub enum EngineError {
    /// An argument was outside the accepted domain of the operation.
    #[error("expected arguments [{expected}], found [{found}]")]
    InvalidArguments {
        /// Description of the accepted values.
        expected: String,
        /// Description of what was received.
        found: String,
    },

    /// A configuration object or file was malformed.
    #[error("invalid {name}: {reason}")]
    InvalidObject {
        /// Name of the offending object or key.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// An overridable hook was called without an implementation.
    #[error("`{what}` has not been implemented by this object type")]
    NotImplemented {
        /// Name of the missing hook.
        what: &'static str,
    },

    /// A named member was looked up in a registry that does not contain it.
    #[error("the {kind} specified does not exist in the current {list}")]
    Inexistent {
        /// Kind of missing member (event, object, ...).
        kind: &'static str,
        /// Registry it is missing from.
        list: &'static str,
    },

    /// An operation was attempted in a state that cannot support it.
    #[error("invalid state: {reason}")]
    InvalidState {
        /// What precondition was violated.
        reason: String,
    },
}

impl EngineError {
    /// Argument-domain violation.
    pub fn invalid_arguments(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::InvalidArguments {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Malformed configuration data.
    pub fn invalid_object(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidObject {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Missing hook implementation.
    pub fn not_implemented(what: &'static str) -> Self {
        Self::NotImplemented { what }
    }

    /// Unknown member of a registry.
    pub fn inexistent(kind: &'static str, list: &'static str) -> Self {
        Self::Inexistent { kind, list }
    }

    /// Violated state precondition.
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }
}
