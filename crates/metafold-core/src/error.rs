use thiserror::Error as ThisError;

///
/// MarshalError
///
/// Usage errors raised by generated marshallers at call time.
/// They are caller-contract violations; nothing is retried internally, and a
/// target object decoded in place may already hold the fields applied before
/// the failure.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
#[remain::sorted]
pub enum MarshalError {
    #[error("{type_name}::{property}: {source}")]
    Field {
        type_name: &'static str,
        property: &'static str,
        #[source]
        source: Box<Self>,
    },

    #[error("could not decode JSON payload '{payload}': {reason}")]
    InvalidPayload { payload: String, reason: String },

    #[error("expected {expected}, found {found}")]
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("could not serialize container: {0}")]
    Serialize(String),

    #[error("group '{group}' not supported for {type_name}")]
    UnsupportedGroup {
        type_name: &'static str,
        group: String,
    },

    #[error("expected a container or JSON text, {found} given")]
    WrongInputType { found: &'static str },

    #[error("expected an object of type {expected}")]
    WrongObjectType { expected: &'static str },
}

impl MarshalError {
    /// Attach the owning property to an error raised while converting it.
    #[must_use]
    pub fn at(self, type_name: &'static str, property: &'static str) -> Self {
        Self::Field {
            type_name,
            property,
            source: Box::new(self),
        }
    }

    /// Strip any property context and return the innermost error.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Field { source, .. } => source.root(),
            other => other,
        }
    }

    pub(crate) const fn mismatch(expected: &'static str, found: &'static str) -> Self {
        Self::Mismatch { expected, found }
    }
}
