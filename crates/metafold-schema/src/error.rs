use crate::{node::Visibility, profile::ProfileKind};
use thiserror::Error as ThisError;

///
/// DefinitionError
///
/// A type definition the generator cannot produce a marshaller for.
/// Raised at generation time; every variant names the offending type.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum DefinitionError {
    #[error(
        "property {type_name}::{property} is {visibility} and cannot be reached by generated code; \
         widen its visibility or mark it #[marshal(skip)]"
    )]
    DisallowedVisibility {
        type_name: String,
        property: String,
        visibility: Visibility,
    },

    #[error("property {type_name}::{property} has more than one directive for group '{group}'")]
    DuplicateDirective {
        type_name: String,
        property: String,
        group: String,
    },

    #[error("'{name}' is not a usable type path")]
    InvalidTypeName { name: String },

    #[error("{type_name}: profile '{profile}' requires profile '{requires}'")]
    MissingBaseProfile {
        type_name: String,
        profile: ProfileKind,
        requires: ProfileKind,
    },

    #[error("{type_name} declares more than {limit} groups")]
    TooManyGroups { type_name: String, limit: usize },

    #[error(
        "property {type_name}::{property} has unsupported type `{found}`; \
         use a scalar, a nested array, or a marshalled type, or mark it #[marshal(skip)]"
    )]
    UnresolvedType {
        type_name: String,
        property: String,
        found: String,
    },
}

impl DefinitionError {
    /// The property the error is about, if it is about one.
    #[must_use]
    pub fn property(&self) -> Option<&str> {
        match self {
            Self::DisallowedVisibility { property, .. }
            | Self::DuplicateDirective { property, .. }
            | Self::UnresolvedType { property, .. } => Some(property),
            Self::InvalidTypeName { .. }
            | Self::MissingBaseProfile { .. }
            | Self::TooManyGroups { .. } => None,
        }
    }
}
