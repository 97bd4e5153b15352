//! Type model, field directives, profiles, and the group resolver.
//!
//! Everything here runs at generation time and is discarded once the
//! marshaller for a type has been emitted.

pub mod access;
pub mod error;
pub mod group;
pub mod node;
pub mod profile;

pub use error::DefinitionError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        access::Access,
        error::DefinitionError,
        group::{GroupMap, GroupResolver},
        node::*,
        profile::{Profile, ProfileKind, ProfileSet},
    };
    pub use metafold_core::{DEFAULT_GROUP, GroupBits, JSON_GROUP_PREFIX, MAX_GROUPS};
    pub use serde::{Deserialize, Serialize};
}
