//! Runtime for Metafold: the generic container model, group tables, and the
//! traits that generated marshallers implement.
#![warn(unreachable_pub)]

pub mod error;
pub mod group;
pub mod json;
pub mod traits;
pub mod value;

pub use error::MarshalError;
pub use group::{GroupBits, GroupEntry, GroupTable};
pub use json::{JsonInput, JsonMarshal};
pub use traits::{Level, Marshal, MarshalDyn, Marshaller, Scalar};
pub use value::{Container, ContainerKind, Key, KeyRef, Value};

///
/// CONSTANTS
///

/// Name of the implicit default group. `None` and `Some("")` address it.
pub const DEFAULT_GROUP: &str = "";

/// Prefix that namespaces every group owned by the JSON profile.
pub const JSON_GROUP_PREFIX: &str = "json:";

/// Upper bound on distinct groups per type; one bit of `GroupBits` each.
pub const MAX_GROUPS: usize = GroupBits::BITS as usize;

///
/// Prelude
///
/// Domain vocabulary only; errors and JSON helpers stay one level down.
///

pub mod prelude {
    pub use crate::{
        traits::{Marshal, Scalar},
        value::{Container, Key, Value},
    };
}
