//! ## Crate layout
//! - `build`: the marshaller generator, for build scripts driving it from a model.
//! - `core`: the container model, group tables, and the runtime traits.
//! - `schema`: type model, directives, profiles, and group resolution.
//!
//! Most users only need the derive and the `prelude`:
//!
//! ```ignore
//! use metafold::prelude::*;
//!
//! #[derive(Debug, Default, Marshal)]
//! #[marshal(profiles(container, json))]
//! pub struct User {
//!     #[marshal(json(name = "userName"))]
//!     pub name: Option<String>,
//! }
//!
//! let user = User::from_json(r#"{"userName":"ann"}"#, None, None)?;
//! assert_eq!(user.to_json_string(None)?, r#"{"userName":"ann"}"#);
//! ```

pub use metafold_build as build;
pub use metafold_core as core;
pub use metafold_schema as schema;

pub use metafold_core::{
    Container, ContainerKind, JsonInput, JsonMarshal, Key, Marshal, MarshalDyn, MarshalError,
    Marshaller, Scalar, Value,
};
pub use metafold_derive::Marshal;

// the derive emits `::metafold::__private` paths
extern crate self as metafold;

/// re-exports
///
/// generated code goes through these so users do not depend on the runtime
/// crates directly
#[doc(hidden)]
pub mod __private {
    pub use metafold_core::{
        Container, ContainerKind, GroupBits, GroupEntry, GroupTable, JsonMarshal, Key, Level,
        Marshal, MarshalError, Scalar, Value,
    };
}

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{Container, Key, Value, traits::Scalar as _};
    pub use crate::{JsonMarshal as _, Marshal};
}
