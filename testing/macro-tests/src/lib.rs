//! Fixture types for the end-to-end tests under `tests/`.

pub mod fixtures;

pub mod prelude {
    pub use crate::fixtures::*;
    pub use metafold::{
        Container, ContainerKind, JsonMarshal, Marshal, MarshalDyn, MarshalError, Marshaller,
        Value,
    };
}
