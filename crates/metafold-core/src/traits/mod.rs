mod level;
mod scalar;

pub use level::{Level, MAX_LIST_GAP};
pub use scalar::Scalar;

use crate::{
    GroupTable, MarshalError,
    value::{Container, ContainerKind, Value},
};
use std::{any::Any, marker::PhantomData};

///
/// Marshal
///
/// Implemented by `#[derive(Marshal)]`. `decode_into` and `encode` are the
/// generated routines; every other method is built on top of them.
///

pub trait Marshal: Default + 'static {
    /// Type name used in usage errors.
    const TYPE_NAME: &'static str;

    /// Group name → group bit table for this type.
    fn groups() -> &'static GroupTable;

    /// Decode `input` onto `self` under `group`.
    ///
    /// Only properties whose path is present in `input` are assigned; every
    /// other property keeps its current value.
    fn decode_into(&mut self, input: &Container, group: Option<&str>) -> Result<(), MarshalError>;

    /// Encode the properties of `group` into a fresh container.
    /// Properties holding no value produce no key.
    fn encode(&self, group: Option<&str>) -> Result<Container, MarshalError>;

    /// Decode onto `target`, or onto a default-constructed object.
    fn from_container(
        input: &Container,
        group: Option<&str>,
        target: Option<Self>,
    ) -> Result<Self, MarshalError> {
        let mut object = target.unwrap_or_default();
        object.decode_into(input, group)?;

        Ok(object)
    }

    /// Object-input variant: any value is first coerced to its container view.
    fn from_value(
        input: &Value,
        group: Option<&str>,
        target: Option<Self>,
    ) -> Result<Self, MarshalError> {
        let mut object = target.unwrap_or_default();
        object.decode_value_into(input, group)?;

        Ok(object)
    }

    /// In-place form of `from_value`, used when delegating to nested types.
    fn decode_value_into(&mut self, input: &Value, group: Option<&str>) -> Result<(), MarshalError> {
        match input {
            Value::Container(c) => self.decode_into(c, group),
            other => self.decode_into(&other.to_container(), group),
        }
    }

    fn to_container(&self, group: Option<&str>) -> Result<Container, MarshalError> {
        self.encode(group)
    }

    fn to_value(&self, group: Option<&str>) -> Result<Value, MarshalError> {
        self.encode(group)
            .map(|c| Value::Container(c.with_kind(ContainerKind::Object)))
    }
}

///
/// MarshalDyn
///
/// Object-safe view of a marshaller for callers holding `dyn Any`.
/// Passing an object of another type is a `WrongObjectType` error.
///

pub trait MarshalDyn: Send + Sync {
    fn type_name(&self) -> &'static str;

    fn decode_any(
        &self,
        input: &Container,
        group: Option<&str>,
        target: &mut dyn Any,
    ) -> Result<(), MarshalError>;

    fn encode_any(&self, object: &dyn Any, group: Option<&str>) -> Result<Container, MarshalError>;

    fn create_any(&self, input: &Container, group: Option<&str>)
    -> Result<Box<dyn Any>, MarshalError>;
}

///
/// Marshaller
///

pub struct Marshaller<T>(PhantomData<fn() -> T>);

impl<T> Marshaller<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Marshaller<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Marshal> MarshalDyn for Marshaller<T> {
    fn type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    fn decode_any(
        &self,
        input: &Container,
        group: Option<&str>,
        target: &mut dyn Any,
    ) -> Result<(), MarshalError> {
        let object = target
            .downcast_mut::<T>()
            .ok_or(MarshalError::WrongObjectType {
                expected: T::TYPE_NAME,
            })?;

        object.decode_into(input, group)
    }

    fn encode_any(&self, object: &dyn Any, group: Option<&str>) -> Result<Container, MarshalError> {
        let object = object
            .downcast_ref::<T>()
            .ok_or(MarshalError::WrongObjectType {
                expected: T::TYPE_NAME,
            })?;

        object.encode(group)
    }

    fn create_any(
        &self,
        input: &Container,
        group: Option<&str>,
    ) -> Result<Box<dyn Any>, MarshalError> {
        T::from_container(input, group, None).map(|object| Box::new(object) as Box<dyn Any>)
    }
}
