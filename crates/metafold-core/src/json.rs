//! JSON profile entry points.
//!
//! A type with the JSON profile gets one `json:<group>` group per JSON group
//! name; these methods wrap the generated container routines with text
//! decode/encode at the root.
//!
//! The array-of-JSON form is a flat container whose scalar properties are
//! plain values and whose nested objects and arrays are each their own JSON
//! text, as when every column of a row holds a JSON document.

use crate::{
    GroupBits, MarshalError,
    group::json_group,
    traits::Marshal,
    value::{
        Container, ContainerKind, Value,
        json::{parse, serialize_root, serialize_value},
    },
};
use serde_json::Value as JsonValue;
use std::borrow::Cow;

///
/// JsonInput
///
/// Anything `from_json` accepts: an already-decoded container or value, or
/// JSON text. A `Value` is only valid when it is a container or text.
///

#[derive(Clone, Debug)]
pub enum JsonInput<'a> {
    Container(Cow<'a, Container>),
    Value(Cow<'a, Value>),
    Text(Cow<'a, str>),
}

impl JsonInput<'_> {
    /// Resolve the input to the container handed to the base decoder.
    pub fn into_container(self) -> Result<Container, MarshalError> {
        match self {
            Self::Container(c) => Ok(c.into_owned()),
            Self::Value(v) => match v.as_ref() {
                Value::Container(c) => Ok(c.clone()),
                Value::Text(s) => parse_payload(s),
                other => Err(MarshalError::WrongInputType {
                    found: other.kind_name(),
                }),
            },
            Self::Text(s) => parse_payload(&s),
        }
    }
}

// parse_payload
// empty text and a case-insensitive "null" decode to an empty container
fn parse_payload(text: &str) -> Result<Container, MarshalError> {
    parse_text(text).map(Value::into_container)
}

// parse_text
// empty text and a case-insensitive "null" are null
fn parse_text(text: &str) -> Result<Value, MarshalError> {
    match parse(text) {
        Ok(value) => Ok(value),
        Err(_) if text.is_empty() || text.eq_ignore_ascii_case("null") => Ok(Value::Null),
        Err(err) => {
            log::debug!("rejecting JSON payload: {err}");

            Err(MarshalError::InvalidPayload {
                payload: text.to_string(),
                reason: err.to_string(),
            })
        }
    }
}

impl<'a> From<&'a Container> for JsonInput<'a> {
    fn from(c: &'a Container) -> Self {
        Self::Container(Cow::Borrowed(c))
    }
}

impl From<Container> for JsonInput<'_> {
    fn from(c: Container) -> Self {
        Self::Container(Cow::Owned(c))
    }
}

impl<'a> From<&'a Value> for JsonInput<'a> {
    fn from(v: &'a Value) -> Self {
        Self::Value(Cow::Borrowed(v))
    }
}

impl From<Value> for JsonInput<'_> {
    fn from(v: Value) -> Self {
        Self::Value(Cow::Owned(v))
    }
}

impl<'a> From<&'a str> for JsonInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for JsonInput<'a> {
    fn from(s: &'a String) -> Self {
        Self::Text(Cow::Borrowed(s))
    }
}

impl From<String> for JsonInput<'_> {
    fn from(s: String) -> Self {
        Self::Text(Cow::Owned(s))
    }
}

impl From<JsonValue> for JsonInput<'_> {
    fn from(json: JsonValue) -> Self {
        Self::Value(Cow::Owned(Value::from(json)))
    }
}

impl From<&JsonValue> for JsonInput<'_> {
    fn from(json: &JsonValue) -> Self {
        Self::Value(Cow::Owned(Value::from(json.clone())))
    }
}

///
/// JsonMarshal
///
/// Implemented by `#[derive(Marshal)]` when the JSON profile is active.
///

pub trait JsonMarshal: Marshal {
    /// Whether top-level `key` of the JSON group `id` holds a nested object
    /// or array, written as embedded JSON text in the array-of-JSON form.
    fn embedded_json(id: GroupBits, key: &str) -> bool;

    /// Decode JSON onto `target`, or onto a default-constructed object.
    fn from_json<'a>(
        input: impl Into<JsonInput<'a>>,
        group: Option<&str>,
        target: Option<Self>,
    ) -> Result<Self, MarshalError> {
        let container = input.into().into_container()?;

        Self::from_container(&container, Some(&json_group(group)), target)
    }

    /// In-place form of `from_json`.
    fn decode_json_into<'a>(
        &mut self,
        input: impl Into<JsonInput<'a>>,
        group: Option<&str>,
    ) -> Result<(), MarshalError> {
        let container = input.into().into_container()?;

        self.decode_into(&container, Some(&json_group(group)))
    }

    /// Encode under `json:<group>`; the result is the JSON document's root.
    fn to_json(&self, group: Option<&str>) -> Result<Container, MarshalError> {
        self.encode(Some(&json_group(group)))
            .map(|c| c.with_kind(ContainerKind::Object))
    }

    /// Non-finite floats have no JSON spelling; encoding one is a
    /// `Serialize` error rather than a silent `null`.
    fn to_json_value(&self, group: Option<&str>) -> Result<JsonValue, MarshalError> {
        JsonValue::try_from(&Value::Container(self.to_json(group)?))
    }

    fn to_json_string(&self, group: Option<&str>) -> Result<String, MarshalError> {
        serialize_root(&self.to_json(group)?, false)
    }

    fn to_json_string_pretty(&self, group: Option<&str>) -> Result<String, MarshalError> {
        serialize_root(&self.to_json(group)?, true)
    }

    /// Decode the array-of-JSON form onto `target`, or onto a
    /// default-constructed object.
    fn from_array_of_json(
        input: &Container,
        group: Option<&str>,
        target: Option<Self>,
    ) -> Result<Self, MarshalError> {
        let mut object = target.unwrap_or_default();
        object.decode_array_of_json_into(input, group)?;

        Ok(object)
    }

    /// In-place form of `from_array_of_json`. Text under a nested key is
    /// parsed first; `""` and `null` count as absent.
    fn decode_array_of_json_into(
        &mut self,
        input: &Container,
        group: Option<&str>,
    ) -> Result<(), MarshalError> {
        let group = json_group(group);
        let id = Self::groups().resolve(Self::TYPE_NAME, Some(&group))?;

        let mut expanded = Container::object();
        for (key, value) in input.iter() {
            let value = match value {
                Value::Text(text) if Self::embedded_json(id, &key.to_string()) => {
                    parse_text(text)?
                }
                other => other.clone(),
            };
            expanded.insert(key.clone(), value);
        }

        self.decode_into(&expanded, Some(&group))
    }

    /// Encode under `json:<group>`, with every nested value replaced by its
    /// JSON text.
    fn to_array_of_json(&self, group: Option<&str>) -> Result<Container, MarshalError> {
        let group = json_group(group);
        let id = Self::groups().resolve(Self::TYPE_NAME, Some(&group))?;

        let mut output = Container::object();
        for (key, value) in self.encode(Some(&group))? {
            let value = if Self::embedded_json(id, &key.to_string()) {
                Value::Text(serialize_value(&value)?)
            } else {
                value
            };
            output.insert(key, value);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_null_text_decode_to_an_empty_container() {
        for text in ["", "null", "NULL", "{}", "[]"] {
            let container = JsonInput::from(text).into_container().unwrap();
            assert!(container.is_empty(), "{text:?} should decode to an empty container");
        }
    }

    #[test]
    fn unparseable_text_is_an_invalid_payload() {
        let err = JsonInput::from("{nope").into_container().unwrap_err();

        assert!(matches!(err, MarshalError::InvalidPayload { ref payload, .. } if payload == "{nope"));
    }

    #[test]
    fn non_container_values_are_a_wrong_input_type() {
        let err = JsonInput::from(Value::Int(1)).into_container().unwrap_err();
        assert_eq!(err, MarshalError::WrongInputType { found: "int" });

        let err = JsonInput::from(Value::Null).into_container().unwrap_err();
        assert_eq!(err, MarshalError::WrongInputType { found: "null" });
    }

    #[test]
    fn text_values_are_parsed_like_text() {
        let value = Value::Text(r#"{"a":1}"#.to_string());
        let container = JsonInput::from(&value).into_container().unwrap();

        assert_eq!(container.get("a"), Some(&Value::Int(1)));
    }

    #[test]
    fn serde_json_values_are_accepted() {
        let json = serde_json::json!({ "a": "b" });
        let container = JsonInput::from(json).into_container().unwrap();

        assert_eq!(container.get("a"), Some(&Value::Text("b".to_string())));
    }
}
