//! Bridge between the container model and `serde_json`.
//!
//! JSON text encode/decode itself is `serde_json`'s job; this module only
//! maps its value tree onto `Value` and back.

use crate::{
    MarshalError,
    value::{Container, ContainerKind, Key, Value},
};
use serde_json::{Map, Number, Value as JsonValue};

/// Parse JSON text into a `Value` tree.
pub fn parse(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str::<JsonValue>(text).map(Value::from)
}

/// Serialize a container as the root of a JSON document.
/// The root is always an object, even when empty or list-shaped.
pub fn serialize_root(container: &Container, pretty: bool) -> Result<String, MarshalError> {
    let json = container_to_json(container, true)?;

    let text = if pretty {
        serde_json::to_string_pretty(&json)
    } else {
        serde_json::to_string(&json)
    };

    text.map_err(|err| MarshalError::Serialize(err.to_string()))
}

/// Serialize any value as compact JSON text; list-shaped levels stay arrays.
pub fn serialize_value(value: &Value) -> Result<String, MarshalError> {
    let json = JsonValue::try_from(value)?;

    serde_json::to_string(&json).map_err(|err| MarshalError::Serialize(err.to_string()))
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(b),
            JsonValue::Number(n) => number_to_value(&n),
            JsonValue::String(s) => Self::Text(s),
            JsonValue::Array(items) => Self::Container(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| (Key::from(i), Self::from(v)))
                    .collect(),
            ),
            JsonValue::Object(map) => {
                let container: Container = map
                    .into_iter()
                    .map(|(k, v)| (Key::from(k), Self::from(v)))
                    .collect();

                Self::Container(container.with_kind(ContainerKind::Object))
            }
        }
    }
}

// non-finite floats have no JSON spelling and fail instead of turning null
impl TryFrom<&Value> for JsonValue {
    type Error = MarshalError;

    fn try_from(value: &Value) -> Result<Self, MarshalError> {
        let json = match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Int(i) => Self::Number((*i).into()),
            Value::Uint(u) => Self::Number((*u).into()),
            Value::Float(f) => Number::from_f64(*f).map(Self::Number).ok_or_else(|| {
                MarshalError::Serialize(format!("{f} has no JSON representation"))
            })?,
            Value::Text(s) => Self::String(s.clone()),
            Value::Container(c) => container_to_json(c, false)?,
        };

        Ok(json)
    }
}

fn number_to_value(n: &Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Int(i)
    } else if let Some(u) = n.as_u64() {
        Value::Uint(u)
    } else {
        n.as_f64().map_or(Value::Null, Value::Float)
    }
}

// container_to_json
// list-shaped array containers become JSON arrays, everything else objects
fn container_to_json(
    container: &Container,
    force_object: bool,
) -> Result<JsonValue, MarshalError> {
    let as_array =
        !force_object && container.kind() == ContainerKind::Array && container.is_list();

    if as_array {
        let items = container
            .iter()
            .map(|(_, v)| JsonValue::try_from(v))
            .collect::<Result<_, _>>()?;

        Ok(JsonValue::Array(items))
    } else {
        let map = container
            .iter()
            .map(|(k, v)| JsonValue::try_from(v).map(|json| (k.to_string(), json)))
            .collect::<Result<Map<String, JsonValue>, _>>()?;

        Ok(JsonValue::Object(map))
    }
}
