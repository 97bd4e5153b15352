pub mod json;


use derive_more::Display;
use std::slice;

///
/// Key
///
/// Container key. Text that spells a canonical decimal integer is the same
/// slot as that integer, so `"3"` and `3` address one entry.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Key {
    #[display("{_0}")]
    Int(i64),
    #[display("{_0}")]
    Text(String),
}

impl Key {
    #[must_use]
    pub fn as_key_ref(&self) -> KeyRef<'_> {
        match self {
            Self::Int(i) => KeyRef::Int(*i),
            Self::Text(s) => KeyRef::Text(s),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        match KeyRef::from(s) {
            KeyRef::Int(i) => Self::Int(i),
            KeyRef::Text(_) => Self::Text(s.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        match KeyRef::from(s.as_str()) {
            KeyRef::Int(i) => Self::Int(i),
            KeyRef::Text(_) => Self::Text(s),
        }
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        i64::try_from(index).map_or_else(|_| Self::Text(index.to_string()), Self::Int)
    }
}

impl From<KeyRef<'_>> for Key {
    fn from(key: KeyRef<'_>) -> Self {
        match key {
            KeyRef::Int(i) => Self::Int(i),
            KeyRef::Text(s) => Self::Text(s.to_string()),
        }
    }
}

///
/// KeyRef
/// borrowed key used for lookups
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyRef<'a> {
    Int(i64),
    Text(&'a str),
}

impl<'a> From<&'a str> for KeyRef<'a> {
    fn from(s: &'a str) -> Self {
        match s.parse::<i64>() {
            Ok(i) if i.to_string() == s => Self::Int(i),
            _ => Self::Text(s),
        }
    }
}

impl<'a> From<&'a String> for KeyRef<'a> {
    fn from(s: &'a String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<i64> for KeyRef<'_> {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl<'a> From<&'a Key> for KeyRef<'a> {
    fn from(key: &'a Key) -> Self {
        key.as_key_ref()
    }
}

///
/// Value
///
/// Null → the slot holds nothing; decoding treats it exactly like a
///        missing key and never assigns it.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
    Container(Container),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_container(&self) -> Option<&Container> {
        match self {
            Self::Container(c) => Some(c),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Container(_) => "container",
        }
    }

    /// Key/value view of any value: containers as-is, null as an empty
    /// container, and any scalar as a single entry at key `0`.
    #[must_use]
    pub fn to_container(&self) -> Container {
        match self {
            Self::Container(c) => c.clone(),
            other => other.clone().into_container(),
        }
    }

    #[must_use]
    pub fn into_container(self) -> Container {
        match self {
            Self::Container(c) => c,
            Self::Null => Container::new(),
            scalar => {
                let mut c = Container::new();
                c.insert(0i64, scalar);
                c
            }
        }
    }

    /// Entries of this value seen as one nested-array level.
    /// Null entries are absent and are not yielded.
    #[must_use]
    pub fn entries(&self) -> Entries<'_> {
        let inner = match self {
            Self::Container(c) => EntriesInner::Container(c.entries.iter()),
            Self::Null => EntriesInner::Single(None),
            scalar => EntriesInner::Single(Some(scalar)),
        };

        Entries { inner }
    }
}

macro_rules! impl_value_from {
    ( $( $ty:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_value_from!(
    bool => Bool,
    i64 => Int,
    u64 => Uint,
    f64 => Float,
    String => Text,
    &str => Text,
    Container => Container,
);

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

///
/// Entries
///

pub struct Entries<'a> {
    inner: EntriesInner<'a>,
}

enum EntriesInner<'a> {
    Container(slice::Iter<'a, (Key, Value)>),
    Single(Option<&'a Value>),
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Key, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            EntriesInner::Container(iter) => iter
                .find(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), v)),
            EntriesInner::Single(slot) => slot.take().map(|v| (Key::Int(0), v)),
        }
    }
}

///
/// ContainerKind
///
/// Rendering hint only. Marshallers produce `Object` containers and nested
/// levels produce `Array` containers; equality ignores it.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ContainerKind {
    #[default]
    Array,
    Object,
}

///
/// Container
///
/// Ordered associative container keyed by integers or text.
/// Insertion order is kept; replacing a key keeps its position.
///

#[derive(Clone, Debug, Default)]
pub struct Container {
    kind: ContainerKind,
    entries: Vec<(Key, Value)>,
}

impl Container {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            kind: ContainerKind::Array,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub const fn object() -> Self {
        Self {
            kind: ContainerKind::Object,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ContainerKind {
        self.kind
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: ContainerKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: KeyRef<'_>) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k.as_key_ref() == key)
    }

    #[must_use]
    pub fn get<'k>(&self, key: impl Into<KeyRef<'k>>) -> Option<&Value> {
        self.position(key.into()).map(|i| &self.entries[i].1)
    }

    /// Value at `key` unless it is missing or null.
    #[must_use]
    pub fn present<'k>(&self, key: impl Into<KeyRef<'k>>) -> Option<&Value> {
        self.get(key).filter(|v| !v.is_null())
    }

    #[must_use]
    pub fn contains_key<'k>(&self, key: impl Into<KeyRef<'k>>) -> bool {
        self.get(key).is_some()
    }

    /// Insert or replace; returns the previous value.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();

        match self.position(key.as_key_ref()) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn remove<'k>(&mut self, key: impl Into<KeyRef<'k>>) -> Option<Value> {
        self.position(key.into())
            .map(|i| self.entries.remove(i).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// True when the keys are exactly `0..len` in order.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(i, (k, _))| matches!(k, Key::Int(n) if usize::try_from(*n) == Ok(i)))
    }
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Container {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut container = Self::new();
        for (k, v) in iter {
            container.insert(k, v);
        }

        container
    }
}

impl IntoIterator for Container {
    type Item = (Key, Value);
    type IntoIter = std::vec::IntoIter<(Key, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
