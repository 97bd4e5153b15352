use crate::node::DirectiveList;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Property
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,

    #[serde(default)]
    pub visibility: Visibility,

    pub value: ValueType,

    /// Top-level `Option`: `None` is never written.
    #[serde(default)]
    pub optional: bool,

    /// Excluded from every group.
    #[serde(default)]
    pub transient: bool,

    #[serde(default)]
    pub directives: DirectiveList,
}

impl Property {
    #[must_use]
    pub fn new(name: impl Into<String>, value: ValueType) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::default(),
            value,
            optional: false,
            transient: false,
            directives: DirectiveList::default(),
        }
    }

    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    #[must_use]
    pub const fn transient(mut self) -> Self {
        self.transient = true;
        self
    }

    #[must_use]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[must_use]
    pub fn with_directives(mut self, directives: DirectiveList) -> Self {
        self.directives = directives;
        self
    }
}

///
/// Visibility
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    #[display("public")]
    Public,

    /// `pub(crate)`, `pub(super)`, `pub(in ...)`
    #[display("restricted")]
    Crate,

    #[display("private")]
    Private,
}

///
/// ArrayKind
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayKind {
    /// `Vec<T>`
    #[display("list")]
    List,

    /// `BTreeMap<String, T>`
    #[display("map")]
    Map,
}

///
/// ValueType
///
/// Declared type of a property. `Array` nests: `Vec<Vec<T>>` is two levels
/// around the leaf `T`.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// Copied as-is; carries the Rust type name.
    Scalar(String),

    Array { kind: ArrayKind, item: Box<Self> },

    /// Another marshallable type, decoded and encoded with the same group.
    Reference(String),

    /// A dynamic value with no declared shape.
    Mixed,

    /// A type the generator has no rule for.
    Unresolved(String),
}

impl ValueType {
    #[must_use]
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::Scalar(name.into())
    }

    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference(name.into())
    }

    #[must_use]
    pub fn list(item: Self) -> Self {
        Self::Array {
            kind: ArrayKind::List,
            item: Box::new(item),
        }
    }

    #[must_use]
    pub fn map(item: Self) -> Self {
        Self::Array {
            kind: ArrayKind::Map,
            item: Box::new(item),
        }
    }

    /// Number of array levels around the leaf.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Array { item, .. } => 1 + item.depth(),
            _ => 0,
        }
    }

    /// The innermost non-array type.
    #[must_use]
    pub fn leaf(&self) -> &Self {
        match self {
            Self::Array { item, .. } => item.leaf(),
            other => other,
        }
    }

    /// Description of the leaf when the generator cannot handle it.
    #[must_use]
    pub fn unsupported(&self) -> Option<String> {
        match self.leaf() {
            Self::Mixed => Some("mixed".to_string()),
            Self::Unresolved(found) => Some(found.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_counts_array_levels() {
        let ty = ValueType::list(ValueType::map(ValueType::reference("Item")));

        assert_eq!(ty.depth(), 2);
        assert_eq!(ty.leaf(), &ValueType::reference("Item"));
        assert_eq!(ValueType::scalar("u8").depth(), 0);
    }

    #[test]
    fn unsupported_leaves_are_reported_through_arrays() {
        assert_eq!(
            ValueType::list(ValueType::Mixed).unsupported().as_deref(),
            Some("mixed")
        );
        assert_eq!(
            ValueType::Unresolved("(u8, u8)".into()).unsupported().as_deref(),
            Some("(u8, u8)")
        );
        assert_eq!(ValueType::list(ValueType::scalar("u8")).unsupported(), None);
    }
}
