use derive_more::{Deref, IntoIterator};
use metafold_core::{DEFAULT_GROUP, group::json_group};
use serde::{Deserialize, Serialize};

///
/// OffsetDirective
///
/// Binds a property to `path` within one group.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct OffsetDirective {
    #[serde(default)]
    pub group: Option<String>,
    pub path: String,
}

impl OffsetDirective {
    #[must_use]
    pub fn new(group: Option<&str>, path: impl Into<String>) -> Self {
        Self {
            group: group.map(ToString::to_string),
            path: path.into(),
        }
    }

    /// Group name with the absent group folded onto the default.
    #[must_use]
    pub fn group_name(&self) -> &str {
        self.group.as_deref().unwrap_or(DEFAULT_GROUP)
    }
}

///
/// JsonNameDirective
///
/// Names a property within one JSON group.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct JsonNameDirective {
    #[serde(default)]
    pub group: Option<String>,
    pub name: String,
}

impl JsonNameDirective {
    #[must_use]
    pub fn new(group: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            group: group.map(ToString::to_string),
            name: name.into(),
        }
    }

    /// The offset this name stands for in the prefixed group space.
    #[must_use]
    pub fn to_offset(&self) -> OffsetDirective {
        OffsetDirective {
            group: Some(json_group(self.group.as_deref())),
            path: self.name.clone(),
        }
    }
}

///
/// Directive
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Directive {
    Offset(OffsetDirective),
    JsonName(JsonNameDirective),
}

///
/// DirectiveList
///
/// Directives attached to one property, in attachment order.
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq, Serialize, Deserialize)]
#[into_iterator(owned, ref)]
#[serde(transparent)]
pub struct DirectiveList(Vec<Directive>);

impl DirectiveList {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, directive: Directive) {
        self.0.push(directive);
    }

    pub fn push_offset(&mut self, group: Option<&str>, path: impl Into<String>) {
        self.push(Directive::Offset(OffsetDirective::new(group, path)));
    }

    pub fn push_json_name(&mut self, group: Option<&str>, name: impl Into<String>) {
        self.push(Directive::JsonName(JsonNameDirective::new(group, name)));
    }

    pub fn offsets(&self) -> impl Iterator<Item = &OffsetDirective> {
        self.0.iter().filter_map(|d| match d {
            Directive::Offset(offset) => Some(offset),
            Directive::JsonName(_) => None,
        })
    }

    pub fn json_names(&self) -> impl Iterator<Item = &JsonNameDirective> {
        self.0.iter().filter_map(|d| match d {
            Directive::JsonName(name) => Some(name),
            Directive::Offset(_) => None,
        })
    }

    #[must_use]
    pub fn has_offset(&self) -> bool {
        self.offsets().next().is_some()
    }

    #[must_use]
    pub fn has_json_name(&self) -> bool {
        self.json_names().next().is_some()
    }
}

impl FromIterator<Directive> for DirectiveList {
    fn from_iter<I: IntoIterator<Item = Directive>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
