mod directive;
mod property;

pub use directive::*;
pub use property::*;

use serde::{Deserialize, Serialize};

///
/// TypeDef
///
/// A marshallable type as the generator sees it: a name and its properties
/// in declaration order. Profiles mutate the directive lists in place before
/// groups are resolved.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TypeDef {
    pub name: String,

    #[serde(default)]
    pub properties: Vec<Property>,
}

impl TypeDef {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    // get
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Properties that take part in marshalling.
    pub fn marshalled(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|p| !p.transient)
    }
}
