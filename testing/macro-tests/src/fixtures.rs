use metafold::Marshal;
use std::collections::BTreeMap;

///
/// NoProperty
///

#[derive(Clone, Debug, Default, PartialEq, Marshal)]
#[marshal(profiles(container, json))]
pub struct NoProperty;

///
/// PublicProperty
///

#[derive(Clone, Debug, Default, PartialEq, Marshal)]
#[marshal(profiles(container, json))]
pub struct PublicProperty {
    pub property: Option<String>,
}

///
/// CustomName
///

#[derive(Clone, Debug, Default, PartialEq, Marshal)]
#[marshal(profiles(container, json))]
pub struct CustomName {
    #[marshal(json(name = "some_property"))]
    pub some_property_value: Option<String>,
}

///
/// Nested
///

#[derive(Clone, Debug, Default, PartialEq, Marshal)]
#[marshal(profiles(container, json))]
pub struct Nested {
    pub property: Option<String>,
    pub count: Option<u32>,
}

///
/// Outer
///

#[derive(Clone, Debug, Default, PartialEq, Marshal)]
#[marshal(profiles(container, json))]
pub struct Outer {
    pub direct: Option<String>,
    pub nested: Option<Nested>,
    pub list: Option<Vec<Nested>>,
}

///
/// ArrayOfJsonRoot
///
/// Row-like type whose nested values travel as embedded JSON text.
///

#[derive(Clone, Debug, Default, PartialEq, Marshal)]
#[marshal(profiles(container, json))]
pub struct ArrayOfJsonRoot {
    pub direct: Option<String>,
    pub nested: Option<PublicProperty>,

    #[marshal(json(name = "arrayOfStrings"))]
    pub array_of_strings: Option<Vec<String>>,
}

///
/// Arrays
///
/// One property per nesting depth.
///

#[derive(Clone, Debug, Default, PartialEq, Marshal)]
#[marshal(profiles(container, json))]
pub struct Arrays {
    pub scalar: Option<i64>,
    pub flat: Option<Vec<String>>,
    pub grid: Option<Vec<Vec<u8>>>,
    pub by_name: Option<BTreeMap<String, Nested>>,
}

///
/// Measurement
///

#[derive(Clone, Debug, Default, PartialEq, Marshal)]
#[marshal(profiles(container, json))]
pub struct Measurement {
    pub ratio: Option<f64>,
}

///
/// Account
///
/// Properties bound to different groups under different paths.
///

#[derive(Clone, Debug, Default, PartialEq, Marshal)]
pub struct Account {
    #[marshal(offset(path = "id"), offset(group = "db", path = 0))]
    pub id: u64,

    #[marshal(offset(group = "api", path = "displayName"), offset(group = "db", path = 1))]
    pub name: String,

    #[marshal(offset(group = "db", path = 2))]
    pub secret: Option<String>,

    #[marshal(skip)]
    pub cache: Vec<u8>,
}

///
/// Profile
///
/// JSON names spread over two JSON groups, next to plain offsets.
///

#[derive(Clone, Debug, Default, PartialEq, Marshal)]
#[marshal(profiles(container, json))]
pub struct Profile {
    #[marshal(json(name = "nick"), json(group = "short", name = "n"))]
    pub nickname: Option<String>,

    #[marshal(offset(group = "db", path = "score_col"))]
    pub score: Option<i32>,

    pub active: bool,
}

///
/// Keyword
///

#[derive(Clone, Debug, Default, PartialEq, Marshal)]
pub struct Keyword {
    pub r#type: Option<String>,
}

///
/// Page
///

#[derive(Clone, Debug, Default, PartialEq, Marshal)]
#[marshal(profiles(container, json))]
pub struct Page<T: Default> {
    pub items: Option<Vec<T>>,
    pub total: Option<u64>,
}

///
/// Private
///

#[derive(Clone, Debug, Default, PartialEq, Marshal)]
pub struct Private {
    hidden: Option<String>,
}

impl Private {
    #[must_use]
    pub fn new(hidden: &str) -> Self {
        Self {
            hidden: Some(hidden.to_string()),
        }
    }

    #[must_use]
    pub fn hidden(&self) -> Option<&str> {
        self.hidden.as_deref()
    }
}
